//! Provider clients against a local stub server.

use axum::Router;
use axum::Json;
use axum::http::{HeaderMap, StatusCode};
use axum::routing::post;
use desk_model::{GeminiClient, GeminiConfig, Llm, ModelError, OpenAIClient, OpenAIConfig};
use serde_json::{Value, json};

async fn spawn_stub(app: Router) -> (String, tokio::task::JoinHandle<()>) {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.expect("bind stub listener");
    let addr = listener.local_addr().expect("listener addr");
    let handle = tokio::spawn(async move {
        axum::serve(listener, app).await.expect("stub server run");
    });
    (format!("http://{addr}"), handle)
}

#[tokio::test]
async fn openai_returns_first_choice_text() {
    let app = Router::new().route(
        "/v1/chat/completions",
        post(|headers: HeaderMap, Json(body): Json<Value>| async move {
            let authorized = headers
                .get("authorization")
                .and_then(|v| v.to_str().ok())
                .is_some_and(|v| v == "Bearer sk-test");
            if !authorized || body["max_tokens"] != 250 || body["model"] != "gpt-4o-mini" {
                return (
                    StatusCode::BAD_REQUEST,
                    Json(json!({ "error": { "message": "bad request" } })),
                );
            }
            let prompt = body["messages"][0]["content"].as_str().unwrap_or_default().to_string();
            (
                StatusCode::OK,
                Json(json!({
                    "choices": [{
                        "message": { "role": "assistant", "content": format!(" echo: {prompt} ") }
                    }]
                })),
            )
        }),
    );
    let (base, handle) = spawn_stub(app).await;

    let config = OpenAIConfig::new("sk-test", "gpt-4o-mini").with_base_url(format!("{base}/v1"));
    let client = OpenAIClient::new(config).unwrap();
    assert_eq!(client.complete("hours?").await.unwrap(), "echo: hours?");

    handle.abort();
}

#[tokio::test]
async fn openai_error_status_maps_to_api_error() {
    let app = Router::new().route(
        "/v1/chat/completions",
        post(|| async {
            (
                StatusCode::TOO_MANY_REQUESTS,
                Json(json!({ "error": { "message": "Rate limit reached" } })),
            )
        }),
    );
    let (base, handle) = spawn_stub(app).await;

    let config = OpenAIConfig::new("sk-test", "gpt-4o-mini").with_base_url(format!("{base}/v1"));
    let client = OpenAIClient::new(config).unwrap();
    match client.complete("hi").await {
        Err(ModelError::Api { status, message, .. }) => {
            assert_eq!(status, 429);
            assert_eq!(message, "Rate limit reached");
        }
        other => panic!("unexpected result: {other:?}"),
    }

    handle.abort();
}

#[tokio::test]
async fn openai_empty_choices_is_empty_response() {
    let app = Router::new()
        .route("/v1/chat/completions", post(|| async { Json(json!({ "choices": [] })) }));
    let (base, handle) = spawn_stub(app).await;

    let config = OpenAIConfig::new("sk-test", "gpt-4o-mini").with_base_url(format!("{base}/v1"));
    let client = OpenAIClient::new(config).unwrap();
    assert!(matches!(client.complete("hi").await, Err(ModelError::EmptyResponse { .. })));

    handle.abort();
}

#[tokio::test]
async fn gemini_sends_key_header_and_parses_candidates() {
    let app = Router::new().route(
        "/v1beta/models/{call}",
        post(|headers: HeaderMap, Json(body): Json<Value>| async move {
            if headers.get("x-goog-api-key").and_then(|v| v.to_str().ok()) != Some("g-key") {
                return (
                    StatusCode::FORBIDDEN,
                    Json(json!({ "error": { "message": "API key not valid" } })),
                );
            }
            let prompt =
                body["contents"][0]["parts"][0]["text"].as_str().unwrap_or_default().to_string();
            (
                StatusCode::OK,
                Json(json!({
                    "candidates": [{
                        "content": {
                            "role": "model",
                            "parts": [{ "text": format!("re: {prompt}") }]
                        }
                    }]
                })),
            )
        }),
    );
    let (base, handle) = spawn_stub(app).await;

    let good = GeminiClient::new(
        GeminiConfig::new("g-key", "gemini-1.5-flash").with_base_url(format!("{base}/v1beta")),
    )
    .unwrap();
    assert_eq!(good.complete("refunds").await.unwrap(), "re: refunds");

    let bad = GeminiClient::new(
        GeminiConfig::new("wrong", "gemini-1.5-flash").with_base_url(format!("{base}/v1beta")),
    )
    .unwrap();
    match bad.complete("refunds").await {
        Err(ModelError::Api { status, message, .. }) => {
            assert_eq!(status, 403);
            assert_eq!(message, "API key not valid");
        }
        other => panic!("unexpected result: {other:?}"),
    }

    handle.abort();
}

#[tokio::test]
async fn unreachable_server_is_request_error() {
    // bind then drop to get a port with nothing listening
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let client = OpenAIClient::new(
        OpenAIConfig::new("sk-test", "gpt-4o-mini").with_base_url(format!("http://{addr}/v1")),
    )
    .unwrap();
    assert!(matches!(client.complete("hi").await, Err(ModelError::Request { .. })));
}
