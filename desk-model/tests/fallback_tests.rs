use std::sync::Arc;

use desk_model::{FallbackChain, Llm, MockLlm, UnavailableLlm};

#[tokio::test]
async fn primary_success_never_calls_secondary() {
    let primary = Arc::new(MockLlm::new("primary").with_response("from primary"));
    let secondary = Arc::new(MockLlm::new("secondary").with_response("from secondary"));
    let chain =
        FallbackChain::new().with_provider(primary.clone()).with_provider(secondary.clone());

    let answer = chain.complete("hello").await;
    assert_eq!(answer, Some(("primary".to_string(), "from primary".to_string())));
    assert_eq!(primary.call_count(), 1);
    assert_eq!(secondary.call_count(), 0);
}

#[tokio::test]
async fn primary_failure_falls_through_to_secondary() {
    let primary = Arc::new(MockLlm::new("primary").with_failure("timeout"));
    let secondary = Arc::new(MockLlm::new("secondary").with_response("from secondary"));
    let chain =
        FallbackChain::new().with_provider(primary.clone()).with_provider(secondary.clone());

    let answer = chain.complete("hello").await;
    assert_eq!(answer, Some(("secondary".to_string(), "from secondary".to_string())));
    assert_eq!(primary.prompts(), vec!["hello"]);
    assert_eq!(secondary.prompts(), vec!["hello"]);
}

#[tokio::test]
async fn blank_primary_text_counts_as_failure() {
    let primary = Arc::new(MockLlm::new("primary").with_response("   "));
    let secondary = Arc::new(MockLlm::new("secondary").with_response("real answer"));
    let chain = FallbackChain::new().with_provider(primary).with_provider(secondary);

    let (provider, text) = chain.complete("hello").await.unwrap();
    assert_eq!(provider, "secondary");
    assert_eq!(text, "real answer");
}

#[tokio::test]
async fn unavailable_providers_are_skipped() {
    let secondary = Arc::new(MockLlm::new("secondary").with_response("ok"));
    let chain: FallbackChain = vec![
        Arc::new(UnavailableLlm::new("openai", "no key")) as Arc<dyn Llm>,
        secondary.clone() as Arc<dyn Llm>,
    ]
    .into();

    assert_eq!(chain.len(), 2);
    assert_eq!(chain.complete("q").await.map(|(p, _)| p), Some("secondary".to_string()));
}

#[tokio::test]
async fn all_failing_yields_none() {
    let chain = FallbackChain::new()
        .with_provider(Arc::new(MockLlm::new("primary").with_failure("500")))
        .with_provider(Arc::new(UnavailableLlm::new("gemini", "no key")));
    assert_eq!(chain.complete("q").await, None);

    assert!(FallbackChain::new().is_empty());
    assert_eq!(FallbackChain::new().complete("q").await, None);
}
