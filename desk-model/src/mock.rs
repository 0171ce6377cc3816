//! Scripted LLM for tests.

use std::collections::VecDeque;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;

use async_trait::async_trait;

use crate::error::{ModelError, Result};
use crate::llm::Llm;

/// A mock [`Llm`] that replays scripted outcomes in order.
///
/// Once the script is exhausted every call fails. Each call is counted and
/// its prompt recorded, so tests can assert that a provider was (or was not)
/// consulted and with what text.
///
/// ```rust,ignore
/// let llm = MockLlm::new("primary").with_response("Hello").with_failure("rate limited");
/// ```
pub struct MockLlm {
    name: String,
    script: Mutex<VecDeque<std::result::Result<String, String>>>,
    repeat: Option<String>,
    calls: AtomicUsize,
    prompts: Mutex<Vec<String>>,
}

impl MockLlm {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            script: Mutex::new(VecDeque::new()),
            repeat: None,
            calls: AtomicUsize::new(0),
            prompts: Mutex::new(Vec::new()),
        }
    }

    /// Queue a successful response.
    pub fn with_response(self, text: impl Into<String>) -> Self {
        self.push(Ok(text.into()))
    }

    /// Queue a failed call.
    pub fn with_failure(self, message: impl Into<String>) -> Self {
        self.push(Err(message.into()))
    }

    /// Answer `text` whenever the script is exhausted.
    pub fn always(mut self, text: impl Into<String>) -> Self {
        self.repeat = Some(text.into());
        self
    }

    fn push(self, outcome: std::result::Result<String, String>) -> Self {
        self.script.lock().unwrap_or_else(|e| e.into_inner()).push_back(outcome);
        self
    }

    /// Number of `complete` calls so far.
    pub fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    /// Prompts received, oldest first.
    pub fn prompts(&self) -> Vec<String> {
        self.prompts.lock().unwrap_or_else(|e| e.into_inner()).clone()
    }
}

#[async_trait]
impl Llm for MockLlm {
    fn name(&self) -> &str {
        &self.name
    }

    async fn complete(&self, prompt: &str) -> Result<String> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.prompts.lock().unwrap_or_else(|e| e.into_inner()).push(prompt.to_string());

        let next = self.script.lock().unwrap_or_else(|e| e.into_inner()).pop_front();
        match next {
            Some(Ok(text)) => Ok(text),
            Some(Err(message)) => Err(ModelError::Request { provider: self.name.clone(), message }),
            None => match &self.repeat {
                Some(text) => Ok(text.clone()),
                None => Err(ModelError::Request {
                    provider: self.name.clone(),
                    message: "no scripted response left".into(),
                }),
            },
        }
    }
}
