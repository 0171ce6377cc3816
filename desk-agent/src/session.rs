//! Per-run chat history.

use chrono::{DateTime, Utc};
use serde::Serialize;
use uuid::Uuid;

/// One question and the answer it received.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ChatTurn {
    pub query: String,
    pub answer: String,
    pub asked_at: DateTime<Utc>,
}

/// Append-only log of turns for one console run.
#[derive(Debug, Clone)]
pub struct ChatSession {
    id: String,
    turns: Vec<ChatTurn>,
}

impl Default for ChatSession {
    fn default() -> Self {
        Self::new()
    }
}

impl ChatSession {
    pub fn new() -> Self {
        Self { id: Uuid::new_v4().to_string(), turns: Vec::new() }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    /// Record a turn.
    pub fn append(&mut self, query: impl Into<String>, answer: impl Into<String>) {
        self.turns.push(ChatTurn {
            query: query.into(),
            answer: answer.into(),
            asked_at: Utc::now(),
        });
    }

    /// All turns, newest first.
    pub fn all(&self) -> impl Iterator<Item = &ChatTurn> {
        self.turns.iter().rev()
    }

    pub fn len(&self) -> usize {
        self.turns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.turns.is_empty()
    }
}
