//! Gemini `generateContent` provider.

mod client;
mod config;

pub use client::GeminiClient;
pub use config::{DEFAULT_MODEL, GEMINI_API_BASE, GeminiConfig};
