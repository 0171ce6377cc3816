//! # desk-cli
//!
//! Terminal front end for the support desk assistant.
//!
//! The `desk` binary wires the FAQ corpus, the file-backed semantic index and
//! the OpenAI/Gemini provider chain into a [`DeskApp`], then either runs the
//! interactive [`console`] or a single subcommand.

pub mod app;
pub mod cli;
pub mod config;
pub mod console;
pub mod providers;

pub use app::DeskApp;
pub use cli::{Cli, Command, EmbedderKind};
pub use config::DeskConfig;
pub use console::run_console;

/// Contact used when none is configured.
pub const DEFAULT_SUPPORT_CONTACT: &str = "support@roomantech.com";
