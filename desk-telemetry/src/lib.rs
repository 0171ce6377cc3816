//! # desk-telemetry
//!
//! Structured logging for the support desk assistant.
//!
//! [`init_telemetry`] installs the global `tracing` subscriber used by the
//! console: an `EnvFilter` (`RUST_LOG` overrides the default level) feeding
//! either a compact human-readable formatter or JSON lines.
//!
//! [`EventCaptureLayer`] records events into a shared [`EventLog`] so tests
//! can assert on what was logged.

pub mod capture;
pub mod init;

pub use capture::{CapturedEvent, EventCaptureLayer, EventLog};
pub use init::{DEFAULT_LEVEL, LogFormat, TelemetryError, init_telemetry};
