//! # Moji Telemetry
//!
//! Structured logging for the cryptomoji processor.
//!
//! ## Usage
//!
//! ```rust,ignore
//! use moji_telemetry::{init_logging, TelemetryConfig};
//!
//! fn main() {
//!     let config = TelemetryConfig::from_env();
//!     init_logging(&config).expect("Failed to init logging");
//! }
//! ```
//!
//! ## Environment Variables
//!
//! | Variable | Default | Description |
//! |----------|---------|-------------|
//! | `MOJI_SERVICE_NAME` | `cryptomoji-tp` | Service name in log records |
//! | `MOJI_LOG_LEVEL` | `info` | Log level filter (falls back to `RUST_LOG`) |
//! | `MOJI_JSON_LOGS` | `false` | Emit JSON lines instead of pretty output |
//! | `MOJI_CONSOLE_OUTPUT` | `true` | Write log records to stdout |

#![warn(missing_docs)]

mod config;
mod logging;

pub use config::TelemetryConfig;
pub use logging::init_logging;

use thiserror::Error;

/// Telemetry initialization errors
#[derive(Error, Debug)]
pub enum TelemetryError {
    /// The log level string is not a valid filter directive.
    #[error("Invalid log filter: {0}")]
    Filter(String),

    /// A global subscriber was already installed.
    #[error("Failed to install subscriber: {0}")]
    SubscriberInit(String),
}
