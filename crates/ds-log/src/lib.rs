//! Redacting log pipeline.
//!
//! Wires the redaction engine into `tracing`: one configuration record,
//! an `EnvFilter`, and a [`RedactingLayer`] on stderr. The layer renders
//! `<prefix> <name> <LEVEL> <timestamp>: <message>` and masks configured
//! PII fields across the whole rendered line before it reaches the sink.
//!
//! # Usage
//!
//! ```no_run
//! use ds_log::{init_logging, render_row, LoggerConfig};
//! use ds_redact::{RedactionConfig, Redactor};
//!
//! let redactor = Redactor::new(RedactionConfig::default()).unwrap();
//! init_logging(&LoggerConfig::from_env(), redactor);
//!
//! let row = [("name", "Alice"), ("email", "alice@example.com")];
//! tracing::info!(target: "user_data", "{}", render_row(row, ';'));
//! ```

pub mod config;
pub mod layer;
pub mod record;

pub use config::{LogLevel, LoggerConfig};
pub use layer::RedactingLayer;
pub use record::render_row;

use ds_redact::{RedactionConfig, Redactor};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::EnvFilter;

/// Install the redacting log pipeline.
///
/// Must be called once at startup before any logging occurs. A
/// `RUST_LOG` directive, when set, overrides the configured level.
pub fn init_logging(config: &LoggerConfig, redactor: Redactor) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("{}={}", config.name, config.level)));
    let layer = RedactingLayer::stderr(config.prefix.clone(), redactor);
    tracing_subscriber::registry().with(filter).with(layer).init();
}

/// Install the pipeline with the default PII fields and logger settings.
pub fn init_default_logging() {
    let redactor =
        Redactor::new(RedactionConfig::default()).expect("default redaction config is valid");
    init_logging(&LoggerConfig::default(), redactor);
}
