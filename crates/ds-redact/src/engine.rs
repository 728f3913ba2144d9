//! The configured redactor.

use std::borrow::Cow;

use regex::Regex;

use crate::config::RedactionConfig;
use crate::error::Result;
use crate::filter::{segment_pattern, substitute};

/// Applies a fixed redaction rule set to rendered log lines.
///
/// The rule set, token, and separator are fixed at construction and the
/// segment matcher is compiled once. `redact` is a pure function of the
/// message and is safe to call concurrently.
pub struct Redactor {
    config: RedactionConfig,
    /// `None` when the field set is empty; every message passes through.
    pattern: Option<Regex>,
}

impl Redactor {
    /// Build a redactor from a validated configuration.
    pub fn new(config: RedactionConfig) -> Result<Self> {
        config.validate()?;
        let pattern = if config.fields.is_empty() {
            None
        } else {
            let names: Vec<&str> = config.fields.iter().collect();
            Some(segment_pattern(&names, config.separator)?)
        };
        Ok(Redactor { config, pattern })
    }

    /// Mask every configured field's value in `message`.
    ///
    /// Returns the input borrowed when nothing matches. A value that
    /// contains the separator is masked only up to the first separator;
    /// see [`crate::redact_fields`] for the matching policy.
    pub fn redact<'a>(&self, message: &'a str) -> Cow<'a, str> {
        match &self.pattern {
            Some(pattern) => substitute(
                pattern,
                &self.config.token,
                self.config.separator,
                message,
            ),
            None => Cow::Borrowed(message),
        }
    }

    /// The configuration this redactor was built from.
    pub fn config(&self) -> &RedactionConfig {
        &self.config
    }
}
