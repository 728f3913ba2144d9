//! Redaction configuration.
//!
//! One config record fixes the rule set, the redaction token, and the
//! segment separator for a deployment. Differing deployments get
//! differing configs, not forked redactors.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{RedactError, Result};
use crate::fields::FieldSet;

/// Default redaction token.
pub const DEFAULT_TOKEN: &str = "***";

/// Default segment separator.
pub const DEFAULT_SEPARATOR: char = ';';

/// Configuration for a [`crate::Redactor`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RedactionConfig {
    /// Field names whose values are masked.
    #[serde(default)]
    pub fields: FieldSet,

    /// Replacement for masked values.
    #[serde(default = "default_token")]
    pub token: String,

    /// Segment terminator.
    #[serde(default = "default_separator")]
    pub separator: char,
}

fn default_token() -> String {
    DEFAULT_TOKEN.to_string()
}

fn default_separator() -> char {
    DEFAULT_SEPARATOR
}

impl Default for RedactionConfig {
    fn default() -> Self {
        RedactionConfig {
            fields: FieldSet::default_pii(),
            token: default_token(),
            separator: DEFAULT_SEPARATOR,
        }
    }
}

impl RedactionConfig {
    /// Create a config with explicit fields, token, and separator.
    pub fn new(fields: FieldSet, token: impl Into<String>, separator: char) -> Self {
        RedactionConfig {
            fields,
            token: token.into(),
            separator,
        }
    }

    /// Load config from a JSON file.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: RedactionConfig = serde_json::from_str(&content)?;
        Ok(config)
    }

    /// Save config to a JSON file.
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }

    /// Check that the config is internally consistent.
    ///
    /// The token must not contain the separator: a token that closes a
    /// segment would make redaction non-idempotent. Field names must not
    /// contain the separator either.
    pub fn validate(&self) -> Result<()> {
        if self.token.contains(self.separator) {
            return Err(RedactError::Config(format!(
                "token {:?} contains separator {:?}",
                self.token, self.separator
            )));
        }
        self.fields.check_separator(self.separator)
    }
}
