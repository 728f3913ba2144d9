//! Field name sets for redaction rules.

use std::collections::BTreeSet;

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::error::{RedactError, Result};

/// Field names treated as PII by default.
pub const DEFAULT_PII_FIELDS: &[&str] = &["email", "name", "password", "phone", "ssn"];

// Identifier-like names only: the matcher anchors on a word boundary, and
// `=` or whitespace inside a name would change the segment syntax itself.
static RE_FIELD_NAME: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[A-Za-z_][A-Za-z0-9_.-]*$").unwrap());

/// A set of field names whose values must be masked.
///
/// Order is irrelevant to the result and duplicate names collapse.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FieldSet {
    names: BTreeSet<String>,
}

impl FieldSet {
    /// Build a field set, rejecting names the matcher cannot handle.
    ///
    /// Names must start with a letter or underscore and contain only
    /// letters, digits, `_`, `.`, and `-`.
    pub fn new<I, S>(names: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut set = BTreeSet::new();
        for name in names {
            let name = name.into();
            if !RE_FIELD_NAME.is_match(&name) {
                return Err(RedactError::Config(format!(
                    "invalid field name: {:?}",
                    name
                )));
            }
            set.insert(name);
        }
        Ok(FieldSet { names: set })
    }

    /// The default PII field set (`email`, `name`, `password`, `phone`, `ssn`).
    pub fn default_pii() -> Self {
        FieldSet {
            names: DEFAULT_PII_FIELDS.iter().map(|s| s.to_string()).collect(),
        }
    }

    /// Whether `name` is in the set.
    pub fn contains(&self, name: &str) -> bool {
        self.names.contains(name)
    }

    /// Iterate over the field names.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.names.iter().map(String::as_str)
    }

    /// Number of field names in the set.
    pub fn len(&self) -> usize {
        self.names.len()
    }

    /// Whether the set is empty.
    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    /// Reject names that contain the segment separator.
    pub(crate) fn check_separator(&self, separator: char) -> Result<()> {
        for name in &self.names {
            if name.contains(separator) {
                return Err(RedactError::Config(format!(
                    "field name {:?} contains separator {:?}",
                    name, separator
                )));
            }
        }
        Ok(())
    }
}
