//! PII redaction for log pipelines.
//!
//! Rewrites `field=value;` segments in semi-structured log text so the
//! values of sensitive fields never reach a log sink. A single redactor
//! serves every deployment; rule sets, tokens, and separators are
//! configuration, not forks.
//!
//! # Key Features
//!
//! - **Shortest-match masking**: a value ends at the next separator, so a
//!   matched value can never swallow the segments that follow it.
//! - **Idempotent**: masking already-masked output is a no-op, and the
//!   configuration layer rejects tokens that could break that.
//! - **Whole-line coverage**: callers feed the fully rendered line, so a
//!   sensitive `field=value;` shape is caught wherever it leaked from.
//! - **Validated configuration**: field names and token/separator
//!   combinations that would corrupt the segment syntax are rejected at
//!   construction.
//!
//! # Example
//!
//! ```
//! use ds_redact::{FieldSet, RedactionConfig, Redactor};
//!
//! let fields = FieldSet::new(["email", "phone"]).unwrap();
//! let redactor = Redactor::new(RedactionConfig::new(fields, "***", ';')).unwrap();
//! assert_eq!(
//!     redactor.redact("name=Alice;email=alice@example.com;phone=555-1234;"),
//!     "name=Alice;email=***;phone=***;"
//! );
//! ```

pub mod config;
pub mod engine;
pub mod error;
pub mod fields;
pub mod filter;

pub use config::{RedactionConfig, DEFAULT_SEPARATOR, DEFAULT_TOKEN};
pub use engine::Redactor;
pub use error::{RedactError, Result};
pub use fields::{FieldSet, DEFAULT_PII_FIELDS};
pub use filter::redact_fields;
