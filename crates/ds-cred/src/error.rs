//! Error types for credential hashing.

use thiserror::Error;

/// Result type for hashing operations.
pub type Result<T> = std::result::Result<T, CredentialError>;

/// Errors that can occur while hashing a secret.
///
/// Verification has no error path: a structurally invalid stored hash
/// verifies as "does not match", so authentication callers see one
/// uniform failure surface.
#[derive(Error, Debug)]
pub enum CredentialError {
    /// Empty secrets are rejected before hashing.
    #[error("secret must not be empty")]
    EmptySecret,

    /// The algorithm digests at most 72 bytes; longer input is rejected
    /// rather than silently truncated.
    #[error("secret is {len} bytes, limit is {}", crate::MAX_SECRET_LEN)]
    SecretTooLong {
        /// Length of the rejected secret.
        len: usize,
    },

    /// Cost factor outside the supported range.
    #[error("cost factor {cost} outside {}..={}", crate::MIN_COST, crate::MAX_COST)]
    Cost {
        /// The rejected cost factor.
        cost: u32,
    },

    /// The system random source could not supply a salt. Fatal; any
    /// retry policy belongs to the caller.
    #[error("entropy source unavailable: {0}")]
    Entropy(String),
}
