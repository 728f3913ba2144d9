//! Salted one-way hashing of secrets.
//!
//! Wraps bcrypt. Every produced hash embeds the algorithm version, the
//! cost factor, and a fresh random salt, so verification needs nothing
//! beyond the stored hash itself. The cost factor is tunable: higher
//! cost makes each hash and verify slower, which is the brute-force
//! resistance knob, not a performance defect.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{CredentialError, Result};

/// Longest secret the algorithm digests, in bytes.
pub const MAX_SECRET_LEN: usize = 72;

/// Lowest supported cost factor.
pub const MIN_COST: u32 = 4;

/// Highest supported cost factor.
pub const MAX_COST: u32 = 31;

/// Vetted baseline cost factor.
pub const DEFAULT_COST: u32 = bcrypt::DEFAULT_COST;

/// A self-describing one-way hash of a secret.
///
/// Holds the bcrypt modular-crypt string (`$2b$<cost>$<salt+digest>`).
/// Two hashes of the same secret are never byte-equal thanks to the
/// per-hash salt, yet both verify against that secret.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CredentialHash(String);

impl CredentialHash {
    /// Wrap an encoded hash loaded from storage.
    ///
    /// Not validated here: verifying against a malformed hash simply
    /// reports "does not match".
    pub fn from_encoded(encoded: impl Into<String>) -> Self {
        CredentialHash(encoded.into())
    }

    /// The encoded form, for storage.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consume the hash, returning the encoded form.
    pub fn into_string(self) -> String {
        self.0
    }
}

impl From<String> for CredentialHash {
    fn from(encoded: String) -> Self {
        CredentialHash(encoded)
    }
}

// Debug keeps salt and digest out of logs; only the algorithm/cost
// prefix is shown.
impl fmt::Debug for CredentialHash {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "CredentialHash({}<redacted>)", mcf_prefix(&self.0))
    }
}

/// `$2b$12$` out of `$2b$12$<salt+digest>`; empty when the shape is off.
fn mcf_prefix(encoded: &str) -> &str {
    let mut dollars = 0;
    for (i, c) in encoded.char_indices() {
        if c == '$' {
            dollars += 1;
            if dollars == 3 {
                return &encoded[..=i];
            }
        }
    }
    ""
}

/// Produces and verifies salted one-way credential hashes.
///
/// Stateless per call: a fresh salt is drawn from the system random
/// source on every `hash_secret`, never supplied by the caller and
/// never reused.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CredentialHasher {
    cost: u32,
}

impl CredentialHasher {
    /// Create a hasher with an explicit cost factor.
    pub fn new(cost: u32) -> Result<Self> {
        if !(MIN_COST..=MAX_COST).contains(&cost) {
            return Err(CredentialError::Cost { cost });
        }
        Ok(CredentialHasher { cost })
    }

    /// The configured cost factor.
    pub fn cost(&self) -> u32 {
        self.cost
    }

    /// Hash a secret with a fresh random salt.
    ///
    /// Rejects empty secrets and secrets longer than [`MAX_SECRET_LEN`]
    /// bytes. The only runtime failure left after those checks is an
    /// unavailable system random source.
    pub fn hash_secret(&self, secret: &[u8]) -> Result<CredentialHash> {
        if secret.is_empty() {
            return Err(CredentialError::EmptySecret);
        }
        if secret.len() > MAX_SECRET_LEN {
            return Err(CredentialError::SecretTooLong { len: secret.len() });
        }
        let encoded = bcrypt::hash(secret, self.cost)
            .map_err(|e| CredentialError::Entropy(e.to_string()))?;
        Ok(CredentialHash(encoded))
    }

    /// Check whether `secret` matches `hash`.
    ///
    /// Recomputes the digest with the salt and cost embedded in the hash
    /// and compares in constant time. A malformed hash returns `false`;
    /// a wrong secret and a broken stored hash are indistinguishable to
    /// the caller.
    pub fn verify_secret(&self, hash: &CredentialHash, secret: &[u8]) -> bool {
        verify_encoded(hash.as_str(), secret)
    }
}

impl Default for CredentialHasher {
    fn default() -> Self {
        CredentialHasher { cost: DEFAULT_COST }
    }
}

/// Verify a secret against an encoded hash straight from storage.
///
/// Never errors: malformed input degrades to "does not match".
pub fn verify_encoded(encoded: &str, secret: &[u8]) -> bool {
    bcrypt::verify(secret, encoded).unwrap_or(false)
}

#[cfg(test)]
mod tests {
    use super::*;

    // MIN_COST keeps the test suite fast; the cost factor does not
    // change any of the properties under test.
    fn fast_hasher() -> CredentialHasher {
        CredentialHasher::new(MIN_COST).unwrap()
    }

    #[test]
    fn test_hash_then_verify() {
        let hasher = fast_hasher();
        let hash = hasher.hash_secret(b"hunter2").unwrap();
        assert!(hasher.verify_secret(&hash, b"hunter2"));
    }

    #[test]
    fn test_wrong_secret_rejected() {
        let hasher = fast_hasher();
        let hash = hasher.hash_secret(b"hunter2").unwrap();
        assert!(!hasher.verify_secret(&hash, b"hunter3"));
    }

    #[test]
    fn test_same_secret_distinct_hashes() {
        let hasher = fast_hasher();
        let first = hasher.hash_secret(b"hunter2").unwrap();
        let second = hasher.hash_secret(b"hunter2").unwrap();

        assert_ne!(first, second);
        assert!(hasher.verify_secret(&first, b"hunter2"));
        assert!(hasher.verify_secret(&second, b"hunter2"));
    }

    #[test]
    fn test_empty_secret_rejected() {
        let err = fast_hasher().hash_secret(b"").unwrap_err();
        assert!(matches!(err, CredentialError::EmptySecret));
    }

    #[test]
    fn test_secret_length_limit() {
        let hasher = fast_hasher();
        assert!(hasher.hash_secret(&[b'a'; MAX_SECRET_LEN]).is_ok());

        let err = hasher.hash_secret(&[b'a'; MAX_SECRET_LEN + 1]).unwrap_err();
        assert!(matches!(err, CredentialError::SecretTooLong { len: 73 }));
    }

    #[test]
    fn test_cost_range() {
        assert!(CredentialHasher::new(MIN_COST).is_ok());
        assert!(CredentialHasher::new(MAX_COST).is_ok());
        assert!(matches!(
            CredentialHasher::new(MIN_COST - 1),
            Err(CredentialError::Cost { cost: 3 })
        ));
        assert!(matches!(
            CredentialHasher::new(MAX_COST + 1),
            Err(CredentialError::Cost { cost: 32 })
        ));
    }

    #[test]
    fn test_default_cost_is_baseline() {
        assert_eq!(CredentialHasher::default().cost(), DEFAULT_COST);
    }

    #[test]
    fn test_malformed_hash_is_no_match() {
        for bad in ["", "not-a-hash", "$2b$04$tooshort", "$9z$99$nonsense"] {
            assert!(!verify_encoded(bad, b"hunter2"), "matched: {:?}", bad);
        }
    }

    #[test]
    fn test_hash_has_mcf_shape() {
        let hash = fast_hasher().hash_secret(b"hunter2").unwrap();
        assert!(hash.as_str().starts_with("$2"));
    }

    #[test]
    fn test_debug_hides_digest() {
        let hash = fast_hasher().hash_secret(b"hunter2").unwrap();
        let printed = format!("{:?}", hash);

        // The salt+digest part after the third '$' must not be shown.
        let digest = hash.as_str().rsplit('$').next().unwrap();
        assert!(!printed.contains(digest));
        assert!(printed.contains("<redacted>"));
    }

    #[test]
    fn test_mcf_prefix() {
        assert_eq!(mcf_prefix("$2b$12$abcdef"), "$2b$12$");
        assert_eq!(mcf_prefix("garbage"), "");
        assert_eq!(mcf_prefix("$2b$12"), "");
    }

    #[test]
    fn test_serde_transparent() {
        let hash = CredentialHash::from_encoded("$2b$04$abc");
        let json = serde_json::to_string(&hash).unwrap();
        assert_eq!(json, "\"$2b$04$abc\"");
        let parsed: CredentialHash = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, hash);
    }
}
