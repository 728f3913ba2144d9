//! Salted one-way credential hashing.
//!
//! Turns a plaintext secret into a self-describing hash suitable for
//! storage, and later confirms whether a candidate secret matches a
//! stored hash, without ever reversing it.
//!
//! # Key Features
//!
//! - **Self-describing hashes**: algorithm version, cost factor, and
//!   per-hash random salt are embedded in the output, so verification
//!   needs no external state.
//! - **Tunable cost**: the work factor is a constructor parameter with a
//!   vetted default.
//! - **Uniform failure surface**: a wrong secret and a malformed stored
//!   hash both verify as `false`; there is no error channel to leak
//!   which one happened.
//!
//! # Example
//!
//! ```no_run
//! use ds_cred::CredentialHasher;
//!
//! let hasher = CredentialHasher::default();
//! let stored = hasher.hash_secret(b"hunter2").unwrap();
//! assert!(hasher.verify_secret(&stored, b"hunter2"));
//! assert!(!hasher.verify_secret(&stored, b"swordfish"));
//! ```

pub mod error;
pub mod hasher;

pub use error::{CredentialError, Result};
pub use hasher::{
    verify_encoded, CredentialHash, CredentialHasher, DEFAULT_COST, MAX_COST, MAX_SECRET_LEN,
    MIN_COST,
};
