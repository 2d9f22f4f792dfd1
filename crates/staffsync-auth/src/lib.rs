//! Credential hashing for StaffSync.
//!
//! Provides Argon2id password hashing and verification. Plaintext
//! passwords never leave this crate's functions; only PHC-formatted hash
//! strings are stored.
//!
//! # Example
//!
//! ```rust
//! use staffsync_auth::{hash_password, verify_password};
//!
//! let hash = hash_password("my-secure-password").unwrap();
//! assert!(verify_password("my-secure-password", &hash).unwrap());
//! assert!(!verify_password("wrong-password", &hash).unwrap());
//! ```

mod error;
mod password;

pub use error::AuthError;
pub use password::{hash_password, verify_password, PasswordHasher};
