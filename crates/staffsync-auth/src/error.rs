//! Error types for credential operations.

use thiserror::Error;

/// Credential hashing error types.
#[derive(Debug, Clone, Error)]
pub enum AuthError {
    /// Password hashing operation failed.
    #[error("Password hashing failed: {0}")]
    HashingFailed(String),

    /// Stored password hash is not a valid PHC string.
    #[error("Invalid password hash format")]
    InvalidHashFormat,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = AuthError::HashingFailed("salt too short".to_string());
        assert_eq!(err.to_string(), "Password hashing failed: salt too short");

        let err = AuthError::InvalidHashFormat;
        assert_eq!(err.to_string(), "Invalid password hash format");
    }
}
