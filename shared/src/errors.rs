//! Error types for credential verification

use thiserror::Error;

/// Outcome of a failed credential check.
///
/// `InvalidCredentials` covers both an unknown username and a wrong
/// password so callers cannot tell the two apart.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthError {
    #[error("Password is required")]
    MissingPassword,

    #[error("Invalid credentials")]
    InvalidCredentials,

    /// The user exists but has no usable stored hash.
    #[error("User account error")]
    IntegrityError,
}

impl AuthError {
    /// Whether the failure is the caller's fault (4xx) rather than ours (5xx)
    pub fn is_client_error(&self) -> bool {
        !matches!(self, AuthError::IntegrityError)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_integrity_error_is_server_side() {
        assert!(AuthError::MissingPassword.is_client_error());
        assert!(AuthError::InvalidCredentials.is_client_error());
        assert!(!AuthError::IntegrityError.is_client_error());
    }

    #[test]
    fn test_messages() {
        assert_eq!(AuthError::MissingPassword.to_string(), "Password is required");
        assert_eq!(AuthError::InvalidCredentials.to_string(), "Invalid credentials");
        assert_eq!(AuthError::IntegrityError.to_string(), "User account error");
    }
}
