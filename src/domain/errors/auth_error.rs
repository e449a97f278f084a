//! Authentication error types.

use thiserror::Error;

/// Authentication error variants.
#[derive(Debug, Error)]
#[allow(missing_docs)]
pub enum AuthError {
    #[error("submission is missing the `{name}` field")]
    MissingField { name: String },

    #[error("invalid email or password")]
    InvalidCredentials,

    #[error("credentials rejected: {message}")]
    Rejected { message: String },

    #[error("authentication service unavailable: {message}")]
    Unavailable { message: String },

    #[error("unexpected authentication error: {message}")]
    Unexpected { message: String },
}

impl AuthError {
    /// Creates missing field error.
    #[must_use]
    pub fn missing_field(name: impl Into<String>) -> Self {
        Self::MissingField { name: name.into() }
    }

    /// Returns whether the user can fix the problem by submitting again.
    #[must_use]
    pub const fn is_recoverable(&self) -> bool {
        matches!(
            self,
            Self::InvalidCredentials | Self::Rejected { .. } | Self::Unavailable { .. }
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_field_message_names_field() {
        let err = AuthError::missing_field("password");
        assert_eq!(err.to_string(), "submission is missing the `password` field");
    }

    #[test]
    fn test_recoverable_kinds() {
        let rejected = AuthError::Rejected {
            message: "locked".to_string(),
        };
        let unavailable = AuthError::Unavailable {
            message: "down".to_string(),
        };
        let unexpected = AuthError::Unexpected {
            message: "boom".to_string(),
        };

        assert!(AuthError::InvalidCredentials.is_recoverable());
        assert!(rejected.is_recoverable());
        assert!(unavailable.is_recoverable());
        assert!(!AuthError::missing_field("email").is_recoverable());
        assert!(!unexpected.is_recoverable());
    }
}
