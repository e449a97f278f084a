//! Authentication DTOs.

use crate::domain::entities::{AuthToken, Credentials, Submission};
use crate::domain::errors::AuthError;

/// Form field holding the email.
pub const EMAIL_FIELD: &str = "email";
/// Form field holding the password.
pub const PASSWORD_FIELD: &str = "password";

/// How the submission reached the handler.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmissionSource {
    /// Submitted after the required-field check passed.
    Form,
    /// Submitted directly, bypassing the required-field check.
    Direct,
}

impl SubmissionSource {
    /// Returns human-readable description.
    #[must_use]
    pub const fn description(&self) -> &'static str {
        match self {
            Self::Form => "form submission",
            Self::Direct => "direct submission",
        }
    }
}

impl std::fmt::Display for SubmissionSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.description())
    }
}

/// Login request data.
#[derive(Debug, Clone)]
pub struct LoginRequest {
    /// Submitted credential pair.
    pub credentials: Credentials,
    /// Submission path.
    pub source: SubmissionSource,
}

impl LoginRequest {
    /// Creates new login request.
    #[must_use]
    pub const fn new(credentials: Credentials, source: SubmissionSource) -> Self {
        Self {
            credentials,
            source,
        }
    }

    /// Builds a request from a form submission.
    ///
    /// Empty values are accepted as-is.
    ///
    /// # Errors
    /// Returns `AuthError::MissingField` if the email or password key is absent.
    pub fn from_submission(
        submission: &Submission,
        source: SubmissionSource,
    ) -> Result<Self, AuthError> {
        let email = submission
            .get(EMAIL_FIELD)
            .ok_or_else(|| AuthError::missing_field(EMAIL_FIELD))?;
        let password = submission
            .get(PASSWORD_FIELD)
            .ok_or_else(|| AuthError::missing_field(PASSWORD_FIELD))?;

        Ok(Self::new(Credentials::new(email, password), source))
    }
}

/// Login response data.
#[derive(Debug, Clone)]
pub struct LoginResponse {
    /// Issued session token.
    pub token: AuthToken,
    /// Submission path used.
    pub source: SubmissionSource,
}

impl LoginResponse {
    /// Creates new login response.
    #[must_use]
    pub const fn new(token: AuthToken, source: SubmissionSource) -> Self {
        Self { token, source }
    }
}
