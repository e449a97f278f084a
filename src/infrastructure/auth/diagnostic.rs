//! Placeholder authenticator that only reports submitted values.

use async_trait::async_trait;
use tracing::info;

use crate::application::dto::{EMAIL_FIELD, PASSWORD_FIELD};
use crate::domain::entities::{AuthToken, Credentials};
use crate::domain::errors::AuthError;
use crate::domain::ports::AuthPort;

/// Writes one diagnostic log line per submitted field and always succeeds.
///
/// No credential check takes place; the returned token is freshly issued
/// and carries no authority.
#[derive(Debug, Clone, Default)]
pub struct DiagnosticAuthenticator {
    reveal_password: bool,
}

impl DiagnosticAuthenticator {
    /// Creates an authenticator that masks the password in the log.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            reveal_password: false,
        }
    }

    /// Logs the password verbatim.
    #[must_use]
    pub const fn reveal_password(mut self, reveal: bool) -> Self {
        self.reveal_password = reveal;
        self
    }
}

#[async_trait]
impl AuthPort for DiagnosticAuthenticator {
    async fn authenticate(&self, credentials: &Credentials) -> Result<AuthToken, AuthError> {
        info!(field = EMAIL_FIELD, value = %credentials.email(), "Submitted field");

        if self.reveal_password {
            info!(field = PASSWORD_FIELD, value = %credentials.password(), "Submitted field");
        } else {
            info!(
                field = PASSWORD_FIELD,
                value = %credentials.masked_password(),
                "Submitted field"
            );
        }

        Ok(AuthToken::issue())
    }
}
