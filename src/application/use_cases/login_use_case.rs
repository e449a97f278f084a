//! Login use case implementation.

use std::sync::Arc;

use tracing::{debug, info, warn};

use crate::application::dto::{LoginRequest, LoginResponse};
use crate::domain::errors::AuthError;
use crate::domain::ports::AuthPort;

/// Handles a login form submission.
#[derive(Clone)]
pub struct LoginUseCase {
    auth_port: Arc<dyn AuthPort>,
}

impl LoginUseCase {
    /// Creates new login use case.
    #[must_use]
    pub const fn new(auth_port: Arc<dyn AuthPort>) -> Self {
        Self { auth_port }
    }

    /// Executes login with provided request.
    ///
    /// # Errors
    /// Returns error if the auth port rejects the credentials.
    pub async fn execute(&self, request: LoginRequest) -> Result<LoginResponse, AuthError> {
        debug!(source = %request.source, "Attempting login");

        let token = self
            .auth_port
            .authenticate(&request.credentials)
            .await
            .map_err(|e| {
                warn!(error = %e, "Authentication failed");
                e
            })?;

        info!(token = %token, "Login handler completed");

        Ok(LoginResponse::new(token, request.source))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::dto::SubmissionSource;
    use crate::domain::entities::{Credentials, Submission};
    use crate::domain::ports::mocks::MockAuthPort;

    #[tokio::test]
    async fn test_successful_login() {
        let auth_port = Arc::new(MockAuthPort::new(true));
        let use_case = LoginUseCase::new(auth_port.clone());
        let request = LoginRequest::new(
            Credentials::new("user@test.com", "hunter2"),
            SubmissionSource::Form,
        );

        let response = use_case.execute(request).await.unwrap();

        assert_eq!(response.source, SubmissionSource::Form);
        assert!(!response.token.as_str().is_empty());
    }

    #[tokio::test]
    async fn test_handler_receives_values_verbatim_once() {
        let auth_port = Arc::new(MockAuthPort::new(true));
        let use_case = LoginUseCase::new(auth_port.clone());
        let submission: Submission = [("email", "user@test.com"), ("password", "hunter2")]
            .into_iter()
            .collect();
        let request = LoginRequest::from_submission(&submission, SubmissionSource::Form).unwrap();

        use_case.execute(request).await.unwrap();

        let calls = auth_port.calls().await;
        assert_eq!(calls.len(), 1);
        assert_eq!(calls[0].email(), "user@test.com");
        assert_eq!(calls[0].password(), "hunter2");
    }

    #[tokio::test]
    async fn test_rejected_credentials() {
        let auth_port = Arc::new(MockAuthPort::new(true));
        auth_port.set_should_succeed(false);
        let use_case = LoginUseCase::new(auth_port);
        let request = LoginRequest::new(Credentials::new("a@b.c", "x"), SubmissionSource::Form);

        let result = use_case.execute(request).await;

        assert!(matches!(result, Err(AuthError::InvalidCredentials)));
    }

    #[tokio::test]
    async fn test_empty_values_are_passed_through() {
        let auth_port = Arc::new(MockAuthPort::new(true));
        let use_case = LoginUseCase::new(auth_port.clone());
        let request = LoginRequest::new(Credentials::new("", ""), SubmissionSource::Direct);

        assert!(use_case.execute(request).await.is_ok());

        let calls = auth_port.calls().await;
        assert_eq!(calls[0].email(), "");
        assert_eq!(calls[0].password(), "");
    }
}
