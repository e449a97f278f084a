//! Authentication port definition.

use async_trait::async_trait;

use crate::domain::entities::{AuthToken, Credentials};
use crate::domain::errors::AuthError;

/// Port for the login command.
///
/// Implementations accept a credential pair, attempt authentication and
/// report the outcome. The event loop that invokes it lives outside the core.
#[async_trait]
pub trait AuthPort: Send + Sync {
    /// Authenticates the credential pair and returns a session token.
    async fn authenticate(&self, credentials: &Credentials) -> Result<AuthToken, AuthError>;
}

#[cfg(test)]
pub mod mock {
    use super::*;
    use std::sync::Arc;
    use std::sync::atomic::{AtomicBool, Ordering};
    use tokio::sync::Mutex;

    /// Mock authentication port that records every call.
    pub struct MockAuthPort {
        should_succeed: Arc<AtomicBool>,
        calls: Arc<Mutex<Vec<Credentials>>>,
    }

    impl MockAuthPort {
        /// Creates new mock.
        pub fn new(should_succeed: bool) -> Self {
            Self {
                should_succeed: Arc::new(AtomicBool::new(should_succeed)),
                calls: Arc::new(Mutex::new(Vec::new())),
            }
        }

        /// Sets success behavior.
        pub fn set_should_succeed(&self, value: bool) {
            self.should_succeed.store(value, Ordering::SeqCst);
        }

        /// Returns the credentials received so far.
        pub async fn calls(&self) -> Vec<Credentials> {
            self.calls.lock().await.clone()
        }
    }

    #[async_trait]
    impl AuthPort for MockAuthPort {
        async fn authenticate(&self, credentials: &Credentials) -> Result<AuthToken, AuthError> {
            self.calls.lock().await.push(credentials.clone());
            if self.should_succeed.load(Ordering::SeqCst) {
                Ok(AuthToken::issue())
            } else {
                Err(AuthError::InvalidCredentials)
            }
        }
    }
}
