//! Login credential pair.

use std::fmt;

use zeroize::{Zeroize, ZeroizeOnDrop};

/// Email and password pair submitted from the login form.
///
/// Values are taken verbatim; emptiness is not checked here.
#[derive(Clone, PartialEq, Eq, Zeroize, ZeroizeOnDrop)]
pub struct Credentials {
    email: String,
    password: String,
}

impl Credentials {
    /// Creates new credentials.
    #[must_use]
    pub fn new(email: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            password: password.into(),
        }
    }

    /// Returns the email.
    #[must_use]
    pub fn email(&self) -> &str {
        &self.email
    }

    /// Returns the password.
    #[must_use]
    pub fn password(&self) -> &str {
        &self.password
    }

    /// Returns the password with every character replaced.
    #[must_use]
    pub fn masked_password(&self) -> String {
        "*".repeat(self.password.chars().count())
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("email", &self.email)
            .field("password", &self.masked_password())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_values_kept_verbatim() {
        let credentials = Credentials::new(" user@test.com", "hunter2 ");
        assert_eq!(credentials.email(), " user@test.com");
        assert_eq!(credentials.password(), "hunter2 ");
    }

    #[test]
    fn test_debug_does_not_leak_password() {
        let credentials = Credentials::new("user@test.com", "hunter2");
        let output = format!("{credentials:?}");

        assert!(output.contains("user@test.com"));
        assert!(!output.contains("hunter2"));
        assert!(output.contains("*******"));
    }

    #[test]
    fn test_masked_password_counts_chars() {
        let credentials = Credentials::new("", "contraseña");
        assert_eq!(credentials.masked_password(), "**********");
    }
}
