//! Domain layer with core entities and port definitions.

/// Entity definitions.
pub mod entities;
/// Error types.
pub mod errors;
/// Port definitions.
pub mod ports;

pub use entities::{AuthToken, Credentials, Submission};
pub use errors::AuthError;
pub use ports::AuthPort;
