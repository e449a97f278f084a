//! Domain entity definitions.

mod credentials;
mod submission;
mod token;

pub use credentials::Credentials;
pub use submission::{FormEntry, Submission};
pub use token::AuthToken;
