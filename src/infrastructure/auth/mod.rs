//! Authentication adapters.

mod diagnostic;

pub use diagnostic::DiagnosticAuthenticator;
