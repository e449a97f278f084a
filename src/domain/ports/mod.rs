mod auth_port;

pub use auth_port::AuthPort;
