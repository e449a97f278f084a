//! Data transfer objects for the application layer.

mod auth_dto;

pub use auth_dto::{EMAIL_FIELD, LoginRequest, LoginResponse, PASSWORD_FIELD, SubmissionSource};
