//! Shared error types for the services crate.

use thiserror::Error;

use planner_core::model::{SessionError, SubjectError};

/// Errors emitted by the API client implementations.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ApiError {
    #[error("resource not found")]
    NotFound,
    #[error("request failed with status {0}")]
    HttpStatus(reqwest::StatusCode),
    #[error(transparent)]
    Http(#[from] reqwest::Error),
}

/// Errors emitted while decoding API payloads into domain models.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum DecodeError {
    #[error(transparent)]
    Subject(#[from] SubjectError),
    #[error(transparent)]
    Session(#[from] SessionError),
}

/// Errors emitted by `SubjectService`.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum SubjectServiceError {
    #[error(transparent)]
    Decode(#[from] DecodeError),
    #[error(transparent)]
    Api(#[from] ApiError),
}

/// Errors emitted by `SessionService`.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum SessionServiceError {
    #[error(transparent)]
    Session(#[from] SessionError),
    #[error(transparent)]
    Decode(#[from] DecodeError),
    #[error(transparent)]
    Api(#[from] ApiError),
}
