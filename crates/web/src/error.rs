use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use std::fmt;
use storage::error::StorageError;

/// Web layer errors
#[derive(Debug)]
pub enum WebError {
    Storage(StorageError),
    BadRequest(String),
}

impl fmt::Display for WebError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Storage(e) => write!(f, "Storage error: {}", e),
            Self::BadRequest(msg) => write!(f, "Bad request: {}", msg),
        }
    }
}

impl IntoResponse for WebError {
    fn into_response(self) -> Response {
        match &self {
            Self::Storage(e) if e.is_constraint_violation() => {
                tracing::warn!("Workout rejected by constraint: {e}");
            }
            Self::Storage(e) => {
                tracing::error!("Workout write failed: {e}");
            }
            Self::BadRequest(msg) => {
                tracing::warn!("Rejected request: {msg}");
            }
        }

        // Status code only: this API never returns a structured error body.
        let status = match self {
            Self::Storage(_) => StatusCode::INTERNAL_SERVER_ERROR,
            Self::BadRequest(_) => StatusCode::BAD_REQUEST,
        };

        status.into_response()
    }
}

impl From<StorageError> for WebError {
    fn from(error: StorageError) -> Self {
        Self::Storage(error)
    }
}

pub type WebResult<T> = Result<T, WebError>;
