use crate::models::MessageResponse;
use axum::{http::StatusCode, Json};
use thiserror::Error;

/// Failure surfaced at the route boundary as `{msg}`.
#[derive(Debug)]
pub struct AppError {
    pub status: StatusCode,
    pub message: String,
}

impl AppError {
    pub fn internal(message: impl Into<String>) -> Self {
        Self {
            status: StatusCode::INTERNAL_SERVER_ERROR,
            message: message.into(),
        }
    }
}

impl axum::response::IntoResponse for AppError {
    fn into_response(self) -> axum::response::Response {
        (self.status, Json(MessageResponse::new(self.message))).into_response()
    }
}

#[derive(Debug, Error, PartialEq)]
pub enum ValidationError {
    #[error("title is required and must be a non-empty string")]
    MissingTitle,
    #[error("description is required and must be a non-empty string")]
    MissingDescription,
    #[error("{field} must be a valid date, got {value:?}")]
    InvalidDate { field: &'static str, value: String },
}

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("no entry with id {0}")]
    NotFound(String),
    #[error("an entry with id {0} already exists")]
    Duplicate(String),
    #[error("stored value could not be decoded: {0}")]
    Corrupt(String),
    #[error("sqlite: {0}")]
    Sqlite(#[from] rusqlite::Error),
    #[error("io: {0}")]
    Io(#[from] std::io::Error),
}

#[derive(Debug, Error)]
pub enum ClientError {
    #[error("request failed: {0}")]
    Http(#[from] reqwest::Error),
    #[error("server replied {status}: {msg}")]
    Api { status: u16, msg: String },
    #[error("preferences: {0}")]
    Preferences(String),
}
