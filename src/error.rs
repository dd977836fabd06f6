//! Application error type and HTTP response mapping.
//!
//! Every failure path terminates in a JSON body of the form
//! `{"detail": "..."}`. Store failures carry the store's own message
//! prefixed with `Database error:`; writes that report zero rows written
//! carry a fixed per-operation message.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;

#[derive(Serialize)]
struct ErrorBody {
    detail: String,
}

#[derive(Debug)]
pub enum AppError {
    /// Malformed or semantically invalid request payload. Rejected before
    /// any store call is issued.
    Validation { message: String },
    /// Any failure reported by the external data store.
    Store { message: String },
    /// A write the store accepted but that affected zero rows.
    EmptyWrite { message: String },
}

impl AppError {
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation {
            message: message.into(),
        }
    }

    pub fn store(message: impl Into<String>) -> Self {
        Self::Store {
            message: message.into(),
        }
    }

    pub fn empty_write(message: impl Into<String>) -> Self {
        Self::EmptyWrite {
            message: message.into(),
        }
    }
}

impl std::fmt::Display for AppError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AppError::Validation { message } => write!(f, "{message}"),
            AppError::Store { message } => write!(f, "Database error: {message}"),
            AppError::EmptyWrite { message } => write!(f, "{message}"),
        }
    }
}

impl From<validator::ValidationErrors> for AppError {
    fn from(errors: validator::ValidationErrors) -> Self {
        AppError::validation(errors.to_string())
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = match &self {
            AppError::Validation { .. } => StatusCode::BAD_REQUEST,
            AppError::Store { .. } | AppError::EmptyWrite { .. } => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        };

        let body = ErrorBody {
            detail: self.to_string(),
        };

        (status, Json(body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_store_error_carries_prefix() {
        let err = AppError::store("connection refused");
        assert_eq!(err.to_string(), "Database error: connection refused");
    }

    #[test]
    fn test_empty_write_message_is_verbatim() {
        let err = AppError::empty_write("Failed to log click");
        assert_eq!(err.to_string(), "Failed to log click");
    }
}
