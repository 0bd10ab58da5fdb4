//! Error taxonomy mapped to HTTP responses.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Error body returned to clients.
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

#[derive(Debug, Error)]
pub enum ApiError {
    /// Malformed input: bad identifier, empty update payload, invalid email.
    #[error("{message}")]
    Validation {
        message: String,
        detail: Option<String>,
    },

    /// Missing, invalid or expired credentials.
    #[error("{0}")]
    Unauthenticated(String),

    /// Well-formed identifier with no matching document.
    #[error("{0}")]
    NotFound(String),

    /// Store or serialization failure. The cause is logged server-side;
    /// clients only ever see the generic message.
    #[error("{message}")]
    Internal { message: String, cause: String },
}

impl ApiError {
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation {
            message: message.into(),
            detail: None,
        }
    }

    pub fn validation_with_detail(message: impl Into<String>, detail: impl Into<String>) -> Self {
        Self::Validation {
            message: message.into(),
            detail: Some(detail.into()),
        }
    }

    pub fn unauthenticated(message: impl Into<String>) -> Self {
        Self::Unauthenticated(message.into())
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        Self::NotFound(message.into())
    }

    pub fn internal(message: impl Into<String>, cause: impl std::fmt::Display) -> Self {
        Self::Internal {
            message: message.into(),
            cause: cause.to_string(),
        }
    }

    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::Validation { .. } => StatusCode::BAD_REQUEST,
            Self::Unauthenticated(_) => StatusCode::UNAUTHORIZED,
            Self::NotFound(_) => StatusCode::NOT_FOUND,
            Self::Internal { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<mongodb::error::Error> for ApiError {
    fn from(err: mongodb::error::Error) -> Self {
        Self::internal("Internal server error", err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        if let Self::Internal { message, cause } = &self {
            tracing::error!(cause = %cause, "{message}");
        }

        let status = self.status_code();
        let body = ErrorResponse {
            error: self.to_string(),
            message: match self {
                Self::Validation { detail, .. } => detail,
                _ => None,
            },
        };

        (status, Json(body)).into_response()
    }
}
