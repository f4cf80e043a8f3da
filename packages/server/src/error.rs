use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{error, warn};

/// JSON body of every error response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorBody {
    pub message: String,
}

/// Errors surfaced by the HTTP handlers.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("no project with slug {0:?}")]
    NotFound(String),
    /// The catalog could not be loaded at startup. `message` is what the
    /// caller sees; `reason` is only logged.
    #[error("{message} ({reason})")]
    Unavailable {
        message: &'static str,
        reason: String,
    },
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
            ApiError::Unavailable { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    pub fn public_message(&self) -> &'static str {
        match self {
            ApiError::NotFound(_) => "Project not found.",
            ApiError::Unavailable { message, .. } => message,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match &self {
            ApiError::NotFound(slug) => warn!(%slug, "project not found"),
            ApiError::Unavailable { reason, .. } => error!(%reason, "project catalog unavailable"),
        }
        let body = ErrorBody {
            message: self.public_message().to_string(),
        };
        (self.status(), Json(body)).into_response()
    }
}
