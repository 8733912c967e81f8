use axum::{Json, http::StatusCode, response::IntoResponse};
use serde::Serialize;
use sqlx::Error as SqlxError;
use thiserror::Error as ThisError;
use tracing::error;

#[derive(Debug, ThisError)]
pub enum QuotesError {
    #[error("Database error: {0}")]
    DatabaseError(#[from] SqlxError),

    #[error("Configuration error: {0}")]
    ConfigError(#[from] figment::Error),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Invalid query: {0}")]
    InvalidQuery(String),
}

impl IntoResponse for QuotesError {
    fn into_response(self) -> axum::response::Response {
        if !matches!(self, QuotesError::InvalidQuery(_)) {
            error!(error = %self, "request failed");
        }
        let (status, error_body) = match self {
            QuotesError::InvalidQuery(message) => {
                let status = StatusCode::UNPROCESSABLE_ENTITY;
                let body = ApiErrorBody {
                    code: "INVALID_QUERY".to_string(),
                    message,
                };
                (status, body)
            }
            QuotesError::DatabaseError(_)
            | QuotesError::ConfigError(_)
            | QuotesError::IoError(_) => {
                let status = StatusCode::INTERNAL_SERVER_ERROR;
                let body = ApiErrorBody {
                    code: "INTERNAL_ERROR".to_string(),
                    message: "An internal server error occurred.".to_string(),
                };
                (status, body)
            }
        };
        (status, Json(ApiErrorResponse { error: error_body })).into_response()
    }
}

/// Standardized API error response body
#[derive(Serialize)]
pub struct ApiErrorBody {
    pub code: String,
    pub message: String,
}

#[derive(Serialize)]
pub struct ApiErrorResponse {
    pub error: ApiErrorBody,
}

/// Soft "not found" payload, served with a 200 status.
///
/// Clients branch on the presence of `error` rather than on the status code.
#[derive(Debug, Serialize)]
pub struct NotFoundBody {
    pub error: &'static str,
}

impl NotFoundBody {
    pub const NO_QUOTES: Self = Self {
        error: "No quotes found",
    };
    pub const QUOTE: Self = Self {
        error: "Quote not found",
    };
}
