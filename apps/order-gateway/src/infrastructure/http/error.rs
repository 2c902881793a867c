//! Mapping of application errors onto HTTP responses.
//!
//! Every error body has the shape `{"detail": "..."}`.

use axum::{
    Json,
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
};

use crate::application::ports::ArticleError;
use crate::domain::order::OrderError;

use super::response::ErrorResponse;

/// Detail sent for malformed JSON bodies.
pub const INVALID_JSON_DETAIL: &str = "Invalid JSON";

/// Detail sent for internal faults whose cause must not leak.
pub const INTERNAL_ERROR_DETAIL: &str = "Internal server error";

/// An error response.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiError {
    status: StatusCode,
    detail: String,
}

impl ApiError {
    /// Create an error with an explicit status.
    pub fn new(status: StatusCode, detail: impl Into<String>) -> Self {
        Self {
            status,
            detail: detail.into(),
        }
    }

    /// HTTP status.
    #[must_use]
    pub const fn status(&self) -> StatusCode {
        self.status
    }

    /// Response detail.
    #[must_use]
    pub fn detail(&self) -> &str {
        &self.detail
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (
            self.status,
            Json(ErrorResponse {
                detail: self.detail,
            }),
        )
            .into_response()
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        match rejection {
            JsonRejection::JsonSyntaxError(_) => {
                Self::new(StatusCode::BAD_REQUEST, INVALID_JSON_DETAIL)
            }
            other => Self::new(other.status(), other.body_text()),
        }
    }
}

impl From<OrderError> for ApiError {
    fn from(err: OrderError) -> Self {
        match err {
            OrderError::Validation(e) => Self::new(StatusCode::BAD_REQUEST, e.to_string()),
            e @ OrderError::PriceOutOfRange => Self::new(StatusCode::BAD_REQUEST, e.to_string()),
            OrderError::Configuration(e) => {
                tracing::error!(error = %e, "Order registries are misconfigured");
                Self::new(StatusCode::INTERNAL_SERVER_ERROR, INTERNAL_ERROR_DETAIL)
            }
        }
    }
}

impl From<ArticleError> for ApiError {
    fn from(err: ArticleError) -> Self {
        Self::new(StatusCode::INTERNAL_SERVER_ERROR, err.to_string())
    }
}
