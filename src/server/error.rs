//! Error mapping from the crate taxonomy to HTTP responses.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

use crate::foundation::error::PawtrailError;

/// HTTP-surface error: a status code plus a JSON `{"error": ...}` body.
///
/// Status mapping follows the informal taxonomy of the product: missing or
/// invalid input is 400, a blocked upstream host is 403, missing records and
/// upstream 404s are 404, upstream transport/shape failures are 502, and
/// everything else is 500.
#[derive(Debug)]
pub struct ApiError {
    status: StatusCode,
    message: String,
}

impl ApiError {
    /// 400 Bad Request.
    pub fn bad_request(msg: impl Into<String>) -> Self {
        Self {
            status: StatusCode::BAD_REQUEST,
            message: msg.into(),
        }
    }

    /// 404 Not Found.
    pub fn not_found(msg: impl Into<String>) -> Self {
        Self {
            status: StatusCode::NOT_FOUND,
            message: msg.into(),
        }
    }
}

impl From<PawtrailError> for ApiError {
    fn from(err: PawtrailError) -> Self {
        let status = match &err {
            PawtrailError::Validation(_) => StatusCode::BAD_REQUEST,
            PawtrailError::Forbidden(_) => StatusCode::FORBIDDEN,
            PawtrailError::NotFound(_) => StatusCode::NOT_FOUND,
            PawtrailError::Upstream(_) => StatusCode::BAD_GATEWAY,
            PawtrailError::Render(_)
            | PawtrailError::Storage(_)
            | PawtrailError::Serde(_)
            | PawtrailError::Other(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };
        if status == StatusCode::INTERNAL_SERVER_ERROR {
            tracing::error!(error = %err, "request failed");
        }
        Self {
            status,
            message: err.to_string(),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let body = Json(serde_json::json!({ "error": self.message }));
        (self.status, body).into_response()
    }
}
