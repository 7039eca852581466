//! RPC error taxonomy and its HTTP projection.

#[cfg(test)]
#[path = "error_test.rs"]
mod tests;

use axum::http::StatusCode;
use axum::response::{IntoResponse, Json, Response};
use serde::Serialize;

/// Errors surfaced by RPC procedures.
///
/// The bridge never transforms these; they serialize as
/// `{ "error": { "code", "message" } }` with the matching HTTP status.
#[derive(Debug, thiserror::Error)]
pub enum RpcError {
    #[error("bad request: {0}")]
    BadRequest(String),
    #[error("unauthorized: {0}")]
    Unauthorized(String),
    #[error("unknown procedure: {0}")]
    NotFound(String),
    #[error("internal error: {0}")]
    Internal(String),
}

impl RpcError {
    /// Stable machine-readable code for the wire envelope.
    #[must_use]
    pub fn code(&self) -> &'static str {
        match self {
            Self::BadRequest(_) => "BAD_REQUEST",
            Self::Unauthorized(_) => "UNAUTHORIZED",
            Self::NotFound(_) => "NOT_FOUND",
            Self::Internal(_) => "INTERNAL_SERVER_ERROR",
        }
    }

    #[must_use]
    pub fn status(&self) -> StatusCode {
        match self {
            Self::BadRequest(_) => StatusCode::BAD_REQUEST,
            Self::Unauthorized(_) => StatusCode::UNAUTHORIZED,
            Self::NotFound(_) => StatusCode::NOT_FOUND,
            Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

#[derive(Serialize)]
struct ErrorBody<'a> {
    error: ErrorDetail<'a>,
}

#[derive(Serialize)]
struct ErrorDetail<'a> {
    code: &'a str,
    message: String,
}

impl IntoResponse for RpcError {
    fn into_response(self) -> Response {
        let body = ErrorBody {
            error: ErrorDetail { code: self.code(), message: self.to_string() },
        };
        (self.status(), Json(body)).into_response()
    }
}
