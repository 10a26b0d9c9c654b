//! HTTP response type for the matrix API.
//!
//! All bodies are plain text.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};

use crate::error::MatrixError;

/// Status and body of one matrix request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MatrixResponse {
    pub status: StatusCode,
    pub body: String,
}

impl MatrixResponse {
    /// Successful operation result.
    pub fn ok(body: impl Into<String>) -> Self {
        Self {
            status: StatusCode::OK,
            body: body.into(),
        }
    }

    /// Unknown operation path.
    pub fn not_found() -> Self {
        Self {
            status: StatusCode::NOT_FOUND,
            body: "not found".to_string(),
        }
    }

    /// Acquisition or validation failure, rendered as `error: <message>`.
    pub fn error(err: MatrixError) -> Self {
        Self {
            status: err.status(),
            body: error_response(&err),
        }
    }
}

impl IntoResponse for MatrixResponse {
    fn into_response(self) -> Response {
        (self.status, self.body).into_response()
    }
}

/// Create an error body
pub fn error_response(err: &MatrixError) -> String {
    format!("error: {}", err)
}
