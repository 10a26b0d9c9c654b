//! Error types for the matrix service.
//!
//! - [`MatrixError`] - Per-request failures (acquisition and validation)
//! - [`ServerError`] - Server bootstrap failures
//!
//! Every [`MatrixError`] is terminal for the request that produced it and
//! is reported to the caller as `error: <message>` with a 400 status.

use std::net::SocketAddr;

use axum::http::StatusCode;
use thiserror::Error;

// =============================================================================
// Request Errors
// =============================================================================

/// Errors raised while acquiring or validating an uploaded matrix.
///
/// The `Display` text of each variant is the fixed message sent back to
/// clients, so it must not change.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum MatrixError {
    /// The upload decoded to zero rows.
    #[error("matrix is empty")]
    EmptyMatrix,

    /// Row count differs from the length of at least one row.
    #[error("matrix is not square")]
    NotSquare,

    /// At least one cell is not a base-10 64-bit integer.
    #[error("matrix contains non-numeric values")]
    NotNumeric,

    /// The upload could not be decoded as CSV.
    #[error("not a valid matrix")]
    MalformedInput,

    /// No `file` field was found in the request.
    #[error("Could not open the matrix. Did you upload a valid csv file?")]
    MissingInput,
}

impl MatrixError {
    /// HTTP status reported for this error.
    pub fn status(&self) -> StatusCode {
        StatusCode::BAD_REQUEST
    }

    /// Stable snake_case name, used as a structured logging field.
    pub fn kind(&self) -> &'static str {
        match self {
            MatrixError::EmptyMatrix => "empty_matrix",
            MatrixError::NotSquare => "not_square",
            MatrixError::NotNumeric => "not_numeric",
            MatrixError::MalformedInput => "malformed_input",
            MatrixError::MissingInput => "missing_input",
        }
    }
}

// =============================================================================
// Server Errors
// =============================================================================

/// HTTP server errors.
#[derive(Debug, Error)]
pub enum ServerError {
    /// The listening socket could not be bound.
    #[error("Failed to bind {addr}: {source}")]
    Bind {
        addr: SocketAddr,
        #[source]
        source: std::io::Error,
    },

    /// The server loop stopped with an I/O error.
    #[error("Server error: {0}")]
    Io(#[from] std::io::Error),
}

// =============================================================================
// Result Type Aliases
// =============================================================================

/// Result type for matrix acquisition and validation.
pub type MatrixResult<T> = Result<T, MatrixError>;

/// Result type for server operations.
pub type ServerResult<T> = Result<T, ServerError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_client_messages() {
        assert_eq!(MatrixError::EmptyMatrix.to_string(), "matrix is empty");
        assert_eq!(MatrixError::NotSquare.to_string(), "matrix is not square");
        assert_eq!(
            MatrixError::NotNumeric.to_string(),
            "matrix contains non-numeric values"
        );
        assert_eq!(MatrixError::MalformedInput.to_string(), "not a valid matrix");
        assert_eq!(
            MatrixError::MissingInput.to_string(),
            "Could not open the matrix. Did you upload a valid csv file?"
        );
    }

    #[test]
    fn test_every_request_error_is_bad_request() {
        for err in [
            MatrixError::EmptyMatrix,
            MatrixError::NotSquare,
            MatrixError::NotNumeric,
            MatrixError::MalformedInput,
            MatrixError::MissingInput,
        ] {
            assert_eq!(err.status(), StatusCode::BAD_REQUEST);
        }
    }

    #[test]
    fn test_bind_error_format() {
        let err = ServerError::Bind {
            addr: SocketAddr::from(([127, 0, 0, 1], 5000)),
            source: std::io::Error::new(std::io::ErrorKind::AddrInUse, "in use"),
        };
        let msg = err.to_string();
        assert!(msg.contains("127.0.0.1:5000"));
        assert!(msg.contains("in use"));
    }
}
