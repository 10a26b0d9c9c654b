//! Request dispatch: acquired rows in, [`MatrixResponse`] out.
//!
//! Acquisition and validation always run before the path lookup, so a
//! bad upload on an unknown path still answers 400 rather than 404.

use crate::error::MatrixResult;
use crate::models::{Grid, RawRows};
use crate::transform::Operation;

use super::types::MatrixResponse;

/// Target of a request, parsed once from the URL path.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Route {
    Operation(Operation),
    Unknown,
}

impl Route {
    /// Exact match on `/<operation id>`; anything else is [`Route::Unknown`].
    pub fn from_path(path: &str) -> Self {
        path.strip_prefix('/')
            .and_then(Operation::from_id)
            .map_or(Route::Unknown, Route::Operation)
    }
}

/// Validate the acquired rows and run the routed operation.
pub fn handle(route: Route, acquired: MatrixResult<RawRows>) -> MatrixResponse {
    let grid = match acquired.and_then(Grid::from_rows) {
        Ok(grid) => grid,
        Err(err) => {
            tracing::debug!(?route, error = err.kind(), "request rejected");
            return MatrixResponse::error(err);
        }
    };

    match route {
        Route::Operation(op) => {
            tracing::debug!(operation = op.id(), size = grid.size(), "applying operation");
            MatrixResponse::ok(op.apply(&grid))
        }
        Route::Unknown => MatrixResponse::not_found(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::MatrixError;
    use crate::models::rows_from;
    use axum::http::StatusCode;

    fn valid() -> MatrixResult<RawRows> {
        Ok(rows_from(&[&["1", "2", "3"], &["4", "5", "6"], &["7", "8", "9"]]))
    }

    #[test]
    fn test_route_from_path() {
        assert_eq!(Route::from_path("/echo"), Route::Operation(Operation::Echo));
        assert_eq!(Route::from_path("/invert"), Route::Operation(Operation::Transpose));
        assert_eq!(Route::from_path("/multiply"), Route::Operation(Operation::Product));
        assert_eq!(Route::from_path("/invalid"), Route::Unknown);
        assert_eq!(Route::from_path("/echo/"), Route::Unknown);
        assert_eq!(Route::from_path("echo"), Route::Unknown);
        assert_eq!(Route::from_path("/"), Route::Unknown);
    }

    #[test]
    fn test_handle_success() {
        let response = handle(Route::from_path("/sum"), valid());
        assert_eq!(response, MatrixResponse::ok("45"));
    }

    #[test]
    fn test_handle_unknown_route() {
        let response = handle(Route::Unknown, valid());
        assert_eq!(response.status, StatusCode::NOT_FOUND);
        assert_eq!(response.body, "not found");
    }

    #[test]
    fn test_acquisition_error_wins_over_unknown_route() {
        let response = handle(Route::Unknown, Err(MatrixError::MissingInput));
        assert_eq!(response.status, StatusCode::BAD_REQUEST);
        assert_eq!(
            response.body,
            "error: Could not open the matrix. Did you upload a valid csv file?"
        );
    }

    #[test]
    fn test_validation_error() {
        let response = handle(Route::Operation(Operation::Echo), Ok(Vec::new()));
        assert_eq!(response.status, StatusCode::BAD_REQUEST);
        assert_eq!(response.body, "error: matrix is empty");
    }
}
