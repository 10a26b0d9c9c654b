//! Structural and content validation for uploaded matrices.
//!
//! Checks run in a fixed order and stop at the first failure:
//!
//! 1. emptiness ([`MatrixError::EmptyMatrix`])
//! 2. squareness ([`MatrixError::NotSquare`])
//! 3. numeric content ([`MatrixError::NotNumeric`])

use crate::error::{MatrixError, MatrixResult};
use crate::models::Cell;

/// Validate raw rows before any operation runs.
///
/// Every row must hold exactly as many cells as there are rows, so a
/// jagged upload is rejected here even when its first row has the right
/// length.
pub fn validate(rows: &[Vec<Cell>]) -> MatrixResult<()> {
    let Some(first) = rows.first() else {
        return Err(MatrixError::EmptyMatrix);
    };

    let size = rows.len();
    if first.len() != size || rows.iter().any(|row| row.len() != size) {
        return Err(MatrixError::NotSquare);
    }

    if rows.iter().flatten().any(|cell| !cell.is_integer()) {
        return Err(MatrixError::NotNumeric);
    }

    Ok(())
}
