//! Domain models for the matrix service.
//!
//! - [`Cell`] - One CSV token, kept as text and parsed on demand
//! - [`Grid`] - A validated square matrix of cells
//! - [`RawRows`] - Rows as decoded from an upload, not yet validated

use std::fmt;

use crate::error::MatrixResult;
use crate::validation::validate;

// =============================================================================
// Cell
// =============================================================================

/// A single matrix cell.
///
/// The original text is never rewritten: `"007"` echoes as `"007"` even
/// though it sums as `7`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Cell(String);

impl Cell {
    /// The cell text exactly as uploaded.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Integer value of the cell, if it is a base-10 `i64`.
    pub fn value(&self) -> Option<i64> {
        self.0.parse().ok()
    }

    pub fn is_integer(&self) -> bool {
        self.value().is_some()
    }
}

impl From<&str> for Cell {
    fn from(text: &str) -> Self {
        Self(text.to_string())
    }
}

impl From<String> for Cell {
    fn from(text: String) -> Self {
        Self(text)
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

// =============================================================================
// Grid
// =============================================================================

/// Rows of cells straight from the CSV decoder. May be empty or jagged.
pub type RawRows = Vec<Vec<Cell>>;

/// A non-empty square matrix whose every cell is an integer.
///
/// The only way to build one is [`Grid::from_rows`], which runs the
/// validator first.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    rows: RawRows,
}

impl Grid {
    /// Validate raw rows and wrap them.
    pub fn from_rows(rows: RawRows) -> MatrixResult<Self> {
        validate(&rows)?;
        Ok(Self { rows })
    }

    /// Number of rows, which is also the number of columns.
    pub fn size(&self) -> usize {
        self.rows.len()
    }

    pub fn rows(&self) -> &[Vec<Cell>] {
        &self.rows
    }

    /// Cells in row-major order.
    pub fn cells(&self) -> impl Iterator<Item = &Cell> + '_ {
        self.rows.iter().flatten()
    }
}

#[cfg(test)]
pub(crate) fn rows_from(text: &[&[&str]]) -> RawRows {
    text.iter()
        .map(|row| row.iter().copied().map(Cell::from).collect())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::MatrixError;

    #[test]
    fn test_cell_keeps_text() {
        let cell = Cell::from("007");
        assert_eq!(cell.as_str(), "007");
        assert_eq!(cell.value(), Some(7));
        assert_eq!(cell.to_string(), "007");
    }

    #[test]
    fn test_cell_value() {
        assert_eq!(Cell::from("-42").value(), Some(-42));
        assert_eq!(Cell::from("+5").value(), Some(5));
        assert_eq!(Cell::from("1.5").value(), None);
        assert_eq!(Cell::from(" 1").value(), None);
        assert_eq!(Cell::from("").value(), None);
        assert_eq!(Cell::from("9223372036854775808").value(), None);
    }

    #[test]
    fn test_grid_from_rows() {
        let grid = Grid::from_rows(rows_from(&[&["1", "2"], &["3", "4"]])).unwrap();
        assert_eq!(grid.size(), 2);
        let cells: Vec<&str> = grid.cells().map(Cell::as_str).collect();
        assert_eq!(cells, vec!["1", "2", "3", "4"]);
    }

    #[test]
    fn test_grid_rejects_invalid_rows() {
        assert_eq!(Grid::from_rows(Vec::new()), Err(MatrixError::EmptyMatrix));
        assert_eq!(
            Grid::from_rows(rows_from(&[&["1", "2"]])),
            Err(MatrixError::NotSquare)
        );
    }
}
