//! Matrix operations.
//!
//! Every operation takes a validated [`Grid`] and renders text. Echo,
//! transpose and flatten reuse the cell text verbatim; sum and product
//! parse cells only when they need the numbers.

use num_bigint::BigInt;

use crate::models::{Cell, Grid};

/// All available matrix operations
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operation {
    /// Render the matrix back as CSV rows
    Echo,

    /// Swap rows and columns
    Transpose,

    /// All cells on one line
    Flatten,

    /// Sum of all cells
    Sum,

    /// Product of all cells
    Product,
}

impl Operation {
    pub const ALL: [Operation; 5] = [
        Operation::Echo,
        Operation::Transpose,
        Operation::Flatten,
        Operation::Sum,
        Operation::Product,
    ];

    /// Identifier used in request paths.
    pub fn id(&self) -> &'static str {
        match self {
            Operation::Echo => "echo",
            Operation::Transpose => "invert",
            Operation::Flatten => "flatten",
            Operation::Sum => "sum",
            Operation::Product => "multiply",
        }
    }

    /// Look up an operation by its path identifier.
    pub fn from_id(id: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|op| op.id() == id)
    }

    /// Apply this operation to a grid
    pub fn apply(&self, grid: &Grid) -> String {
        match self {
            Operation::Echo => echo(grid),
            Operation::Transpose => transpose(grid),
            Operation::Flatten => flatten(grid),
            Operation::Sum => sum(grid),
            Operation::Product => product(grid),
        }
    }
}

/// Each row comma-joined and followed by a newline, the last one included.
pub fn echo(grid: &Grid) -> String {
    render_rows(grid.rows())
}

/// Cell (i, j) of the result is cell (j, i) of the input, rendered like [`echo`].
pub fn transpose(grid: &Grid) -> String {
    let rows = grid.rows();
    render_rows((0..grid.size()).map(move |j| rows.iter().map(move |row| &row[j])))
}

/// Every cell in row-major order joined by commas, without a trailing comma.
pub fn flatten(grid: &Grid) -> String {
    let mut out = String::new();
    push_joined(&mut out, grid.cells());
    out
}

/// Sum of all cells as `i64`.
///
/// Overflow wraps around (two's complement) instead of promoting to
/// arbitrary precision, unlike [`product`].
pub fn sum(grid: &Grid) -> String {
    grid.cells()
        .map(cell_value)
        .fold(0i64, i64::wrapping_add)
        .to_string()
}

/// Exact product of all cells.
///
/// Returns `"0"` as soon as a zero cell is seen; later cells are never parsed.
pub fn product(grid: &Grid) -> String {
    product_of(grid.cells())
}

fn product_of<'a>(cells: impl IntoIterator<Item = &'a Cell>) -> String {
    let mut result = BigInt::from(1);
    for cell in cells {
        let value = cell_value(cell);
        if value == 0 {
            return "0".to_string();
        }
        result *= BigInt::from(value);
    }
    result.to_string()
}

// Grids are validated on construction, so the fallback is never taken.
fn cell_value(cell: &Cell) -> i64 {
    cell.value().unwrap_or_default()
}

fn render_rows<'a, R>(rows: impl IntoIterator<Item = R>) -> String
where
    R: IntoIterator<Item = &'a Cell>,
{
    let mut out = String::new();
    for row in rows {
        push_joined(&mut out, row);
        out.push('\n');
    }
    out
}

fn push_joined<'a>(out: &mut String, cells: impl IntoIterator<Item = &'a Cell>) {
    for (i, cell) in cells.into_iter().enumerate() {
        if i > 0 {
            out.push(',');
        }
        out.push_str(cell.as_str());
    }
}

/// Get a description of all available operations
pub fn operations_description() -> String {
    r#"Available matrix operations:

| Path      | Operation | Result                                          |
|-----------|-----------|-------------------------------------------------|
| /echo     | echo      | rows as uploaded, one per line                  |
| /invert   | transpose | rows and columns swapped, one row per line      |
| /flatten  | flatten   | all cells on one line, comma separated          |
| /sum      | sum       | sum of all cells (64-bit, wraps on overflow)    |
| /multiply | product   | exact product of all cells                      |

Upload the matrix as CSV in the multipart form field "file"."#
        .to_string()
}
