//! # Matrix - operations on uploaded CSV matrices
//!
//! A small HTTP service that accepts a square matrix of integers as a CSV
//! upload and echoes, transposes, flattens, sums or multiplies it.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────┐     ┌─────────────┐     ┌─────────────┐     ┌─────────────┐
//! │  Multipart  │────▶│   Parser    │────▶│  Validator  │────▶│  Operation  │
//! │   "file"    │     │    (csv)    │     │  (square)   │     │   (text)    │
//! └─────────────┘     └─────────────┘     └─────────────┘     └─────────────┘
//! ```
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use matrix::{parse_grid, Grid, Operation};
//!
//! let grid = Grid::from_rows(parse_grid(b"1,2\n3,4")?)?;
//! assert_eq!(Operation::Transpose.apply(&grid), "1,3\n2,4\n");
//! ```
//!
//! ## Modules
//!
//! - [`error`] - Error types
//! - [`models`] - Cells and grids
//! - [`parser`] - CSV decoding
//! - [`validation`] - Emptiness, squareness and numeric checks
//! - [`transform`] - The five operations
//! - [`api`] - HTTP server and dispatcher
//! - [`config`] - Server configuration

// Core modules
pub mod error;
pub mod models;

// Parsing
pub mod parser;

// Validation
pub mod validation;

// Operations
pub mod transform;

// HTTP API
pub mod api;
pub mod config;

// =============================================================================
// Re-exports - Error types
// =============================================================================

pub use error::{MatrixError, MatrixResult, ServerError, ServerResult};

// =============================================================================
// Re-exports - Models
// =============================================================================

pub use models::{Cell, Grid, RawRows};

// =============================================================================
// Re-exports - Parsing and validation
// =============================================================================

pub use parser::{parse_grid, parse_grid_file};
pub use validation::validate;

// =============================================================================
// Re-exports - Operations
// =============================================================================

pub use transform::{
    echo, flatten, operations_description, product, sum, transpose, Operation,
};

// =============================================================================
// Re-exports - API
// =============================================================================

pub use api::{handle, MatrixResponse, Route};
pub use config::ServerConfig;

// Server
pub mod server {
    pub use crate::api::server::{router, start_server};
}
