//! Transformation module.
//!
//! The five matrix operations and the typed [`Operation`] used to select
//! one of them.

pub mod operations;

pub use operations::{
    echo, flatten, operations_description, product, sum, transpose, Operation,
};
