//! HTTP API module.
//!
//! This module provides the HTTP server, dispatcher and response type for
//! the matrix service.

pub mod dispatch;
pub mod server;
pub mod types;

pub use dispatch::{handle, Route};
pub use server::{router, start_server};
pub use types::*;
