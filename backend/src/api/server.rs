//! HTTP Server for the matrix API.
//!
//! Every path and method goes to one handler, which reads the `file`
//! field of a multipart upload and dispatches on the path.
//!
//! # API Endpoints
//!
//! | Method | Path        | Description                      |
//! |--------|-------------|----------------------------------|
//! | any    | `/echo`     | Matrix as uploaded               |
//! | any    | `/invert`   | Transposed matrix                |
//! | any    | `/flatten`  | All cells on one line            |
//! | any    | `/sum`      | Sum of all cells                 |
//! | any    | `/multiply` | Product of all cells             |
//! | any    | other       | `404 not found`                  |

use axum::{
    extract::{multipart::MultipartRejection, DefaultBodyLimit, Multipart},
    http::{header, Method, Uri},
    Router,
};
use tokio::net::TcpListener;
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use super::dispatch::{handle, Route};
use super::types::MatrixResponse;
use crate::config::ServerConfig;
use crate::error::{MatrixError, MatrixResult, ServerError, ServerResult};
use crate::parser::parse_grid;
use crate::transform::Operation;

/// Name of the multipart field holding the CSV upload
pub const FILE_FIELD: &str = "file";

/// Build the application router.
///
/// Uploads are not size-capped; a matrix only has to fit in memory.
pub fn router() -> Router {
    let cors = CorsLayer::new()
        .allow_origin(tower_http::cors::Any)
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers([header::CONTENT_TYPE, header::ACCEPT])
        .expose_headers([header::CONTENT_TYPE]);

    Router::new()
        .fallback(matrix_request)
        .layer(DefaultBodyLimit::disable())
        .layer(cors)
        .layer(TraceLayer::new_for_http())
}

/// Start the HTTP server
pub async fn start_server(config: ServerConfig) -> ServerResult<()> {
    let addr = config.socket_addr();
    let listener = TcpListener::bind(addr)
        .await
        .map_err(|source| ServerError::Bind { addr, source })?;

    let local_addr = listener.local_addr()?;
    tracing::info!(address = %local_addr, "matrix server listening");
    for op in Operation::ALL {
        tracing::info!(path = %format!("/{}", op.id()), operation = ?op, "route");
    }

    axum::serve(listener, router())
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("matrix server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "failed to install Ctrl+C handler");
        std::future::pending::<()>().await;
    }
    tracing::info!("shutdown signal received");
}

/// Single entry point for every request
async fn matrix_request(
    uri: Uri,
    multipart: Result<Multipart, MultipartRejection>,
) -> MatrixResponse {
    let route = Route::from_path(uri.path());
    let acquired = read_upload(multipart)
        .await
        .and_then(|bytes| parse_grid(&bytes));

    let response = handle(route, acquired);
    tracing::debug!(path = uri.path(), status = response.status.as_u16(), "matrix request handled");
    response
}

/// Pull the bytes of the `file` upload out of a multipart body.
///
/// Only a file part counts: a plain form field named `file` (no filename)
/// is skipped.
async fn read_upload(
    multipart: Result<Multipart, MultipartRejection>,
) -> MatrixResult<Vec<u8>> {
    let mut multipart = multipart.map_err(|e| {
        tracing::debug!(error = %e, "request is not multipart");
        MatrixError::MissingInput
    })?;

    while let Some(field) = multipart.next_field().await.map_err(|e| {
        tracing::debug!(error = %e, "multipart error");
        MatrixError::MissingInput
    })? {
        if field.name() == Some(FILE_FIELD) && field.file_name().is_some() {
            let bytes = field.bytes().await.map_err(|e| {
                tracing::debug!(error = %e, "read error");
                MatrixError::MissingInput
            })?;
            return Ok(bytes.to_vec());
        }
    }

    Err(MatrixError::MissingInput)
}
