use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use petstore_storage::StorageError;
use thiserror::Error;
use tracing::error;

/// Failures a handler does not recover from. All of them become a plain 500.
#[derive(Debug, Error)]
pub enum AppError {
    #[error(transparent)]
    Storage(#[from] StorageError),

    #[error("template error: {0}")]
    Render(#[from] minijinja::Error),

    #[error("store task failed: {0}")]
    Blocking(#[from] tokio::task::JoinError),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        error!("Request failed: {}", self);
        (StatusCode::INTERNAL_SERVER_ERROR, "Internal Server Error").into_response()
    }
}
