// Error taxonomy shared across handlers

use crate::storage::StorageError;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Json, Response};
use tracing::error;

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("{0}")]
    Validation(String),

    #[error("Upload failed")]
    Storage(#[from] StorageError),

    #[error("{0}")]
    NotFound(String),
}

pub type AppResult<T> = std::result::Result<T, AppError>;

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = match &self {
            AppError::Validation(_) => StatusCode::BAD_REQUEST,
            AppError::Storage(cause) => {
                // Full cause stays server-side; the client only ever sees
                // the generic Display message.
                error!(%cause, "storage operation failed");
                StatusCode::INTERNAL_SERVER_ERROR
            }
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
        };

        let body = Json(serde_json::json!({
            "success": false,
            "error": self.to_string(),
        }));

        (status, body).into_response()
    }
}
