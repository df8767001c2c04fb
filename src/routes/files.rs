use axum::{
    extract::{Path, State},
    response::Json as ResponseJson,
    routing::get,
    Router,
};
use tracing::warn;

use crate::models::{AppState, FileInfoResponse};
use crate::types::{AppError, AppResult};

/// Signed URLs are valid for one hour from issuance.
const SIGNED_URL_TTL_SECS: u32 = 3600;

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/file/{file_name}", get(file_info))
        .with_state(state)
}

/// GET /file/{file_name} - mint a fresh signed read URL for a stored object.
///
/// Any gateway failure is reported as 404: signing is local and does not
/// consult the store, so a missing object cannot be told apart from other
/// failures without an extra round trip. Both collapse into "File not found".
async fn file_info(
    State(state): State<AppState>,
    Path(file_name): Path<String>,
) -> AppResult<ResponseJson<FileInfoResponse>> {
    let signed_url = state
        .gateway
        .signed_read_url(&file_name, SIGNED_URL_TTL_SECS)
        .await
        .map_err(|cause| {
            warn!(key = %file_name, %cause, "signed URL generation failed");
            AppError::NotFound("File not found".to_string())
        })?;

    Ok(ResponseJson(FileInfoResponse {
        success: true,
        public_url: state.public_url(&file_name),
        file_name,
        signed_url,
        expires_in: "1 hour".to_string(),
    }))
}
