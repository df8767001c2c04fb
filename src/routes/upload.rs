use axum::{
    extract::{multipart::MultipartRejection, Multipart, State},
    http::StatusCode,
    response::Json as ResponseJson,
    routing::post,
    Router,
};
use tracing::info;

use crate::keygen;
use crate::models::{AppState, UploadResponse};
use crate::types::{AppError, AppResult};

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/upload", post(upload_file))
        .with_state(state)
}

/// POST /upload - accept one multipart field named `file`, store it under a
/// freshly generated key and return the public URL.
///
/// The extractor result is taken as a `Result` so that a non-multipart
/// request gets the same JSON error envelope as every other failure path
/// instead of the extractor's plain-text rejection.
async fn upload_file(
    State(state): State<AppState>,
    multipart: Result<Multipart, MultipartRejection>,
) -> AppResult<(StatusCode, ResponseJson<UploadResponse>)> {
    let mut multipart =
        multipart.map_err(|e| AppError::Validation(format!("Invalid multipart body: {e}")))?;

    let mut file = None;

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::Validation(format!("Invalid multipart body: {e}")))?
    {
        if field.name() != Some("file") {
            continue;
        }

        let file_name = field.file_name().map(str::to_string);
        let content_type = field
            .content_type()
            .map(str::to_string)
            .unwrap_or_else(|| mime::APPLICATION_OCTET_STREAM.to_string());
        let data = field
            .bytes()
            .await
            .map_err(|e| AppError::Validation(format!("Invalid multipart body: {e}")))?;

        file = Some((file_name, content_type, data));
        break;
    }

    let Some((file_name, content_type, data)) = file else {
        return Err(AppError::Validation("No file uploaded".to_string()));
    };

    let key = keygen::object_key(file_name.as_deref());

    state.gateway.put(&key, &data, &content_type).await?;

    info!(key = %key, size = data.len(), %content_type, "file uploaded");

    let response = UploadResponse {
        success: true,
        url: state.public_url(&key),
        file_name: key,
        file_size: data.len(),
        mime_type: content_type,
    };

    Ok((StatusCode::CREATED, ResponseJson(response)))
}
