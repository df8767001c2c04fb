use crate::config::Config;
use crate::storage::StorageGateway;
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    pub gateway: Arc<dyn StorageGateway>,
    pub config: Config,
}

impl AppState {
    /// Public URL for a stored object: `{PUBLIC_BASE_URL}/{key}`.
    /// Deterministic, stable across calls for the same key.
    pub fn public_url(&self, key: &str) -> String {
        format!("{}/{}", self.config.storage.public_base_url, key)
    }
}

// API response types
// Field names are camelCase on the wire to match the original frontend.

#[derive(Debug, serde::Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UploadResponse {
    pub success: bool,
    pub file_name: String,
    pub file_size: usize,
    pub mime_type: String,
    pub url: String,
}

#[derive(Debug, serde::Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FileInfoResponse {
    pub success: bool,
    pub file_name: String,
    pub public_url: String,
    pub signed_url: String,
    pub expires_in: String,
}

#[derive(Debug, serde::Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub timestamp: String,
}
