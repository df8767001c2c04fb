//! Shared helpers for route tests: a wired-up [`AppState`] with a mock
//! gateway, multipart request construction and response body decoding.

use crate::config::{Config, ServerConfig, StorageConfig};
use crate::models::AppState;
use crate::storage::StorageGateway;
use axum::body::Body;
use axum::http::Request;
use axum::response::Response;
use std::sync::Arc;

pub fn test_state(gateway: Arc<dyn StorageGateway>) -> AppState {
    AppState {
        gateway,
        config: Config {
            server: ServerConfig {
                port: 0,
                host: "127.0.0.1".to_string(),
            },
            storage: StorageConfig {
                account_id: "test-account".to_string(),
                access_key_id: "test-key".to_string(),
                secret_access_key: "test-secret".to_string(),
                bucket: "test-bucket".to_string(),
                public_base_url: "http://cdn.test".to_string(),
                endpoint: None,
            },
        },
    }
}

/// Build a multipart/form-data POST with a single field named `file`.
pub fn multipart_request(
    uri: &str,
    file_name: &str,
    content_type: &str,
    content: &[u8],
) -> Request<Body> {
    let boundary = "test-boundary";

    let mut body = format!(
        "--{boundary}\r\n\
         Content-Disposition: form-data; name=\"file\"; filename=\"{file_name}\"\r\n\
         Content-Type: {content_type}\r\n\r\n"
    )
    .into_bytes();
    body.extend_from_slice(content);
    body.extend_from_slice(format!("\r\n--{boundary}--\r\n").as_bytes());

    Request::builder()
        .method("POST")
        .uri(uri)
        .header(
            "content-type",
            format!("multipart/form-data; boundary={boundary}"),
        )
        .body(Body::from(body))
        .unwrap()
}

pub async fn response_json(response: Response) -> serde_json::Value {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    serde_json::from_slice(&bytes).unwrap()
}
