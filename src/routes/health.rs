use axum::{response::Json as ResponseJson, routing::get, Json, Router};

use crate::models::HealthResponse;

pub fn router() -> Router {
    // The health check is exposed as GET on the upload path rather than a
    // dedicated /health route.
    Router::new().route("/upload", get(health_check))
}

async fn health_check() -> ResponseJson<HealthResponse> {
    let response = HealthResponse {
        status: "OK".to_string(),
        timestamp: chrono::Utc::now().to_rfc3339(),
    };

    Json(response)
}
