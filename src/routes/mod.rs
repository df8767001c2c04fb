//! API Routes
//!
//! HTTP surface of the service:
//! - `POST /upload` - multipart file upload
//! - `GET /upload` - health check
//! - `GET /file/{file_name}` - signed read URL for a stored object

pub mod files;
pub mod health;
pub mod upload;

use crate::models::AppState;
use axum::Router;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::info;

/// Create the main application router. Per-endpoint routers are merged and
/// wrapped in permissive CORS plus request tracing.
pub fn create_router(state: AppState) -> Router {
    info!("Creating application router");

    Router::new()
        .merge(upload::router(state.clone()))
        .merge(files::router(state))
        .merge(health::router())
        // The service imposes no upload size cap, so axum's default body
        // limit is lifted rather than silently rejecting large files.
        .layer(axum::extract::DefaultBodyLimit::disable())
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .layer(TraceLayer::new_for_http())
}
