// Filedrop - minimal file upload service backed by S3-compatible object storage

pub mod config;
pub mod keygen;
pub mod models;
pub mod routes;
pub mod storage;
pub mod types;

#[cfg(test)]
pub mod test_util;

// Re-exports for convenience
pub use config::Config;
pub use models::AppState;

pub fn create_router(state: AppState) -> axum::Router {
    routes::create_router(state)
}
