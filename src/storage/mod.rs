//! Storage layer (S3-compatible)
//!
//! The rest of the application only sees the [`StorageGateway`] trait. The
//! production implementation talks to an S3-compatible bucket (Cloudflare R2,
//! MinIO, AWS S3); tests substitute a mock.

pub mod s3;

#[cfg(test)]
pub mod mock;

pub use s3::S3Storage;

#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    #[error("storage backend error: {0}")]
    Backend(String),

    #[error("storage backend returned status {0}")]
    UnexpectedStatus(u16),
}

#[async_trait::async_trait]
pub trait StorageGateway: Send + Sync {
    /// Store `body` under `key`. The object becomes durably readable at
    /// `key` once this returns Ok.
    async fn put(&self, key: &str, body: &[u8], content_type: &str) -> Result<(), StorageError>;

    /// Generate a signed read URL valid for `ttl_secs` from issuance. Each
    /// call produces a fresh signature; results must not be cached.
    async fn signed_read_url(&self, key: &str, ttl_secs: u32) -> Result<String, StorageError>;
}
