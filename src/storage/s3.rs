//! S3-compatible [`StorageGateway`] implementation
//!
//! Works against Cloudflare R2 (region derived from the account id) or any
//! other S3-compatible API via an explicit endpoint override.

use super::{StorageError, StorageGateway};
use crate::config::StorageConfig;
use anyhow::Result;
use tracing::debug;

pub struct S3Storage {
    bucket: s3::Bucket,
}

impl S3Storage {
    /// Build the bucket handle from configuration. Credentials are checked
    /// for shape here; actual connectivity is only exercised on first use.
    pub fn from_config(config: &StorageConfig) -> Result<Self> {
        let region = match &config.endpoint {
            Some(endpoint) => s3::Region::Custom {
                region: "auto".to_string(),
                endpoint: endpoint.trim_end_matches('/').to_string(),
            },
            None => s3::Region::R2 {
                account_id: config.account_id.clone(),
            },
        };

        let credentials = s3::creds::Credentials::new(
            Some(&config.access_key_id),
            Some(&config.secret_access_key),
            None,
            None,
            None,
        )?;

        let bucket = s3::Bucket::new(&config.bucket, region, credentials)?.with_path_style();

        Ok(Self { bucket: *bucket })
    }
}

#[async_trait::async_trait]
impl StorageGateway for S3Storage {
    async fn put(&self, key: &str, body: &[u8], content_type: &str) -> Result<(), StorageError> {
        let response = self
            .bucket
            .put_object_with_content_type(key, body, content_type)
            .await
            .map_err(|e| StorageError::Backend(e.to_string()))?;

        let status = response.status_code();
        if status != 200 {
            return Err(StorageError::UnexpectedStatus(status));
        }

        debug!(key, size = body.len(), "object stored");
        Ok(())
    }

    async fn signed_read_url(&self, key: &str, ttl_secs: u32) -> Result<String, StorageError> {
        self.bucket
            .presign_get(key, ttl_secs, None)
            .await
            .map_err(|e| StorageError::Backend(e.to_string()))
    }
}
