//! In-memory [`StorageGateway`] for tests. No network, no credentials.

use super::{StorageError, StorageGateway};
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Mutex;

pub struct MockStorage {
    fail: bool,
    /// Every successful put as (key, bytes, content_type).
    pub puts: Mutex<Vec<(String, Vec<u8>, String)>>,
    signature_counter: AtomicU64,
}

impl MockStorage {
    pub fn new() -> Self {
        Self {
            fail: false,
            puts: Mutex::new(Vec::new()),
            signature_counter: AtomicU64::new(0),
        }
    }

    /// A gateway where every operation fails, as if the bucket were
    /// unreachable or the object absent.
    pub fn failing() -> Self {
        Self { fail: true, ..Self::new() }
    }
}

#[async_trait::async_trait]
impl StorageGateway for MockStorage {
    async fn put(&self, key: &str, body: &[u8], content_type: &str) -> Result<(), StorageError> {
        if self.fail {
            return Err(StorageError::Backend(
                "connection refused (mock)".to_string(),
            ));
        }

        self.puts.lock().unwrap().push((
            key.to_string(),
            body.to_vec(),
            content_type.to_string(),
        ));
        Ok(())
    }

    async fn signed_read_url(&self, key: &str, ttl_secs: u32) -> Result<String, StorageError> {
        if self.fail {
            return Err(StorageError::Backend("NoSuchKey (mock)".to_string()));
        }

        // Distinct signature per call, mirroring real presigning where the
        // signature covers the issuance timestamp.
        let sig = self.signature_counter.fetch_add(1, Ordering::Relaxed);
        Ok(format!(
            "http://mock-storage/{key}?expires={ttl_secs}&sig={sig}"
        ))
    }
}
