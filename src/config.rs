use anyhow::{Context, Result};
use serde::Deserialize;
use std::env;

#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub server: ServerConfig,
    pub storage: StorageConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    pub port: u16,
    pub host: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct StorageConfig {
    pub account_id: String,
    pub access_key_id: String,
    pub secret_access_key: String,
    pub bucket: String,
    pub public_base_url: String,
    /// Custom S3 endpoint (MinIO etc.). When unset, the R2 endpoint is
    /// derived from the account id.
    pub endpoint: Option<String>,
}

fn required(name: &str) -> Result<String> {
    env::var(name).with_context(|| format!("{name} must be set"))
}

impl Config {
    /// Load configuration from the environment. Storage credentials are
    /// validated here so a misconfigured process fails at startup instead of
    /// on the first upload.
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok();

        Ok(Self {
            server: ServerConfig {
                port: env::var("PORT")
                    .unwrap_or_else(|_| "3000".to_string())
                    .parse()
                    .context("PORT must be a valid port number")?,
                host: env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string()),
            },
            storage: StorageConfig {
                account_id: required("R2_ACCOUNT_ID")?,
                access_key_id: required("R2_ACCESS_KEY_ID")?,
                secret_access_key: required("R2_SECRET_ACCESS_KEY")?,
                bucket: required("R2_BUCKET_NAME")?,
                public_base_url: required("R2_PUBLIC_URL")?
                    .trim_end_matches('/')
                    .to_string(),
                endpoint: env::var("R2_ENDPOINT").ok(),
            },
        })
    }
}
