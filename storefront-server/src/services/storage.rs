//! Image storage backends
//!
//! Uploads are content addressed (`images/{sha256}.jpg`), so every backend
//! treats a repeated `put` of the same key as a no-op success.

use async_trait::async_trait;
use aws_sdk_s3::Client as S3Client;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use thiserror::Error;

use crate::core::config::{Config, StorageBackend};
use shared::error::{AppError, ErrorCode};

#[derive(Debug, Error)]
pub enum StorageError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("S3 error: {0}")]
    S3(String),

    #[error("Invalid key: {0}")]
    InvalidKey(String),
}

impl From<StorageError> for AppError {
    fn from(err: StorageError) -> Self {
        AppError::storage(err.to_string())
    }
}

/// Destination for processed uploads
#[async_trait]
pub trait ImageStore: Send + Sync + std::fmt::Debug {
    /// Backend name for logs
    fn name(&self) -> &'static str;

    /// Store `data` under `key` and return its public URL
    async fn put(&self, key: &str, data: Vec<u8>, content_type: &str) -> Result<String, StorageError>;
}

/// Build the backend selected by `STORAGE_BACKEND`
pub async fn from_config(config: &Config) -> Result<Arc<dyn ImageStore>, AppError> {
    match config.storage_backend {
        StorageBackend::Local => Ok(Arc::new(LocalStore::new(
            config.upload_dir.clone(),
            &config.public_base_url,
        ))),
        StorageBackend::S3 => {
            let bucket = config.s3_bucket.clone().ok_or_else(|| {
                AppError::with_message(ErrorCode::ConfigError, "S3_BUCKET is required for the s3 backend")
            })?;
            let public_url = config
                .s3_public_url
                .clone()
                .unwrap_or_else(|| format!("https://{bucket}.s3.amazonaws.com"));
            let aws_config = aws_config::load_defaults(aws_config::BehaviorVersion::latest()).await;
            Ok(Arc::new(S3Store::new(
                S3Client::new(&aws_config),
                bucket,
                public_url,
            )))
        }
    }
}

// ── Local directory ─────────────────────────────────────────────────

/// Files under a local directory, served by the router at `/uploads`
#[derive(Debug, Clone)]
pub struct LocalStore {
    root: PathBuf,
    /// `{PUBLIC_BASE_URL}/uploads`
    url_prefix: String,
}

impl LocalStore {
    pub fn new(root: PathBuf, public_base_url: &str) -> Self {
        Self {
            root,
            url_prefix: format!("{}/uploads", public_base_url.trim_end_matches('/')),
        }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    fn path_for(&self, key: &str) -> Result<PathBuf, StorageError> {
        // keys are generated by the upload handler, never taken from the client
        if key.is_empty() || key.starts_with('/') || key.split('/').any(|part| part == "..") {
            return Err(StorageError::InvalidKey(key.to_string()));
        }
        Ok(self.root.join(key))
    }
}

#[async_trait]
impl ImageStore for LocalStore {
    fn name(&self) -> &'static str {
        "local"
    }

    async fn put(&self, key: &str, data: Vec<u8>, _content_type: &str) -> Result<String, StorageError> {
        let path = self.path_for(key)?;
        let url = format!("{}/{key}", self.url_prefix);

        if tokio::fs::try_exists(&path).await? {
            tracing::debug!(key = %key, "Image already stored, skipping write");
            return Ok(url);
        }
        if let Some(parent) = path.parent() {
            tokio::fs::create_dir_all(parent).await?;
        }

        // tmp file + rename so readers never see a partial image
        let tmp_path = path.with_extension("jpg.tmp");
        tokio::fs::write(&tmp_path, &data).await?;
        if let Err(e) = tokio::fs::rename(&tmp_path, &path).await {
            let _ = tokio::fs::remove_file(&tmp_path).await;
            return Err(e.into());
        }
        Ok(url)
    }
}

// ── S3 ──────────────────────────────────────────────────────────────

/// S3-compatible bucket
#[derive(Debug, Clone)]
pub struct S3Store {
    client: S3Client,
    bucket: String,
    public_url: String,
}

impl S3Store {
    pub fn new(client: S3Client, bucket: String, public_url: String) -> Self {
        Self {
            client,
            bucket,
            public_url: public_url.trim_end_matches('/').to_string(),
        }
    }
}

#[async_trait]
impl ImageStore for S3Store {
    fn name(&self) -> &'static str {
        "s3"
    }

    async fn put(&self, key: &str, data: Vec<u8>, content_type: &str) -> Result<String, StorageError> {
        self.client
            .put_object()
            .bucket(&self.bucket)
            .key(key)
            .body(data.into())
            .content_type(content_type)
            .send()
            .await
            .map_err(|e| StorageError::S3(e.to_string()))?;
        Ok(format!("{}/{key}", self.public_url))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_local_put_is_idempotent() {
        let dir = tempfile::tempdir().unwrap();
        let store = LocalStore::new(dir.path().to_path_buf(), "http://localhost:3000/");
        let url = store
            .put("images/abc.jpg", vec![1, 2, 3], "image/jpeg")
            .await
            .unwrap();
        assert_eq!(url, "http://localhost:3000/uploads/images/abc.jpg");
        assert_eq!(std::fs::read(dir.path().join("images/abc.jpg")).unwrap(), vec![1, 2, 3]);

        let again = store
            .put("images/abc.jpg", vec![9], "image/jpeg")
            .await
            .unwrap();
        assert_eq!(again, url);
        assert_eq!(std::fs::read(dir.path().join("images/abc.jpg")).unwrap(), vec![1, 2, 3]);
    }

    #[tokio::test]
    async fn test_local_rejects_traversal() {
        let dir = tempfile::tempdir().unwrap();
        let store = LocalStore::new(dir.path().to_path_buf(), "http://localhost:3000");
        let err = store
            .put("../escape.jpg", vec![1], "image/jpeg")
            .await
            .unwrap_err();
        assert!(matches!(err, StorageError::InvalidKey(_)));
    }
}
