use std::io;

use bytes::Bytes;
use chrono::{DateTime, Utc};
use futures::stream::BoxStream;

use crate::domain::AudioObject;

#[derive(Debug, Clone, PartialEq)]
pub struct StoredObject {
    pub key: String,
    pub size: u64,
    pub last_modified: DateTime<Utc>,
}

#[async_trait::async_trait]
pub trait AudioStore: Send + Sync {
    /// Metadata-only lookup. Returns the object size in bytes.
    async fn head(&self, object: &AudioObject) -> Result<u64, AudioStoreError>;

    async fn list(&self, bucket: &str, prefix: &str)
    -> Result<Vec<StoredObject>, AudioStoreError>;

    async fn upload(
        &self,
        object: &AudioObject,
        stream: BoxStream<'_, Result<Bytes, io::Error>>,
    ) -> Result<u64, AudioStoreError>;
}

#[derive(Debug, thiserror::Error)]
pub enum AudioStoreError {
    #[error("object not found: {0}")]
    NotFound(String),
    #[error("access denied: {0}")]
    AccessDenied(String),
    #[error("store configuration failed: {0}")]
    Configuration(String),
    #[error("request failed: {0}")]
    RequestFailed(String),
    #[error("upload failed: {0}")]
    UploadFailed(String),
    #[error("io error: {0}")]
    Io(#[from] io::Error),
}
