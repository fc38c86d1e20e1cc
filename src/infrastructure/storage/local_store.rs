use std::io;
use std::path::PathBuf;
use std::sync::Arc;

use bytes::Bytes;
use futures::stream::BoxStream;
use object_store::local::LocalFileSystem;
use object_store::path::Path as StorePath;

use super::object_store_ops;
use crate::application::ports::{AudioStore, AudioStoreError, StoredObject};
use crate::domain::AudioObject;

/// Filesystem-backed store for development. Each bucket is a sub-directory of
/// the base path.
pub struct LocalAudioStore {
    inner: Arc<LocalFileSystem>,
}

impl LocalAudioStore {
    pub fn new(base_path: PathBuf) -> Result<Self, AudioStoreError> {
        std::fs::create_dir_all(&base_path).map_err(AudioStoreError::Io)?;
        let fs = LocalFileSystem::new_with_prefix(base_path)
            .map_err(|e| AudioStoreError::Configuration(e.to_string()))?;
        Ok(Self {
            inner: Arc::new(fs),
        })
    }

    fn object_path(object: &AudioObject) -> StorePath {
        StorePath::from(format!("{}/{}", object.bucket(), object.key()))
    }
}

#[async_trait::async_trait]
impl AudioStore for LocalAudioStore {
    async fn head(&self, object: &AudioObject) -> Result<u64, AudioStoreError> {
        object_store_ops::head(self.inner.as_ref(), &Self::object_path(object)).await
    }

    async fn list(&self, bucket: &str, prefix: &str) -> Result<Vec<StoredObject>, AudioStoreError> {
        let bucket_root = format!("{}/", bucket);
        let prefix_path = StorePath::from(format!("{}{}", bucket_root, prefix));
        match object_store_ops::list(self.inner.as_ref(), &prefix_path, &bucket_root).await {
            Err(AudioStoreError::NotFound(_)) => Ok(Vec::new()),
            other => other,
        }
    }

    async fn upload(
        &self,
        object: &AudioObject,
        stream: BoxStream<'_, Result<Bytes, io::Error>>,
    ) -> Result<u64, AudioStoreError> {
        object_store_ops::upload(self.inner.as_ref(), &Self::object_path(object), stream).await
    }
}
