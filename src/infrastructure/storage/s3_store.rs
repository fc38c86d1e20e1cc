use std::collections::HashMap;
use std::io;
use std::sync::{Arc, RwLock};

use bytes::Bytes;
use futures::stream::BoxStream;
use object_store::ObjectStore;
use object_store::aws::AmazonS3Builder;
use object_store::path::Path as StorePath;

use super::object_store_ops;
use crate::application::ports::{AudioStore, AudioStoreError, StoredObject};
use crate::domain::AudioObject;

/// S3-backed store. Bucket handles are built on first use and reused for the
/// lifetime of the process.
pub struct S3AudioStore {
    region: Option<String>,
    endpoint: Option<String>,
    buckets: RwLock<HashMap<String, Arc<dyn ObjectStore>>>,
}

impl S3AudioStore {
    pub fn new(region: Option<String>, endpoint: Option<String>) -> Self {
        Self {
            region,
            endpoint,
            buckets: RwLock::new(HashMap::new()),
        }
    }

    fn bucket(&self, name: &str) -> Result<Arc<dyn ObjectStore>, AudioStoreError> {
        let cached = self
            .buckets
            .read()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .get(name)
            .cloned();
        if let Some(store) = cached {
            return Ok(store);
        }

        let mut builder = AmazonS3Builder::from_env().with_bucket_name(name);
        if let Some(region) = &self.region {
            builder = builder.with_region(region);
        }
        if let Some(endpoint) = &self.endpoint {
            builder = builder.with_endpoint(endpoint).with_allow_http(true);
        }
        let store: Arc<dyn ObjectStore> = Arc::new(
            builder
                .build()
                .map_err(|e| AudioStoreError::Configuration(e.to_string()))?,
        );

        tracing::debug!(bucket = %name, "Created object store handle");

        let mut buckets = self
            .buckets
            .write()
            .unwrap_or_else(|poisoned| poisoned.into_inner());
        Ok(Arc::clone(
            buckets.entry(name.to_string()).or_insert(store),
        ))
    }
}

#[async_trait::async_trait]
impl AudioStore for S3AudioStore {
    async fn head(&self, object: &AudioObject) -> Result<u64, AudioStoreError> {
        let store = self.bucket(object.bucket())?;
        object_store_ops::head(store.as_ref(), &StorePath::from(object.key())).await
    }

    async fn list(&self, bucket: &str, prefix: &str) -> Result<Vec<StoredObject>, AudioStoreError> {
        let store = self.bucket(bucket)?;
        object_store_ops::list(store.as_ref(), &StorePath::from(prefix), "").await
    }

    async fn upload(
        &self,
        object: &AudioObject,
        stream: BoxStream<'_, Result<Bytes, io::Error>>,
    ) -> Result<u64, AudioStoreError> {
        let store = self.bucket(object.bucket())?;
        object_store_ops::upload(store.as_ref(), &StorePath::from(object.key()), stream).await
    }
}
