use std::io;

use bytes::Bytes;
use futures::StreamExt;
use futures::stream::BoxStream;
use object_store::path::Path as StorePath;
use object_store::{ObjectStore, WriteMultipart};

use crate::application::ports::{AudioStoreError, StoredObject};

/// Parts buffered in flight before `upload` waits for the store to catch up.
const MAX_CONCURRENT_PARTS: usize = 8;

pub(super) async fn head(store: &dyn ObjectStore, path: &StorePath) -> Result<u64, AudioStoreError> {
    let meta = store.head(path).await.map_err(map_error)?;
    Ok(meta.size as u64)
}

/// Lists every object below `prefix`. `strip` is removed from returned keys.
pub(super) async fn list(
    store: &dyn ObjectStore,
    prefix: &StorePath,
    strip: &str,
) -> Result<Vec<StoredObject>, AudioStoreError> {
    let mut listing = store.list(Some(prefix));
    let mut objects = Vec::new();

    while let Some(entry) = listing.next().await {
        let meta = entry.map_err(map_error)?;
        let location = meta.location.as_ref();
        let key = location.strip_prefix(strip).unwrap_or(location).to_string();
        objects.push(StoredObject {
            key,
            size: meta.size as u64,
            last_modified: meta.last_modified,
        });
    }

    Ok(objects)
}

pub(super) async fn upload(
    store: &dyn ObjectStore,
    path: &StorePath,
    mut stream: BoxStream<'_, Result<Bytes, io::Error>>,
) -> Result<u64, AudioStoreError> {
    let multipart = store
        .put_multipart(path)
        .await
        .map_err(|e| AudioStoreError::UploadFailed(e.to_string()))?;
    let mut writer = WriteMultipart::new(multipart);
    let mut total_bytes: u64 = 0;

    while let Some(chunk) = stream.next().await {
        let bytes = match chunk {
            Ok(b) => b,
            Err(e) => {
                let _ = writer.abort().await;
                return Err(AudioStoreError::Io(e));
            }
        };
        if let Err(e) = writer.wait_for_capacity(MAX_CONCURRENT_PARTS).await {
            let _ = writer.abort().await;
            return Err(AudioStoreError::UploadFailed(e.to_string()));
        }
        total_bytes += bytes.len() as u64;
        writer.write(&bytes);
    }

    writer
        .finish()
        .await
        .map_err(|e| AudioStoreError::UploadFailed(e.to_string()))?;

    Ok(total_bytes)
}

fn map_error(error: object_store::Error) -> AudioStoreError {
    match error {
        object_store::Error::NotFound { path, .. } => AudioStoreError::NotFound(path),
        object_store::Error::PermissionDenied { path, .. }
        | object_store::Error::Unauthenticated { path, .. } => AudioStoreError::AccessDenied(path),
        other => AudioStoreError::RequestFailed(other.to_string()),
    }
}
