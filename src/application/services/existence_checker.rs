use std::sync::Arc;

use super::PipelineError;
use crate::application::ports::AudioStore;
use crate::domain::AudioObject;

/// Pre-flight guard: a freshly uploaded object may not yet be visible to the
/// transcription service, so its metadata is checked once before any job starts.
pub struct ExistenceChecker {
    store: Arc<dyn AudioStore>,
}

impl ExistenceChecker {
    pub fn new(store: Arc<dyn AudioStore>) -> Self {
        Self { store }
    }

    /// Returns the object size in bytes.
    pub async fn check(&self, object: &AudioObject) -> Result<u64, PipelineError> {
        tracing::info!(object = %object, "Verifying audio object exists");

        match self.store.head(object).await {
            Ok(size) => {
                tracing::info!(object = %object, size_bytes = size, "Audio object is reachable");
                Ok(size)
            }
            Err(source) => {
                tracing::warn!(object = %object, error = %source, "Audio object lookup failed");
                Err(PipelineError::ObjectUnavailable {
                    object: object.clone(),
                    source,
                })
            }
        }
    }
}
