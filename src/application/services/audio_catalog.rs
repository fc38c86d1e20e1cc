use std::sync::Arc;

use serde::Serialize;

use super::PipelineError;
use crate::application::ports::AudioStore;
use crate::domain::AudioFileEntry;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AudioListing {
    pub files: Vec<AudioFileEntry>,
    pub count: usize,
}

/// Read-only listing of uploaded recordings for the upload UI.
pub struct AudioCatalog {
    store: Arc<dyn AudioStore>,
    default_bucket: Option<String>,
    default_prefix: String,
}

impl AudioCatalog {
    pub fn new(
        store: Arc<dyn AudioStore>,
        default_bucket: Option<String>,
        default_prefix: impl Into<String>,
    ) -> Self {
        Self {
            store,
            default_bucket,
            default_prefix: default_prefix.into(),
        }
    }

    pub async fn list(
        &self,
        bucket: Option<&str>,
        prefix: Option<&str>,
    ) -> Result<AudioListing, PipelineError> {
        let bucket = bucket
            .filter(|b| !b.trim().is_empty())
            .or(self.default_bucket.as_deref())
            .ok_or_else(|| PipelineError::MissingParameter(vec!["bucket"]))?;
        let prefix = prefix.unwrap_or(self.default_prefix.as_str());

        let objects = self
            .store
            .list(bucket, prefix)
            .await
            .map_err(PipelineError::Storage)?;

        let mut files: Vec<AudioFileEntry> = objects
            .into_iter()
            .filter(|o| AudioFileEntry::is_audio_key(&o.key, prefix))
            .map(|o| AudioFileEntry::new(&o.key, prefix, o.size, o.last_modified))
            .collect();
        files.sort_by(|a, b| a.key.cmp(&b.key));

        tracing::debug!(bucket = %bucket, prefix = %prefix, count = files.len(), "Listed audio files");

        let count = files.len();
        Ok(AudioListing { files, count })
    }
}
