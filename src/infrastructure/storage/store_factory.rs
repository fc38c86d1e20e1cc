use std::path::PathBuf;
use std::sync::Arc;

use crate::application::ports::{AudioStore, AudioStoreError};
use crate::presentation::config::{StorageProviderSetting, StorageSettings};

use super::local_store::LocalAudioStore;
use super::s3_store::S3AudioStore;

pub struct AudioStoreFactory;

impl AudioStoreFactory {
    pub fn create(
        settings: &StorageSettings,
        region: Option<&str>,
    ) -> Result<Arc<dyn AudioStore>, AudioStoreError> {
        match settings.provider {
            StorageProviderSetting::S3 => Ok(Arc::new(S3AudioStore::new(
                region.map(str::to_string),
                settings.endpoint.clone(),
            ))),
            StorageProviderSetting::Local => {
                let store = LocalAudioStore::new(PathBuf::from(&settings.local_path))?;
                Ok(Arc::new(store))
            }
        }
    }
}
