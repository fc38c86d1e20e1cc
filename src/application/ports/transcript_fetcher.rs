use async_trait::async_trait;

use crate::domain::Transcript;

#[async_trait]
pub trait TranscriptFetcher: Send + Sync {
    async fn fetch(&self, url: &str) -> Result<Transcript, TranscriptFetchError>;
}

#[derive(Debug, thiserror::Error)]
pub enum TranscriptFetchError {
    #[error("transcript download failed: {0}")]
    DownloadFailed(String),
    #[error("malformed transcript document: {0}")]
    MalformedDocument(String),
}
