use async_trait::async_trait;
use serde::Deserialize;

use crate::application::ports::{TranscriptFetchError, TranscriptFetcher};
use crate::domain::Transcript;

/// Downloads the provider's transcript document from a pre-signed URL.
pub struct HttpTranscriptFetcher {
    client: reqwest::Client,
}

impl HttpTranscriptFetcher {
    pub fn new(client: reqwest::Client) -> Self {
        Self { client }
    }
}

impl Default for HttpTranscriptFetcher {
    fn default() -> Self {
        Self::new(reqwest::Client::new())
    }
}

#[derive(Deserialize)]
struct TranscriptDocument {
    results: TranscriptResults,
}

#[derive(Deserialize)]
struct TranscriptResults {
    transcripts: Vec<TranscriptEntry>,
}

#[derive(Deserialize)]
struct TranscriptEntry {
    transcript: String,
}

#[async_trait]
impl TranscriptFetcher for HttpTranscriptFetcher {
    async fn fetch(&self, url: &str) -> Result<Transcript, TranscriptFetchError> {
        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| TranscriptFetchError::DownloadFailed(format!("request: {}", e)))?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "unknown error".to_string());
            return Err(TranscriptFetchError::DownloadFailed(format!(
                "status {}: {}",
                status, body
            )));
        }

        let document: TranscriptDocument = response
            .json()
            .await
            .map_err(|e| TranscriptFetchError::MalformedDocument(e.to_string()))?;

        let first = document
            .results
            .transcripts
            .into_iter()
            .next()
            .ok_or_else(|| {
                TranscriptFetchError::MalformedDocument("document has no transcripts".into())
            })?;

        tracing::debug!(chars = first.transcript.len(), "Transcript document downloaded");

        Ok(Transcript::new(first.transcript))
    }
}
