use async_trait::async_trait;

use crate::domain::{TranscriptionJob, TranscriptionJobId, TranscriptionJobStatus};

#[derive(Debug, Clone, PartialEq)]
pub struct JobStatusReport {
    pub status: TranscriptionJobStatus,
    pub transcript_url: Option<String>,
    pub failure_reason: Option<String>,
}

impl JobStatusReport {
    pub fn in_progress() -> Self {
        Self {
            status: TranscriptionJobStatus::InProgress,
            transcript_url: None,
            failure_reason: None,
        }
    }

    pub fn completed(transcript_url: impl Into<String>) -> Self {
        Self {
            status: TranscriptionJobStatus::Completed,
            transcript_url: Some(transcript_url.into()),
            failure_reason: None,
        }
    }

    pub fn failed(reason: Option<String>) -> Self {
        Self {
            status: TranscriptionJobStatus::Failed,
            transcript_url: None,
            failure_reason: reason,
        }
    }
}

#[async_trait]
pub trait TranscriptionService: Send + Sync {
    async fn start_job(&self, job: &TranscriptionJob) -> Result<(), TranscriptionError>;

    async fn job_status(&self, id: &TranscriptionJobId)
    -> Result<JobStatusReport, TranscriptionError>;
}

#[derive(Debug, thiserror::Error)]
pub enum TranscriptionError {
    #[error("api request failed: {0}")]
    ApiRequestFailed(String),
    #[error("invalid response: {0}")]
    InvalidResponse(String),
}
