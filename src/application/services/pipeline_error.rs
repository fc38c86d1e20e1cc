use std::time::Duration;

use crate::application::ports::{
    AudioStoreError, LlmClientError, TranscriptFetchError, TranscriptionError,
};
use crate::domain::{AudioObject, TranscriptionJobId};

/// Externally meaningful failure classes. Anything not named here is `Internal`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    MissingParameter,
    ObjectUnavailable,
    TranscriptionFailed,
    Timeout,
    Internal,
}

impl ErrorKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorKind::MissingParameter => "missing_parameter",
            ErrorKind::ObjectUnavailable => "object_unavailable",
            ErrorKind::TranscriptionFailed => "transcription_failed",
            ErrorKind::Timeout => "timeout",
            ErrorKind::Internal => "internal",
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum PipelineError {
    #[error("{}", describe_missing(.0))]
    MissingParameter(Vec<&'static str>),
    #[error("invalid request body: {0}")]
    InvalidBody(String),
    #[error("audio object is missing or not accessible: {object} ({source})")]
    ObjectUnavailable {
        object: AudioObject,
        #[source]
        source: AudioStoreError,
    },
    #[error("transcription job failed: {0}")]
    TranscriptionFailed(String),
    #[error(
        "transcription job {} did not finish within {:.1}s",
        .job_id,
        .waited.as_secs_f64()
    )]
    Timeout {
        job_id: TranscriptionJobId,
        waited: Duration,
    },
    #[error("transcription service: {0}")]
    Transcription(#[from] TranscriptionError),
    #[error("transcript: {0}")]
    TranscriptFetch(#[from] TranscriptFetchError),
    #[error("summarization: {0}")]
    Summarization(#[from] LlmClientError),
    #[error("storage: {0}")]
    Storage(AudioStoreError),
}

impl PipelineError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            PipelineError::MissingParameter(_) | PipelineError::InvalidBody(_) => {
                ErrorKind::MissingParameter
            }
            PipelineError::ObjectUnavailable { .. } => ErrorKind::ObjectUnavailable,
            PipelineError::TranscriptionFailed(_) => ErrorKind::TranscriptionFailed,
            PipelineError::Timeout { .. } => ErrorKind::Timeout,
            PipelineError::Transcription(_)
            | PipelineError::TranscriptFetch(_)
            | PipelineError::Summarization(_)
            | PipelineError::Storage(_) => ErrorKind::Internal,
        }
    }
}

fn describe_missing(names: &[&'static str]) -> String {
    let quoted = names
        .iter()
        .map(|n| format!("'{}'", n))
        .collect::<Vec<_>>()
        .join(", ");
    if names.len() == 1 {
        format!("missing required parameter {} in request body", quoted)
    } else {
        format!("missing required parameters {} in request body", quoted)
    }
}
