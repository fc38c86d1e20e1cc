use async_trait::async_trait;
use chrono::{DateTime, Utc};

use crate::domain::TokenUsage;

#[derive(Debug, Clone, PartialEq)]
pub struct RunMetadata {
    pub correlation_id: String,
    pub use_case: String,
    pub model_id: String,
    pub transcript_length: usize,
    pub usage: TokenUsage,
    pub started_at: DateTime<Utc>,
    pub finished_at: DateTime<Utc>,
}

/// Optional observability hook. Implementations must not influence the
/// summarization result.
#[async_trait]
pub trait TraceCollector: Send + Sync {
    async fn record_run(&self, run: &RunMetadata) -> Result<(), TraceError>;

    fn is_enabled(&self) -> bool {
        true
    }
}

#[derive(Debug, thiserror::Error)]
pub enum TraceError {
    #[error("trace client configuration failed: {0}")]
    Configuration(String),
    #[error("trace submission failed: {0}")]
    SubmissionFailed(String),
}
