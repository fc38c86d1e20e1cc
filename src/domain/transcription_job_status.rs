use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TranscriptionJobStatus {
    Queued,
    InProgress,
    Completed,
    Failed,
}

impl TranscriptionJobStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            TranscriptionJobStatus::Queued => "QUEUED",
            TranscriptionJobStatus::InProgress => "IN_PROGRESS",
            TranscriptionJobStatus::Completed => "COMPLETED",
            TranscriptionJobStatus::Failed => "FAILED",
        }
    }

    pub fn is_terminal(&self) -> bool {
        matches!(
            self,
            TranscriptionJobStatus::Completed | TranscriptionJobStatus::Failed
        )
    }
}

impl FromStr for TranscriptionJobStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "QUEUED" => Ok(TranscriptionJobStatus::Queued),
            "IN_PROGRESS" => Ok(TranscriptionJobStatus::InProgress),
            "COMPLETED" => Ok(TranscriptionJobStatus::Completed),
            "FAILED" => Ok(TranscriptionJobStatus::Failed),
            _ => Err(format!("Invalid transcription job status: {}", s)),
        }
    }
}

impl fmt::Display for TranscriptionJobStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
