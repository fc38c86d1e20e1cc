use std::fmt;

use uuid::Uuid;

use super::{AudioObject, LanguageCode, MediaFormat};

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct TranscriptionJobId(String);

impl TranscriptionJobId {
    pub fn new() -> Self {
        Self(format!("transcription-job-{}", Uuid::new_v4()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for TranscriptionJobId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for TranscriptionJobId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A job submitted by exactly one pipeline run. Never shared across requests.
#[derive(Debug, Clone, PartialEq)]
pub struct TranscriptionJob {
    pub id: TranscriptionJobId,
    pub media_uri: String,
    pub language_code: LanguageCode,
    pub media_format: MediaFormat,
}

impl TranscriptionJob {
    pub fn new(audio: &AudioObject, language_code: LanguageCode, media_format: MediaFormat) -> Self {
        Self {
            id: TranscriptionJobId::new(),
            media_uri: audio.media_uri(),
            language_code,
            media_format,
        }
    }
}
