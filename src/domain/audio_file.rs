use chrono::{DateTime, Utc};
use serde::Serialize;

pub const AUDIO_EXTENSIONS: [&str; 2] = ["mp3", "wav"];

const BYTES_PER_MB: f64 = 1024.0 * 1024.0;

/// A discoverable recording, as shown to the upload UI.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AudioFileEntry {
    pub key: String,
    pub name: String,
    pub size_mb: f64,
    pub last_modified: String,
}

impl AudioFileEntry {
    pub fn new(key: &str, prefix: &str, size_bytes: u64, last_modified: DateTime<Utc>) -> Self {
        let name = key.strip_prefix(prefix).unwrap_or(key).to_string();
        Self {
            key: key.to_string(),
            name,
            size_mb: round_mb(size_bytes),
            last_modified: last_modified.to_rfc3339(),
        }
    }

    pub fn is_audio_key(key: &str, prefix: &str) -> bool {
        if key == prefix || key.ends_with('/') {
            return false;
        }
        key.rsplit_once('.')
            .map(|(_, ext)| {
                AUDIO_EXTENSIONS
                    .iter()
                    .any(|candidate| ext.eq_ignore_ascii_case(candidate))
            })
            .unwrap_or(false)
    }
}

/// Size in MiB, rounded to two decimals.
pub fn round_mb(size_bytes: u64) -> f64 {
    (size_bytes as f64 / BYTES_PER_MB * 100.0).round() / 100.0
}
