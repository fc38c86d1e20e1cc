use std::fmt;

/// Location of an audio recording in the object store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AudioObject {
    bucket: String,
    key: String,
}

impl AudioObject {
    pub fn new(bucket: impl Into<String>, key: impl Into<String>) -> Self {
        Self {
            bucket: bucket.into(),
            key: key.into(),
        }
    }

    pub fn bucket(&self) -> &str {
        &self.bucket
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    /// `s3://bucket/key`, the form the transcription service expects.
    pub fn media_uri(&self) -> String {
        format!("s3://{}/{}", self.bucket, self.key)
    }

    pub fn extension(&self) -> Option<&str> {
        let file_name = self.key.rsplit('/').next()?;
        let (stem, ext) = file_name.rsplit_once('.')?;
        if stem.is_empty() || ext.is_empty() {
            None
        } else {
            Some(ext)
        }
    }
}

impl fmt::Display for AudioObject {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "s3://{}/{}", self.bucket, self.key)
    }
}
