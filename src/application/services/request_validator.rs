use serde_json::Value;

use super::PipelineError;
use crate::domain::AudioObject;

pub const BUCKET_FIELD: &str = "bucket_name";
pub const OBJECT_FIELD: &str = "object_name";

/// Extracts the audio reference from a raw request body.
///
/// An empty body is treated as `{}`, so it fails on the missing fields rather
/// than on JSON syntax.
pub fn validate_request(body: &[u8]) -> Result<AudioObject, PipelineError> {
    let value: Value = if body.iter().all(u8::is_ascii_whitespace) {
        Value::Object(Default::default())
    } else {
        serde_json::from_slice(body).map_err(|e| PipelineError::InvalidBody(e.to_string()))?
    };

    let bucket = non_empty_str(&value, BUCKET_FIELD);
    let key = non_empty_str(&value, OBJECT_FIELD);

    match (bucket, key) {
        (Some(bucket), Some(key)) => Ok(AudioObject::new(bucket, key)),
        (bucket, key) => {
            let mut missing = Vec::new();
            if bucket.is_none() {
                missing.push(BUCKET_FIELD);
            }
            if key.is_none() {
                missing.push(OBJECT_FIELD);
            }
            Err(PipelineError::MissingParameter(missing))
        }
    }
}

fn non_empty_str<'a>(value: &'a Value, field: &str) -> Option<&'a str> {
    value
        .get(field)
        .and_then(Value::as_str)
        .filter(|s| !s.trim().is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn whitespace_body_counts_as_empty_object() {
        let err = validate_request(b"  \n").unwrap_err();
        assert!(matches!(err, PipelineError::MissingParameter(ref m) if m.len() == 2));
    }

    #[test]
    fn non_string_field_counts_as_missing() {
        let err = validate_request(br#"{"bucket_name": 7, "object_name": "a.mp3"}"#).unwrap_err();
        assert!(matches!(err, PipelineError::MissingParameter(ref m) if m == &vec![BUCKET_FIELD]));
    }
}
