use std::collections::BTreeMap;

use axum::Json;
use axum::http::{HeaderName, HeaderValue, StatusCode};
use axum::response::{IntoResponse, Response};
use serde::{Deserialize, Serialize};
use serde_json::{Value, json};

use crate::application::services::{ErrorKind, PipelineError};

const CONTENT_TYPE: &str = "Content-Type";
const ALLOW_ORIGIN: &str = "Access-Control-Allow-Origin";

/// How error kinds surface as HTTP status codes.
///
/// `Compatible` keeps the historical contract where every failure is a 500.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ErrorStatusPolicy {
    #[default]
    Compatible,
    Strict,
}

impl ErrorStatusPolicy {
    pub fn status_for(&self, kind: ErrorKind) -> StatusCode {
        match self {
            ErrorStatusPolicy::Compatible => StatusCode::INTERNAL_SERVER_ERROR,
            ErrorStatusPolicy::Strict => match kind {
                ErrorKind::MissingParameter => StatusCode::BAD_REQUEST,
                ErrorKind::ObjectUnavailable => StatusCode::NOT_FOUND,
                ErrorKind::TranscriptionFailed => StatusCode::BAD_GATEWAY,
                ErrorKind::Timeout => StatusCode::GATEWAY_TIMEOUT,
                ErrorKind::Internal => StatusCode::INTERNAL_SERVER_ERROR,
            },
        }
    }
}

/// Status, headers and JSON body of every response this service emits.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ResponseEnvelope {
    pub status_code: u16,
    pub headers: BTreeMap<String, String>,
    pub body: Value,
}

impl ResponseEnvelope {
    pub fn new(status: StatusCode, body: Value) -> Self {
        let headers = BTreeMap::from([
            (CONTENT_TYPE.to_string(), "application/json".to_string()),
            (ALLOW_ORIGIN.to_string(), "*".to_string()),
        ]);
        Self {
            status_code: status.as_u16(),
            headers,
            body,
        }
    }

    pub fn ok<T: Serialize>(body: &T) -> Self {
        match serde_json::to_value(body) {
            Ok(value) => Self::new(StatusCode::OK, value),
            Err(e) => {
                tracing::error!(error = %e, "Failed to serialize response body");
                Self::error_message(StatusCode::INTERNAL_SERVER_ERROR, e.to_string())
            }
        }
    }

    pub fn error(error: &PipelineError, policy: ErrorStatusPolicy) -> Self {
        Self::error_message(policy.status_for(error.kind()), error.to_string())
    }

    pub fn error_message(status: StatusCode, message: impl Into<String>) -> Self {
        Self::new(status, json!({ "error": message.into() }))
    }

    pub fn status(&self) -> StatusCode {
        StatusCode::from_u16(self.status_code).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR)
    }
}

impl IntoResponse for ResponseEnvelope {
    fn into_response(self) -> Response {
        let status = self.status();
        let mut response = (status, Json(self.body)).into_response();
        let headers = response.headers_mut();
        for (name, value) in &self.headers {
            if let (Ok(name), Ok(value)) = (
                HeaderName::from_bytes(name.as_bytes()),
                HeaderValue::from_str(value),
            ) {
                headers.insert(name, value);
            }
        }
        response
    }
}
