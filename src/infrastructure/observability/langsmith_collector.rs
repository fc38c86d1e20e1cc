use std::time::Duration;

use async_trait::async_trait;
use serde_json::json;
use uuid::Uuid;

use crate::application::ports::{RunMetadata, TraceCollector, TraceError};

pub const DEFAULT_LANGSMITH_ENDPOINT: &str = "https://eu.api.smith.langchain.com";

/// Posts one completed LLM run per summarization to a LangSmith project.
pub struct LangSmithTraceCollector {
    client: reqwest::Client,
    endpoint: String,
    api_key: String,
    project: String,
}

impl LangSmithTraceCollector {
    /// `timeout` bounds every submission, connect and response included.
    pub fn new(
        api_key: String,
        endpoint: Option<String>,
        project: String,
        timeout: Duration,
    ) -> Result<Self, TraceError> {
        let endpoint = endpoint
            .unwrap_or_else(|| DEFAULT_LANGSMITH_ENDPOINT.to_string())
            .trim_end_matches('/')
            .to_string();
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| TraceError::Configuration(e.to_string()))?;
        Ok(Self {
            client,
            endpoint,
            api_key,
            project,
        })
    }
}

#[async_trait]
impl TraceCollector for LangSmithTraceCollector {
    async fn record_run(&self, run: &RunMetadata) -> Result<(), TraceError> {
        let payload = json!({
            "id": Uuid::new_v4().to_string(),
            "name": run.use_case,
            "run_type": "llm",
            "session_name": self.project,
            "start_time": run.started_at.to_rfc3339(),
            "end_time": run.finished_at.to_rfc3339(),
            "inputs": {
                "transcript_length": run.transcript_length,
            },
            "outputs": {
                "input_tokens": run.usage.input_tokens,
                "output_tokens": run.usage.output_tokens,
            },
            "extra": {
                "metadata": {
                    "correlation_id": run.correlation_id,
                    "use_case": run.use_case,
                    "model_id": run.model_id,
                    "transcript_length": run.transcript_length,
                }
            }
        });

        let response = self
            .client
            .post(format!("{}/runs", self.endpoint))
            .header("x-api-key", &self.api_key)
            .json(&payload)
            .send()
            .await
            .map_err(|e| TraceError::SubmissionFailed(format!("request: {}", e)))?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "unknown error".to_string());
            return Err(TraceError::SubmissionFailed(format!(
                "status {}: {}",
                status, body
            )));
        }

        tracing::debug!(correlation_id = %run.correlation_id, "Trace run recorded");
        Ok(())
    }
}
