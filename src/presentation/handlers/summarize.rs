use axum::Extension;
use axum::body::Bytes;
use axum::extract::State;
use serde::Serialize;

use crate::application::services::{PipelineMetrics, PipelineOutcome};
use crate::infrastructure::observability::RequestId;
use crate::presentation::envelope::ResponseEnvelope;
use crate::presentation::state::AppState;

#[derive(Serialize)]
pub struct SummarizeResponse {
    pub summary: String,
    pub transcript: String,
    pub metrics: PipelineMetrics,
}

impl From<PipelineOutcome> for SummarizeResponse {
    fn from(outcome: PipelineOutcome) -> Self {
        Self {
            summary: outcome.summary.text,
            transcript: outcome.transcript.into_string(),
            metrics: outcome.metrics,
        }
    }
}

/// Takes the raw body so that malformed JSON is reported through the same
/// error envelope as every other failure.
#[tracing::instrument(skip_all)]
pub async fn summarize_handler(
    State(state): State<AppState>,
    Extension(request_id): Extension<RequestId>,
    body: Bytes,
) -> ResponseEnvelope {
    tracing::info!(body_bytes = body.len(), "Summarize request received");

    match state.pipeline.run(&body, request_id.as_str()).await {
        Ok(outcome) => {
            tracing::info!(
                word_count = outcome.metrics.word_count,
                estimated_cost = outcome.metrics.estimated_cost,
                "Summary generated"
            );
            ResponseEnvelope::ok(&SummarizeResponse::from(outcome))
        }
        Err(e) => {
            tracing::error!(error = %e, kind = e.kind().as_str(), "Summarization failed");
            ResponseEnvelope::error(&e, state.error_policy)
        }
    }
}
