use std::sync::Arc;
use std::time::{Duration, Instant};

use chrono::Utc;

use super::PipelineError;
use super::prompt_sanitizer::sanitize_prompt;
use super::prompt_template::build_summary_prompt;
use crate::application::ports::{CompletionRequest, LlmClient, RunMetadata, TraceCollector};
use crate::domain::{SummaryResult, TokenUsage, Transcript, estimate_prompt_tokens, estimate_tokens};

pub const USE_CASE_TAG: &str = "meeting_summarization";

/// Upper bound on how long a summary waits for the trace collector.
pub const DEFAULT_TRACE_TIMEOUT: Duration = Duration::from_secs(5);

pub struct Summarizer {
    llm_client: Arc<dyn LlmClient>,
    trace_collector: Arc<dyn TraceCollector>,
    temperature: f32,
    max_tokens: u32,
    trace_timeout: Duration,
}

impl Summarizer {
    pub fn new(
        llm_client: Arc<dyn LlmClient>,
        trace_collector: Arc<dyn TraceCollector>,
        temperature: f32,
        max_tokens: u32,
    ) -> Self {
        Self {
            llm_client,
            trace_collector,
            temperature,
            max_tokens,
            trace_timeout: DEFAULT_TRACE_TIMEOUT,
        }
    }

    pub fn with_trace_timeout(mut self, trace_timeout: Duration) -> Self {
        self.trace_timeout = trace_timeout;
        self
    }

    pub async fn summarize(
        &self,
        transcript: &Transcript,
        correlation_id: &str,
    ) -> Result<SummaryResult, PipelineError> {
        let request = CompletionRequest {
            prompt: build_summary_prompt(transcript.as_str()),
            temperature: self.temperature,
            max_tokens: self.max_tokens,
        };

        tracing::debug!(
            model = %self.llm_client.model_id(),
            prompt = %sanitize_prompt(&request.prompt),
            "Sending transcript for analysis"
        );

        let started_at = Utc::now();
        let llm_started = Instant::now();
        let completion = self.llm_client.complete(&request).await?;
        let generation_time = llm_started.elapsed();
        let finished_at = Utc::now();

        let usage = match completion.usage {
            Some(usage) => usage,
            None => {
                tracing::debug!("Provider reported no token usage, estimating");
                TokenUsage {
                    input_tokens: estimate_prompt_tokens(transcript.as_str()),
                    output_tokens: estimate_tokens(&completion.text),
                }
            }
        };

        tracing::info!(
            input_tokens = usage.input_tokens,
            output_tokens = usage.output_tokens,
            generation_ms = generation_time.as_millis() as u64,
            "Analysis received"
        );

        if self.trace_collector.is_enabled() {
            let run = RunMetadata {
                correlation_id: correlation_id.to_string(),
                use_case: USE_CASE_TAG.to_string(),
                model_id: self.llm_client.model_id().to_string(),
                transcript_length: transcript.char_count(),
                usage,
                started_at,
                finished_at,
            };
            self.record_trace(&run).await;
        }

        Ok(SummaryResult {
            text: completion.text,
            usage,
            generation_time,
        })
    }

    /// Never fails and never waits longer than `trace_timeout`.
    async fn record_trace(&self, run: &RunMetadata) {
        match tokio::time::timeout(self.trace_timeout, self.trace_collector.record_run(run)).await {
            Ok(Ok(())) => {}
            Ok(Err(e)) => tracing::warn!(error = %e, "Failed to record trace run"),
            Err(_) => tracing::warn!(
                timeout_ms = self.trace_timeout.as_millis() as u64,
                correlation_id = %run.correlation_id,
                "Trace collector did not answer in time, run dropped"
            ),
        }
    }
}
