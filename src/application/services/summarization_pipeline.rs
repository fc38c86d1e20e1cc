use std::time::{Duration, Instant};

use serde::Serialize;

use super::request_validator::validate_request;
use super::{CostReporter, ExistenceChecker, PipelineError, Summarizer, TranscriptionOrchestrator};
use crate::domain::{
    AudioObject, CostBreakdown, CostInputs, SummaryResult, TokenUsage, Transcript, round_mb,
};

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PipelineMetrics {
    pub processing_time: f64,
    pub bedrock_time: f64,
    pub word_count: usize,
    pub estimated_cost: f64,
    pub cost_breakdown: CostBreakdown,
    pub file_size_mb: f64,
    pub token_usage: TokenUsage,
}

#[derive(Debug, Clone)]
pub struct PipelineOutcome {
    pub transcript: Transcript,
    pub summary: SummaryResult,
    pub metrics: PipelineMetrics,
}

/// Validate, check existence, transcribe, summarize, account. Strictly sequential.
pub struct SummarizationPipeline {
    existence_checker: ExistenceChecker,
    orchestrator: TranscriptionOrchestrator,
    summarizer: Summarizer,
    cost_reporter: CostReporter,
}

impl SummarizationPipeline {
    pub fn new(
        existence_checker: ExistenceChecker,
        orchestrator: TranscriptionOrchestrator,
        summarizer: Summarizer,
        cost_reporter: CostReporter,
    ) -> Self {
        Self {
            existence_checker,
            orchestrator,
            summarizer,
            cost_reporter,
        }
    }

    pub async fn run(
        &self,
        body: &[u8],
        correlation_id: &str,
    ) -> Result<PipelineOutcome, PipelineError> {
        let audio = validate_request(body)?;
        self.process(&audio, correlation_id).await
    }

    pub async fn process(
        &self,
        audio: &AudioObject,
        correlation_id: &str,
    ) -> Result<PipelineOutcome, PipelineError> {
        let started = Instant::now();

        let file_size_bytes = self.existence_checker.check(audio).await?;

        tracing::info!(object = %audio, "Starting summarization pipeline");
        let transcript = self.orchestrator.transcribe(audio).await?;

        let summary = self.summarizer.summarize(&transcript, correlation_id).await?;

        let elapsed = started.elapsed();
        let inputs = CostInputs {
            file_size_bytes,
            word_count: transcript.word_count(),
            elapsed,
        };
        let breakdown = self.cost_reporter.report(&inputs, summary.usage).await;

        tracing::info!(
            object = %audio,
            processing_secs = elapsed.as_secs_f64(),
            "Summarization pipeline completed"
        );

        let metrics = PipelineMetrics {
            processing_time: round_secs(elapsed),
            bedrock_time: round_secs(summary.generation_time),
            word_count: inputs.word_count,
            estimated_cost: breakdown.total,
            cost_breakdown: breakdown,
            file_size_mb: round_mb(file_size_bytes),
            token_usage: summary.usage,
        };

        Ok(PipelineOutcome {
            transcript,
            summary,
            metrics,
        })
    }
}

fn round_secs(duration: Duration) -> f64 {
    (duration.as_secs_f64() * 100.0).round() / 100.0
}
