mod audio_store;
mod llm_client;
mod metrics_sink;
mod trace_collector;
mod transcript_fetcher;
mod transcription_service;

pub use audio_store::{AudioStore, AudioStoreError, StoredObject};
pub use llm_client::{Completion, CompletionRequest, LlmClient, LlmClientError};
pub use metrics_sink::{MetricDatum, MetricUnit, MetricsError, MetricsSink};
pub use trace_collector::{RunMetadata, TraceCollector, TraceError};
pub use transcript_fetcher::{TranscriptFetchError, TranscriptFetcher};
pub use transcription_service::{JobStatusReport, TranscriptionError, TranscriptionService};
