mod audio_catalog;
mod cost_reporter;
mod existence_checker;
mod pipeline_error;
mod poll_policy;
mod prompt_sanitizer;
mod prompt_template;
mod request_validator;
mod summarization_pipeline;
mod summarizer;
mod transcription_orchestrator;

pub use audio_catalog::{AudioCatalog, AudioListing};
pub use cost_reporter::CostReporter;
pub use existence_checker::ExistenceChecker;
pub use pipeline_error::{ErrorKind, PipelineError};
pub use poll_policy::PollPolicy;
pub use prompt_sanitizer::sanitize_prompt;
pub use prompt_template::build_summary_prompt;
pub use request_validator::{BUCKET_FIELD, OBJECT_FIELD, validate_request};
pub use summarization_pipeline::{PipelineMetrics, PipelineOutcome, SummarizationPipeline};
pub use summarizer::{DEFAULT_TRACE_TIMEOUT, Summarizer, USE_CASE_TAG};
pub use transcription_orchestrator::TranscriptionOrchestrator;
