mod audio_file;
mod audio_object;
mod cost_breakdown;
mod language_code;
mod media_format;
mod price_table;
mod summary;
mod token_estimate;
mod transcript;
mod transcription_job;
mod transcription_job_status;

pub use audio_file::{AUDIO_EXTENSIONS, AudioFileEntry, round_mb};
pub use audio_object::AudioObject;
pub use cost_breakdown::{CostBreakdown, CostInputs};
pub use language_code::LanguageCode;
pub use media_format::MediaFormat;
pub use price_table::PriceTable;
pub use summary::{SummaryResult, TokenUsage};
pub use token_estimate::{
    PROMPT_OVERHEAD_TOKENS, estimate_prompt_tokens, estimate_tokens, prompt_tokens_for_words,
    tokens_for_words,
};
pub use transcript::Transcript;
pub use transcription_job::{TranscriptionJob, TranscriptionJobId};
pub use transcription_job_status::TranscriptionJobStatus;
