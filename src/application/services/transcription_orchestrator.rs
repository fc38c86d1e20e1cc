use std::sync::Arc;

use tokio::time::Instant;

use super::{PipelineError, PollPolicy};
use crate::application::ports::{
    JobStatusReport, TranscriptFetcher, TranscriptionError, TranscriptionService,
};
use crate::domain::{
    AudioObject, LanguageCode, MediaFormat, Transcript, TranscriptionJob, TranscriptionJobId,
    TranscriptionJobStatus,
};

pub struct TranscriptionOrchestrator {
    service: Arc<dyn TranscriptionService>,
    fetcher: Arc<dyn TranscriptFetcher>,
    language_code: LanguageCode,
    media_format: MediaFormat,
    poll_policy: PollPolicy,
}

impl TranscriptionOrchestrator {
    pub fn new(
        service: Arc<dyn TranscriptionService>,
        fetcher: Arc<dyn TranscriptFetcher>,
        language_code: LanguageCode,
        media_format: MediaFormat,
        poll_policy: PollPolicy,
    ) -> Self {
        Self {
            service,
            fetcher,
            language_code,
            media_format,
            poll_policy,
        }
    }

    /// Submits a job for `audio` and blocks until its transcript is available.
    pub async fn transcribe(&self, audio: &AudioObject) -> Result<Transcript, PipelineError> {
        let job = TranscriptionJob::new(audio, self.language_code.clone(), self.media_format);

        tracing::info!(
            job_id = %job.id,
            media_uri = %job.media_uri,
            language_code = %job.language_code,
            media_format = %job.media_format,
            "Starting transcription job"
        );
        self.service.start_job(&job).await?;

        let transcript_url = self.await_completion(&job.id).await?;

        tracing::debug!(job_id = %job.id, "Downloading transcript document");
        let transcript = self.fetcher.fetch(&transcript_url).await?;

        tracing::info!(
            job_id = %job.id,
            words = transcript.word_count(),
            "Transcription completed"
        );
        Ok(transcript)
    }

    async fn await_completion(&self, job_id: &TranscriptionJobId) -> Result<String, PipelineError> {
        let started = Instant::now();
        let mut interval = self.poll_policy.initial_interval;
        let mut polls: u32 = 0;

        loop {
            let report = self.service.job_status(job_id).await?;
            polls += 1;

            if report.status.is_terminal() {
                tracing::info!(job_id = %job_id, polls, status = %report.status, "Transcription job finished");
                return terminal_outcome(job_id, report);
            }

            let waited = started.elapsed();
            if waited >= self.poll_policy.max_wait {
                tracing::error!(
                    job_id = %job_id,
                    polls,
                    waited_secs = waited.as_secs_f64(),
                    "Transcription job exceeded its deadline"
                );
                return Err(PipelineError::Timeout {
                    job_id: job_id.clone(),
                    waited,
                });
            }

            let remaining = self.poll_policy.max_wait - waited;
            tracing::debug!(
                job_id = %job_id,
                status = %report.status,
                polls,
                next_poll_ms = interval.min(remaining).as_millis() as u64,
                "Transcription job still running"
            );
            tokio::time::sleep(interval.min(remaining)).await;
            interval = self.poll_policy.next_interval(interval);
        }
    }
}

fn terminal_outcome(
    job_id: &TranscriptionJobId,
    report: JobStatusReport,
) -> Result<String, PipelineError> {
    if report.status == TranscriptionJobStatus::Failed {
        let reason = report
            .failure_reason
            .unwrap_or_else(|| "unknown".to_string());
        tracing::warn!(job_id = %job_id, reason = %reason, "Transcription job failed");
        return Err(PipelineError::TranscriptionFailed(reason));
    }

    report.transcript_url.ok_or_else(|| {
        PipelineError::Transcription(TranscriptionError::InvalidResponse(format!(
            "job {} completed without a transcript URL",
            job_id
        )))
    })
}
