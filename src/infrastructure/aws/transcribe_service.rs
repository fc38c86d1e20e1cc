use async_trait::async_trait;
use aws_sdk_transcribe::error::DisplayErrorContext;
use aws_sdk_transcribe::types::{
    LanguageCode as AwsLanguageCode, Media, MediaFormat as AwsMediaFormat,
};

use crate::application::ports::{JobStatusReport, TranscriptionError, TranscriptionService};
use crate::domain::{TranscriptionJob, TranscriptionJobId, TranscriptionJobStatus};

/// Amazon Transcribe batch jobs.
pub struct AwsTranscribeService {
    client: aws_sdk_transcribe::Client,
}

impl AwsTranscribeService {
    pub fn new(client: aws_sdk_transcribe::Client) -> Self {
        Self { client }
    }
}

#[async_trait]
impl TranscriptionService for AwsTranscribeService {
    async fn start_job(&self, job: &TranscriptionJob) -> Result<(), TranscriptionError> {
        self.client
            .start_transcription_job()
            .transcription_job_name(job.id.as_str())
            .media(Media::builder().media_file_uri(&job.media_uri).build())
            .media_format(AwsMediaFormat::from(job.media_format.as_str()))
            .language_code(AwsLanguageCode::from(job.language_code.as_str()))
            .send()
            .await
            .map_err(|e| TranscriptionError::ApiRequestFailed(DisplayErrorContext(&e).to_string()))?;

        Ok(())
    }

    async fn job_status(
        &self,
        id: &TranscriptionJobId,
    ) -> Result<JobStatusReport, TranscriptionError> {
        let response = self
            .client
            .get_transcription_job()
            .transcription_job_name(id.as_str())
            .send()
            .await
            .map_err(|e| TranscriptionError::ApiRequestFailed(DisplayErrorContext(&e).to_string()))?;

        let job = response
            .transcription_job()
            .ok_or_else(|| TranscriptionError::InvalidResponse("no job in response".into()))?;

        let status = job
            .transcription_job_status()
            .ok_or_else(|| TranscriptionError::InvalidResponse("job has no status".into()))?
            .as_str()
            .parse::<TranscriptionJobStatus>()
            .map_err(TranscriptionError::InvalidResponse)?;

        Ok(JobStatusReport {
            status,
            transcript_url: job
                .transcript()
                .and_then(|t| t.transcript_file_uri())
                .map(str::to_string),
            failure_reason: job.failure_reason().map(str::to_string),
        })
    }
}
