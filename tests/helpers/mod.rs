#![allow(dead_code)]

use std::collections::VecDeque;
use std::io;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use bytes::Bytes;
use chrono::{TimeZone, Utc};
use futures::StreamExt;
use futures::stream::BoxStream;

use recap::application::ports::{
    AudioStore, AudioStoreError, Completion, CompletionRequest, JobStatusReport, LlmClient,
    LlmClientError, MetricDatum, MetricsError, MetricsSink, RunMetadata, StoredObject,
    TraceCollector, TraceError, TranscriptFetchError, TranscriptFetcher, TranscriptionError,
    TranscriptionService,
};
use recap::application::services::{
    AudioCatalog, CostReporter, ExistenceChecker, PollPolicy, SummarizationPipeline, Summarizer,
    TranscriptionOrchestrator,
};
use recap::domain::{
    AudioObject, LanguageCode, MediaFormat, PriceTable, TokenUsage, Transcript, TranscriptionJob,
    TranscriptionJobId,
};
use recap::infrastructure::observability::NoopTraceCollector;
use recap::presentation::{AppState, ErrorStatusPolicy};

pub const TEST_BUCKET: &str = "meetings";
pub const TEST_KEY: &str = "audio/standup.mp3";
pub const TEST_TRANSCRIPT_URL: &str = "https://transcripts.test/job.json";

pub enum HeadBehavior {
    Size(u64),
    NotFound,
    AccessDenied,
}

pub struct MockAudioStore {
    pub head: HeadBehavior,
    pub objects: Vec<StoredObject>,
}

impl MockAudioStore {
    pub fn with_size(size: u64) -> Self {
        Self {
            head: HeadBehavior::Size(size),
            objects: Vec::new(),
        }
    }

    pub fn missing() -> Self {
        Self {
            head: HeadBehavior::NotFound,
            objects: Vec::new(),
        }
    }

    pub fn denied() -> Self {
        Self {
            head: HeadBehavior::AccessDenied,
            objects: Vec::new(),
        }
    }

    pub fn with_objects(keys: &[(&str, u64)]) -> Self {
        let last_modified = Utc.with_ymd_and_hms(2024, 3, 1, 9, 30, 0).unwrap();
        Self {
            head: HeadBehavior::Size(0),
            objects: keys
                .iter()
                .map(|(key, size)| StoredObject {
                    key: key.to_string(),
                    size: *size,
                    last_modified,
                })
                .collect(),
        }
    }
}

#[async_trait::async_trait]
impl AudioStore for MockAudioStore {
    async fn head(&self, object: &AudioObject) -> Result<u64, AudioStoreError> {
        match self.head {
            HeadBehavior::Size(size) => Ok(size),
            HeadBehavior::NotFound => Err(AudioStoreError::NotFound(object.to_string())),
            HeadBehavior::AccessDenied => Err(AudioStoreError::AccessDenied(object.to_string())),
        }
    }

    async fn list(&self, _bucket: &str, prefix: &str) -> Result<Vec<StoredObject>, AudioStoreError> {
        Ok(self
            .objects
            .iter()
            .filter(|o| o.key.starts_with(prefix))
            .cloned()
            .collect())
    }

    async fn upload(
        &self,
        _object: &AudioObject,
        mut stream: BoxStream<'_, Result<Bytes, io::Error>>,
    ) -> Result<u64, AudioStoreError> {
        let mut total = 0u64;
        while let Some(chunk) = stream.next().await {
            total += chunk?.len() as u64;
        }
        Ok(total)
    }
}

/// Replays status reports in order and repeats the last one forever.
pub struct ScriptedTranscriptionService {
    reports: Mutex<VecDeque<JobStatusReport>>,
    last: Mutex<Option<JobStatusReport>>,
    pub started: Mutex<Vec<TranscriptionJob>>,
    pub polls: Mutex<u32>,
}

impl ScriptedTranscriptionService {
    pub fn new(reports: Vec<JobStatusReport>) -> Self {
        Self {
            reports: Mutex::new(reports.into()),
            last: Mutex::new(None),
            started: Mutex::new(Vec::new()),
            polls: Mutex::new(0),
        }
    }

    pub fn completing() -> Self {
        Self::new(vec![
            JobStatusReport::in_progress(),
            JobStatusReport::completed(TEST_TRANSCRIPT_URL),
        ])
    }

    pub fn poll_count(&self) -> u32 {
        *self.polls.lock().unwrap()
    }
}

#[async_trait::async_trait]
impl TranscriptionService for ScriptedTranscriptionService {
    async fn start_job(&self, job: &TranscriptionJob) -> Result<(), TranscriptionError> {
        self.started.lock().unwrap().push(job.clone());
        Ok(())
    }

    async fn job_status(
        &self,
        _id: &TranscriptionJobId,
    ) -> Result<JobStatusReport, TranscriptionError> {
        *self.polls.lock().unwrap() += 1;
        let next = self.reports.lock().unwrap().pop_front();
        let mut last = self.last.lock().unwrap();
        match next {
            Some(report) => {
                *last = Some(report.clone());
                Ok(report)
            }
            None => last
                .clone()
                .ok_or_else(|| TranscriptionError::InvalidResponse("no scripted status".into())),
        }
    }
}

pub struct StaticTranscriptFetcher(pub String);

#[async_trait::async_trait]
impl TranscriptFetcher for StaticTranscriptFetcher {
    async fn fetch(&self, url: &str) -> Result<Transcript, TranscriptFetchError> {
        if url != TEST_TRANSCRIPT_URL {
            return Err(TranscriptFetchError::DownloadFailed(format!(
                "unexpected url {}",
                url
            )));
        }
        Ok(Transcript::new(self.0.clone()))
    }
}

pub struct MockLlmClient {
    pub text: String,
    pub usage: Option<TokenUsage>,
    pub requests: Mutex<Vec<CompletionRequest>>,
}

impl MockLlmClient {
    pub fn new(text: &str, usage: Option<TokenUsage>) -> Self {
        Self {
            text: text.to_string(),
            usage,
            requests: Mutex::new(Vec::new()),
        }
    }
}

#[async_trait::async_trait]
impl LlmClient for MockLlmClient {
    async fn complete(&self, request: &CompletionRequest) -> Result<Completion, LlmClientError> {
        self.requests.lock().unwrap().push(request.clone());
        Ok(Completion {
            text: self.text.clone(),
            usage: self.usage,
        })
    }

    fn model_id(&self) -> &str {
        "mock-model"
    }
}

#[derive(Default)]
pub struct RecordingMetricsSink {
    pub fail: bool,
    pub published: Mutex<Vec<(String, Vec<MetricDatum>)>>,
}

impl RecordingMetricsSink {
    pub fn failing() -> Self {
        Self {
            fail: true,
            published: Mutex::new(Vec::new()),
        }
    }
}

#[async_trait::async_trait]
impl MetricsSink for RecordingMetricsSink {
    async fn publish(&self, namespace: &str, data: &[MetricDatum]) -> Result<(), MetricsError> {
        if self.fail {
            return Err(MetricsError::PublishFailed("cloudwatch unavailable".into()));
        }
        self.published
            .lock()
            .unwrap()
            .push((namespace.to_string(), data.to_vec()));
        Ok(())
    }
}

#[derive(Default)]
pub struct RecordingTraceCollector {
    pub fail: bool,
    pub runs: Mutex<Vec<RunMetadata>>,
}

#[async_trait::async_trait]
impl TraceCollector for RecordingTraceCollector {
    async fn record_run(&self, run: &RunMetadata) -> Result<(), TraceError> {
        self.runs.lock().unwrap().push(run.clone());
        if self.fail {
            return Err(TraceError::SubmissionFailed("collector offline".into()));
        }
        Ok(())
    }
}

/// Answers only after `delay`.
pub struct SlowTraceCollector {
    pub delay: Duration,
}

#[async_trait::async_trait]
impl TraceCollector for SlowTraceCollector {
    async fn record_run(&self, _run: &RunMetadata) -> Result<(), TraceError> {
        tokio::time::sleep(self.delay).await;
        Ok(())
    }
}

pub fn fast_poll_policy() -> PollPolicy {
    PollPolicy::fixed(Duration::from_millis(5), Duration::from_secs(5))
}

pub struct PipelineParts {
    pub store: Arc<dyn AudioStore>,
    pub transcription: Arc<ScriptedTranscriptionService>,
    pub transcript: String,
    pub llm: Arc<MockLlmClient>,
    pub metrics: Arc<RecordingMetricsSink>,
    pub trace: Arc<dyn TraceCollector>,
    pub poll_policy: PollPolicy,
}

impl Default for PipelineParts {
    fn default() -> Self {
        Self {
            store: Arc::new(MockAudioStore::with_size(2 * 1024 * 1024)),
            transcription: Arc::new(ScriptedTranscriptionService::completing()),
            transcript: "Alice agreed to ship the release on Friday".to_string(),
            llm: Arc::new(MockLlmClient::new(
                "Executive Summary: release on Friday",
                Some(TokenUsage {
                    input_tokens: 850,
                    output_tokens: 300,
                }),
            )),
            metrics: Arc::new(RecordingMetricsSink::default()),
            trace: Arc::new(NoopTraceCollector),
            poll_policy: fast_poll_policy(),
        }
    }
}

impl PipelineParts {
    pub fn build(&self) -> SummarizationPipeline {
        let orchestrator = TranscriptionOrchestrator::new(
            self.transcription.clone(),
            Arc::new(StaticTranscriptFetcher(self.transcript.clone())),
            LanguageCode::default(),
            MediaFormat::Mp3,
            self.poll_policy,
        );
        let summarizer = Summarizer::new(self.llm.clone(), self.trace.clone(), 0.1, 2048);
        let reporter = CostReporter::new(
            self.metrics.clone(),
            PriceTable::default(),
            "MeetingSummarizer",
        );
        SummarizationPipeline::new(
            ExistenceChecker::new(self.store.clone()),
            orchestrator,
            summarizer,
            reporter,
        )
    }

    pub fn app_state(&self, policy: ErrorStatusPolicy) -> AppState {
        AppState {
            pipeline: Arc::new(self.build()),
            catalog: Arc::new(AudioCatalog::new(
                self.store.clone(),
                Some(TEST_BUCKET.to_string()),
                "audio/",
            )),
            error_policy: policy,
        }
    }
}

pub fn request_body(bucket: &str, key: &str) -> String {
    serde_json::json!({ "bucket_name": bucket, "object_name": key }).to_string()
}
