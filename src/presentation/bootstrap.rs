use std::sync::Arc;

use crate::application::ports::{
    AudioStore, AudioStoreError, MetricsSink, TraceCollector, TraceError,
};
use crate::application::services::{
    AudioCatalog, CostReporter, ExistenceChecker, SummarizationPipeline, Summarizer,
    TranscriptionOrchestrator,
};
use crate::infrastructure::aws::{
    AwsClients, AwsTranscribeService, BedrockLlmClient, CloudWatchMetricsSink,
};
use crate::infrastructure::http::HttpTranscriptFetcher;
use crate::infrastructure::metrics::NoopMetricsSink;
use crate::infrastructure::observability::{LangSmithTraceCollector, NoopTraceCollector};
use crate::infrastructure::storage::AudioStoreFactory;
use crate::presentation::config::Settings;

/// Everything a binary needs, wired once per process.
pub struct Services {
    pub pipeline: Arc<SummarizationPipeline>,
    pub catalog: Arc<AudioCatalog>,
    pub store: Arc<dyn AudioStore>,
}

#[derive(Debug, thiserror::Error)]
pub enum BootstrapError {
    #[error("storage: {0}")]
    Storage(#[from] AudioStoreError),
    #[error("trace collector: {0}")]
    Trace(#[from] TraceError),
    #[error("invalid setting: {0}")]
    InvalidSetting(String),
}

pub async fn build_services(settings: &Settings) -> Result<Services, BootstrapError> {
    let language_code = settings
        .transcription
        .language_code()
        .map_err(BootstrapError::InvalidSetting)?;
    let region = settings.aws.region.as_deref();

    let clients = AwsClients::shared(region).await;
    let store = AudioStoreFactory::create(&settings.storage, region)?;

    let metrics_sink: Arc<dyn MetricsSink> = if settings.metrics.enabled {
        Arc::new(CloudWatchMetricsSink::new(clients.cloudwatch.clone()))
    } else {
        tracing::info!("Metric publishing disabled");
        Arc::new(NoopMetricsSink)
    };

    let trace_collector: Arc<dyn TraceCollector> = match &settings.trace.api_key {
        Some(api_key) => {
            tracing::info!(project = %settings.trace.project, "LangSmith tracing enabled");
            Arc::new(LangSmithTraceCollector::new(
                api_key.clone(),
                Some(settings.trace.endpoint.clone()),
                settings.trace.project.clone(),
                settings.trace.timeout(),
            )?)
        }
        None => Arc::new(NoopTraceCollector),
    };

    let orchestrator = TranscriptionOrchestrator::new(
        Arc::new(AwsTranscribeService::new(clients.transcribe.clone())),
        Arc::new(HttpTranscriptFetcher::default()),
        language_code,
        settings.transcription.media_format,
        settings.transcription.poll_policy(),
    );

    let summarizer = Summarizer::new(
        Arc::new(BedrockLlmClient::new(
            clients.bedrock.clone(),
            &settings.llm.model_id,
        )),
        trace_collector,
        settings.llm.temperature,
        settings.llm.max_tokens,
    )
    .with_trace_timeout(settings.trace.timeout());

    let pipeline = SummarizationPipeline::new(
        ExistenceChecker::new(Arc::clone(&store)),
        orchestrator,
        summarizer,
        CostReporter::new(metrics_sink, settings.cost.clone(), &settings.metrics.namespace),
    );

    let catalog = AudioCatalog::new(
        Arc::clone(&store),
        settings.storage.catalog_bucket.clone(),
        &settings.storage.audio_prefix,
    );

    Ok(Services {
        pipeline: Arc::new(pipeline),
        catalog: Arc::new(catalog),
        store,
    })
}
