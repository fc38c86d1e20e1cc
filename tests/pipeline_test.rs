mod helpers;

use std::sync::Arc;
use std::time::Duration;

use recap::application::ports::{JobStatusReport, MetricUnit, TraceCollector};
use recap::application::services::{
    CostReporter, ErrorKind, PipelineError, PollPolicy, Summarizer, TranscriptionOrchestrator,
    USE_CASE_TAG,
};
use recap::domain::{
    AudioObject, CostInputs, LanguageCode, MediaFormat, PriceTable, TokenUsage, Transcript,
};

use helpers::{
    MockLlmClient, PipelineParts, RecordingMetricsSink, RecordingTraceCollector,
    ScriptedTranscriptionService, SlowTraceCollector, StaticTranscriptFetcher, TEST_BUCKET, TEST_KEY,
    fast_poll_policy, request_body,
};

fn five_hundred_words() -> String {
    vec!["word"; 500].join(" ")
}

fn orchestrator(
    service: Arc<ScriptedTranscriptionService>,
    poll_policy: PollPolicy,
) -> TranscriptionOrchestrator {
    TranscriptionOrchestrator::new(
        service,
        Arc::new(StaticTranscriptFetcher("hello team".to_string())),
        "en-GB".parse::<LanguageCode>().unwrap(),
        MediaFormat::Wav,
        poll_policy,
    )
}

#[tokio::test]
async fn given_job_that_completes_later_when_transcribing_then_polls_until_done() {
    let service = Arc::new(ScriptedTranscriptionService::new(vec![
        JobStatusReport::in_progress(),
        JobStatusReport::in_progress(),
        JobStatusReport::completed(helpers::TEST_TRANSCRIPT_URL),
    ]));
    let orchestrator = orchestrator(service.clone(), fast_poll_policy());

    let transcript = orchestrator
        .transcribe(&AudioObject::new(TEST_BUCKET, TEST_KEY))
        .await
        .unwrap();

    assert_eq!(transcript.as_str(), "hello team");
    assert_eq!(service.poll_count(), 3);

    let started = service.started.lock().unwrap();
    assert_eq!(started[0].language_code.as_str(), "en-GB");
    assert_eq!(started[0].media_format, MediaFormat::Wav);
    assert!(started[0].id.as_str().starts_with("transcription-job-"));
}

#[tokio::test]
async fn given_job_that_never_finishes_when_transcribing_then_times_out() {
    let service = Arc::new(ScriptedTranscriptionService::new(vec![
        JobStatusReport::in_progress(),
    ]));
    let policy = PollPolicy::fixed(Duration::from_millis(10), Duration::from_millis(50));
    let orchestrator = orchestrator(service.clone(), policy);

    let err = orchestrator
        .transcribe(&AudioObject::new(TEST_BUCKET, TEST_KEY))
        .await
        .unwrap_err();

    assert_eq!(err.kind(), ErrorKind::Timeout);
    match err {
        PipelineError::Timeout { waited, .. } => assert!(waited >= Duration::from_millis(50)),
        other => panic!("expected timeout, got {other:?}"),
    }
    assert!(service.poll_count() >= 2);
}

#[tokio::test]
async fn given_completed_job_without_url_when_transcribing_then_returns_internal_error() {
    let mut report = JobStatusReport::completed("unused");
    report.transcript_url = None;
    let service = Arc::new(ScriptedTranscriptionService::new(vec![report]));
    let orchestrator = orchestrator(service, fast_poll_policy());

    let err = orchestrator
        .transcribe(&AudioObject::new(TEST_BUCKET, TEST_KEY))
        .await
        .unwrap_err();

    assert_eq!(err.kind(), ErrorKind::Internal);
}

#[tokio::test]
async fn given_failed_job_when_transcribing_then_stops_polling_with_reason() {
    let service = Arc::new(ScriptedTranscriptionService::new(vec![
        JobStatusReport::in_progress(),
        JobStatusReport::failed(Some("unsupported media".to_string())),
    ]));
    let orchestrator = orchestrator(service.clone(), fast_poll_policy());

    let err = orchestrator
        .transcribe(&AudioObject::new(TEST_BUCKET, TEST_KEY))
        .await
        .unwrap_err();

    assert_eq!(err.kind(), ErrorKind::TranscriptionFailed);
    assert!(err.to_string().contains("unsupported media"));
    assert_eq!(service.poll_count(), 2);
}

#[tokio::test]
async fn given_provider_without_usage_when_summarizing_then_tokens_are_estimated() {
    let llm = Arc::new(MockLlmClient::new("one two three four five six seven eight nine ten", None));
    let summarizer = Summarizer::new(llm.clone(), Arc::new(RecordingTraceCollector::default()), 0.1, 2048);

    let result = summarizer
        .summarize(&Transcript::new(five_hundred_words()), "corr-1")
        .await
        .unwrap();

    assert_eq!(result.input_tokens(), 850);
    assert_eq!(result.output_tokens(), 13);

    let requests = llm.requests.lock().unwrap();
    assert!(requests[0].prompt.contains("<transcript>"));
    assert_eq!(requests[0].max_tokens, 2048);
}

#[tokio::test]
async fn given_enabled_collector_when_summarizing_then_run_is_recorded() {
    let collector = Arc::new(RecordingTraceCollector::default());
    let llm = Arc::new(MockLlmClient::new(
        "summary",
        Some(TokenUsage {
            input_tokens: 850,
            output_tokens: 300,
        }),
    ));
    let summarizer = Summarizer::new(llm, collector.clone(), 0.1, 2048);

    summarizer
        .summarize(&Transcript::new("short meeting"), "corr-7")
        .await
        .unwrap();

    let runs = collector.runs.lock().unwrap();
    assert_eq!(runs.len(), 1);
    assert_eq!(runs[0].correlation_id, "corr-7");
    assert_eq!(runs[0].use_case, USE_CASE_TAG);
    assert_eq!(runs[0].model_id, "mock-model");
    assert_eq!(runs[0].transcript_length, 13);
    assert_eq!(runs[0].usage.output_tokens, 300);
}

#[tokio::test]
async fn given_failing_collector_when_summarizing_then_summary_still_returned() {
    let collector: Arc<dyn TraceCollector> = Arc::new(RecordingTraceCollector {
        fail: true,
        ..RecordingTraceCollector::default()
    });
    let summarizer = Summarizer::new(
        Arc::new(MockLlmClient::new("still fine", None)),
        collector,
        0.1,
        2048,
    );

    let result = summarizer
        .summarize(&Transcript::new("meeting"), "corr-9")
        .await
        .unwrap();

    assert_eq!(result.text, "still fine");
}

#[tokio::test]
async fn given_unresponsive_collector_when_summarizing_then_gives_up_after_trace_timeout() {
    let collector = Arc::new(SlowTraceCollector {
        delay: Duration::from_secs(3600),
    });
    let summarizer = Summarizer::new(
        Arc::new(MockLlmClient::new("done anyway", None)),
        collector,
        0.1,
        2048,
    )
    .with_trace_timeout(Duration::from_millis(50));

    let result = tokio::time::timeout(
        Duration::from_secs(5),
        summarizer.summarize(&Transcript::new("meeting"), "corr-10"),
    )
    .await
    .expect("summary must not wait on the collector")
    .unwrap();

    assert_eq!(result.text, "done anyway");
}

#[tokio::test]
async fn given_slow_collector_when_pipeline_runs_then_bedrock_time_excludes_trace_latency() {
    let parts = PipelineParts {
        trace: Arc::new(SlowTraceCollector {
            delay: Duration::from_millis(300),
        }),
        ..PipelineParts::default()
    };

    let outcome = parts
        .build()
        .run(request_body(TEST_BUCKET, TEST_KEY).as_bytes(), "corr-11")
        .await
        .unwrap();

    assert!(outcome.metrics.bedrock_time < 0.2);
    assert!(outcome.metrics.processing_time >= 0.3);
}

#[tokio::test]
async fn given_cost_report_when_published_then_five_metrics_carry_use_case_dimension() {
    let sink = Arc::new(RecordingMetricsSink::default());
    let reporter = CostReporter::new(sink.clone(), PriceTable::default(), "MeetingSummarizer");
    let inputs = CostInputs {
        file_size_bytes: 2 * 1024 * 1024,
        word_count: 500,
        elapsed: Duration::from_secs(42),
    };

    let breakdown = reporter
        .report(
            &inputs,
            TokenUsage {
                input_tokens: 850,
                output_tokens: 300,
            },
        )
        .await;

    let published = sink.published.lock().unwrap();
    assert_eq!(published.len(), 1);
    let (namespace, data) = &published[0];
    assert_eq!(namespace, "MeetingSummarizer");

    let names: Vec<&str> = data.iter().map(|d| d.name.as_str()).collect();
    assert_eq!(
        names,
        ["TotalCost", "ProcessingTime", "WordCount", "InputTokens", "OutputTokens"]
    );
    assert!(data.iter().all(|d| d.dimensions
        == vec![("UseCase".to_string(), "meeting_summarization".to_string())]));
    assert_eq!(data[0].value, breakdown.total);
    assert_eq!(data[1].unit, MetricUnit::Seconds);
    assert_eq!(data[1].value, 42.0);
    assert_eq!(data[2].value, 500.0);
    assert_eq!(data[3].value, 850.0);
    assert_eq!(data[4].value, 300.0);
}

#[tokio::test]
async fn given_two_mib_recording_when_pipeline_runs_then_costs_follow_actual_usage() {
    let parts = PipelineParts {
        transcript: five_hundred_words(),
        ..PipelineParts::default()
    };
    let pipeline = parts.build();

    let outcome = pipeline
        .run(request_body(TEST_BUCKET, TEST_KEY).as_bytes(), "corr-1")
        .await
        .unwrap();

    let metrics = &outcome.metrics;
    let costs = &metrics.cost_breakdown;
    assert_eq!(metrics.word_count, 500);
    assert_eq!(metrics.file_size_mb, 2.0);
    assert_eq!(metrics.token_usage.input_tokens, 850);
    assert_eq!(metrics.token_usage.output_tokens, 300);
    assert!((costs.bedrock - 0.00705).abs() < 1e-9);
    assert!((costs.transcribe - 2_097_152.0 / 960_000.0 * 0.024).abs() < 1e-9);
    let sum = costs.lambda + costs.transcribe + costs.bedrock + costs.storage + costs.gateway;
    assert!((costs.total - sum).abs() < 1e-12);
    assert_eq!(metrics.estimated_cost, costs.total);
    assert!(metrics.bedrock_time <= metrics.processing_time);
}

#[tokio::test]
async fn given_invalid_request_when_pipeline_runs_then_no_metrics_are_published() {
    let parts = PipelineParts::default();
    let pipeline = parts.build();

    let err = pipeline.run(br#"{"bucket_name": ""}"#, "corr-1").await.unwrap_err();

    assert_eq!(err.kind(), ErrorKind::MissingParameter);
    assert!(parts.metrics.published.lock().unwrap().is_empty());
}
