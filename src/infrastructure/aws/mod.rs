mod aws_clients;
mod bedrock_client;
mod cloudwatch_sink;
mod transcribe_service;

pub use aws_clients::AwsClients;
pub use bedrock_client::{BedrockLlmClient, DEFAULT_MODEL_ID};
pub use cloudwatch_sink::CloudWatchMetricsSink;
pub use transcribe_service::AwsTranscribeService;
