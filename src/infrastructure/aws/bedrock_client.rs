use async_trait::async_trait;
use aws_sdk_bedrockruntime::error::{DisplayErrorContext, SdkError};
use aws_sdk_bedrockruntime::operation::converse::ConverseError;
use aws_sdk_bedrockruntime::types::{
    ContentBlock, ConversationRole, InferenceConfiguration, Message,
};

use crate::application::ports::{Completion, CompletionRequest, LlmClient, LlmClientError};
use crate::domain::TokenUsage;

pub const DEFAULT_MODEL_ID: &str = "anthropic.claude-3-sonnet-20240229-v1:0";

/// Text generation through the Bedrock Converse API.
pub struct BedrockLlmClient {
    client: aws_sdk_bedrockruntime::Client,
    model_id: String,
}

impl BedrockLlmClient {
    pub fn new(client: aws_sdk_bedrockruntime::Client, model_id: impl Into<String>) -> Self {
        Self {
            client,
            model_id: model_id.into(),
        }
    }
}

#[async_trait]
impl LlmClient for BedrockLlmClient {
    async fn complete(&self, request: &CompletionRequest) -> Result<Completion, LlmClientError> {
        let message = Message::builder()
            .role(ConversationRole::User)
            .content(ContentBlock::Text(request.prompt.clone()))
            .build()
            .map_err(|e| LlmClientError::ApiRequestFailed(format!("build message: {}", e)))?;

        let inference = InferenceConfiguration::builder()
            .temperature(request.temperature)
            .max_tokens(i32::try_from(request.max_tokens).unwrap_or(i32::MAX))
            .build();

        tracing::debug!(model = %self.model_id, "Invoking Bedrock model");

        let response = self
            .client
            .converse()
            .model_id(&self.model_id)
            .messages(message)
            .inference_config(inference)
            .send()
            .await
            .map_err(map_converse_error)?;

        let text = response
            .output()
            .and_then(|output| output.as_message().ok())
            .map(|message| {
                message
                    .content()
                    .iter()
                    .filter_map(|block| block.as_text().ok())
                    .map(String::as_str)
                    .collect::<Vec<_>>()
                    .join("")
            })
            .ok_or_else(|| {
                LlmClientError::InvalidResponse("converse output carried no message".into())
            })?;

        let usage = response.usage().map(|u| TokenUsage {
            input_tokens: u64::try_from(u.input_tokens()).unwrap_or(0),
            output_tokens: u64::try_from(u.output_tokens()).unwrap_or(0),
        });

        Ok(Completion { text, usage })
    }

    fn model_id(&self) -> &str {
        &self.model_id
    }
}

fn map_converse_error(error: SdkError<ConverseError>) -> LlmClientError {
    match error.as_service_error() {
        Some(ConverseError::ThrottlingException(_)) => LlmClientError::RateLimited,
        _ => LlmClientError::ApiRequestFailed(DisplayErrorContext(&error).to_string()),
    }
}
