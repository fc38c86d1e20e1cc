use std::time::Duration;

use serde::Serialize;

use super::{PriceTable, TokenUsage, prompt_tokens_for_words};

/// Output length assumed before the model has answered.
const SPECULATIVE_OUTPUT_TOKENS: u64 = 500;

/// Observed quantities for one pipeline run.
#[derive(Debug, Clone, Copy)]
pub struct CostInputs {
    pub file_size_bytes: u64,
    pub word_count: usize,
    pub elapsed: Duration,
}

/// Estimated spend per consumed service. `total` is always the sum of the parts.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct CostBreakdown {
    pub lambda: f64,
    pub transcribe: f64,
    pub bedrock: f64,
    pub storage: f64,
    pub gateway: f64,
    pub total: f64,
}

impl CostBreakdown {
    /// Speculative estimate: the model cost is derived from the word count.
    pub fn estimate(prices: &PriceTable, inputs: &CostInputs) -> Self {
        let lambda = prices.compute_memory_gb.max(0.0)
            * inputs.elapsed.as_secs_f64()
            * prices.compute_per_gb_second;
        let transcribe = prices.audio_minutes(inputs.file_size_bytes) * prices.transcribe_per_minute;
        let estimated_input = prompt_tokens_for_words(inputs.word_count);
        let bedrock = prices.llm_cost(estimated_input, SPECULATIVE_OUTPUT_TOKENS);
        let storage = prices.storage_per_request * f64::from(prices.storage_requests);
        let gateway = prices.gateway_per_request;

        Self::from_parts(lambda, transcribe, bedrock, storage, gateway)
    }

    /// Replaces the speculative model cost with one computed from real token counts.
    pub fn with_token_usage(self, prices: &PriceTable, usage: TokenUsage) -> Self {
        let bedrock = prices.llm_cost(usage.input_tokens, usage.output_tokens);
        Self::from_parts(self.lambda, self.transcribe, bedrock, self.storage, self.gateway)
    }

    pub fn entries(&self) -> [(&'static str, f64); 5] {
        [
            ("lambda", self.lambda),
            ("transcribe", self.transcribe),
            ("bedrock", self.bedrock),
            ("storage", self.storage),
            ("gateway", self.gateway),
        ]
    }

    fn from_parts(lambda: f64, transcribe: f64, bedrock: f64, storage: f64, gateway: f64) -> Self {
        let lambda = lambda.max(0.0);
        let transcribe = transcribe.max(0.0);
        let bedrock = bedrock.max(0.0);
        let storage = storage.max(0.0);
        let gateway = gateway.max(0.0);
        Self {
            lambda,
            transcribe,
            bedrock,
            storage,
            gateway,
            total: lambda + transcribe + bedrock + storage + gateway,
        }
    }
}
