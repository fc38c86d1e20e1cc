use serde::Deserialize;

/// Published on-demand unit prices (USD) used for per-request cost estimates.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct PriceTable {
    pub compute_per_gb_second: f64,
    pub compute_memory_gb: f64,
    pub transcribe_per_minute: f64,
    pub transcribe_minimum_minutes: f64,
    /// Bitrate assumed when converting object size into audio duration.
    pub audio_bytes_per_minute: f64,
    pub llm_input_per_1k_tokens: f64,
    pub llm_output_per_1k_tokens: f64,
    pub storage_per_request: f64,
    pub storage_requests: u32,
    pub gateway_per_request: f64,
}

impl Default for PriceTable {
    fn default() -> Self {
        Self {
            compute_per_gb_second: 0.000_016_666_7,
            compute_memory_gb: 1.0,
            transcribe_per_minute: 0.024,
            transcribe_minimum_minutes: 0.25,
            audio_bytes_per_minute: 960_000.0,
            llm_input_per_1k_tokens: 0.003,
            llm_output_per_1k_tokens: 0.015,
            storage_per_request: 0.000_000_4,
            storage_requests: 2,
            gateway_per_request: 0.000_003_5,
        }
    }
}

impl PriceTable {
    pub fn audio_minutes(&self, file_size_bytes: u64) -> f64 {
        if self.audio_bytes_per_minute <= 0.0 {
            return self.transcribe_minimum_minutes;
        }
        (file_size_bytes as f64 / self.audio_bytes_per_minute).max(self.transcribe_minimum_minutes)
    }

    pub fn llm_cost(&self, input_tokens: u64, output_tokens: u64) -> f64 {
        (input_tokens as f64 / 1000.0) * self.llm_input_per_1k_tokens
            + (output_tokens as f64 / 1000.0) * self.llm_output_per_1k_tokens
    }
}
