use std::time::Duration;

use config::{Config, ConfigError, File};
use serde::Deserialize;

use super::Environment;
use crate::application::services::PollPolicy;
use crate::domain::{LanguageCode, MediaFormat, PriceTable};
use crate::infrastructure::aws::DEFAULT_MODEL_ID;
use crate::infrastructure::observability::DEFAULT_LANGSMITH_ENDPOINT;
use crate::presentation::envelope::ErrorStatusPolicy;

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub server: ServerSettings,
    pub aws: AwsSettings,
    pub storage: StorageSettings,
    pub transcription: TranscriptionSettings,
    pub llm: LlmSettings,
    pub metrics: MetricsSettings,
    pub trace: TraceSettings,
    pub errors: ErrorSettings,
    pub cost: PriceTable,
}

impl Settings {
    /// Defaults, then `appsettings.<env>` if present, then `APP_*` variables
    /// (`APP_TRANSCRIPTION__LANGUAGE_CODE=en-GB`).
    pub fn load(environment: Environment) -> Result<Self, ConfigError> {
        let mut settings: Settings = Config::builder()
            .add_source(File::with_name(&environment.settings_file()).required(false))
            .add_source(
                config::Environment::with_prefix("APP")
                    .prefix_separator("_")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?
            .try_deserialize()?;

        if settings.trace.api_key.is_none() {
            settings.trace.api_key = std::env::var("LANGSMITH_API_KEY")
                .ok()
                .filter(|key| !key.trim().is_empty());
        }

        Ok(settings)
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ServerSettings {
    pub host: String,
    pub port: u16,
}

impl Default for ServerSettings {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 3000,
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct AwsSettings {
    pub region: Option<String>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StorageProviderSetting {
    #[default]
    S3,
    Local,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct StorageSettings {
    pub provider: StorageProviderSetting,
    pub local_path: String,
    /// Custom S3-compatible endpoint, e.g. a local MinIO.
    pub endpoint: Option<String>,
    pub catalog_bucket: Option<String>,
    pub audio_prefix: String,
}

impl Default for StorageSettings {
    fn default() -> Self {
        Self {
            provider: StorageProviderSetting::S3,
            local_path: "./data".to_string(),
            endpoint: None,
            catalog_bucket: None,
            audio_prefix: "audio/".to_string(),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct TranscriptionSettings {
    pub language_code: String,
    pub media_format: MediaFormat,
    pub poll_interval_secs: f64,
    pub backoff_multiplier: f64,
    pub max_poll_interval_secs: f64,
    pub max_wait_secs: f64,
}

impl Default for TranscriptionSettings {
    fn default() -> Self {
        Self {
            language_code: LanguageCode::default().to_string(),
            media_format: MediaFormat::Mp3,
            poll_interval_secs: 5.0,
            backoff_multiplier: 1.0,
            max_poll_interval_secs: 30.0,
            max_wait_secs: 900.0,
        }
    }
}

impl TranscriptionSettings {
    pub fn language_code(&self) -> Result<LanguageCode, String> {
        self.language_code.parse()
    }

    pub fn poll_policy(&self) -> PollPolicy {
        PollPolicy::exponential(
            secs(self.poll_interval_secs),
            self.backoff_multiplier,
            secs(self.max_poll_interval_secs),
            secs(self.max_wait_secs),
        )
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LlmSettings {
    pub model_id: String,
    pub temperature: f32,
    pub max_tokens: u32,
}

impl Default for LlmSettings {
    fn default() -> Self {
        Self {
            model_id: DEFAULT_MODEL_ID.to_string(),
            temperature: 0.1,
            max_tokens: 2048,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct MetricsSettings {
    pub enabled: bool,
    pub namespace: String,
}

impl Default for MetricsSettings {
    fn default() -> Self {
        Self {
            enabled: true,
            namespace: "MeetingSummarizer".to_string(),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct TraceSettings {
    pub api_key: Option<String>,
    pub endpoint: String,
    pub project: String,
    pub timeout_secs: f64,
}

impl Default for TraceSettings {
    fn default() -> Self {
        Self {
            api_key: None,
            endpoint: DEFAULT_LANGSMITH_ENDPOINT.to_string(),
            project: "AI-Meeting-Summarizer".to_string(),
            timeout_secs: 5.0,
        }
    }
}

impl TraceSettings {
    pub fn timeout(&self) -> Duration {
        secs(self.timeout_secs)
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct ErrorSettings {
    pub status_policy: ErrorStatusPolicy,
}

fn secs(value: f64) -> Duration {
    Duration::try_from_secs_f64(value.max(0.0)).unwrap_or(Duration::MAX)
}
