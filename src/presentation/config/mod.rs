mod environment;
mod settings;

pub use environment::Environment;
pub use settings::{
    AwsSettings, ErrorSettings, LlmSettings, MetricsSettings, ServerSettings, Settings,
    StorageProviderSetting, StorageSettings, TraceSettings, TranscriptionSettings,
};
