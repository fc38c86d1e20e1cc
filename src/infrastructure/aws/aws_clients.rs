use aws_config::meta::region::RegionProviderChain;
use aws_config::{BehaviorVersion, Region, SdkConfig};
use tokio::sync::OnceCell;

const FALLBACK_REGION: &str = "us-east-1";

static SHARED: OnceCell<AwsClients> = OnceCell::const_new();

/// Service clients shared read-only by every request handler.
#[derive(Debug, Clone)]
pub struct AwsClients {
    pub transcribe: aws_sdk_transcribe::Client,
    pub bedrock: aws_sdk_bedrockruntime::Client,
    pub cloudwatch: aws_sdk_cloudwatch::Client,
}

impl AwsClients {
    /// Process-wide clients, built on first call. Later calls ignore `region`.
    pub async fn shared(region: Option<&str>) -> &'static AwsClients {
        let region = region.map(str::to_string);
        SHARED
            .get_or_init(|| async move {
                let config = load_sdk_config(region).await;
                let region = config
                    .region()
                    .map(|r| r.to_string())
                    .unwrap_or_else(|| "unset".to_string());
                tracing::info!(region = %region, "AWS clients initialized");
                Self::from_config(&config)
            })
            .await
    }

    pub fn from_config(config: &SdkConfig) -> Self {
        Self {
            transcribe: aws_sdk_transcribe::Client::new(config),
            bedrock: aws_sdk_bedrockruntime::Client::new(config),
            cloudwatch: aws_sdk_cloudwatch::Client::new(config),
        }
    }
}

async fn load_sdk_config(region: Option<String>) -> SdkConfig {
    let region_provider = RegionProviderChain::first_try(region.map(Region::new))
        .or_default_provider()
        .or_else(Region::new(FALLBACK_REGION));

    aws_config::defaults(BehaviorVersion::latest())
        .region(region_provider)
        .load()
        .await
}
