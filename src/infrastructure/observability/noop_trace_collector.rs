use async_trait::async_trait;

use crate::application::ports::{RunMetadata, TraceCollector, TraceError};

/// Stand-in when no trace backend is configured.
pub struct NoopTraceCollector;

#[async_trait]
impl TraceCollector for NoopTraceCollector {
    async fn record_run(&self, _run: &RunMetadata) -> Result<(), TraceError> {
        Ok(())
    }

    fn is_enabled(&self) -> bool {
        false
    }
}
