use async_trait::async_trait;

use crate::application::ports::{MetricDatum, MetricsError, MetricsSink};

/// Used when metric publishing is disabled or no AWS account is configured.
pub struct NoopMetricsSink;

#[async_trait]
impl MetricsSink for NoopMetricsSink {
    async fn publish(&self, namespace: &str, data: &[MetricDatum]) -> Result<(), MetricsError> {
        tracing::trace!(namespace = %namespace, count = data.len(), "Metrics discarded");
        Ok(())
    }
}
