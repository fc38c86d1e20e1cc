use async_trait::async_trait;
use aws_sdk_cloudwatch::error::DisplayErrorContext;
use aws_sdk_cloudwatch::types::{Dimension, MetricDatum as CloudWatchDatum, StandardUnit};

use crate::application::ports::{MetricDatum, MetricUnit, MetricsError, MetricsSink};

pub struct CloudWatchMetricsSink {
    client: aws_sdk_cloudwatch::Client,
}

impl CloudWatchMetricsSink {
    pub fn new(client: aws_sdk_cloudwatch::Client) -> Self {
        Self { client }
    }
}

#[async_trait]
impl MetricsSink for CloudWatchMetricsSink {
    async fn publish(&self, namespace: &str, data: &[MetricDatum]) -> Result<(), MetricsError> {
        let metric_data = data.iter().map(to_cloudwatch).collect::<Vec<_>>();

        self.client
            .put_metric_data()
            .namespace(namespace)
            .set_metric_data(Some(metric_data))
            .send()
            .await
            .map_err(|e| MetricsError::PublishFailed(DisplayErrorContext(&e).to_string()))?;

        tracing::debug!(namespace = %namespace, count = data.len(), "Published metrics");
        Ok(())
    }
}

fn to_cloudwatch(datum: &MetricDatum) -> CloudWatchDatum {
    let dimensions = datum
        .dimensions
        .iter()
        .map(|(name, value)| Dimension::builder().name(name).value(value).build())
        .collect::<Vec<_>>();

    CloudWatchDatum::builder()
        .metric_name(&datum.name)
        .value(datum.value)
        .unit(match datum.unit {
            MetricUnit::None => StandardUnit::None,
            MetricUnit::Seconds => StandardUnit::Seconds,
            MetricUnit::Count => StandardUnit::Count,
        })
        .set_dimensions(Some(dimensions))
        .build()
}
