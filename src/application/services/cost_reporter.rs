use std::sync::Arc;

use super::summarizer::USE_CASE_TAG;
use crate::application::ports::{MetricDatum, MetricUnit, MetricsSink};
use crate::domain::{CostBreakdown, CostInputs, PriceTable, TokenUsage};

pub struct CostReporter {
    sink: Arc<dyn MetricsSink>,
    prices: PriceTable,
    namespace: String,
}

impl CostReporter {
    pub fn new(
        sink: Arc<dyn MetricsSink>,
        prices: PriceTable,
        namespace: impl Into<String>,
    ) -> Self {
        Self {
            sink,
            prices,
            namespace: namespace.into(),
        }
    }

    pub fn compute(&self, inputs: &CostInputs, usage: TokenUsage) -> CostBreakdown {
        CostBreakdown::estimate(&self.prices, inputs).with_token_usage(&self.prices, usage)
    }

    /// Computes the breakdown and publishes it. Publishing never fails the caller.
    pub async fn report(&self, inputs: &CostInputs, usage: TokenUsage) -> CostBreakdown {
        let breakdown = self.compute(inputs, usage);

        tracing::info!(
            total = breakdown.total,
            lambda = breakdown.lambda,
            transcribe = breakdown.transcribe,
            bedrock = breakdown.bedrock,
            "Estimated request cost"
        );

        let data = metric_data(&breakdown, inputs, usage);
        if let Err(e) = self.sink.publish(&self.namespace, &data).await {
            tracing::warn!(error = %e, namespace = %self.namespace, "Failed to publish metrics");
        }

        breakdown
    }
}

fn metric_data(breakdown: &CostBreakdown, inputs: &CostInputs, usage: TokenUsage) -> Vec<MetricDatum> {
    [
        MetricDatum::new("TotalCost", breakdown.total, MetricUnit::None),
        MetricDatum::new(
            "ProcessingTime",
            inputs.elapsed.as_secs_f64(),
            MetricUnit::Seconds,
        ),
        MetricDatum::new("WordCount", inputs.word_count as f64, MetricUnit::Count),
        MetricDatum::new("InputTokens", usage.input_tokens as f64, MetricUnit::Count),
        MetricDatum::new("OutputTokens", usage.output_tokens as f64, MetricUnit::Count),
    ]
    .into_iter()
    .map(|datum| datum.with_dimension("UseCase", USE_CASE_TAG))
    .collect()
}
