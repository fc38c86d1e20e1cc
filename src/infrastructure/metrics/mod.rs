mod noop_sink;

pub use noop_sink::NoopMetricsSink;
