mod init_tracing;
mod langsmith_collector;
mod noop_trace_collector;
mod request_id;
mod tracing_config;

pub use init_tracing::init_tracing;
pub use langsmith_collector::{DEFAULT_LANGSMITH_ENDPOINT, LangSmithTraceCollector};
pub use noop_trace_collector::NoopTraceCollector;
pub use request_id::{REQUEST_ID_HEADER, RequestId, request_id_middleware};
pub use tracing_config::TracingConfig;
