pub mod aws;
pub mod http;
pub mod metrics;
pub mod observability;
pub mod storage;
