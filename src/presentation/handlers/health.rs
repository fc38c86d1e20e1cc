use serde::Serialize;

use crate::presentation::envelope::ResponseEnvelope;

#[derive(Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub version: &'static str,
}

pub async fn health_handler() -> ResponseEnvelope {
    ResponseEnvelope::ok(&HealthResponse {
        status: "healthy",
        version: env!("CARGO_PKG_VERSION"),
    })
}
