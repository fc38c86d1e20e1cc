use std::net::SocketAddr;

use anyhow::Context;
use tokio::net::TcpListener;

use recap::infrastructure::observability::{TracingConfig, init_tracing};
use recap::presentation::{AppState, Environment, Settings, build_services, create_router};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    init_tracing(&TracingConfig::default());

    let environment = Environment::from_env().map_err(anyhow::Error::msg)?;
    let settings = Settings::load(environment).context("failed to load settings")?;
    tracing::info!(environment = %environment, "Settings loaded");

    let services = build_services(&settings)
        .await
        .context("failed to wire services")?;

    let state = AppState {
        pipeline: services.pipeline,
        catalog: services.catalog,
        error_policy: settings.errors.status_policy,
    };

    let router = create_router(state);

    let addr: SocketAddr = format!("{}:{}", settings.server.host, settings.server.port)
        .parse()
        .context("invalid server address")?;
    tracing::info!("Listening on {}", addr);

    let listener = TcpListener::bind(addr).await?;
    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "Failed to listen for shutdown signal");
        return;
    }
    tracing::info!("Shutdown signal received");
}
