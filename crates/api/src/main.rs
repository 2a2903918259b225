use std::sync::Arc;

use anyhow::Context;

use supplyrisk_api::app::{self, services::AppServices};
use supplyrisk_api::config::AppConfig;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    supplyrisk_observability::init();

    let config = AppConfig::from_env().context("invalid configuration")?;

    // Models load before the listener exists: no model, no traffic.
    let services = AppServices::load(&config).context("failed to load prediction models")?;

    let app = app::build_app(Arc::new(services));

    let listener = tokio::net::TcpListener::bind(config.bind_addr)
        .await
        .with_context(|| format!("failed to bind {}", config.bind_addr))?;

    tracing::info!("listening on {}", listener.local_addr()?);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("server error")?;

    tracing::info!("shut down");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
}
