//! Web server command handler

use tokio::signal;
use tracing::{error, info};

use crate::api;
use crate::config::Config;
use metrics_exporter_prometheus::PrometheusHandle;

pub async fn cmd_serve(
    config: Config,
    prometheus_handle: Option<PrometheusHandle>,
) -> anyhow::Result<()> {
    config.validate()?;

    info!("Watchlist v{} starting...", env!("CARGO_PKG_VERSION"));

    let addr = format!("{}:{}", config.server.bind_address, config.server.port);
    let state = api::create_app_state_from_config(config, prometheus_handle).await?;

    if state.auth.owner().await?.is_none() {
        info!("No site owner yet. Run `watchlist admin` to create one.");
    }

    let app = api::router(state)?;
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    info!("🌐 Web Server running at http://{}", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(async {
            match signal::ctrl_c().await {
                Ok(()) => info!("Shutdown signal received"),
                Err(e) => error!("Error listening for shutdown: {}", e),
            }
        })
        .await?;

    info!("Server stopped");
    Ok(())
}
