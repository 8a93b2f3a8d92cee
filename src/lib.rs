pub mod api;
pub mod cli;
pub mod config;
pub mod constants;
pub mod db;
pub mod entities;
pub mod models;
pub mod services;

use anyhow::Context;
use clap::Parser;
use cli::{Cli, Commands};
pub use config::Config;
use tracing::info;
use tracing_subscriber::EnvFilter;

pub async fn run(config: Config) -> anyhow::Result<()> {
    init_tracing(&config);

    let cli = Cli::parse();

    match cli.command.unwrap_or(Commands::Serve) {
        Commands::Serve => {
            let prometheus_handle = if config.observability.metrics_enabled {
                use metrics_exporter_prometheus::PrometheusBuilder;
                let handle = PrometheusBuilder::new()
                    .install_recorder()
                    .context("Failed to install Prometheus recorder")?;
                info!("Prometheus metrics recorder initialized");
                Some(handle)
            } else {
                None
            };

            cli::cmd_serve(config, prometheus_handle).await
        }

        Commands::Initdb { drop } => cli::cmd_initdb(&config, drop).await,

        Commands::Admin { username, password } => {
            cli::cmd_admin(&config, username, password).await
        }

        Commands::Init => cli::cmd_init(),
    }
}

fn init_tracing(config: &Config) {
    use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.general.log_level));

    let registry = tracing_subscriber::registry().with(env_filter);

    if config.general.log_format.eq_ignore_ascii_case("json") {
        registry
            .with(tracing_subscriber::fmt::layer().json())
            .init();
    } else {
        registry.with(tracing_subscriber::fmt::layer()).init();
    }
}
