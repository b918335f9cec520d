//! Brain client binary — composition root.
//!
//! Ties the client crates into a single executable:
//! 1. Parse CLI args and load configuration from TOML
//! 2. Initialize tracing
//! 3. Build the backend gateway and the request orchestrator
//! 4. Probe the backend once (informational only)
//! 5. Run the terminal REPL until the user quits

use std::sync::Arc;

use clap::Parser;

use brain_chat::ChatOrchestrator;
use brain_core::config::BrainConfig;
use brain_gateway::{Gateway, HttpGateway};

mod cli;
mod repl;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = cli::CliArgs::parse();

    // Config.
    let config_path = args.resolve_config_path();
    let mut config = BrainConfig::load_or_default(&config_path);
    config.backend.base_url = args.resolve_base_url(&config.backend.base_url);
    let log_level = args.resolve_log_level(&config.general.log_level);

    // Tracing.
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(log_level)),
        )
        .init();

    tracing::info!("Starting Brain v{}", env!("CARGO_PKG_VERSION"));
    tracing::info!(path = %config_path.display(), "Configuration resolved");

    // Gateway.
    let gateway = Arc::new(HttpGateway::from_config(&config.backend)?);
    tracing::info!(base_url = %gateway.base_url(), "Backend gateway ready");

    // Startup reachability probe; failure is not fatal, requests will just
    // surface channel errors until the backend comes up.
    match gateway.health().await {
        Ok(_) => tracing::info!("Backend is reachable"),
        Err(e) => tracing::warn!(error = %e, "Backend health probe failed"),
    }

    // Orchestrator and presentation.
    let orchestrator = Arc::new(ChatOrchestrator::new(
        Arc::clone(&gateway) as Arc<dyn Gateway>
    ));
    let repl = repl::Repl::new(orchestrator, gateway);
    repl.run().await?;

    Ok(())
}
