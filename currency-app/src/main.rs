//! # Currency Conversion Application
//!
//! Binary that wires together all the components:
//! - Load configuration from environment
//! - Initialize the upstream rate provider client
//! - Create the currency service
//! - Start the HTTP server

mod config;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use currency_hex::{CurrencyService, inbound::HttpServer};
use currency_provider::CurrencyApiClient;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables
    dotenvy::dotenv().ok();

    // Initialize tracing subscriber
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,currency_app=debug,currency_hex=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load configuration; a missing API key refuses to start the process.
    let config = config::Config::from_env()?;

    tracing::info!(
        "Starting currency server on port {} in {} mode",
        config.port,
        config.app_env
    );
    tracing::info!("Using rate provider: {}", config.api_base_url);

    // Build the outbound provider client
    let provider = CurrencyApiClient::new(config.api_base_url.clone(), config.api_key.clone());

    // Create the currency service
    let service = CurrencyService::new(provider);

    // Create and run the HTTP server
    let server = HttpServer::new(service, config.is_development(), config.cors_origin.clone());
    let addr = format!("0.0.0.0:{}", config.port);

    server.run(&addr).await?;

    Ok(())
}
