//! Client example demonstrating the conversion API against a local server
//! backed by a fixed-rate provider (no upstream API key needed).
//!
//! Run with: cargo run -p currency-app --example client_example

use std::collections::HashMap;
use std::net::SocketAddr;

use async_trait::async_trait;
use tokio::net::TcpListener;

use currency_client::CurrencyProxyClient;
use currency_hex::{CurrencyService, inbound::HttpServer};
use currency_types::{CurrencyCatalog, ProviderError, RateMap, RateProvider};

/// Fixed-rate provider so the example runs without upstream credentials.
struct StaticRates;

#[async_trait]
impl RateProvider for StaticRates {
    async fn currencies(&self) -> Result<CurrencyCatalog, ProviderError> {
        Ok(HashMap::new())
    }

    async fn latest_rates(
        &self,
        _base: &str,
        _targets: Option<&str>,
    ) -> Result<RateMap, ProviderError> {
        Ok(HashMap::from([
            ("EUR".to_string(), 0.92),
            ("GBP".to_string(), 0.79),
            ("INR".to_string(), 83.12),
        ]))
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt().with_env_filter("info").init();

    // Find an available port
    let listener = TcpListener::bind("127.0.0.1:0").await?;
    let addr: SocketAddr = listener.local_addr()?;
    let port = addr.port();
    drop(listener);

    println!("🚀 Starting server on port {port}...");

    // Start server in background
    let service = CurrencyService::new(StaticRates);
    let server = HttpServer::new(service, true, "*");
    let router = server.router();

    let server_addr = format!("127.0.0.1:{port}");
    tokio::spawn(async move {
        axum::serve(
            TcpListener::bind(&server_addr).await.unwrap(),
            router.into_make_service(),
        )
        .await
        .unwrap();
    });

    // Wait for server to start
    tokio::time::sleep(std::time::Duration::from_millis(500)).await;

    // Create client
    let base_url = format!("http://127.0.0.1:{port}");
    let client = CurrencyProxyClient::new(&base_url);

    // Health check
    let health = client.health().await?;
    println!("✅ Server health: {health}");

    // Fetch rates
    let rates = client.rates("USD", Some("EUR,GBP")).await?;
    println!("📋 USD rates:");
    for (code, rate) in &rates {
        println!("   - {code}: {rate}");
    }

    // Convert an amount
    let conversion = client.convert("USD", "EUR", 100.0).await?;
    println!(
        "✅ Converted {} {} -> {:.2} {} (rate {}, at {})",
        conversion.amount,
        conversion.from,
        conversion.result,
        conversion.to,
        conversion.rate,
        conversion.timestamp
    );

    // A pair the provider has no rate for
    let missing = client.convert("USD", "XYZ", 10.0).await;
    println!("✅ Unknown pair rejected: {}", missing.unwrap_err());

    println!("\n🎉 Example completed successfully!");

    Ok(())
}
