//! HTTP Server configuration and startup.

use std::sync::Arc;
use std::time::Duration;

use axum::{
    Router,
    http::{HeaderValue, Method, header},
    routing::{get, post},
};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use currency_types::RateProvider;

use super::handlers::{self, AppState};
use crate::CurrencyService;

/// How long in-flight connections get to drain after a shutdown signal.
const SHUTDOWN_GRACE: Duration = Duration::from_secs(5);

/// HTTP Server for the Currency Conversion API.
pub struct HttpServer<P: RateProvider> {
    state: Arc<AppState<P>>,
    cors_origin: String,
}

impl<P: RateProvider> HttpServer<P> {
    /// Creates a new HTTP server with the given service.
    ///
    /// `expose_details` should be true only for development-like
    /// deployments; `cors_origin` is either `*` or an exact origin.
    pub fn new(
        service: CurrencyService<P>,
        expose_details: bool,
        cors_origin: impl Into<String>,
    ) -> Self {
        Self {
            state: Arc::new(AppState {
                service,
                expose_details,
            }),
            cors_origin: cors_origin.into(),
        }
    }

    /// Builds the Axum router with all routes.
    pub fn router(&self) -> Router {
        Router::new()
            .route("/health", get(handlers::health))
            .route("/api/currencies", get(handlers::currencies::<P>))
            .route("/api/rates", get(handlers::rates::<P>))
            .route("/api/convert", post(handlers::convert::<P>))
            .fallback(handlers::fallback)
            .layer(cors_layer(&self.cors_origin))
            .layer(TraceLayer::new_for_http())
            .with_state(self.state.clone())
    }

    /// Runs the server on the given address with graceful shutdown.
    pub async fn run(self, addr: &str) -> anyhow::Result<()> {
        let listener = tokio::net::TcpListener::bind(addr).await?;
        tracing::info!("Server listening on {}", listener.local_addr()?);

        axum::serve(listener, self.router())
            .with_graceful_shutdown(shutdown_signal())
            .await?;

        Ok(())
    }
}

fn cors_layer(origin: &str) -> CorsLayer {
    let cors = CorsLayer::new()
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers([header::CONTENT_TYPE, header::AUTHORIZATION]);

    if origin == "*" {
        return cors.allow_origin(Any);
    }
    match origin.parse::<HeaderValue>() {
        Ok(value) => cors.allow_origin(value),
        Err(_) => {
            // An unparsable origin ends up allowing nothing.
            tracing::warn!(origin, "invalid CORS origin, cross-origin requests disabled");
            cors
        }
    }
}

async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    tracing::info!("Shutdown signal received, starting graceful shutdown...");

    // Bound the drain: if connections are still open after the grace
    // period, exit anyway.
    tokio::spawn(async {
        tokio::time::sleep(SHUTDOWN_GRACE).await;
        tracing::error!("Could not close connections in time, forcefully shutting down");
        std::process::exit(1);
    });
}
