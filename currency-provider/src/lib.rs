//! # Currency Provider
//!
//! Outbound adapter for the upstream currency-rate API
//! (freecurrencyapi-compatible: `GET /currencies`, `GET /latest`).
//!
//! This crate is the sole owner of outbound HTTP. Every transport error,
//! non-2xx response, or unusable payload is converted here - exactly once -
//! into a [`ProviderError`] carrying the upstream status and message when
//! available, so nothing downstream has to re-interpret upstream failures.

use currency_types::{CurrencyCatalog, ProviderError, RateMap, RateProvider};
use reqwest::Client;
use serde::Deserialize;
use serde::de::DeserializeOwned;

/// Fallback message when the upstream gives us nothing usable.
const GENERIC_API_ERROR: &str = "Currency API error";

/// Successful upstream responses arrive wrapped in a `data` envelope.
#[derive(Debug, Deserialize)]
struct Envelope<T> {
    data: T,
}

/// HTTP client for the upstream rate API.
///
/// Holds the base URL and API key for the lifetime of the process; the key
/// is sent as an `apikey` header on every request. The client never
/// retries and configures no timeout beyond the transport's defaults.
pub struct CurrencyApiClient {
    base_url: String,
    api_key: String,
    http: Client,
}

impl CurrencyApiClient {
    /// Creates a new client for the given provider base URL and API key.
    pub fn new(base_url: impl Into<String>, api_key: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
            api_key: api_key.into(),
            http: Client::new(),
        }
    }

    async fn get<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&str, &str)],
    ) -> Result<T, ProviderError> {
        let resp = self
            .http
            .get(format!("{}{}", self.base_url, path))
            .header("apikey", &self.api_key)
            .query(query)
            .send()
            .await
            .map_err(|e| ProviderError::Transport(e.to_string()))?;

        Self::handle_response(resp).await
    }

    async fn handle_response<T: DeserializeOwned>(
        resp: reqwest::Response,
    ) -> Result<T, ProviderError> {
        let status = resp.status();
        let body = resp
            .text()
            .await
            .map_err(|e| ProviderError::Transport(e.to_string()))?;

        if status.is_success() {
            let envelope: Envelope<T> = serde_json::from_str(&body)
                .map_err(|_| ProviderError::Transport(GENERIC_API_ERROR.to_string()))?;
            Ok(envelope.data)
        } else {
            // Mirror the upstream status and message; keep the raw body as
            // opaque details for non-production diagnostics.
            let details = serde_json::from_str::<serde_json::Value>(&body).ok();
            let message = details
                .as_ref()
                .and_then(|v| v.get("message"))
                .and_then(|m| m.as_str())
                .map(String::from)
                .unwrap_or_else(|| GENERIC_API_ERROR.to_string());

            tracing::warn!(status = status.as_u16(), %message, "upstream request failed");

            Err(ProviderError::Upstream {
                status: status.as_u16(),
                message,
                details,
            })
        }
    }
}

#[async_trait::async_trait]
impl RateProvider for CurrencyApiClient {
    async fn currencies(&self) -> Result<CurrencyCatalog, ProviderError> {
        tracing::debug!("fetching currency catalog");
        self.get("/currencies", &[]).await
    }

    async fn latest_rates(
        &self,
        base: &str,
        targets: Option<&str>,
    ) -> Result<RateMap, ProviderError> {
        tracing::debug!(base, targets, "fetching latest rates");
        let mut query = vec![("base_currency", base)];
        if let Some(targets) = targets {
            query.push(("currencies", targets));
        }
        self.get("/latest", &query).await
    }
}
