//! # Currency Client SDK
//!
//! A typed Rust client for the Currency Conversion API.

use currency_types::{
    Conversion, CurrenciesResponse, CurrencyCatalog, ErrorBody, RateMap, RatesResponse,
};
use reqwest::Client;
use serde::de::DeserializeOwned;

/// Error type for client operations.
#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("API error: {status} - {message}")]
    Api { status: u16, message: String },

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Currency Conversion API client.
pub struct CurrencyProxyClient {
    base_url: String,
    http: Client,
}

impl CurrencyProxyClient {
    /// Creates a new client.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
            http: Client::new(),
        }
    }

    /// Checks if the API is healthy.
    pub async fn health(&self) -> Result<bool, ClientError> {
        let resp = self
            .http
            .get(format!("{}/health", self.base_url))
            .send()
            .await?;
        Ok(resp.status().is_success())
    }

    /// Lists all supported currencies.
    pub async fn currencies(&self) -> Result<CurrencyCatalog, ClientError> {
        let resp: CurrenciesResponse = self.get("/api/currencies").await?;
        Ok(resp.data)
    }

    /// Gets exchange rates for a base currency, optionally restricted to a
    /// comma-joined list of target codes.
    pub async fn rates(
        &self,
        base: &str,
        currencies: Option<&str>,
    ) -> Result<RateMap, ClientError> {
        let mut path = format!("/api/rates?base={base}");
        if let Some(currencies) = currencies {
            path.push_str(&format!("&currencies={currencies}"));
        }
        let resp: RatesResponse = self.get(&path).await?;
        Ok(resp.data)
    }

    /// Converts an amount from one currency to another.
    pub async fn convert(
        &self,
        from: &str,
        to: &str,
        amount: f64,
    ) -> Result<Conversion, ClientError> {
        let body = serde_json::json!({ "from": from, "to": to, "amount": amount });
        let resp = self
            .http
            .post(format!("{}/api/convert", self.base_url))
            .json(&body)
            .send()
            .await?;
        self.handle_response(resp).await
    }

    async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T, ClientError> {
        let resp = self
            .http
            .get(format!("{}{}", self.base_url, path))
            .send()
            .await?;
        self.handle_response(resp).await
    }

    async fn handle_response<T: DeserializeOwned>(
        &self,
        resp: reqwest::Response,
    ) -> Result<T, ClientError> {
        let status = resp.status();
        if status.is_success() {
            let body = resp.text().await?;
            Ok(serde_json::from_str(&body)?)
        } else {
            let body = resp.text().await.unwrap_or_default();
            let message = serde_json::from_str::<ErrorBody>(&body)
                .map(|e| e.message)
                .unwrap_or(body);
            Err(ClientError::Api {
                status: status.as_u16(),
                message,
            })
        }
    }
}
