//! Currency Application Service
//!
//! Orchestrates validation and conversion through the rate provider port.
//! Contains NO infrastructure logic - pure request orchestration.

use chrono::Utc;
use currency_types::{
    AppError, Conversion, CurrencyCatalog, RateMap, RateProvider,
};
use serde_json::Value;

use crate::validate;

/// Application service for currency operations.
///
/// Generic over `P: RateProvider` - the adapter is injected at compile time.
/// This enables:
/// - Swapping providers without code changes
/// - Testing with an in-memory fake
/// - Compile-time checks for port implementation
///
/// Holds no per-request state; one instance is constructed at startup and
/// shared across request handlers.
pub struct CurrencyService<P: RateProvider> {
    provider: P,
}

impl<P: RateProvider> CurrencyService<P> {
    /// Creates a new currency service with the given rate provider.
    pub fn new(provider: P) -> Self {
        Self { provider }
    }

    /// Fetches the full supported-currency metadata set.
    pub async fn currencies(&self) -> Result<CurrencyCatalog, AppError> {
        self.provider.currencies().await.map_err(Into::into)
    }

    /// Fetches the latest rates for a base currency, optionally restricted
    /// to a comma-joined list of targets.
    pub async fn rates(
        &self,
        base: Option<&str>,
        targets: Option<&str>,
    ) -> Result<RateMap, AppError> {
        let base = validate::base(base)?;
        self.provider
            .latest_rates(base, targets)
            .await
            .map_err(Into::into)
    }

    /// Converts an amount between two currencies.
    ///
    /// Validates the raw body first (fail fast, no wasted IO), then issues
    /// exactly one outbound rate lookup. A missing - or zero - rate for the
    /// target maps to `RateUnavailable`; provider errors propagate
    /// unchanged, already normalized by the adapter.
    pub async fn convert(&self, body: &Value) -> Result<Conversion, AppError> {
        let req = validate::conversion(body)?;

        let rates = self.provider.latest_rates(&req.from, Some(&req.to)).await?;

        // A zero or non-finite rate is treated the same as a missing key,
        // so a legitimately-zero rate reads as unavailable.
        let rate = match rates.get(req.to.as_str()) {
            Some(&r) if r != 0.0 && r.is_finite() => r,
            _ => return Err(AppError::RateUnavailable),
        };

        let result = req.amount * rate;

        tracing::debug!(from = %req.from, to = %req.to, rate, "conversion computed");

        Ok(Conversion {
            from: req.from,
            to: req.to,
            amount: req.amount,
            result,
            rate,
            timestamp: Utc::now().timestamp_millis(),
        })
    }
}
