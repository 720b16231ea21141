//! Rate provider port trait.
//!
//! This is the single outbound port of the service. The HTTP adapter for
//! the upstream rate API implements it; tests use in-memory fakes.

use crate::domain::{CurrencyCatalog, RateMap};
use crate::error::ProviderError;

/// Port trait for the upstream currency-rate provider.
///
/// Implementations own all outbound communication and return errors
/// already normalized to the wire contract. They never retry: a single
/// failed call is a single failed operation.
#[async_trait::async_trait]
pub trait RateProvider: Send + Sync + 'static {
    /// Fetches the full supported-currency metadata set.
    async fn currencies(&self) -> Result<CurrencyCatalog, ProviderError>;

    /// Fetches the latest rates for `base`. When `targets` is given (a
    /// comma-joined list of codes) the provider is asked to restrict the
    /// response to that subset; callers must still read only the keys
    /// they need in case the provider ignores it.
    async fn latest_rates(
        &self,
        base: &str,
        targets: Option<&str>,
    ) -> Result<RateMap, ProviderError>;
}
