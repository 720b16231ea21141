//! Currency metadata and rate mappings.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// Display and formatting metadata for a single currency, as supplied by
/// the upstream provider. Passed through unchanged - the service does not
/// maintain its own currency list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CurrencyInfo {
    pub symbol: String,
    pub name: String,
    pub symbol_native: String,
    pub decimal_digits: u32,
    pub rounding: f64,
    pub code: String,
    pub name_plural: String,
}

/// Full supported-currency metadata set, keyed by currency code.
pub type CurrencyCatalog = HashMap<String, CurrencyInfo>;

/// Exchange rates for a base currency, keyed by target currency code.
///
/// Each value is the multiplicative factor such that 1 unit of the base
/// currency equals `rate` units of the target. Snapshots are used once and
/// discarded - there is no caching layer.
pub type RateMap = HashMap<String, f64>;
