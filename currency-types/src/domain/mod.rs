//! Pure domain types.
//!
//! No IO, no framework types - just the data the service reasons about.

mod conversion;
mod currency;

pub use conversion::Conversion;
pub use currency::{CurrencyCatalog, CurrencyInfo, RateMap};
