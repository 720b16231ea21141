//! Conversion result type.

use serde::{Deserialize, Serialize};

/// The outcome of a currency conversion.
///
/// `result = amount * rate` using plain binary floating-point
/// multiplication; no decimal rounding is applied. `timestamp` is the
/// epoch-milliseconds instant the conversion was computed, assigned once.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Conversion {
    pub from: String,
    pub to: String,
    pub amount: f64,
    pub result: f64,
    pub rate: f64,
    pub timestamp: i64,
}
