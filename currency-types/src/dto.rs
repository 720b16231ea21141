//! Data Transfer Objects (DTOs) for requests and responses.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::domain::{CurrencyCatalog, RateMap};
use crate::error::AppError;

// ─────────────────────────────────────────────────────────────────────────────
// Request DTOs
// ─────────────────────────────────────────────────────────────────────────────

/// A validated conversion request. Constructed only by the validator from
/// untrusted input; immutable afterwards.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConversionRequest {
    pub from: String,
    pub to: String,
    pub amount: f64,
}

/// Query parameters for the rates endpoint. `base` is required but arrives
/// optional so the validator can produce the contract error message.
#[derive(Debug, Clone, Deserialize)]
pub struct RatesQuery {
    pub base: Option<String>,
    /// Optional comma-joined list of target currency codes.
    pub currencies: Option<String>,
}

// ─────────────────────────────────────────────────────────────────────────────
// Response DTOs
// ─────────────────────────────────────────────────────────────────────────────

/// Currency catalog response, in the provider's `{data: ...}` envelope.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CurrenciesResponse {
    pub data: CurrencyCatalog,
}

/// Exchange rates response, in the provider's `{data: ...}` envelope.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RatesResponse {
    pub data: RateMap,
}

/// The uniform wire shape for every surfaced failure.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorBody {
    /// Always `"error"`.
    pub status: String,
    #[serde(rename = "statusCode")]
    pub status_code: u16,
    pub message: String,
    /// Opaque upstream error body. Only serialized when present, and only
    /// populated outside production deployments.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<Value>,
}

impl ErrorBody {
    /// Terminal normalization: turns any [`AppError`] into the wire shape.
    /// `expose_details` is false in production, so upstream payloads never
    /// leak there.
    pub fn from_error(err: &AppError, expose_details: bool) -> Self {
        Self {
            status: "error".to_string(),
            status_code: err.status_code(),
            message: err.to_string(),
            details: if expose_details {
                err.details().cloned()
            } else {
                None
            },
        }
    }
}
