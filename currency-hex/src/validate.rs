//! Pure input validation.
//!
//! Every check here runs before any outbound call is made, so invalid
//! requests never cost provider IO. On success the inputs pass through
//! unchanged. There is no currency-code whitelist and no upper bound on
//! amounts - code correctness is deferred to the provider's response.

use currency_types::{AppError, ConversionRequest};
use serde_json::Value;

const REQUIRED_FIELDS: &str = r#"Invalid request. "from", "to" and "amount" are required."#;

/// Validates the base currency for a rates lookup.
pub fn base(base: Option<&str>) -> Result<&str, AppError> {
    match base {
        Some(b) if !b.trim().is_empty() => Ok(b),
        _ => Err(AppError::InvalidInput("Base currency is required".into())),
    }
}

/// Validates a raw conversion request body.
///
/// Missing `from`/`to`/`amount` fail as invalid input; an `amount` that is
/// present but not a positive finite number fails as an invalid amount.
pub fn conversion(body: &Value) -> Result<ConversionRequest, AppError> {
    let from = currency_field(body, "from")?;
    let to = currency_field(body, "to")?;

    let amount = match body.get("amount") {
        None => return Err(AppError::InvalidInput(REQUIRED_FIELDS.into())),
        Some(value) => value
            .as_f64()
            .filter(|a| a.is_finite() && *a > 0.0)
            .ok_or(AppError::InvalidAmount)?,
    };

    Ok(ConversionRequest { from, to, amount })
}

fn currency_field(body: &Value, key: &str) -> Result<String, AppError> {
    body.get(key)
        .and_then(Value::as_str)
        .filter(|s| !s.is_empty())
        .map(str::to_owned)
        .ok_or_else(|| AppError::InvalidInput(REQUIRED_FIELDS.into()))
}
