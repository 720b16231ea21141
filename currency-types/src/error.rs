//! Error types for the currency conversion service.
//!
//! Every failure surfaced to a caller ends up as an [`AppError`], which
//! carries the HTTP status code and message for the wire shape. Provider
//! failures are normalized exactly once, at the outbound adapter, into
//! [`ProviderError`]; converting one into an `AppError` preserves its
//! status and message, so normalization is idempotent.

use serde_json::Value;

/// Outbound adapter errors, already normalized to the wire contract.
#[derive(Debug, Clone, thiserror::Error)]
pub enum ProviderError {
    /// The upstream responded with a non-2xx status. `message` is the
    /// upstream-provided message when the body carried one, and `details`
    /// is the raw upstream error body, kept opaque.
    #[error("{message}")]
    Upstream {
        status: u16,
        message: String,
        details: Option<Value>,
    },

    /// Transport failure or unusable payload; no upstream status exists.
    #[error("{0}")]
    Transport(String),
}

/// Application-level errors, mapping one-to-one onto HTTP responses.
#[derive(Debug, Clone, thiserror::Error)]
pub enum AppError {
    /// Client-supplied data missing or malformed (400).
    #[error("{0}")]
    InvalidInput(String),

    /// Amount non-numeric or non-positive (400).
    #[error("Amount must be a positive number")]
    InvalidAmount,

    /// The provider's rate mapping has no usable rate for the target (404).
    #[error("Exchange rate not available for the requested currency pair")]
    RateUnavailable,

    /// Provider or transport failure; mirrors the upstream status when one
    /// exists, else 500.
    #[error("{message}")]
    Provider {
        status_code: u16,
        message: String,
        details: Option<Value>,
    },

    /// Any uncaught fault (500).
    #[error("Internal Server Error")]
    Internal,
}

impl AppError {
    /// HTTP status code for this error. Always present; a provider error
    /// without a usable upstream status falls back to 500.
    pub fn status_code(&self) -> u16 {
        match self {
            AppError::InvalidInput(_) | AppError::InvalidAmount => 400,
            AppError::RateUnavailable => 404,
            AppError::Provider { status_code, .. } => {
                if *status_code == 0 {
                    500
                } else {
                    *status_code
                }
            }
            AppError::Internal => 500,
        }
    }

    /// Opaque upstream error body, if this failure carried one.
    pub fn details(&self) -> Option<&Value> {
        match self {
            AppError::Provider { details, .. } => details.as_ref(),
            _ => None,
        }
    }
}

impl From<ProviderError> for AppError {
    fn from(err: ProviderError) -> Self {
        match err {
            ProviderError::Upstream {
                status,
                message,
                details,
            } => AppError::Provider {
                status_code: if status == 0 { 500 } else { status },
                message,
                details,
            },
            ProviderError::Transport(message) => AppError::Provider {
                status_code: 500,
                message,
                details: None,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_errors_are_400() {
        assert_eq!(AppError::InvalidInput("x".into()).status_code(), 400);
        assert_eq!(AppError::InvalidAmount.status_code(), 400);
    }

    #[test]
    fn test_rate_unavailable_is_404_with_message() {
        let err = AppError::RateUnavailable;
        assert_eq!(err.status_code(), 404);
        assert_eq!(
            err.to_string(),
            "Exchange rate not available for the requested currency pair"
        );
    }

    #[test]
    fn test_upstream_status_is_mirrored() {
        let err: AppError = ProviderError::Upstream {
            status: 503,
            message: "Service unavailable".into(),
            details: Some(serde_json::json!({"message": "Service unavailable"})),
        }
        .into();
        assert_eq!(err.status_code(), 503);
        assert_eq!(err.to_string(), "Service unavailable");
        assert!(err.details().is_some());
    }

    #[test]
    fn test_transport_error_defaults_to_500() {
        let err: AppError = ProviderError::Transport("connection refused".into()).into();
        assert_eq!(err.status_code(), 500);
        assert!(err.details().is_none());
    }

    #[test]
    fn test_missing_upstream_status_defaults_to_500() {
        let err = AppError::Provider {
            status_code: 0,
            message: "Currency API error".into(),
            details: None,
        };
        assert_eq!(err.status_code(), 500);
    }

    #[test]
    fn test_normalization_is_idempotent() {
        let once: AppError = ProviderError::Upstream {
            status: 429,
            message: "Too many requests".into(),
            details: None,
        }
        .into();
        // Re-normalizing an already-normalized error is the identity.
        let twice: AppError = once.clone().into();
        assert_eq!(once.status_code(), twice.status_code());
        assert_eq!(once.to_string(), twice.to_string());
    }
}
