//! # Currency Hex
//!
//! Application service layer and HTTP adapter for the currency conversion
//! service.
//!
//! ## Architecture
//!
//! - `validate/` - Pure input validation (no IO)
//! - `service/` - Application service (validation + conversion engine)
//! - `inbound/` - HTTP adapter (Axum server)
//!
//! The service is generic over `P: RateProvider`, allowing the real
//! upstream client or an in-memory fake to be injected.

pub mod inbound;
pub mod service;
pub mod validate;

#[cfg(test)]
mod service_tests;

pub use service::CurrencyService;
