//! HTTP request handlers.

use std::sync::Arc;

use axum::{
    Json,
    extract::{Query, State, rejection::JsonRejection},
    http::{Method, StatusCode, Uri},
    response::{IntoResponse, Response},
};
use chrono::Utc;

use currency_types::{
    AppError, CurrenciesResponse, ErrorBody, RateProvider, RatesQuery, RatesResponse,
};

use crate::CurrencyService;

/// Application state shared across handlers.
///
/// `expose_details` gates whether opaque upstream error bodies are
/// surfaced in responses; it is false in production deployments.
pub struct AppState<P: RateProvider> {
    pub service: CurrencyService<P>,
    pub expose_details: bool,
}

impl<P: RateProvider> AppState<P> {
    fn error(&self, err: AppError) -> ApiError {
        ApiError {
            err,
            expose_details: self.expose_details,
        }
    }
}

/// Wrapper to implement IntoResponse for AppError (orphan rule workaround).
/// This is the terminal error normalizer: it never re-throws and always
/// produces a `{status, statusCode, message[, details]}` response.
pub struct ApiError {
    err: AppError,
    expose_details: bool,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let body = ErrorBody::from_error(&self.err, self.expose_details);
        let status = StatusCode::from_u16(body.status_code)
            .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);

        tracing::error!(status = body.status_code, message = %body.message, "request failed");

        (status, Json(body)).into_response()
    }
}

/// Health check endpoint.
pub async fn health() -> impl IntoResponse {
    Json(serde_json::json!({
        "status": "ok",
        "timestamp": Utc::now().to_rfc3339(),
    }))
}

/// Get all available currencies.
#[tracing::instrument(skip(state))]
pub async fn currencies<P: RateProvider>(
    State(state): State<Arc<AppState<P>>>,
) -> Result<impl IntoResponse, ApiError> {
    let data = state
        .service
        .currencies()
        .await
        .map_err(|e| state.error(e))?;
    Ok(Json(CurrenciesResponse { data }))
}

/// Get exchange rates for a base currency.
#[tracing::instrument(skip(state), fields(base = query.base.as_deref()))]
pub async fn rates<P: RateProvider>(
    State(state): State<Arc<AppState<P>>>,
    Query(query): Query<RatesQuery>,
) -> Result<impl IntoResponse, ApiError> {
    let data = state
        .service
        .rates(query.base.as_deref(), query.currencies.as_deref())
        .await
        .map_err(|e| state.error(e))?;
    Ok(Json(RatesResponse { data }))
}

/// Convert an amount from one currency to another.
///
/// Takes the body as raw JSON so the validator owns all field checks and
/// produces the contract error messages. An unparsable body is caught here
/// and routed through the normalizer like every other failure.
#[tracing::instrument(skip(state, body))]
pub async fn convert<P: RateProvider>(
    State(state): State<Arc<AppState<P>>>,
    body: Result<Json<serde_json::Value>, JsonRejection>,
) -> Result<impl IntoResponse, ApiError> {
    let Json(body) =
        body.map_err(|rejection| state.error(AppError::InvalidInput(rejection.body_text())))?;
    let conversion = state
        .service
        .convert(&body)
        .await
        .map_err(|e| state.error(e))?;
    Ok(Json(conversion))
}

/// 404 handler for undefined routes.
pub async fn fallback(method: Method, uri: Uri) -> impl IntoResponse {
    (
        StatusCode::NOT_FOUND,
        Json(serde_json::json!({
            "status": "error",
            "message": format!("Cannot {} {}", method, uri.path()),
        })),
    )
}
