//! CurrencyService unit tests.

#[cfg(test)]
pub(crate) mod tests {
    use std::collections::HashMap;
    use std::sync::Arc;
    use std::sync::atomic::{AtomicUsize, Ordering};

    use async_trait::async_trait;
    use serde_json::json;

    use currency_types::{AppError, CurrencyCatalog, CurrencyInfo, ProviderError, RateMap, RateProvider};

    use crate::CurrencyService;

    /// In-memory provider fake for testing the service layer. Counts
    /// outbound calls so tests can assert that validation fails fast.
    pub struct MockProvider {
        rates: RateMap,
        catalog: CurrencyCatalog,
        fail_with: Option<ProviderError>,
        calls: Arc<AtomicUsize>,
    }

    impl MockProvider {
        pub fn with_rates(rates: &[(&str, f64)]) -> Self {
            Self {
                rates: rates
                    .iter()
                    .map(|(code, rate)| (code.to_string(), *rate))
                    .collect(),
                catalog: HashMap::new(),
                fail_with: None,
                calls: Arc::new(AtomicUsize::new(0)),
            }
        }

        pub fn failing(err: ProviderError) -> Self {
            Self {
                rates: HashMap::new(),
                catalog: HashMap::new(),
                fail_with: Some(err),
                calls: Arc::new(AtomicUsize::new(0)),
            }
        }

        pub fn with_catalog(mut self, catalog: CurrencyCatalog) -> Self {
            self.catalog = catalog;
            self
        }

        pub fn call_counter(&self) -> Arc<AtomicUsize> {
            self.calls.clone()
        }
    }

    #[async_trait]
    impl RateProvider for MockProvider {
        async fn currencies(&self) -> Result<CurrencyCatalog, ProviderError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            match &self.fail_with {
                Some(err) => Err(err.clone()),
                None => Ok(self.catalog.clone()),
            }
        }

        async fn latest_rates(
            &self,
            _base: &str,
            _targets: Option<&str>,
        ) -> Result<RateMap, ProviderError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            match &self.fail_with {
                Some(err) => Err(err.clone()),
                None => Ok(self.rates.clone()),
            }
        }
    }

    fn usd_info() -> CurrencyInfo {
        CurrencyInfo {
            symbol: "$".into(),
            name: "US Dollar".into(),
            symbol_native: "$".into(),
            decimal_digits: 2,
            rounding: 0.0,
            code: "USD".into(),
            name_plural: "US dollars".into(),
        }
    }

    #[tokio::test]
    async fn test_convert_success() {
        let service = CurrencyService::new(MockProvider::with_rates(&[("EUR", 0.92)]));

        let conversion = service
            .convert(&json!({"from": "USD", "to": "EUR", "amount": 100.0}))
            .await
            .unwrap();

        assert_eq!(conversion.from, "USD");
        assert_eq!(conversion.to, "EUR");
        assert_eq!(conversion.amount, 100.0);
        assert_eq!(conversion.rate, 0.92);
        // result is exactly the host's f64 multiplication
        assert_eq!(conversion.result, 100.0 * 0.92);
        assert!(conversion.timestamp > 0);
    }

    #[tokio::test]
    async fn test_convert_result_over_amount_approximates_rate() {
        let service = CurrencyService::new(MockProvider::with_rates(&[("GBP", 0.79)]));

        let conversion = service
            .convert(&json!({"from": "USD", "to": "GBP", "amount": 37.5}))
            .await
            .unwrap();

        assert!((conversion.result / conversion.amount - 0.79).abs() < 1e-12);
    }

    #[tokio::test]
    async fn test_convert_missing_fields_makes_no_outbound_call() {
        let provider = MockProvider::with_rates(&[("EUR", 0.92)]);
        let calls = provider.call_counter();
        let service = CurrencyService::new(provider);

        let result = service.convert(&json!({"from": "USD"})).await;

        assert!(matches!(result, Err(AppError::InvalidInput(_))));
        assert_eq!(calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn test_convert_bad_amount_makes_no_outbound_call() {
        let provider = MockProvider::with_rates(&[("EUR", 0.92)]);
        let calls = provider.call_counter();
        let service = CurrencyService::new(provider);

        for amount in [json!(-1), json!(0), json!("abc")] {
            let result = service
                .convert(&json!({"from": "USD", "to": "EUR", "amount": amount}))
                .await;
            assert!(matches!(result, Err(AppError::InvalidAmount)));
        }
        assert_eq!(calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn test_convert_missing_rate_is_404() {
        let service = CurrencyService::new(MockProvider::with_rates(&[("EUR", 0.92)]));

        let err = service
            .convert(&json!({"from": "USD", "to": "XYZ", "amount": 10.0}))
            .await
            .unwrap_err();

        assert!(matches!(err, AppError::RateUnavailable));
        assert_eq!(err.status_code(), 404);
        assert_eq!(
            err.to_string(),
            "Exchange rate not available for the requested currency pair"
        );
    }

    #[tokio::test]
    async fn test_convert_zero_rate_is_unavailable() {
        // Zero is conflated with "missing" and reads as unavailable.
        let service = CurrencyService::new(MockProvider::with_rates(&[("EUR", 0.0)]));

        let err = service
            .convert(&json!({"from": "USD", "to": "EUR", "amount": 10.0}))
            .await
            .unwrap_err();

        assert!(matches!(err, AppError::RateUnavailable));
    }

    #[tokio::test]
    async fn test_convert_provider_error_propagates_unchanged() {
        let service = CurrencyService::new(MockProvider::failing(ProviderError::Upstream {
            status: 503,
            message: "Service unavailable".into(),
            details: Some(json!({"message": "Service unavailable"})),
        }));

        let err = service
            .convert(&json!({"from": "USD", "to": "EUR", "amount": 10.0}))
            .await
            .unwrap_err();

        assert_eq!(err.status_code(), 503);
        assert_eq!(err.to_string(), "Service unavailable");
        assert!(err.details().is_some());
    }

    #[tokio::test]
    async fn test_rates_requires_base() {
        let provider = MockProvider::with_rates(&[("EUR", 0.92)]);
        let calls = provider.call_counter();
        let service = CurrencyService::new(provider);

        let err = service.rates(None, None).await.unwrap_err();

        assert_eq!(err.to_string(), "Base currency is required");
        assert_eq!(err.status_code(), 400);
        assert_eq!(calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn test_rates_passes_through_mapping() {
        let service = CurrencyService::new(MockProvider::with_rates(&[
            ("EUR", 0.92),
            ("GBP", 0.79),
        ]));

        let rates = service.rates(Some("USD"), Some("EUR,GBP")).await.unwrap();

        assert_eq!(rates.get("EUR"), Some(&0.92));
        assert_eq!(rates.get("GBP"), Some(&0.79));
    }

    #[tokio::test]
    async fn test_currencies_passes_through_catalog() {
        let mut catalog = CurrencyCatalog::new();
        catalog.insert("USD".into(), usd_info());
        let service =
            CurrencyService::new(MockProvider::with_rates(&[]).with_catalog(catalog));

        let result = service.currencies().await.unwrap();

        assert_eq!(result["USD"].symbol, "$");
    }

    #[tokio::test]
    async fn test_currencies_provider_error_propagates() {
        let service = CurrencyService::new(MockProvider::failing(ProviderError::Transport(
            "connection refused".into(),
        )));

        let err = service.currencies().await.unwrap_err();

        assert_eq!(err.status_code(), 500);
    }
}
