//! Configuration loading from environment.

use std::env;

const DEFAULT_BASE_URL: &str = "https://api.freecurrencyapi.com/v1";

/// Application configuration.
pub struct Config {
    pub port: u16,
    pub api_base_url: String,
    pub api_key: String,
    pub app_env: String,
    pub cors_origin: String,
}

impl Config {
    /// Loads configuration from environment variables.
    ///
    /// A missing `CURRENCY_API_KEY` is a fatal startup condition - the
    /// process refuses to start rather than failing per request.
    pub fn from_env() -> anyhow::Result<Self> {
        let port = env::var("PORT")
            .unwrap_or_else(|_| "3000".to_string())
            .parse()?;

        let api_base_url =
            env::var("CURRENCY_API_BASE_URL").unwrap_or_else(|_| DEFAULT_BASE_URL.to_string());

        let api_key = env::var("CURRENCY_API_KEY")
            .ok()
            .filter(|k| !k.is_empty())
            .ok_or_else(|| {
                anyhow::anyhow!("CURRENCY_API_KEY is not defined in environment variables")
            })?;

        let app_env = env::var("APP_ENV").unwrap_or_else(|_| "development".to_string());

        let cors_origin = env::var("CORS_ORIGIN").unwrap_or_else(|_| "*".to_string());

        Ok(Self {
            port,
            api_base_url,
            api_key,
            app_env,
            cors_origin,
        })
    }

    /// Whether verbose error details may be surfaced to callers.
    pub fn is_development(&self) -> bool {
        self.app_env == "development"
    }
}
