use crate::{Config, Location, WeatherError, WeatherPayload, provider::weatherapi::WeatherApiProvider};
use async_trait::async_trait;
use std::{fmt::Debug, sync::Arc};

pub mod weatherapi;

/// The two read-only endpoints the screen relies on.
#[async_trait]
pub trait WeatherProvider: Send + Sync + Debug {
    /// Free-text city search, in provider order.
    async fn lookup_locations(&self, query: &str) -> Result<Vec<Location>, WeatherError>;

    /// `days`-day forecast for a city name, returned untouched.
    async fn get_forecast(&self, city: &str, days: u8) -> Result<WeatherPayload, WeatherError>;
}

/// Construct the WeatherAPI.com provider from config.
pub fn provider_from_config(config: &Config) -> anyhow::Result<Arc<dyn WeatherProvider>> {
    let api_key = config.api_key().ok_or_else(|| {
        anyhow::anyhow!(
            "No API key configured for WeatherAPI.com.\n\
                 Hint: run `forecast configure` and enter your API key, or set {}.",
            crate::config::API_KEY_ENV
        )
    })?;

    let provider = match config.weatherapi.base_url.as_deref() {
        Some(base_url) => WeatherApiProvider::with_base_url(api_key, base_url),
        None => WeatherApiProvider::new(api_key),
    };

    Ok(Arc::new(provider))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn provider_from_config_errors_when_missing_api_key() {
        // A developer key in the environment would satisfy the lookup.
        if std::env::var(crate::config::API_KEY_ENV).is_ok() {
            return;
        }

        let cfg = Config::default();
        let err = provider_from_config(&cfg).unwrap_err();

        let msg = err.to_string();
        assert!(msg.contains("No API key configured"));
        assert!(msg.contains("Hint: run `forecast configure`"));
    }

    #[test]
    fn provider_from_config_works_when_configured() {
        let mut cfg = Config::default();
        cfg.set_api_key("KEY".to_string());

        assert!(provider_from_config(&cfg).is_ok());
    }
}
