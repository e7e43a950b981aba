//! Owns the displayed forecast and the loading flag.

use std::sync::Arc;
use tracing::{error, info, warn};

use crate::{
    KeyValueStore, Screen, ScreenSettings, WeatherError, WeatherPayload, WeatherProvider,
    store::CITY_KEY,
};

#[derive(Debug, Clone)]
pub struct ForecastController {
    provider: Arc<dyn WeatherProvider>,
    store: Arc<dyn KeyValueStore>,
    screen: Screen,
    default_city: String,
    days: u8,
}

impl ForecastController {
    pub fn new(
        provider: Arc<dyn WeatherProvider>,
        store: Arc<dyn KeyValueStore>,
        screen: Screen,
        settings: &ScreenSettings,
    ) -> Self {
        Self {
            provider,
            store,
            screen,
            default_city: settings.default_city.clone(),
            days: settings.forecast_days,
        }
    }

    pub fn screen(&self) -> &Screen {
        &self.screen
    }

    pub fn days(&self) -> u8 {
        self.days
    }

    /// Show the remembered city, or the default one on first run.
    ///
    /// On failure the screen stays in its loading state; the error is logged
    /// and handed back to the caller.
    pub async fn bootstrap(&self) -> Result<(), WeatherError> {
        let city = self.remembered_city().await.unwrap_or_else(|| self.default_city.clone());
        info!(%city, days = self.days, "loading initial forecast");

        match self.fetch_forecast(&city, self.days).await {
            Ok(payload) => {
                self.show(payload);
                Ok(())
            }
            Err(err) => {
                error!(%city, error = %err, "failed to fetch initial forecast");
                Err(err)
            }
        }
    }

    /// Raw forecast for `city`. No caching, no retry.
    pub async fn fetch_forecast(&self, city: &str, days: u8) -> Result<WeatherPayload, WeatherError> {
        self.provider.get_forecast(city, days).await
    }

    /// Fetch and display `city`, then remember it.
    pub(crate) async fn show_city(&self, city: &str) -> Result<(), WeatherError> {
        let payload = match self.fetch_forecast(city, self.days).await {
            Ok(payload) => payload,
            Err(err) => {
                error!(%city, error = %err, "error fetching weather forecast");
                return Err(err);
            }
        };

        self.show(payload);
        info!(%city, "showing forecast");

        if let Err(err) = self.store.set(CITY_KEY, city).await {
            warn!(%city, error = %err, "failed to remember selected city");
        }

        Ok(())
    }

    async fn remembered_city(&self) -> Option<String> {
        match self.store.get(CITY_KEY).await {
            Ok(city) => city.filter(|c| !c.trim().is_empty()),
            Err(err) => {
                warn!(error = %err, "failed to read remembered city");
                None
            }
        }
    }

    fn show(&self, payload: WeatherPayload) {
        self.screen.update(|state| {
            state.weather = Some(payload);
            state.loading = false;
        });
    }
}
