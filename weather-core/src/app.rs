use anyhow::Result;
use std::sync::Arc;

use crate::{
    Config, FileStore, ForecastController, KeyValueStore, Screen, ScreenSettings, SearchController,
    WeatherProvider, provider_from_config,
};

/// The forecast screen: one shared state and the two controllers driving it.
#[derive(Debug)]
pub struct ForecastScreen {
    forecast: ForecastController,
    search: SearchController,
}

impl ForecastScreen {
    pub fn new(
        provider: Arc<dyn WeatherProvider>,
        store: Arc<dyn KeyValueStore>,
        settings: &ScreenSettings,
    ) -> Self {
        let forecast = ForecastController::new(provider.clone(), store, Screen::new(), settings);
        let search = SearchController::new(provider, forecast.clone(), settings);
        Self { forecast, search }
    }

    /// Wire the WeatherAPI.com provider and the on-disk store from config.
    pub fn from_config(config: &Config) -> Result<Self> {
        let provider = provider_from_config(config)?;
        let store: Arc<dyn KeyValueStore> = Arc::new(FileStore::open_default()?);
        tracing::debug!(store = ?store, "forecast screen wired");
        Ok(Self::new(provider, store, &config.screen))
    }

    pub fn forecast(&self) -> &ForecastController {
        &self.forecast
    }

    pub fn search(&self) -> &SearchController {
        &self.search
    }

    pub fn search_mut(&mut self) -> &mut SearchController {
        &mut self.search
    }

    pub fn screen(&self) -> &Screen {
        self.forecast.screen()
    }

    /// Mount: show the remembered (or default) city.
    pub async fn mount(&self) -> Result<(), crate::WeatherError> {
        self.forecast.bootstrap().await
    }

    /// Unmount: drop any keystroke still waiting on the debounce timer.
    pub fn unmount(&mut self) {
        tracing::debug!("unmounting forecast screen");
        self.search.cancel_pending();
    }
}
