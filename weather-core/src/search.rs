//! Debounced city search and candidate selection.

use std::sync::Arc;
use tokio::sync::watch;
use tracing::{debug, info, warn};

use crate::{
    Debouncer, ForecastController, Location, Screen, ScreenSettings, WeatherError, WeatherProvider,
};

#[derive(Debug)]
pub struct SearchController {
    provider: Arc<dyn WeatherProvider>,
    forecast: ForecastController,
    screen: Screen,
    debouncer: Debouncer,
    min_query_len: usize,
    // Bumped whenever a dispatched lookup settles, successful or not.
    lookups_settled: Arc<watch::Sender<u64>>,
}

impl SearchController {
    /// Shares the screen of `forecast`.
    pub fn new(
        provider: Arc<dyn WeatherProvider>,
        forecast: ForecastController,
        settings: &ScreenSettings,
    ) -> Self {
        Self {
            provider,
            screen: forecast.screen().clone(),
            forecast,
            debouncer: Debouncer::new(settings.debounce()),
            min_query_len: settings.min_query_len,
            lookups_settled: Arc::new(watch::channel(0).0),
        }
    }

    pub fn activate(&self) {
        self.screen.update(|state| state.search_active = true);
    }

    /// Closes the search box. Candidates stay until a selection clears them.
    pub fn deactivate(&self) {
        self.screen.update(|state| state.search_active = false);
    }

    pub fn toggle(&self) {
        self.screen.update(|state| state.search_active = !state.search_active);
    }

    /// Whether `value` is long enough to be looked up.
    pub fn accepts_query(&self, value: &str) -> bool {
        value.chars().count() > self.min_query_len
    }

    /// Feed the current contents of the search box.
    ///
    /// Only the last value in a quiet period is acted on. Short values leave
    /// the candidates as they are. A dispatched lookup is never cancelled, so
    /// when lookups overlap the last one to answer wins.
    pub fn on_text_changed(&mut self, value: impl Into<String>) {
        let value = value.into();
        let accepted = self.accepts_query(&value);
        let provider = self.provider.clone();
        let screen = self.screen.clone();
        let settled = self.lookups_settled.clone();

        self.debouncer.call(async move {
            debug!(query = %value, "search value");
            if accepted {
                tokio::spawn(async move {
                    lookup(provider, screen, value).await;
                    settled.send_modify(|count| *count += 1);
                });
            }
        });
    }

    /// Drop a keystroke that has not fired yet.
    pub fn cancel_pending(&mut self) {
        self.debouncer.cancel();
    }

    pub fn has_pending_input(&self) -> bool {
        self.debouncer.is_pending()
    }

    /// Ticks once per finished lookup, including failed ones, which leave
    /// the candidates untouched.
    pub fn lookups_settled(&self) -> watch::Receiver<u64> {
        self.lookups_settled.subscribe()
    }

    /// Show the forecast for `location` and remember it.
    ///
    /// The candidate list, search box and loading flag are reset before the
    /// fetch starts. If the fetch fails the screen is left loading.
    pub async fn select_candidate(&self, location: Location) -> Result<(), WeatherError> {
        debug!(city = %location.name, country = %location.country, "location selected");

        self.screen.update(|state| {
            state.candidates.clear();
            state.search_active = false;
            state.loading = true;
        });

        self.forecast.show_city(&location.name).await
    }
}

async fn lookup(provider: Arc<dyn WeatherProvider>, screen: Screen, query: String) {
    match provider.lookup_locations(&query).await {
        Ok(locations) => {
            info!(%query, count = locations.len(), "locations found");
            screen.update(|state| state.candidates = locations);
        }
        Err(err) => warn!(%query, error = %err, "location lookup failed"),
    }
}
