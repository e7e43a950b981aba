//! Core library for the `forecast` screen.
//!
//! This crate defines:
//! - Configuration and the remembered-city store
//! - Abstraction over the weather provider, with a WeatherAPI.com client
//! - The screen state and the Search / Forecast controllers that drive it
//! - Display values derived from that state
//!
//! It is used by `forecast-cli`, but any front-end can drive the controllers
//! and render `view::ScreenView`.

pub mod app;
pub mod config;
pub mod debounce;
pub mod error;
pub mod forecast;
pub mod model;
pub mod provider;
pub mod screen;
pub mod search;
pub mod store;
pub mod view;

#[cfg(test)]
pub(crate) mod testing;

pub use app::ForecastScreen;
pub use config::{Config, ProviderConfig, ScreenSettings};
pub use debounce::Debouncer;
pub use error::WeatherError;
pub use forecast::ForecastController;
pub use model::{ForecastDay, Location, WeatherPayload};
pub use provider::{WeatherProvider, provider_from_config};
pub use screen::{Screen, ScreenState};
pub use search::SearchController;
pub use store::{CITY_KEY, FileStore, KeyValueStore, MemoryStore};
