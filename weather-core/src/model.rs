//! Provider data as the screen consumes it.
//!
//! Every field is optional: the screen renders whatever subset arrived and
//! blanks the rest. Fields the screen never reads are kept in `extra` so a
//! payload passes through unchanged.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// A search candidate returned by the location lookup.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Location {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub country: String,
    /// Provider fields such as `id`, `region`, `lat`, `lon`, `url`.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Location {
    pub fn new(name: impl Into<String>, country: impl Into<String>) -> Self {
        Self { name: name.into(), country: country.into(), extra: Map::new() }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Condition {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    /// `code`, `icon`.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CurrentConditions {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub temp_c: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub condition: Option<Condition>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub wind_kph: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub humidity: Option<f64>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LocationInfo {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub country: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DayStats {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub avgtemp_c: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub condition: Option<Condition>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Astro {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sunrise: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sunset: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ForecastDay {
    /// ISO calendar date, e.g. `2024-05-01`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub day: Option<DayStats>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub astro: Option<Astro>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Forecast {
    #[serde(default)]
    pub forecastday: Vec<ForecastDay>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Raw forecast response, kept as the provider sent it.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct WeatherPayload {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub current: Option<CurrentConditions>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<LocationInfo>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub forecast: Option<Forecast>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl WeatherPayload {
    pub fn current_temp_c(&self) -> Option<f64> {
        self.current.as_ref()?.temp_c
    }

    pub fn current_condition(&self) -> Option<&str> {
        self.current.as_ref()?.condition.as_ref()?.text.as_deref()
    }

    pub fn wind_kph(&self) -> Option<f64> {
        self.current.as_ref()?.wind_kph
    }

    pub fn humidity(&self) -> Option<f64> {
        self.current.as_ref()?.humidity
    }

    pub fn location_name(&self) -> Option<&str> {
        self.location.as_ref()?.name.as_deref()
    }

    pub fn location_country(&self) -> Option<&str> {
        self.location.as_ref()?.country.as_deref()
    }

    /// Forecast days in provider order; empty when the block is missing.
    pub fn forecast_days(&self) -> &[ForecastDay] {
        self.forecast.as_ref().map(|f| f.forecastday.as_slice()).unwrap_or_default()
    }

    pub fn first_day(&self) -> Option<&ForecastDay> {
        self.forecast_days().first()
    }

    /// Sunrise of the first forecast day.
    pub fn sunrise(&self) -> Option<&str> {
        self.first_day()?.astro.as_ref()?.sunrise.as_deref()
    }
}

impl ForecastDay {
    pub fn avg_temp_c(&self) -> Option<f64> {
        self.day.as_ref()?.avgtemp_c
    }

    pub fn condition(&self) -> Option<&str> {
        self.day.as_ref()?.condition.as_ref()?.text.as_deref()
    }
}
