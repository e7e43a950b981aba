//! Display values derived from the screen state.
//!
//! Nothing here fails: absent data renders as an empty string.

use chrono::NaiveDate;

use crate::{ForecastDay, Location, ScreenState, WeatherPayload};

/// English long weekday for an ISO date, e.g. `2024-05-01` is `Wednesday`.
///
/// The date is taken as a plain calendar date, so the result does not depend
/// on the host timezone or locale.
pub fn day_name(date: &str) -> Option<String> {
    let date = NaiveDate::parse_from_str(date.trim(), "%Y-%m-%d").ok()?;
    Some(date.format("%A").to_string())
}

#[derive(Debug, Clone, PartialEq)]
pub enum ScreenView {
    Loading,
    Ready(ForecastView),
}

impl ScreenView {
    pub fn from_state(state: &ScreenState) -> Self {
        if state.loading {
            ScreenView::Loading
        } else {
            ScreenView::Ready(ForecastView::from_payload(state.weather.as_ref()))
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ForecastView {
    pub location_name: String,
    pub country: String,
    pub temperature: String,
    pub condition: String,
    pub wind: String,
    pub humidity: String,
    pub sunrise: String,
    pub days: Vec<DayView>,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct DayView {
    pub day_name: String,
    pub avg_temp: String,
    pub condition: String,
}

impl ForecastView {
    pub fn from_payload(weather: Option<&WeatherPayload>) -> Self {
        let Some(weather) = weather else {
            return Self::default();
        };

        Self {
            location_name: text(weather.location_name()),
            country: text(weather.location_country()),
            temperature: with_unit(weather.current_temp_c(), "°"),
            condition: text(weather.current_condition()),
            wind: with_unit(weather.wind_kph(), ""),
            humidity: with_unit(weather.humidity(), "%"),
            sunrise: text(weather.sunrise()),
            days: weather.forecast_days().iter().map(DayView::from_day).collect(),
        }
    }
}

impl DayView {
    pub fn from_day(day: &ForecastDay) -> Self {
        Self {
            day_name: day.date.as_deref().and_then(day_name).unwrap_or_default(),
            avg_temp: with_unit(day.avg_temp_c(), "°"),
            condition: text(day.condition()),
        }
    }
}

/// One row of the search results: `name, country`.
#[derive(Debug, Clone, PartialEq)]
pub struct CandidateView {
    pub label: String,
}

impl CandidateView {
    pub fn from_location(location: &Location) -> Self {
        Self { label: format!("{}, {}", location.name, location.country) }
    }

    pub fn list(state: &ScreenState) -> Vec<Self> {
        state.visible_candidates().iter().map(Self::from_location).collect()
    }
}

impl std::fmt::Display for CandidateView {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.label)
    }
}

fn text(value: Option<&str>) -> String {
    value.unwrap_or_default().to_string()
}

fn with_unit(value: Option<f64>, unit: &str) -> String {
    value.map(|v| format!("{v}{unit}")).unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn day_name_is_fixed_english_weekday() {
        assert_eq!(day_name("2024-05-01").as_deref(), Some("Wednesday"));
        assert_eq!(day_name("2024-02-29").as_deref(), Some("Thursday"));
        assert_eq!(day_name("2023-12-31").as_deref(), Some("Sunday"));
    }

    #[test]
    fn day_name_rejects_garbage() {
        assert_eq!(day_name(""), None);
        assert_eq!(day_name("2024-13-01"), None);
        assert_eq!(day_name("yesterday"), None);
    }

    #[test]
    fn loading_state_renders_spinner() {
        assert_eq!(ScreenView::from_state(&ScreenState::default()), ScreenView::Loading);
    }

    #[test]
    fn empty_weather_renders_blank() {
        let state = ScreenState { loading: false, ..ScreenState::default() };
        assert_eq!(ScreenView::from_state(&state), ScreenView::Ready(ForecastView::default()));

        let empty: WeatherPayload = serde_json::from_str("{}").unwrap();
        assert_eq!(ForecastView::from_payload(Some(&empty)), ForecastView::default());
    }

    #[test]
    fn partial_weather_blanks_missing_fields() {
        let payload: WeatherPayload = serde_json::from_value(serde_json::json!({
            "location": { "name": "Dubai" },
            "current": { "temp_c": 31.0, "humidity": 62 },
            "forecast": { "forecastday": [
                { "date": "2024-05-01", "day": { "avgtemp_c": 33.4 } },
                { "day": { "condition": { "text": "Sunny" } } }
            ]}
        }))
        .unwrap();

        let view = ForecastView::from_payload(Some(&payload));

        assert_eq!(view.location_name, "Dubai");
        assert_eq!(view.country, "");
        assert_eq!(view.temperature, "31°");
        assert_eq!(view.condition, "");
        assert_eq!(view.wind, "");
        assert_eq!(view.humidity, "62%");
        assert_eq!(view.sunrise, "");
        assert_eq!(
            view.days,
            vec![
                DayView { day_name: "Wednesday".into(), avg_temp: "33.4°".into(), condition: "".into() },
                DayView { day_name: "".into(), avg_temp: "".into(), condition: "Sunny".into() },
            ]
        );
    }

    #[test]
    fn candidates_listed_only_while_searching() {
        let mut state = ScreenState {
            candidates: vec![Location::new("London", "United Kingdom")],
            ..ScreenState::default()
        };
        assert!(CandidateView::list(&state).is_empty());

        state.search_active = true;
        let rows = CandidateView::list(&state);
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].to_string(), "London, United Kingdom");
    }
}
