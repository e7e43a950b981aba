//! In-memory provider for controller tests.

use async_trait::async_trait;
use std::{
    collections::{HashMap, HashSet},
    sync::Mutex,
    time::Duration,
};

use crate::{Location, WeatherError, WeatherPayload, WeatherProvider, model::LocationInfo};

#[derive(Debug, Default)]
struct Script {
    forecast_delays: HashMap<String, Duration>,
    failing_forecasts: HashSet<String>,
    lookup_delays: HashMap<String, Duration>,
    lookup_results: HashMap<String, Vec<Location>>,
    failing_lookups: HashSet<String>,
    forecast_calls: Vec<(String, u8)>,
    lookup_calls: Vec<String>,
}

/// Answers every forecast with a payload naming the requested city, and every
/// lookup with one `"<query> City"` candidate unless told otherwise.
#[derive(Debug, Default)]
pub(crate) struct ScriptedProvider {
    script: Mutex<Script>,
}

impl ScriptedProvider {
    pub fn delay_forecast(&self, city: &str, delay: Duration) {
        self.script.lock().unwrap().forecast_delays.insert(city.into(), delay);
    }

    pub fn fail_forecast(&self, city: &str) {
        self.script.lock().unwrap().failing_forecasts.insert(city.into());
    }

    pub fn delay_lookup(&self, query: &str, delay: Duration) {
        self.script.lock().unwrap().lookup_delays.insert(query.into(), delay);
    }

    pub fn lookup_result(&self, query: &str, locations: Vec<Location>) {
        self.script.lock().unwrap().lookup_results.insert(query.into(), locations);
    }

    pub fn fail_lookup(&self, query: &str) {
        self.script.lock().unwrap().failing_lookups.insert(query.into());
    }

    pub fn forecast_calls(&self) -> Vec<(String, u8)> {
        self.script.lock().unwrap().forecast_calls.clone()
    }

    pub fn lookup_calls(&self) -> Vec<String> {
        self.script.lock().unwrap().lookup_calls.clone()
    }
}

pub(crate) fn payload_for(city: &str) -> WeatherPayload {
    WeatherPayload {
        location: Some(LocationInfo { name: Some(city.into()), ..Default::default() }),
        ..Default::default()
    }
}

fn failure() -> WeatherError {
    WeatherError::Status {
        status: reqwest::StatusCode::SERVICE_UNAVAILABLE,
        body: "scripted failure".into(),
    }
}

#[async_trait]
impl WeatherProvider for ScriptedProvider {
    async fn lookup_locations(&self, query: &str) -> Result<Vec<Location>, WeatherError> {
        let (delay, fails, result) = {
            let mut script = self.script.lock().unwrap();
            script.lookup_calls.push(query.into());
            (
                script.lookup_delays.get(query).copied(),
                script.failing_lookups.contains(query),
                script.lookup_results.get(query).cloned(),
            )
        };

        if let Some(delay) = delay {
            tokio::time::sleep(delay).await;
        }
        if fails {
            return Err(failure());
        }
        Ok(result.unwrap_or_else(|| vec![Location::new(format!("{query} City"), "Testland")]))
    }

    async fn get_forecast(&self, city: &str, days: u8) -> Result<WeatherPayload, WeatherError> {
        let (delay, fails) = {
            let mut script = self.script.lock().unwrap();
            script.forecast_calls.push((city.into(), days));
            (script.forecast_delays.get(city).copied(), script.failing_forecasts.contains(city))
        };

        if let Some(delay) = delay {
            tokio::time::sleep(delay).await;
        }
        if fails {
            return Err(failure());
        }
        Ok(payload_for(city))
    }
}
