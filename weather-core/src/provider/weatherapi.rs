use async_trait::async_trait;
use reqwest::{Client, Response};
use serde::de::DeserializeOwned;

use crate::{Location, WeatherError, WeatherPayload};

use super::WeatherProvider;

pub const DEFAULT_BASE_URL: &str = "https://api.weatherapi.com/v1";

#[derive(Clone)]
pub struct WeatherApiProvider {
    api_key: String,
    base_url: String,
    http: Client,
}

impl WeatherApiProvider {
    pub fn new(api_key: String) -> Self {
        Self::with_base_url(api_key, DEFAULT_BASE_URL)
    }

    pub fn with_base_url(api_key: String, base_url: &str) -> Self {
        Self {
            api_key,
            base_url: base_url.trim_end_matches('/').to_string(),
            http: Client::new(),
        }
    }

    fn endpoint(&self, name: &str) -> String {
        format!("{}/{name}", self.base_url)
    }
}

impl std::fmt::Debug for WeatherApiProvider {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("WeatherApiProvider")
            .field("api_key", &"<redacted>")
            .field("base_url", &self.base_url)
            .finish_non_exhaustive()
    }
}

#[async_trait]
impl WeatherProvider for WeatherApiProvider {
    async fn lookup_locations(&self, query: &str) -> Result<Vec<Location>, WeatherError> {
        let res = self
            .http
            .get(self.endpoint("search.json"))
            .query(&[("key", self.api_key.as_str()), ("q", query)])
            .send()
            .await?;

        parse_body(res).await
    }

    async fn get_forecast(&self, city: &str, days: u8) -> Result<WeatherPayload, WeatherError> {
        let days = days.to_string();

        let res = self
            .http
            .get(self.endpoint("forecast.json"))
            .query(&[
                ("key", self.api_key.as_str()),
                ("q", city),
                ("days", days.as_str()),
                ("aqi", "no"),
                ("alerts", "no"),
            ])
            .send()
            .await?;

        parse_body(res).await
    }
}

async fn parse_body<T: DeserializeOwned>(res: Response) -> Result<T, WeatherError> {
    let status = res.status();
    let body = res.text().await?;

    if !status.is_success() {
        return Err(WeatherError::Status { status, body: truncate_body(&body) });
    }

    Ok(serde_json::from_str(&body)?)
}

fn truncate_body(body: &str) -> String {
    const MAX: usize = 200;
    if body.len() > MAX {
        let mut end = MAX;
        while !body.is_char_boundary(end) {
            end -= 1;
        }
        format!("{}...", &body[..end])
    } else {
        body.to_string()
    }
}
