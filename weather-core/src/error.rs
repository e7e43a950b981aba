use reqwest::StatusCode;

/// Failures talking to the weather provider.
///
/// None of these are retried; callers log them and leave the screen as it is.
#[derive(Debug, thiserror::Error)]
pub enum WeatherError {
    #[error("Network error: {0}")]
    Network(#[source] reqwest::Error),

    #[error("Provider request failed with status {status}: {body}")]
    Status { status: StatusCode, body: String },

    #[error("Failed to parse provider response: {0}")]
    Parse(#[from] serde_json::Error),
}

// Request URLs carry the API key in their query string.
impl From<reqwest::Error> for WeatherError {
    fn from(err: reqwest::Error) -> Self {
        WeatherError::Network(err.without_url())
    }
}

impl WeatherError {
    /// HTTP status of the failed request, if the provider answered at all.
    pub fn status(&self) -> Option<StatusCode> {
        match self {
            WeatherError::Status { status, .. } => Some(*status),
            WeatherError::Network(err) => err.status(),
            WeatherError::Parse(_) => None,
        }
    }
}
