use thiserror::Error;

/// Every way a weather lookup can fail. None of them are retried.
#[derive(Debug, Error)]
pub enum WeatherError {
    #[error("openweather api key is required")]
    MissingApiKey,

    #[error("city name is required")]
    MissingCity,

    #[error("unit must be 'metric' or 'imperial', got '{0}'")]
    InvalidUnits(String),

    #[error("failed to send request to OpenWeather")]
    Transport(#[source] reqwest::Error),

    #[error("request status {code} {reason}")]
    Status { code: u16, reason: String },

    #[error("failed to parse OpenWeather current JSON")]
    Decode(#[source] serde_json::Error),
}

impl WeatherError {
    /// Configuration problems detected before any I/O. These are reported
    /// together with the usage text.
    pub fn is_usage(&self) -> bool {
        matches!(
            self,
            WeatherError::MissingApiKey | WeatherError::MissingCity | WeatherError::InvalidUnits(_)
        )
    }
}

impl From<reqwest::Error> for WeatherError {
    fn from(err: reqwest::Error) -> Self {
        // The request URL carries the api key in its query string.
        WeatherError::Transport(err.without_url())
    }
}

impl From<serde_json::Error> for WeatherError {
    fn from(err: serde_json::Error) -> Self {
        WeatherError::Decode(err)
    }
}
