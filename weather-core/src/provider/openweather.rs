use async_trait::async_trait;
use reqwest::{Client, Url};
use serde::Deserialize;

use crate::{
    config::Units,
    error::WeatherError,
    model::{WeatherReading, WeatherRequest},
};

use super::WeatherProvider;

pub const DEFAULT_ENDPOINT: &str = "https://api.openweathermap.org/data/2.5/weather";

#[derive(Clone)]
pub struct OpenWeatherProvider {
    api_key: String,
    endpoint: Url,
    http: Client,
}

impl OpenWeatherProvider {
    pub fn new(api_key: String) -> Self {
        let endpoint = Url::parse(DEFAULT_ENDPOINT).expect("DEFAULT_ENDPOINT is a valid URL");
        Self::with_client(api_key, endpoint, Client::new())
    }

    pub fn with_client(api_key: String, endpoint: Url, http: Client) -> Self {
        Self { api_key, endpoint, http }
    }

    async fn fetch_current(&self, request: &WeatherRequest) -> Result<WeatherReading, WeatherError> {
        let url = request_url(&self.endpoint, &request.city, request.units, &self.api_key);

        tracing::debug!(city = %request.city, units = %request.units, "requesting current weather");

        let res = self.http.get(url).send().await?;

        let status = res.status();
        tracing::debug!(status = status.as_u16(), "OpenWeather responded");

        if !status.is_success() {
            return Err(WeatherError::Status {
                code: status.as_u16(),
                reason: status.canonical_reason().unwrap_or_default().to_string(),
            });
        }

        let body = res.text().await?;
        decode(&body)
    }
}

impl std::fmt::Debug for OpenWeatherProvider {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("OpenWeatherProvider")
            .field("endpoint", &self.endpoint.as_str())
            .finish_non_exhaustive()
    }
}

#[async_trait]
impl WeatherProvider for OpenWeatherProvider {
    async fn current_weather(
        &self,
        request: &WeatherRequest,
    ) -> Result<WeatherReading, WeatherError> {
        self.fetch_current(request).await
    }
}

/// Build the current-weather query: `?q=<city>&units=<units>&appid=<key>`,
/// with city and key form-url encoded.
pub fn request_url(endpoint: &Url, city: &str, units: Units, api_key: &str) -> Url {
    let mut url = endpoint.clone();
    url.query_pairs_mut()
        .append_pair("q", city)
        .append_pair("units", units.as_str())
        .append_pair("appid", api_key);
    url
}

/// Decode a current-weather response body.
///
/// Only the first entry of `weather` is used; an empty array leaves the
/// condition and icon empty.
pub fn decode(body: &str) -> Result<WeatherReading, WeatherError> {
    let parsed: OwCurrentResponse = serde_json::from_str(body)?;

    let (condition_group, condition, icon_code) = match parsed.weather.into_iter().next() {
        Some(w) => (w.main, w.description, w.icon),
        None => Default::default(),
    };

    Ok(WeatherReading {
        city_name: parsed.name,
        utc_offset_secs: parsed.timezone,
        visibility: parsed.visibility,
        temperature: parsed.main.temp,
        pressure: parsed.main.pressure,
        humidity: parsed.main.humidity,
        wind_speed: parsed.wind.speed,
        wind_direction: parsed.wind.deg,
        condition_group,
        condition,
        icon_code,
    })
}

// https://openweathermap.org/current
#[derive(Debug, Deserialize)]
struct OwWeather {
    #[serde(default)]
    main: String,
    #[serde(default)]
    description: String,
    #[serde(default)]
    icon: String,
}

#[derive(Debug, Deserialize)]
struct OwMain {
    temp: f64,
    pressure: f64,
    humidity: f64,
}

#[derive(Debug, Deserialize)]
struct OwWind {
    speed: f64,
    #[serde(default)]
    deg: f64,
}

#[derive(Debug, Deserialize)]
struct OwCurrentResponse {
    #[serde(default)]
    weather: Vec<OwWeather>,
    main: OwMain,
    wind: OwWind,
    name: String,
    #[serde(default)]
    timezone: i64,
    #[serde(default)]
    visibility: f64,
}
