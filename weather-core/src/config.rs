use std::{fmt, str::FromStr};

use crate::error::WeatherError;

/// Environment variable consulted when no `-key` flag is given.
pub const API_KEY_ENV: &str = "OPENWEATHER_API_KEY";

/// Unit system the provider reports values in. Nothing is converted locally.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Units {
    #[default]
    Metric,
    Imperial,
}

impl Units {
    pub fn as_str(&self) -> &'static str {
        match self {
            Units::Metric => "metric",
            Units::Imperial => "imperial",
        }
    }

    pub fn temperature_symbol(&self) -> &'static str {
        match self {
            Units::Metric => "C",
            Units::Imperial => "F",
        }
    }

    pub fn wind_speed_symbol(&self) -> &'static str {
        match self {
            Units::Metric => "m/s",
            Units::Imperial => "mi/h",
        }
    }
}

impl fmt::Display for Units {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Units {
    type Err = WeatherError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "metric" => Ok(Units::Metric),
            "imperial" => Ok(Units::Imperial),
            _ => Err(WeatherError::InvalidUnits(value.to_string())),
        }
    }
}

/// Validated invocation options.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Options {
    pub api_key: String,
    pub units: Units,
    pub verbose: bool,
    pub city: String,
}

impl Options {
    /// Assemble options from raw command-line input.
    ///
    /// `api_key` is whatever won the flag/environment precedence; city words
    /// are joined with single spaces so multi-word names need no quoting.
    pub fn new(
        api_key: Option<String>,
        units: Units,
        verbose: bool,
        city_words: &[String],
    ) -> Result<Self, WeatherError> {
        let api_key = api_key.filter(|k| !k.is_empty()).ok_or(WeatherError::MissingApiKey)?;

        let city = city_words.join(" ");
        if city.trim().is_empty() {
            return Err(WeatherError::MissingCity);
        }

        Ok(Self { api_key, units, verbose, city })
    }
}
