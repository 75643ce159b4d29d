use crate::config::{Options, Units};

#[derive(Debug, Clone)]
pub struct WeatherRequest {
    pub city: String,
    pub units: Units,
}

/// Current conditions for one city, in the unit system that was requested.
#[derive(Debug, Clone, PartialEq)]
pub struct WeatherReading {
    pub city_name: String,
    /// Offset from UTC, in seconds.
    pub utc_offset_secs: i64,
    /// Meters.
    pub visibility: f64,
    pub temperature: f64,
    /// hPa.
    pub pressure: f64,
    /// Percent.
    pub humidity: f64,
    pub wind_speed: f64,
    /// Degrees.
    pub wind_direction: f64,
    /// Provider's coarse group, e.g. "Clouds".
    pub condition_group: String,
    pub condition: String,
    pub icon_code: String,
}

impl From<&Options> for WeatherRequest {
    fn from(options: &Options) -> Self {
        Self { city: options.city.clone(), units: options.units }
    }
}
