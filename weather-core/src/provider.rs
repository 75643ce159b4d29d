use crate::{
    Options, WeatherError, WeatherReading, WeatherRequest,
    provider::openweather::OpenWeatherProvider,
};
use async_trait::async_trait;
use std::fmt::Debug;

pub mod openweather;

#[async_trait]
pub trait WeatherProvider: Send + Sync + Debug {
    /// Current conditions for `request.city`, in `request.units`.
    async fn current_weather(&self, request: &WeatherRequest)
    -> Result<WeatherReading, WeatherError>;
}

/// Construct the provider used by the CLI from validated options.
pub fn provider_from_options(options: &Options) -> Box<dyn WeatherProvider> {
    Box::new(OpenWeatherProvider::new(options.api_key.clone()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Units;

    #[test]
    fn provider_debug_output_hides_api_key() {
        let options = Options {
            api_key: "SECRET-KEY".into(),
            units: Units::Metric,
            verbose: false,
            city: "Paris".into(),
        };

        let provider = provider_from_options(&options);
        let debug = format!("{provider:?}");

        assert!(debug.contains("OpenWeatherProvider"));
        assert!(!debug.contains("SECRET-KEY"));
    }

    #[test]
    fn request_carries_city_and_units_from_options() {
        let options = Options {
            api_key: "KEY".into(),
            units: Units::Imperial,
            verbose: true,
            city: "Rio de Janeiro".into(),
        };

        let request = WeatherRequest::from(&options);
        assert_eq!(request.city, "Rio de Janeiro");
        assert_eq!(request.units, Units::Imperial);
    }
}
