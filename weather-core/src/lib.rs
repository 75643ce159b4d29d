//! Core library for the `weather` CLI.
//!
//! This crate defines:
//! - Invocation options & unit systems
//! - The error taxonomy shared by every stage
//! - Abstraction over the weather provider (OpenWeather current conditions)
//! - Icon glyphs and human-readable formatting of a reading
//!
//! The pipeline is linear: [`Options`] → [`WeatherRequest`] →
//! [`WeatherProvider::current_weather`] → [`format::render`].

pub mod config;
pub mod error;
pub mod format;
pub mod icon;
pub mod model;
pub mod provider;

pub use config::{API_KEY_ENV, Options, Units};
pub use error::WeatherError;
pub use model::{WeatherReading, WeatherRequest};
pub use provider::{WeatherProvider, provider_from_options};
