//! Core library for the skycast weather app.
//!
//! This crate defines:
//! - API key handling and validity rules
//! - The OpenWeather provider client (current weather + city geocoding)
//! - The mock weather generator used when no usable key is configured
//! - The lookup service tying the three together
//!
//! It is used by `skycast-web` and `skycast-cli`, but can also be reused by
//! other binaries or services.

pub mod config;
pub mod error;
pub mod mock;
pub mod model;
pub mod provider;
pub mod service;

pub use config::ApiKey;
pub use error::LookupError;
pub use model::WeatherReport;
pub use provider::{WeatherProvider, openweather::OpenWeatherProvider};
pub use service::WeatherService;
