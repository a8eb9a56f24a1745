use crate::{LookupError, WeatherReport};
use async_trait::async_trait;
use std::fmt::Debug;

pub mod openweather;

/// Seam between the lookup service and the outside world.
///
/// One real implementation exists (OpenWeather); tests substitute stubs so
/// the fallback logic can be exercised without a network.
#[async_trait]
pub trait WeatherProvider: Send + Sync + Debug {
    /// Current conditions for a city, looked up by name.
    async fn current_weather(&self, city: &str) -> Result<WeatherReport, LookupError>;

    /// City-name completions for a partial query, formatted as
    /// `"<name>, <country-code>"` in provider order, at most five entries.
    async fn suggest_cities(&self, query: &str) -> Result<Vec<String>, LookupError>;
}
