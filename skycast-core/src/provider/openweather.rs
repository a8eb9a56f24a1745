use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use std::time::Duration;

use crate::config::ApiKey;
use crate::error::LookupError;
use crate::model::{WeatherReport, title_case};

use super::WeatherProvider;

const DEFAULT_BASE_URL: &str = "https://api.openweathermap.org";

/// Timeout for both the current-weather and geocoding calls. The geocoding
/// timeout is deliberately explicit rather than left to the client default.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

/// Maximum number of geocoding matches requested from the provider.
const SUGGESTION_LIMIT: u8 = 5;

/// Client for the OpenWeather current-weather and geocoding endpoints.
#[derive(Debug, Clone)]
pub struct OpenWeatherProvider {
    api_key: ApiKey,
    http: Client,
    base_url: String,
    timeout: Duration,
}

impl OpenWeatherProvider {
    pub fn new(api_key: ApiKey) -> Self {
        Self {
            api_key,
            http: Client::new(),
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout: DEFAULT_TIMEOUT,
        }
    }

    /// Point the provider at a different host, e.g. a mock server in tests.
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    async fn fetch_current(&self, city: &str) -> Result<WeatherReport, LookupError> {
        let url = format!("{}/data/2.5/weather", self.base_url);

        let res = self
            .http
            .get(&url)
            .query(&[
                ("q", city),
                ("appid", self.api_key.as_str()),
                ("units", "metric"),
            ])
            .timeout(self.timeout)
            .send()
            .await
            .map_err(|e| LookupError::Fetch(e.to_string()))?;

        let status = res.status();
        let body = res
            .text()
            .await
            .map_err(|e| LookupError::Fetch(e.to_string()))?;

        if !status.is_success() {
            return Err(LookupError::Fetch(format!(
                "status {status}: {}",
                truncate_body(&body)
            )));
        }

        parse_current(&body)
    }

    async fn fetch_suggestions(&self, query: &str) -> Result<Vec<String>, LookupError> {
        let url = format!("{}/geo/1.0/direct", self.base_url);
        let limit = SUGGESTION_LIMIT.to_string();

        let res = self
            .http
            .get(&url)
            .query(&[
                ("q", query),
                ("limit", limit.as_str()),
                ("appid", self.api_key.as_str()),
            ])
            .timeout(self.timeout)
            .send()
            .await
            .map_err(|e| LookupError::Fetch(e.to_string()))?;

        let status = res.status();
        let body = res
            .text()
            .await
            .map_err(|e| LookupError::Fetch(e.to_string()))?;

        if !status.is_success() {
            return Err(LookupError::Fetch(format!(
                "status {status}: {}",
                truncate_body(&body)
            )));
        }

        parse_suggestions(&body)
    }
}

#[async_trait]
impl WeatherProvider for OpenWeatherProvider {
    async fn current_weather(&self, city: &str) -> Result<WeatherReport, LookupError> {
        self.fetch_current(city).await
    }

    async fn suggest_cities(&self, query: &str) -> Result<Vec<String>, LookupError> {
        self.fetch_suggestions(query).await
    }
}

#[derive(Debug, Deserialize)]
struct OwMain {
    temp: f64,
    feels_like: f64,
    humidity: u8,
}

#[derive(Debug, Deserialize)]
struct OwWeather {
    description: String,
    icon: String,
}

#[derive(Debug, Deserialize)]
struct OwWind {
    speed: f64,
}

#[derive(Debug, Deserialize)]
struct OwSys {
    country: String,
}

#[derive(Debug, Deserialize)]
struct OwCurrentResponse {
    name: String,
    sys: OwSys,
    main: OwMain,
    weather: Vec<OwWeather>,
    wind: OwWind,
}

#[derive(Debug, Deserialize)]
struct OwGeoEntry {
    name: String,
    country: String,
}

/// Map a current-weather body onto a [`WeatherReport`].
///
/// Temperatures are rounded half-away-from-zero (`f64::round`); the
/// description is title-cased for display.
fn parse_current(body: &str) -> Result<WeatherReport, LookupError> {
    let parsed: OwCurrentResponse =
        serde_json::from_str(body).map_err(|e| LookupError::from_json(&e))?;

    let condition = parsed
        .weather
        .first()
        .ok_or_else(|| LookupError::Schema("empty `weather` array".to_string()))?;

    Ok(WeatherReport {
        city: parsed.name,
        country: parsed.sys.country,
        temperature: parsed.main.temp.round() as i32,
        description: title_case(&condition.description),
        icon: condition.icon.clone(),
        humidity: parsed.main.humidity,
        wind_speed: parsed.wind.speed,
        feels_like: parsed.main.feels_like.round() as i32,
        is_mock: false,
    })
}

fn parse_suggestions(body: &str) -> Result<Vec<String>, LookupError> {
    let entries: Vec<OwGeoEntry> =
        serde_json::from_str(body).map_err(|e| LookupError::from_json(&e))?;

    Ok(entries
        .into_iter()
        .map(|entry| format!("{}, {}", entry.name, entry.country))
        .collect())
}

fn truncate_body(body: &str) -> String {
    const MAX: usize = 200;
    if body.chars().count() > MAX {
        let prefix: String = body.chars().take(MAX).collect();
        format!("{prefix}...")
    } else {
        body.to_string()
    }
}
