use tracing::debug;

use crate::config::ApiKey;
use crate::error::LookupError;
use crate::mock;
use crate::model::WeatherReport;
use crate::provider::{WeatherProvider, openweather::OpenWeatherProvider};

/// The weather-lookup-with-fallback procedure.
///
/// Holds the API key and a provider; when the key is unusable the lookup
/// silently substitutes mock data instead of failing, so a fresh checkout
/// with no credentials still renders a weather card.
#[derive(Debug)]
pub struct WeatherService {
    api_key: ApiKey,
    provider: Box<dyn WeatherProvider>,
}

impl WeatherService {
    /// Service backed by the real OpenWeather endpoints.
    pub fn new(api_key: ApiKey) -> Self {
        let provider = Box::new(OpenWeatherProvider::new(api_key.clone()));
        Self { api_key, provider }
    }

    /// Service backed by an arbitrary provider, for tests and stubs.
    pub fn with_provider(api_key: ApiKey, provider: Box<dyn WeatherProvider>) -> Self {
        Self { api_key, provider }
    }

    /// Current weather for `city`.
    ///
    /// With an unusable key this never touches the network and never fails;
    /// with a usable key, provider errors pass through unchanged. Callers
    /// are expected to skip the call entirely for blank city names.
    pub async fn lookup(&self, city: &str) -> Result<WeatherReport, LookupError> {
        if !self.api_key.is_usable() {
            debug!(key = %self.api_key.masked(), %city, "no usable API key, serving mock data");
            return Ok(mock::generate(city));
        }

        debug!(key = %self.api_key.masked(), %city, "fetching real weather data");
        self.provider.current_weather(city).await
    }

    /// City-name completions for a partial `query`.
    ///
    /// A blank query short-circuits to an empty list with no provider call.
    /// Key validity is intentionally not checked here: an unusable key just
    /// makes the provider call fail, and the boundary reports that error.
    pub async fn suggest(&self, query: &str) -> Result<Vec<String>, LookupError> {
        if query.trim().is_empty() {
            return Ok(Vec::new());
        }

        self.provider.suggest_cities(query).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    /// Provider stub that counts calls and replays canned answers.
    #[derive(Debug)]
    struct StubProvider {
        calls: Arc<AtomicUsize>,
        weather: Option<WeatherReport>,
        suggestions: Vec<String>,
    }

    impl StubProvider {
        fn new(calls: Arc<AtomicUsize>) -> Self {
            Self { calls, weather: None, suggestions: Vec::new() }
        }
    }

    #[async_trait]
    impl WeatherProvider for StubProvider {
        async fn current_weather(&self, _city: &str) -> Result<WeatherReport, LookupError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            self.weather
                .clone()
                .ok_or_else(|| LookupError::Fetch("stub has no weather".into()))
        }

        async fn suggest_cities(&self, _query: &str) -> Result<Vec<String>, LookupError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            Ok(self.suggestions.clone())
        }
    }

    fn report(city: &str) -> WeatherReport {
        WeatherReport {
            city: city.to_string(),
            country: "GB".to_string(),
            temperature: 16,
            description: "Clear Sky".to_string(),
            icon: "01d".to_string(),
            humidity: 80,
            wind_speed: 3.6,
            feels_like: 15,
            is_mock: false,
        }
    }

    #[tokio::test]
    async fn unusable_key_serves_mock_without_touching_provider() {
        let calls = Arc::new(AtomicUsize::new(0));

        for key in ["", "your_api_key_here", "YOUR_ACTUAL_API_KEY_HERE", "short"] {
            let service = WeatherService::with_provider(
                ApiKey::new(key),
                Box::new(StubProvider::new(calls.clone())),
            );
            let result = service.lookup("london").await.expect("mock never fails");
            assert!(result.is_mock);
            assert_eq!(result.city, "London");
        }

        assert_eq!(calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn usable_key_delegates_to_provider() {
        let calls = Arc::new(AtomicUsize::new(0));
        let mut stub = StubProvider::new(calls.clone());
        stub.weather = Some(report("London"));

        let service =
            WeatherService::with_provider(ApiKey::new("a1234567890123456789"), Box::new(stub));

        let result = service.lookup("London").await.expect("stub succeeds");
        assert!(!result.is_mock);
        assert_eq!(result.city, "London");
        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn provider_errors_pass_through_with_usable_key() {
        let calls = Arc::new(AtomicUsize::new(0));
        let stub = StubProvider::new(calls.clone());

        let service =
            WeatherService::with_provider(ApiKey::new("a1234567890123456789"), Box::new(stub));

        let err = service.lookup("London").await.unwrap_err();
        assert!(err.to_string().starts_with("Error fetching weather data:"));
    }

    #[tokio::test]
    async fn blank_suggestion_query_skips_provider() {
        let calls = Arc::new(AtomicUsize::new(0));
        let stub = StubProvider::new(calls.clone());

        let service = WeatherService::with_provider(ApiKey::new(""), Box::new(stub));

        assert!(service.suggest("").await.expect("empty query").is_empty());
        assert!(service.suggest("   ").await.expect("blank query").is_empty());
        assert_eq!(calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn suggestions_flow_even_with_unusable_key() {
        let calls = Arc::new(AtomicUsize::new(0));
        let mut stub = StubProvider::new(calls.clone());
        stub.suggestions = vec!["London, GB".to_string(), "London, CA".to_string()];

        // key validity is not a precondition for suggestions
        let service = WeatherService::with_provider(ApiKey::new(""), Box::new(stub));

        let suggestions = service.suggest("lond").await.expect("stub succeeds");
        assert_eq!(suggestions, vec!["London, GB", "London, CA"]);
        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }
}
