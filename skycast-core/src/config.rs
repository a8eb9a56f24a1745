use std::env;

/// Environment variable holding the OpenWeather API key.
pub const API_KEY_ENV: &str = "OPENWEATHER_API_KEY";

/// Keys shorter than this cannot be real OpenWeather credentials.
const MIN_KEY_LEN: usize = 20;

/// Sentinel values that setup instructions leave behind; treated as absent.
const PLACEHOLDER_KEYS: &[&str] = &["your_api_key_here", "YOUR_ACTUAL_API_KEY_HERE"];

/// An OpenWeather API key, possibly empty or unusable.
///
/// The key is carried as an explicit value rather than read from the
/// environment inside the lookup path, so tests can inject whatever they
/// need.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiKey(String);

impl ApiKey {
    pub fn new(key: impl Into<String>) -> Self {
        Self(key.into())
    }

    /// Read the key from `OPENWEATHER_API_KEY`, defaulting to empty when
    /// the variable is absent.
    pub fn from_env() -> Self {
        Self(env::var(API_KEY_ENV).unwrap_or_default())
    }

    /// A key is usable only if it is non-empty, not a known placeholder,
    /// and long enough to be a real credential.
    pub fn is_usable(&self) -> bool {
        !self.0.is_empty()
            && !PLACEHOLDER_KEYS.contains(&self.0.as_str())
            && self.0.len() >= MIN_KEY_LEN
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Short prefix safe to include in logs, e.g. `"abc1234567..."`.
    pub fn masked(&self) -> String {
        if self.0.chars().count() > 10 {
            let prefix: String = self.0.chars().take(10).collect();
            format!("{prefix}...")
        } else {
            self.0.clone()
        }
    }
}
