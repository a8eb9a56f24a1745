use serde::{Deserialize, Serialize};

/// Current weather for one city, shaped for display.
///
/// Built fresh per request and handed straight back to the caller; nothing
/// in the crate holds on to one.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeatherReport {
    pub city: String,
    /// Two-letter country code, e.g. "GB".
    pub country: String,
    /// Degrees Celsius, rounded half-away-from-zero.
    pub temperature: i32,
    /// Title-cased, e.g. "Clear Sky".
    pub description: String,
    /// Provider icon code, e.g. "01d".
    pub icon: String,
    /// Percent relative humidity.
    pub humidity: u8,
    pub wind_speed: f64,
    /// Degrees Celsius, rounded half-away-from-zero.
    pub feels_like: i32,
    /// True when the report was synthesized rather than fetched.
    pub is_mock: bool,
}

/// Capitalize the first letter of each whitespace-separated word and
/// lowercase the rest, e.g. `"clear sky"` -> `"Clear Sky"`.
pub fn title_case(s: &str) -> String {
    s.split_whitespace()
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => {
                    first.to_uppercase().collect::<String>() + &chars.as_str().to_lowercase()
                }
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}
