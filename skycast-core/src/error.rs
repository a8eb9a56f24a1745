use thiserror::Error;

/// Failures surfaced to the user when a real provider call goes wrong.
///
/// The display strings are part of the user-facing contract: the web page
/// and the suggestion endpoint render them verbatim.
#[derive(Debug, Error)]
pub enum LookupError {
    /// Transport-level failure: could not send the request, timed out, or
    /// the provider answered with a non-2xx status.
    #[error("Error fetching weather data: {0}")]
    Fetch(String),

    /// The body was valid JSON but an expected field was missing.
    #[error("Unexpected API response format: {0}")]
    Schema(String),

    /// The body was not JSON at all.
    #[error("Invalid response from weather service")]
    InvalidBody,
}

impl LookupError {
    /// Classify a `serde_json` failure: syntax/eof problems mean the body
    /// was not JSON, data problems mean a field was missing or mistyped.
    pub(crate) fn from_json(err: &serde_json::Error) -> Self {
        use serde_json::error::Category;
        match err.classify() {
            Category::Data => Self::Schema(err.to_string()),
            _ => Self::InvalidBody,
        }
    }
}
