//! HTTP handlers for the weather page and the suggestion endpoint.
//!
//! - `GET /` - search form
//! - `POST /` - form field `city`, renders the page with a result or error
//! - `GET /city-suggestions?q=` - JSON array of "City, CC" strings

use crate::pages;
use crate::state::AppState;
use axum::{
    Form, Json, Router,
    extract::{Query, State},
    http::StatusCode,
    response::{Html, IntoResponse, Response},
    routing::get,
};
use serde::{Deserialize, Serialize};
use skycast_core::{ApiKey, LookupError, OpenWeatherProvider, WeatherService};
use tracing::info;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(index).post(search))
        .route("/city-suggestions", get(city_suggestions))
}

/// Build a service for one request.
///
/// The key is re-read from the environment on every call, so rotating it
/// does not require a restart.
fn service_for(state: &AppState) -> WeatherService {
    let api_key = ApiKey::from_env();
    let provider = OpenWeatherProvider::new(api_key.clone())
        .with_timeout(state.config.request_timeout);
    WeatherService::with_provider(api_key, Box::new(provider))
}

#[derive(Deserialize)]
struct CityForm {
    #[serde(default)]
    city: String,
}

#[derive(Deserialize)]
struct SuggestQuery {
    #[serde(default)]
    q: String,
}

#[derive(Serialize)]
struct ErrorResponse {
    error: String,
}

async fn index() -> Html<String> {
    Html(pages::render_index(None, None))
}

async fn search(State(state): State<AppState>, Form(form): Form<CityForm>) -> Html<String> {
    let city = form.city.trim();

    // Blank input: just show the form again, no lookup and no error.
    if city.is_empty() {
        return Html(pages::render_index(None, None));
    }

    match service_for(&state).lookup(city).await {
        Ok(report) => {
            info!(%city, is_mock = report.is_mock, "weather lookup succeeded");
            Html(pages::render_index(Some(&report), None))
        }
        Err(err) => {
            info!(%city, error = %err, "weather lookup failed");
            Html(pages::render_index(None, Some(&err.to_string())))
        }
    }
}

async fn city_suggestions(
    State(state): State<AppState>,
    Query(params): Query<SuggestQuery>,
) -> Response {
    suggestions_response(service_for(&state).suggest(&params.q).await)
}

/// Wire shape for the suggestion endpoint: a bare JSON array on success,
/// `500 {"error": ...}` on failure. The frontend script tells the two
/// apart with `Array.isArray`.
fn suggestions_response(result: Result<Vec<String>, LookupError>) -> Response {
    match result {
        Ok(suggestions) => Json(suggestions).into_response(),
        Err(err) => (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ErrorResponse { error: err.to_string() }),
        )
            .into_response(),
    }
}
