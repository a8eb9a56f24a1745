//! Binary crate for the skycast web server.
//!
//! This crate focuses on:
//! - The two HTTP endpoints (weather page, city suggestions)
//! - HTML page rendering
//! - Server configuration and startup

use tracing::info;
use tracing_subscriber::EnvFilter;

mod api;
mod config;
mod pages;
mod state;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = config::AppConfig::from_env()?;
    let bind_addr = config.bind_addr.clone();

    let app = api::router().with_state(state::AppState { config });

    let listener = tokio::net::TcpListener::bind(&bind_addr).await?;
    info!(%bind_addr, "skycast-web listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(async {
            tokio::signal::ctrl_c().await.ok();
        })
        .await?;

    Ok(())
}
