use anyhow::bail;
use clap::{Parser, Subcommand};
use skycast_core::{ApiKey, OpenWeatherProvider, WeatherProvider};
use std::path::Path;

/// Top-level CLI struct.
#[derive(Debug, Parser)]
#[command(name = "skycast", version, about = "Skycast diagnostics")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Report which API key the app would read, without calling anyone.
    CheckKey,

    /// Call the live current-weather endpoint to verify the key works.
    TestKey {
        /// Cities to probe; defaults to London.
        #[arg(default_value = "London")]
        cities: Vec<String>,
    },
}

impl Cli {
    pub async fn run(self) -> anyhow::Result<()> {
        // Same .env loading the web server does.
        dotenvy::dotenv().ok();

        match self.command {
            Command::CheckKey => check_key(),
            Command::TestKey { cities } => test_key(&cities).await,
        }
    }
}

fn check_key() -> anyhow::Result<()> {
    println!("Checking API key configuration...");

    if Path::new(".env").exists() {
        println!(".env file found in the current directory");
    } else {
        println!("no .env file in the current directory (environment variables still apply)");
    }

    let key = ApiKey::from_env();

    if key.is_empty() {
        println!("OPENWEATHER_API_KEY is not set; the app will serve mock data");
        return Ok(());
    }

    println!("OPENWEATHER_API_KEY = {} ({} chars)", key.masked(), key.len());

    if key.is_usable() {
        println!("key looks valid; run `skycast test-key` to verify it against the API");
    } else {
        println!("key is a placeholder or too short; the app will serve mock data");
    }

    Ok(())
}

async fn test_key(cities: &[String]) -> anyhow::Result<()> {
    let key = ApiKey::from_env();

    if key.is_empty() {
        bail!("OPENWEATHER_API_KEY is not set; nothing to test");
    }

    println!("Testing OpenWeather API key {}", key.masked());

    let provider = OpenWeatherProvider::new(key);
    let mut failures = 0usize;

    for city in cities {
        match provider.current_weather(city).await {
            Ok(report) => {
                println!(
                    "{}, {}: {}\u{b0}C, {} (humidity {}%, wind {} m/s)",
                    report.city,
                    report.country,
                    report.temperature,
                    report.description,
                    report.humidity,
                    report.wind_speed,
                );
            }
            Err(err) => {
                failures += 1;
                println!("{city}: {err}");
            }
        }
    }

    if failures > 0 {
        bail!("{failures} of {} lookups failed", cities.len());
    }

    println!("API key is working");
    Ok(())
}
