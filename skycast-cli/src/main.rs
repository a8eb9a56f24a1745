//! Binary crate for the skycast diagnostic tools.
//!
//! This crate focuses on:
//! - Checking what API key the app would pick up from the environment
//! - Probing the live provider endpoint to verify the key works

use clap::Parser;

mod cli;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cmd = cli::Cli::parse();
    cmd.run().await
}
