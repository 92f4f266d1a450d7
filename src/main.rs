use anyhow::{Context, Result};
use clap::Parser;
use env_logger::Env;

use finnhub_cli::app;
use finnhub_cli::cli::{normalize_legacy_flags, Cli};

fn main() -> Result<()> {
    env_logger::Builder::from_env(Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse_from(normalize_legacy_flags(std::env::args()));
    app::run(&cli).context("Failed to run finnhub-cli")?;

    Ok(())
}
