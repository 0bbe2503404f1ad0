//! Tabela - football league standings in your terminal
//!
//! Fetches standings from football-data.org (or a local cache when fresh
//! enough) and prints a color-coded table.

use thiserror::Error;

use tabela::cli::Cli;
use tabela::clock::SystemClock;
use tabela::config::{Config, ConfigError};
use tabela::data::StandingsClient;
use tabela::provider::{ProviderError, StandingsProvider};
use tabela::table::{render, RenderError, RenderOptions};
use tabela::cache::CacheStore;

/// Fatal error from any stage of a run
#[derive(Debug, Error)]
enum AppError {
    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("standings error: {0}")]
    Provider(#[from] ProviderError),

    #[error("render error: {0}")]
    Render(#[from] RenderError),
}

async fn run(cli: Cli) -> Result<(), AppError> {
    let config = Config::from_env()?;

    let client = StandingsClient::new(config.api_token.clone(), config.request_timeout)
        .map_err(ProviderError::Fetch)?;
    let store = CacheStore::new(config.cache_dir.clone());
    let provider = StandingsProvider::new(client, store, config.ttl, SystemClock);

    let report = provider.get_standings(&cli.competition, cli.refresh).await?;

    if let Some(previous) = report.previous_update {
        println!(
            "Last update:\n{}",
            previous.format("%A, %d/%m/%Y %H:%M (dd/mm/yyyy)")
        );
    }

    let options = RenderOptions::for_terminal(&cli.competition, cli.simple);
    render(&report.snapshot, &options)?;

    Ok(())
}

#[tokio::main]
async fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse_lenient();
    if let Err(err) = run(cli).await {
        eprintln!("tabela: {}", err);
        std::process::exit(1);
    }
}
