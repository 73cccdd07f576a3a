//! Teamboard server: serves the team task board over a JSON HTTP API.
//!
//! # Usage
//!
//! ```bash
//! # Run on default address 0.0.0.0:3001 with data/data.json
//! cargo run --bin teamboard
//!
//! # Custom address and data file
//! cargo run --bin teamboard -- --bind 127.0.0.1:8080 --data-file /tmp/board.json
//!
//! # Or via environment variables
//! TEAMBOARD_ADDR=127.0.0.1:8080 TEAMBOARD_LOG=debug cargo run --bin teamboard
//! ```

use std::process::ExitCode;
use std::sync::Arc;

use camino::Utf8PathBuf;
use clap::Parser;
use mockable::DefaultClock;
use teamboard::board::{
    adapters::json_file::JsonFileBoardRepository, domain::BoardDocument, services::BoardService,
};
use teamboard::config::{TeamboardCliArgs, TeamboardConfig};
use teamboard::http;
use tokio::net::TcpListener;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> ExitCode {
    let cli = TeamboardCliArgs::parse();

    let config = match TeamboardConfig::load(&cli) {
        Ok(config) => config,
        Err(err) => {
            init_tracing(cli.log_level.as_deref().unwrap_or("info"));
            tracing::error!(error = %err, "failed to load configuration");
            return ExitCode::FAILURE;
        }
    };
    init_tracing(&config.log_level);

    match run(config).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            tracing::error!(error = %err, "teamboard server failed");
            ExitCode::FAILURE
        }
    }
}

fn init_tracing(level: &str) {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    tracing_subscriber::fmt().with_env_filter(env_filter).init();
}

async fn run(config: TeamboardConfig) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    let data_file = Utf8PathBuf::try_from(config.data_file)?;
    let repository = JsonFileBoardRepository::open(&data_file)?;
    let clock = DefaultClock;

    let initial = if config.seed_sample_data {
        BoardDocument::sample(&clock)?
    } else {
        BoardDocument::empty(&clock)
    };
    if repository.ensure_initialized(&initial).await? {
        tracing::info!(path = %repository.path(), "created board data file");
    }

    let service = Arc::new(BoardService::new(Arc::new(repository), Arc::new(clock)));
    let listener = TcpListener::bind(&config.bind_addr).await?;
    tracing::info!(addr = %listener.local_addr()?, data_file = %data_file, "teamboard server listening");

    http::serve(listener, http::router(service)).await?;
    tracing::info!("teamboard server stopped");
    Ok(())
}
