//! Arcade - Unified CLI
//!
//! Picks a game, loads settings and plays it on stdin/stdout.

#![warn(missing_docs)]

mod cli;

use anyhow::{Context, Result};
use arcade::{
    ArcadeConfig, CirclesSession, RpsSession, SEED_ENV, Session, TicTacToeSession, run_session,
};
use clap::Parser;
use cli::{Cli, Command};
use tracing::{info, instrument};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info,arcade=debug")),
        )
        .with_writer(std::io::stderr)
        .init();

    let config = load_config(&cli)?;
    info!(seed = ?config.seed(), "Starting arcade");

    let mut session: Box<dyn Session> = match cli.command {
        Command::Tictactoe { mode, difficulty } => Box::new(TicTacToeSession::from_config(
            &config.with_mode(mode).with_difficulty(difficulty),
        )),
        Command::Rps { difficulty } => {
            Box::new(RpsSession::from_config(&config.with_difficulty(difficulty)))
        }
        Command::Circles => Box::new(CirclesSession::from_config(&config)),
    };

    let stdin = std::io::stdin();
    let stdout = std::io::stdout();
    run_session(session.as_mut(), stdin.lock(), stdout.lock())
}

/// Resolves settings: config file, then `ARCADE_SEED`, then `--seed`.
#[instrument(skip_all, fields(config_path = %cli.config.display()))]
fn load_config(cli: &Cli) -> Result<ArcadeConfig> {
    let config = ArcadeConfig::load(&cli.config)
        .with_context(|| format!("Failed to load config from {}", cli.config.display()))?;
    let config = config
        .with_seed_env(std::env::var(SEED_ENV).ok())
        .context("Invalid seed in environment")?;
    Ok(config.with_seed(cli.seed))
}
