//! Rewind - Unified CLI
//!
//! Tic-tac-toe with a move history you can travel through.

#![warn(missing_docs)]

mod cli;

use anyhow::{Context, Result};
use clap::Parser;
use cli::{Cli, Command, DEFAULT_CONFIG};
use rewind::{ReplayReport, RewindConfig};
use rewind_tictactoe::{LocationSource, Position, SortOrder};
use std::path::PathBuf;
use tracing::info;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let explicit = cli.config.is_some();
    let config_path = cli.config.unwrap_or_else(|| PathBuf::from(DEFAULT_CONFIG));
    let config = RewindConfig::load(&config_path, explicit)?;

    match cli.command {
        Command::Play { sort, location } => {
            let config = apply_overrides(config, sort, location);
            run_play(&config)
        }
        Command::Replay {
            cells,
            jump,
            sort,
            location,
            json,
        } => {
            let config = apply_overrides(config, sort, location);
            run_replay(&config, &cells, jump, json)
        }
    }
}

fn apply_overrides(
    config: RewindConfig,
    sort: Option<SortOrder>,
    location: Option<LocationSource>,
) -> RewindConfig {
    let config = match sort {
        Some(sort) => config.with_sort_order(sort),
        None => config,
    };
    match location {
        Some(location) => config.with_location_source(location),
        None => config,
    }
}

fn env_filter(config: &RewindConfig) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(config.log_filter()))
}

/// Run the terminal UI
fn run_play(config: &RewindConfig) -> Result<()> {
    // Log to a file so output does not interfere with the TUI
    let log_file = std::fs::File::create(config.log_file())
        .with_context(|| format!("Failed to create log file {}", config.log_file().display()))?;
    let _ = tracing_subscriber::fmt()
        .with_env_filter(env_filter(config))
        .with_writer(std::sync::Arc::new(log_file))
        .with_ansi(false)
        .try_init();

    rewind::tui::run_tui(config)
}

/// Replay moves headlessly and print the result
fn run_replay(config: &RewindConfig, cells: &[u8], jump: Option<usize>, json: bool) -> Result<()> {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(env_filter(config))
        .with_writer(std::io::stderr)
        .try_init();

    let moves = cells
        .iter()
        .map(|c| Position::from_index(usize::from(*c)).with_context(|| format!("Cell {} is not in 0-8", c)))
        .collect::<Result<Vec<_>>>()?;

    info!(moves = moves.len(), "Replaying moves");
    let state = rewind::replay(&moves, jump, *config.sort_order())?;
    let report = ReplayReport::new(&state, *config.location_source());

    if json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        print!("{}", report.render_text());
    }
    Ok(())
}
