//! Command-line interface for rewind.

use clap::{Parser, Subcommand};
use rewind_tictactoe::{LocationSource, SortOrder};
use std::path::PathBuf;

/// Default config file looked up in the working directory.
pub const DEFAULT_CONFIG: &str = "rewind.toml";

/// Rewind - tic-tac-toe with a move history you can travel through
#[derive(Parser, Debug)]
#[command(name = "rewind")]
#[command(about = "Tic-tac-toe with time travel", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to the TOML config file
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Play in the terminal UI
    Play {
        /// Initial move list order (overrides config)
        #[arg(long)]
        sort: Option<SortOrder>,

        /// Row/column source for move list entries (overrides config)
        #[arg(long)]
        location: Option<LocationSource>,
    },

    /// Replay moves without a UI and print the resulting views
    Replay {
        /// Cell indices (0-8, row-major) played in order, X first
        #[arg(value_parser = clap::value_parser!(u8).range(0..=8))]
        cells: Vec<u8>,

        /// Jump to this history entry after playing
        #[arg(long)]
        jump: Option<usize>,

        /// Move list order (overrides config)
        #[arg(long)]
        sort: Option<SortOrder>,

        /// Row/column source for move list entries (overrides config)
        #[arg(long)]
        location: Option<LocationSource>,

        /// Print a JSON report instead of text
        #[arg(long)]
        json: bool,
    },
}
