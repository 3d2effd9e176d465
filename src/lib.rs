//! Rewind - tic-tac-toe with time travel
//!
//! The game logic lives in [`rewind_tictactoe`]; this crate adds the
//! surfaces around it.
//!
//! # Architecture
//!
//! - **Config**: TOML settings with CLI overrides ([`RewindConfig`])
//! - **TUI**: ratatui board, status line, sort toggle and clickable history
//! - **Replay**: headless playback that prints the same views as text or JSON

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod config;
mod replay;
pub mod tui;

pub use config::{ConfigError, RewindConfig};
pub use replay::{ReplayReport, replay};
