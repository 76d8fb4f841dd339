//! Command-line interface for rewind_games.

use clap::{Parser, Subcommand};
use rewind_games::SortOrder;
use std::path::PathBuf;

/// Rewind Games - tic-tac-toe with a navigable move history
#[derive(Parser, Debug)]
#[command(name = "rewind_games")]
#[command(about = "Tic-tac-toe with move history time travel", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Settings file (TOML). Defaults to rewind_tictactoe.toml if present.
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Subcommand to run (defaults to `play`)
    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Play in the terminal
    Play {
        /// Move list order, overriding the settings file
        #[arg(long, value_enum)]
        sort: Option<SortOrder>,
    },

    /// Apply intents without a terminal and print the result
    Script {
        /// Intents: `N` places a mark at cell N (0-8), `@N` jumps to step N.
        /// Comma-separated lists are accepted.
        intents: Vec<String>,

        /// Print a JSON report instead of text
        #[arg(long)]
        json: bool,
    },
}
