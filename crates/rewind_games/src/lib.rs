//! Rewind Games - terminal tic-tac-toe with move history time travel.
//!
//! # Architecture
//!
//! - **Intents**: the two requests a view may make of a game
//! - **Presenter**: status text and move list derived from a game
//! - **TUI**: ratatui front end that turns keys into intents
//! - **Script**: headless runner for a list of intents
//! - **Settings**: TOML configuration
//!
//! Game rules and history live in the `rewind_tictactoe` crate.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod intent;
mod logging;
mod presenter;
mod script;
mod settings;
mod tui;

pub use intent::{Intent, IntentParseError};
pub use logging::{LogTarget, init as init_logging};
pub use presenter::{HistoryEntry, entry_label, history_entries, status_line};
pub use script::{GameReport, Script};
pub use settings::{
    ConfigError, DEFAULT_CONFIG_FILE, DisplaySettings, LoggingSettings, Settings, SortOrder,
};
pub use tui::{App, AppAction, Focus, draw, run_tui};
