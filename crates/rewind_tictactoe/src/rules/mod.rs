//! Game rules for tic-tac-toe.
//!
//! Pure functions that evaluate a single board snapshot. They know nothing
//! about history or turn order, so they also accept boards that could never
//! arise in play.

pub mod draw;
pub mod win;

pub use draw::{is_draw, is_full};
pub use win::{LINES, check_winner, winning_line};
