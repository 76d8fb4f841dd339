//! Pure tic-tac-toe game logic with a navigable move history.
//!
//! # Architecture
//!
//! - **Rules**: pure functions over a single [`Board`] (win and draw detection)
//! - **Game**: owns every board snapshot plus a step pointer, and accepts
//!   exactly two intents: [`Game::apply_move`] and [`Game::jump_to`]
//! - **Invariants**: properties of a game's history checked after every
//!   transition in debug builds
//!
//! # Example
//!
//! ```
//! use rewind_tictactoe::{Game, GameStatus, Player};
//!
//! let mut game = Game::new();
//! for cell in [0, 3, 1, 4, 2] {
//!     game.apply_move(cell);
//! }
//! assert_eq!(game.status(), GameStatus::Won(Player::X));
//!
//! // Rewind two moves and take a different branch.
//! game.jump_to(2);
//! game.apply_move(6);
//! assert_eq!(game.history().len(), 4);
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod action;
mod game;
pub mod invariants;
mod position;
pub mod rules;
mod types;

pub use action::{JumpOutcome, MoveOutcome, MoveRecord, Rejection};
pub use game::Game;
pub use position::Position;
pub use types::{Board, GameStatus, Player, Square};
