//! Outcomes of the two game intents.
//!
//! Illegal intents never fail: the game ignores them and reports why, so
//! the caller can decide whether anything needs redrawing.

use super::{Player, Position};
use serde::{Deserialize, Serialize};

/// A move recorded in history: the mark placed to produce snapshot `step`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct MoveRecord {
    /// History index of the snapshot this move produced (1-9).
    pub step: usize,
    /// The player who moved.
    pub player: Player,
    /// Where the mark was placed.
    pub position: Position,
}

impl std::fmt::Display for MoveRecord {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{} {} -> {}", self.step, self.player, self.position.label())
    }
}

/// Why an intent was ignored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, derive_more::Display)]
pub enum Rejection {
    /// The cell index is outside 0-8.
    #[display("Cell {} is off the board", _0)]
    OutOfBounds(usize),

    /// The displayed board already has a winner.
    #[display("Game is already over")]
    GameOver,

    /// The square at the position is already occupied.
    #[display("Square {} is already occupied", _0)]
    SquareOccupied(Position),

    /// The requested step is not in history.
    #[display("Step {} is not in history (length {})", step, len)]
    StepOutOfRange {
        /// Requested step.
        step: usize,
        /// History length at the time of the request.
        len: usize,
    },
}

/// Result of [`Game::apply_move`](crate::Game::apply_move).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MoveOutcome {
    /// A new snapshot was appended.
    Applied(MoveRecord),
    /// Nothing changed.
    Ignored(Rejection),
}

impl MoveOutcome {
    /// Returns true if the game state changed.
    pub fn is_applied(&self) -> bool {
        matches!(self, MoveOutcome::Applied(_))
    }
}

/// Result of [`Game::jump_to`](crate::Game::jump_to).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum JumpOutcome {
    /// The step pointer now refers to `step`.
    Moved {
        /// Pointer before the jump.
        from: usize,
        /// Pointer after the jump.
        step: usize,
    },
    /// Nothing changed.
    Ignored(Rejection),
}

impl JumpOutcome {
    /// Returns true if the jump was accepted.
    ///
    /// Jumping to the step already displayed counts as accepted.
    pub fn is_applied(&self) -> bool {
        matches!(self, JumpOutcome::Moved { .. })
    }
}
