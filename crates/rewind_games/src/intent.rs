//! User intents: the only two ways the view touches a game.

use derive_more::{Display, Error};
use rewind_tictactoe::{Game, JumpOutcome, MoveOutcome};
use std::str::FromStr;
use tracing::instrument;

/// A request raised by the view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
pub enum Intent {
    /// Place the current player's mark at a cell (0-8).
    #[display("{}", _0)]
    Move(usize),
    /// Show the snapshot at a history step.
    #[display("@{}", _0)]
    Jump(usize),
}

impl Intent {
    /// Forwards the intent to `game`. Returns true if the game changed.
    #[instrument(skip(game))]
    pub fn apply(self, game: &mut Game) -> bool {
        match self {
            Intent::Move(cell) => matches!(game.apply_move(cell), MoveOutcome::Applied(_)),
            Intent::Jump(step) => matches!(game.jump_to(step), JumpOutcome::Moved { .. }),
        }
    }
}

/// An intent token that could not be parsed.
#[derive(Debug, Clone, PartialEq, Eq, Display, Error)]
#[display("Invalid intent '{}': expected a cell number (0-8) or @step", token)]
pub struct IntentParseError {
    /// The offending token.
    pub token: String,
}

impl FromStr for Intent {
    type Err = IntentParseError;

    /// `N` is a move to cell N, `@N` a jump to step N.
    ///
    /// Numbers are not range-checked here; the game ignores bad ones.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let token = s.trim();
        let err = || IntentParseError {
            token: token.to_string(),
        };
        match token.strip_prefix('@') {
            Some(step) => step.parse().map(Intent::Jump).map_err(|_| err()),
            None => token.parse().map(Intent::Move).map_err(|_| err()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_move_and_jump() {
        assert_eq!("4".parse(), Ok(Intent::Move(4)));
        assert_eq!(" @2 ".parse(), Ok(Intent::Jump(2)));
        assert_eq!("12".parse(), Ok(Intent::Move(12)));
    }

    #[test]
    fn test_parse_rejects_garbage() {
        let err = "x".parse::<Intent>().unwrap_err();
        assert_eq!(err.token, "x");
        assert!("@".parse::<Intent>().is_err());
        assert!("-1".parse::<Intent>().is_err());
    }

    #[test]
    fn test_display_round_trips_syntax() {
        assert_eq!(Intent::Move(3).to_string(), "3");
        assert_eq!(Intent::Jump(0).to_string(), "@0");
    }

    #[test]
    fn test_apply_reports_change() {
        let mut game = Game::new();
        assert!(Intent::Move(0).apply(&mut game));
        assert!(!Intent::Move(0).apply(&mut game));
        assert!(Intent::Jump(0).apply(&mut game));
        assert!(!Intent::Jump(5).apply(&mut game));
    }
}
