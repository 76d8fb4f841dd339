//! Empty origin invariant: history starts from the empty board.

use super::Invariant;
use crate::{Board, Game};

/// Invariant: the first snapshot exists and is empty.
pub struct EmptyOriginInvariant;

impl Invariant<Game> for EmptyOriginInvariant {
    fn holds(game: &Game) -> bool {
        game.history().first() == Some(&Board::new())
    }

    fn description() -> &'static str {
        "History starts with an empty board"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Player, Position};

    #[test]
    fn test_new_game_holds() {
        assert!(EmptyOriginInvariant::holds(&Game::new()));
    }

    #[test]
    fn test_marked_origin_violates() {
        let origin = Board::new().with_mark(Position::Center, Player::X);
        let game = Game::from_parts(vec![origin], 0);
        assert!(!EmptyOriginInvariant::holds(&game));
    }

    #[test]
    fn test_missing_origin_violates() {
        let game = Game::from_parts(Vec::new(), 0);
        assert!(!EmptyOriginInvariant::holds(&game));
    }
}
