//! Step pointer invariant.

use super::Invariant;
use crate::Game;

/// Invariant: the step pointer indexes an existing snapshot.
pub struct StepInBoundsInvariant;

impl Invariant<Game> for StepInBoundsInvariant {
    fn holds(game: &Game) -> bool {
        game.step() < game.history().len()
    }

    fn description() -> &'static str {
        "Step pointer is within history"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Board;

    #[test]
    fn test_new_game_holds() {
        assert!(StepInBoundsInvariant::holds(&Game::new()));
    }

    #[test]
    fn test_pointer_past_end_violates() {
        let game = Game::from_parts(vec![Board::new()], 1);
        assert!(!StepInBoundsInvariant::holds(&game));
    }
}
