//! Alternating mark invariant: X and O take turns, X first.

use super::Invariant;
use crate::{Game, Player};

/// Invariant: the mark added by snapshot k belongs to the player to move at
/// step k-1 (X for odd k, O for even k).
pub struct AlternatingMarkInvariant;

impl Invariant<Game> for AlternatingMarkInvariant {
    fn holds(game: &Game) -> bool {
        game.history().windows(2).enumerate().all(|(i, pair)| {
            pair[0]
                .diff(&pair[1])
                .all(|pos| pair[1].get(pos).player() == Some(Player::for_step(i)))
        })
    }

    fn description() -> &'static str {
        "Marks alternate X, O, X, ... by step"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Board, Position};

    #[test]
    fn test_played_game_holds() {
        let mut game = Game::new();
        for i in [0, 4, 8, 2] {
            game.apply_move(i);
        }
        assert!(AlternatingMarkInvariant::holds(&game));
    }

    #[test]
    fn test_o_moving_first_violates() {
        let first = Board::new().with_mark(Position::Center, Player::O);
        let game = Game::from_parts(vec![Board::new(), first], 1);
        assert!(!AlternatingMarkInvariant::holds(&game));
    }

    #[test]
    fn test_same_player_twice_violates() {
        let first = Board::new().with_mark(Position::Center, Player::X);
        let second = first.with_mark(Position::TopLeft, Player::X);
        let game = Game::from_parts(vec![Board::new(), first, second], 2);
        assert!(!AlternatingMarkInvariant::holds(&game));
    }
}
