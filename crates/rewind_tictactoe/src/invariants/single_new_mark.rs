//! Single new mark invariant: each snapshot adds exactly one mark.

use super::Invariant;
use crate::{Board, Game};

/// Invariant: snapshot k differs from snapshot k-1 in exactly one square,
/// and that square was empty in snapshot k-1.
///
/// Since exactly one square changes, every earlier mark is retained.
pub struct SingleNewMarkInvariant;

impl SingleNewMarkInvariant {
    fn step_holds(prev: &Board, next: &Board) -> bool {
        let mut changed = prev.diff(next);
        match (changed.next(), changed.next()) {
            (Some(pos), None) => prev.is_empty(pos) && !next.is_empty(pos),
            _ => false,
        }
    }
}

impl Invariant<Game> for SingleNewMarkInvariant {
    fn holds(game: &Game) -> bool {
        game.history()
            .windows(2)
            .all(|pair| Self::step_holds(&pair[0], &pair[1]))
    }

    fn description() -> &'static str {
        "Each snapshot adds exactly one mark to an empty square"
    }
}
