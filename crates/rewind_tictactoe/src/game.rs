//! The game state manager: board history plus a step pointer.
//!
//! `Game` owns every snapshot from the empty board up to the furthest move
//! made. The step pointer selects the displayed snapshot; turn, winner and
//! status are all derived from that snapshot and never stored.

use super::action::{JumpOutcome, MoveOutcome, MoveRecord, Rejection};
use super::invariants::{GameInvariants, InvariantSet};
use super::rules::{check_winner, is_draw, winning_line};
use super::{Board, GameStatus, Player, Position};
use serde::Serialize;
use tracing::{debug, info, instrument};

/// Tic-tac-toe game with navigable history.
///
/// Only [`Game::apply_move`] and [`Game::jump_to`] change state; everything
/// else is a read accessor.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Game {
    history: Vec<Board>,
    step: usize,
}

impl Game {
    /// Creates a new game: one empty snapshot, pointer at 0.
    #[instrument]
    pub fn new() -> Self {
        Self {
            history: vec![Board::new()],
            step: 0,
        }
    }

    /// Builds a game from raw parts without checking invariants.
    #[cfg(test)]
    pub(crate) fn from_parts(history: Vec<Board>, step: usize) -> Self {
        Self { history, step }
    }

    /// Places the current player's mark at cell `index` (0-8).
    ///
    /// Ignored, leaving the game untouched, when the index is off the board,
    /// the displayed board already has a winner, or the square is taken.
    /// Otherwise any snapshots after the current step are discarded before
    /// the new one is appended, and the pointer moves to it.
    #[instrument(skip(self), fields(step = self.step))]
    pub fn apply_move(&mut self, index: usize) -> MoveOutcome {
        let Some(position) = Position::from_index(index) else {
            return Self::ignore_move(Rejection::OutOfBounds(index));
        };

        let current = *self.current();
        if check_winner(&current).is_some() {
            return Self::ignore_move(Rejection::GameOver);
        }
        if !current.is_empty(position) {
            return Self::ignore_move(Rejection::SquareOccupied(position));
        }

        let player = self.to_move();
        let discarded = self.history.len() - (self.step + 1);
        self.history.truncate(self.step + 1);
        self.history.push(current.with_mark(position, player));
        self.step = self.history.len() - 1;

        debug_assert!(GameInvariants::check_all(self).is_ok());

        let record = MoveRecord {
            step: self.step,
            player,
            position,
        };
        info!(%record, discarded, "Move applied");
        MoveOutcome::Applied(record)
    }

    /// Moves the step pointer to `step`, leaving history untouched.
    ///
    /// Ignored when `step` is not an index into history.
    #[instrument(skip(self), fields(from = self.step, len = self.history.len()))]
    pub fn jump_to(&mut self, step: usize) -> JumpOutcome {
        let len = self.history.len();
        if step >= len {
            let reason = Rejection::StepOutOfRange { step, len };
            debug!(%reason, "Jump ignored");
            return JumpOutcome::Ignored(reason);
        }

        let from = self.step;
        self.step = step;

        debug_assert!(GameInvariants::check_all(self).is_ok());

        info!(from, step, to_move = %self.to_move(), "Jumped");
        JumpOutcome::Moved { from, step }
    }

    fn ignore_move(reason: Rejection) -> MoveOutcome {
        debug!(%reason, "Move ignored");
        MoveOutcome::Ignored(reason)
    }

    /// All snapshots, oldest first. `history()[0]` is the empty board.
    pub fn history(&self) -> &[Board] {
        &self.history
    }

    /// Index of the displayed snapshot.
    pub fn step(&self) -> usize {
        self.step
    }

    /// The displayed snapshot.
    pub fn current(&self) -> &Board {
        &self.history[self.step]
    }

    /// Returns true when the pointer is at the newest snapshot.
    pub fn is_latest(&self) -> bool {
        self.step + 1 == self.history.len()
    }

    /// Player to move at the current step.
    pub fn to_move(&self) -> Player {
        Player::for_step(self.step)
    }

    /// Winner on the displayed snapshot.
    pub fn winner(&self) -> Option<Player> {
        check_winner(self.current())
    }

    /// The three squares that won the displayed snapshot.
    pub fn winning_line(&self) -> Option<[Position; 3]> {
        winning_line(self.current())
    }

    /// Status of the displayed snapshot.
    #[instrument(skip(self), fields(step = self.step))]
    pub fn status(&self) -> GameStatus {
        if let Some(winner) = self.winner() {
            GameStatus::Won(winner)
        } else if is_draw(self.current()) {
            GameStatus::Draw
        } else {
            GameStatus::InProgress {
                to_move: self.to_move(),
            }
        }
    }

    /// One record per move in history, including moves after the pointer.
    pub fn moves(&self) -> Vec<MoveRecord> {
        self.history
            .windows(2)
            .enumerate()
            .filter_map(|(i, pair)| {
                let position = pair[0].diff(&pair[1]).next()?;
                let player = pair[1].get(position).player()?;
                Some(MoveRecord {
                    step: i + 1,
                    player,
                    position,
                })
            })
            .collect()
    }
}

impl Default for Game {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Square;

    fn play(indices: &[usize]) -> Game {
        let mut game = Game::new();
        for &i in indices {
            assert!(game.apply_move(i).is_applied(), "move {} rejected", i);
        }
        game
    }

    #[test]
    fn test_new_game() {
        let game = Game::new();
        assert_eq!(game.history().len(), 1);
        assert_eq!(game.step(), 0);
        assert_eq!(*game.current(), Board::new());
        assert_eq!(game.to_move(), Player::X);
        assert_eq!(game.status(), GameStatus::InProgress { to_move: Player::X });
        assert!(game.is_latest());
    }

    #[test]
    fn test_apply_move_appends_snapshot() {
        let mut game = Game::new();
        let outcome = game.apply_move(4);
        assert_eq!(
            outcome,
            MoveOutcome::Applied(MoveRecord {
                step: 1,
                player: Player::X,
                position: Position::Center,
            })
        );
        assert_eq!(game.history().len(), 2);
        assert_eq!(game.step(), 1);
        assert_eq!(game.history()[0], Board::new());
        assert_eq!(game.current().get(Position::Center), Square::Occupied(Player::X));
        assert_eq!(game.to_move(), Player::O);
    }

    #[test]
    fn test_occupied_square_is_ignored() {
        let mut game = play(&[4]);
        let before = game.clone();
        assert_eq!(
            game.apply_move(4),
            MoveOutcome::Ignored(Rejection::SquareOccupied(Position::Center))
        );
        assert_eq!(game, before);
    }

    #[test]
    fn test_out_of_bounds_is_ignored() {
        let mut game = play(&[0]);
        let before = game.clone();
        assert_eq!(game.apply_move(9), MoveOutcome::Ignored(Rejection::OutOfBounds(9)));
        assert_eq!(game, before);
    }

    #[test]
    fn test_moves_after_win_are_ignored() {
        let mut game = play(&[0, 3, 1, 4, 2]);
        assert_eq!(game.winner(), Some(Player::X));
        let before = game.clone();
        assert_eq!(game.apply_move(8), MoveOutcome::Ignored(Rejection::GameOver));
        assert_eq!(game, before);
    }

    #[test]
    fn test_jump_keeps_history() {
        let mut game = play(&[0, 3, 1]);
        let history = game.history().to_vec();
        assert_eq!(game.jump_to(1), JumpOutcome::Moved { from: 3, step: 1 });
        assert_eq!(game.step(), 1);
        assert_eq!(game.history(), history.as_slice());
        assert_eq!(game.to_move(), Player::O);
        assert!(!game.is_latest());
    }

    #[test]
    fn test_jump_out_of_range_is_ignored() {
        let mut game = play(&[0, 3]);
        let before = game.clone();
        assert_eq!(
            game.jump_to(3),
            JumpOutcome::Ignored(Rejection::StepOutOfRange { step: 3, len: 3 })
        );
        assert_eq!(game, before);
    }

    #[test]
    fn test_move_after_jump_discards_future() {
        let mut game = play(&[0, 3, 1, 4]);
        game.jump_to(1);
        let outcome = game.apply_move(8);
        assert!(outcome.is_applied());
        assert_eq!(game.history().len(), 3);
        assert_eq!(game.step(), 2);
        assert_eq!(game.current().get(Position::BottomRight), Square::Occupied(Player::O));
        assert!(game.current().is_empty(Position::MiddleLeft));
    }

    #[test]
    fn test_rewinding_past_a_win_reopens_play() {
        let mut game = play(&[0, 3, 1, 4, 2]);
        game.jump_to(4);
        assert_eq!(game.winner(), None);
        assert!(game.apply_move(5).is_applied());
        assert_eq!(game.history().len(), 6);
    }

    #[test]
    fn test_moves_lists_every_snapshot() {
        let mut game = play(&[4, 0, 8]);
        game.jump_to(0);
        let moves = game.moves();
        assert_eq!(moves.len(), 3);
        assert_eq!(moves[0].position, Position::Center);
        assert_eq!(moves[1].player, Player::O);
        assert_eq!(moves[2].step, 3);
    }
}
