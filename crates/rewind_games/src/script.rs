//! Headless runner: play a list of intents and report the result.

use crate::intent::{Intent, IntentParseError};
use crate::presenter::{HistoryEntry, history_entries, status_line};
use crate::settings::SortOrder;
use rewind_tictactoe::{Board, Game, GameStatus, MoveRecord, Position};
use serde::Serialize;
use tracing::{debug, info, instrument};

/// A parsed list of intents.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Script {
    intents: Vec<Intent>,
}

impl Script {
    /// Parses tokens such as `["0,3", "1", "@2"]`.
    ///
    /// Each token may hold several comma-separated intents.
    #[instrument(skip(tokens))]
    pub fn parse<S: AsRef<str>>(tokens: &[S]) -> Result<Self, IntentParseError> {
        let intents = tokens
            .iter()
            .flat_map(|token| token.as_ref().split(','))
            .filter(|part| !part.trim().is_empty())
            .map(str::parse)
            .collect::<Result<Vec<Intent>, _>>()?;
        debug!(count = intents.len(), "Script parsed");
        Ok(Self { intents })
    }

    /// The parsed intents, in order.
    pub fn intents(&self) -> &[Intent] {
        &self.intents
    }

    /// Plays every intent against a fresh game.
    #[instrument(skip(self), fields(intents = self.intents.len()))]
    pub fn run(&self) -> Game {
        let mut game = Game::new();
        let applied = self
            .intents
            .iter()
            .filter(|intent| intent.apply(&mut game))
            .count();
        info!(
            applied,
            ignored = self.intents.len() - applied,
            "Script finished"
        );
        game
    }
}

/// Everything the view would show for a game, in serializable form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GameReport {
    /// Displayed snapshot.
    pub board: Board,
    /// Displayed step.
    pub step: usize,
    /// Number of snapshots in history.
    pub history_len: usize,
    /// Derived status.
    pub status: GameStatus,
    /// Status text.
    pub status_line: String,
    /// Winning squares, if any.
    pub winning_line: Option<[Position; 3]>,
    /// Every move in history.
    pub moves: Vec<MoveRecord>,
    /// The move list as shown.
    pub entries: Vec<HistoryEntry>,
}

impl GameReport {
    /// Captures the view of `game`.
    pub fn new(game: &Game, order: SortOrder, show_coordinates: bool) -> Self {
        Self {
            board: *game.current(),
            step: game.step(),
            history_len: game.history().len(),
            status: game.status(),
            status_line: status_line(game),
            winning_line: game.winning_line(),
            moves: game.moves(),
            entries: history_entries(game, order, show_coordinates),
        }
    }

    /// Plain-text rendering: board, status, then the move list with the
    /// current entry marked.
    pub fn to_text(&self) -> String {
        let mut out = format!("{}\n\n{}\n", self.board.display(), self.status_line);
        for entry in &self.entries {
            let marker = if entry.is_current { ">" } else { " " };
            out.push_str(&format!("{} {}\n", marker, entry.label));
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rewind_tictactoe::Player;

    #[test]
    fn test_parse_mixed_tokens() {
        let script = Script::parse(&["0,3", "1", "@2", ""]).expect("valid");
        assert_eq!(
            script.intents(),
            [Intent::Move(0), Intent::Move(3), Intent::Move(1), Intent::Jump(2)]
        );
    }

    #[test]
    fn test_parse_error_names_token() {
        let err = Script::parse(&["0", "top"]).unwrap_err();
        assert_eq!(err.token, "top");
    }

    #[test]
    fn test_run_skips_ignored_intents() {
        let script = Script::parse(&["0", "0", "@9", "4"]).expect("valid");
        let game = script.run();
        assert_eq!(game.history().len(), 3);
        assert_eq!(game.moves()[1].player, Player::O);
    }

    #[test]
    fn test_report_text() {
        let game = Script::parse(&["0,3,1,4,2,@2"]).expect("valid").run();
        let report = GameReport::new(&game, SortOrder::Ascending, false);
        assert_eq!(report.status, GameStatus::InProgress { to_move: Player::X });
        assert_eq!(report.history_len, 6);
        let text = report.to_text();
        assert!(text.starts_with("X|2|3\n-+-+-\nO|5|6"));
        assert!(text.contains("> Go to move #2\n"));
        assert!(text.contains("  Go to move #5\n"));
    }
}
