//! Stateless view model: what the status line and move list say.

use crate::settings::SortOrder;
use rewind_tictactoe::{Game, MoveRecord};
use serde::Serialize;

/// One row of the move list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HistoryEntry {
    /// History step this entry jumps to.
    pub step: usize,
    /// Text shown for the entry.
    pub label: String,
    /// True for the step currently displayed.
    pub is_current: bool,
}

/// Status text for the displayed board.
pub fn status_line(game: &Game) -> String {
    game.status().to_string()
}

/// Label for a history entry.
///
/// Step 0 is the game start; later steps name the move and, when asked,
/// where it was played as `(col, row)`.
pub fn entry_label(record: Option<&MoveRecord>, show_coordinates: bool) -> String {
    match record {
        None => "Go to game start".to_string(),
        Some(record) if show_coordinates => {
            let (col, row) = record.position.coordinates();
            format!("Go to move #{} ({}, {})", record.step, col, row)
        }
        Some(record) => format!("Go to move #{}", record.step),
    }
}

/// Builds the move list, one entry per snapshot in history.
pub fn history_entries(
    game: &Game,
    order: SortOrder,
    show_coordinates: bool,
) -> Vec<HistoryEntry> {
    let start = std::iter::once(None);
    let moves = game.moves();
    let mut entries: Vec<HistoryEntry> = start
        .chain(moves.iter().map(Some))
        .enumerate()
        .map(|(step, record)| HistoryEntry {
            step,
            label: entry_label(record, show_coordinates),
            is_current: step == game.step(),
        })
        .collect();

    if order == SortOrder::Descending {
        entries.reverse();
    }
    entries
}
