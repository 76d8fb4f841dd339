//! Cursor movement for keyboard navigation.

use crossterm::event::KeyCode;
use rewind_tictactoe::Position;

/// Moves the board cursor one square in the arrow's direction.
///
/// The cursor stops at the board edge.
pub fn move_cursor(cursor: Position, key: KeyCode) -> Position {
    let (col, row) = (cursor.col(), cursor.row());
    let target = match key {
        KeyCode::Left => col.checked_sub(1).map(|col| (col, row)),
        KeyCode::Right => Some((col + 1, row)),
        KeyCode::Up => row.checked_sub(1).map(|row| (col, row)),
        KeyCode::Down => Some((col, row + 1)),
        _ => None,
    };
    target
        .and_then(|(col, row)| Position::from_col_row(col, row))
        .unwrap_or(cursor)
}

/// Maps keys `1`-`9` to cells 0-8, keypad order matching the board text.
pub fn digit_cell(key: KeyCode) -> Option<usize> {
    match key {
        KeyCode::Char(c @ '1'..='9') => c.to_digit(10).map(|d| d as usize - 1),
        _ => None,
    }
}
