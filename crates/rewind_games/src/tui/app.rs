//! Application state and key handling.

use super::input::{digit_cell, move_cursor};
use crate::intent::Intent;
use crate::presenter::{HistoryEntry, history_entries};
use crate::settings::{DisplaySettings, SortOrder};
use crossterm::event::{KeyCode, KeyEvent};
use rewind_tictactoe::{Game, Position};
use tracing::{debug, instrument};

/// Which pane receives arrow keys and Enter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Focus {
    /// The board: arrows move the cursor, Enter places a mark.
    #[default]
    Board,
    /// The move list: arrows select an entry, Enter jumps to it.
    History,
}

impl Focus {
    /// Toggles between `Board` and `History`.
    pub fn toggle(self) -> Self {
        match self {
            Self::Board => Self::History,
            Self::History => Self::Board,
        }
    }
}

/// What the event loop should do after a key.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppAction {
    /// Keep running.
    Continue,
    /// Leave the UI.
    Quit,
}

/// Main application state.
///
/// Owns the one `Game`; everything drawn is read from it.
#[derive(Debug, Clone)]
pub struct App {
    game: Game,
    cursor: Position,
    focus: Focus,
    selected: usize,
    sort_order: SortOrder,
    show_coordinates: bool,
}

impl App {
    /// Creates a new application with a fresh game.
    pub fn new(display: &DisplaySettings) -> Self {
        Self {
            game: Game::new(),
            cursor: Position::Center,
            focus: Focus::Board,
            selected: 0,
            sort_order: *display.sort_order(),
            show_coordinates: *display.show_coordinates(),
        }
    }

    /// The game being played.
    pub fn game(&self) -> &Game {
        &self.game
    }

    /// Board cursor.
    pub fn cursor(&self) -> Position {
        self.cursor
    }

    /// Focused pane.
    pub fn focus(&self) -> Focus {
        self.focus
    }

    /// Step highlighted in the move list.
    pub fn selected(&self) -> usize {
        self.selected
    }

    /// Move list order.
    pub fn sort_order(&self) -> SortOrder {
        self.sort_order
    }

    /// The move list as currently shown.
    pub fn entries(&self) -> Vec<HistoryEntry> {
        history_entries(&self.game, self.sort_order, self.show_coordinates)
    }

    /// Handles one key press.
    #[instrument(skip(self, key), fields(code = ?key.code, focus = ?self.focus))]
    pub fn handle_key(&mut self, key: KeyEvent) -> AppAction {
        if let Some(cell) = digit_cell(key.code) {
            self.dispatch(Intent::Move(cell));
            return AppAction::Continue;
        }

        match (key.code, self.focus) {
            (KeyCode::Char('q') | KeyCode::Esc, _) => return AppAction::Quit,
            (KeyCode::Tab, _) => {
                self.focus = self.focus.toggle();
                self.selected = self.game.step();
            }
            (KeyCode::Char('s'), _) => self.sort_order = self.sort_order.toggle(),
            (KeyCode::Char('c'), _) => self.show_coordinates = !self.show_coordinates,
            (KeyCode::Char('r'), _) => self.restart(),
            (KeyCode::Enter | KeyCode::Char(' '), Focus::Board) => {
                self.dispatch(Intent::Move(self.cursor.to_index()));
            }
            (KeyCode::Enter | KeyCode::Char(' '), Focus::History) => {
                self.dispatch(Intent::Jump(self.selected));
            }
            (code, Focus::Board) => self.cursor = move_cursor(self.cursor, code),
            (KeyCode::Up, Focus::History) => self.select_row(-1),
            (KeyCode::Down, Focus::History) => self.select_row(1),
            (KeyCode::Home, Focus::History) => self.selected = 0,
            (KeyCode::End, Focus::History) => self.selected = self.game.history().len() - 1,
            _ => {}
        }
        AppAction::Continue
    }

    /// Sends an intent to the game and keeps the list selection on the
    /// displayed step.
    fn dispatch(&mut self, intent: Intent) {
        if intent.apply(&mut self.game) {
            self.selected = self.game.step();
        }
    }

    /// Moves the list selection by `delta` rows in display order.
    fn select_row(&mut self, delta: isize) {
        let last = self.game.history().len() - 1;
        let delta = match self.sort_order {
            SortOrder::Ascending => delta,
            SortOrder::Descending => -delta,
        };
        self.selected = self.selected.saturating_add_signed(delta).min(last);
    }

    /// Starts a new game.
    pub fn restart(&mut self) {
        debug!("Restarting game");
        self.game = Game::new();
        self.selected = 0;
        self.cursor = Position::Center;
    }
}
