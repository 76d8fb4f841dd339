//! Terminal UI: the board, the move list, and the key loop driving them.

mod app;
mod input;
mod ui;

pub use app::{App, AppAction, Focus};
pub use ui::draw;

use crate::settings::Settings;
use anyhow::Result;
use crossterm::{
    cursor,
    event::{self, Event, KeyEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::Backend, backend::CrosstermBackend};
use std::io;
use tracing::{error, info, instrument};

/// Runs the interactive game until the user quits.
///
/// The terminal is restored even if setup or the loop fails.
#[instrument(skip_all)]
pub fn run_tui(settings: &Settings) -> Result<()> {
    info!("Starting terminal UI");

    enable_raw_mode()?;
    let mut app = App::new(settings.display());
    let res = enter_and_run(&mut app);
    let restored = restore_terminal();

    if let Err(err) = &res {
        error!(error = ?err, "Game loop error");
    }
    if let Err(err) = &restored {
        error!(error = ?err, "Failed to restore terminal");
    }
    info!(
        moves = app.game().history().len() - 1,
        status = %app.game().status(),
        "Terminal UI closed"
    );
    res.and(restored)
}

fn enter_and_run(app: &mut App) -> Result<()> {
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let mut terminal = Terminal::new(CrosstermBackend::new(stdout))?;
    run_app(&mut terminal, app)
}

/// Leaves raw mode and the alternate screen, then shows the cursor.
///
/// Every step runs even when an earlier one fails.
fn restore_terminal() -> Result<()> {
    let raw = disable_raw_mode();
    let screen = execute!(io::stdout(), LeaveAlternateScreen, cursor::Show);
    first_error([raw, screen])
}

fn first_error<const N: usize>(results: [io::Result<()>; N]) -> Result<()> {
    results.into_iter().collect::<io::Result<()>>()?;
    Ok(())
}

/// Redraws, then blocks for the next key; one intent per key press.
fn run_app<B: Backend>(terminal: &mut Terminal<B>, app: &mut App) -> Result<()>
where
    <B as Backend>::Error: Send + Sync + 'static,
{
    loop {
        terminal.draw(|f| ui::draw(f, app))?;

        if let Event::Key(key) = event::read()?
            && key.kind == KeyEventKind::Press
            && app.handle_key(key) == AppAction::Quit
        {
            info!("User quit");
            return Ok(());
        }
    }
}
