//! Rewind Games - CLI entry point.

mod cli;

use anyhow::Result;
use clap::Parser;
use cli::{Cli, Command};
use rewind_games::{GameReport, LogTarget, Script, Settings, init_logging, run_tui};
use tracing::info;

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let settings = Settings::load(cli.config.as_deref())?;

    match cli.command.unwrap_or(Command::Play { sort: None }) {
        Command::Play { sort } => {
            init_logging(
                settings.logging().level(),
                LogTarget::File(settings.logging().file().clone()),
            )?;
            let settings = match sort {
                Some(order) => settings.with_sort_order(order),
                None => settings,
            };
            settings.log_loaded();
            run_tui(&settings)
        }
        Command::Script { intents, json } => {
            init_logging(settings.logging().level(), LogTarget::Stderr)?;
            settings.log_loaded();
            run_script(&settings, &intents, json)
        }
    }
}

/// Plays `intents` headlessly and prints the final view.
fn run_script(settings: &Settings, intents: &[String], json: bool) -> Result<()> {
    let script = Script::parse(intents)?;
    info!(intents = script.intents().len(), "Running script");

    let game = script.run();
    let report = GameReport::new(
        &game,
        *settings.display().sort_order(),
        *settings.display().show_coordinates(),
    );

    if json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        print!("{}", report.to_text());
    }
    Ok(())
}
