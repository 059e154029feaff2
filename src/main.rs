//! Tic-tac-toe timeline - terminal client and replay tool.

#![warn(missing_docs)]

mod cli;

use tictactoe_timeline::{Game, Settings, tui};

use anyhow::{Context, Result};
use clap::Parser;
use cli::{Cli, Command};
use tracing::{info, instrument};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    match cli.command {
        Command::Play { config } => {
            let settings = Settings::load(config.as_deref())?;
            tui::run_tui(settings)
        }
        Command::Replay {
            cells,
            descending,
            json,
        } => {
            tracing_subscriber::fmt()
                .with_env_filter(
                    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
                )
                .with_writer(std::io::stderr)
                .init();
            run_replay(&cells, descending, json)
        }
    }
}

/// Replays `cells` and prints the resulting view.
#[instrument]
fn run_replay(cells: &[u8], descending: bool, json: bool) -> Result<()> {
    let cells: Vec<usize> = cells.iter().map(|&c| usize::from(c)).collect();
    let mut game = Game::replay(&cells).context("Replay rejected a move")?;
    if descending {
        game.toggle_sort_order();
    }
    info!(moves = cells.len(), status = %game.status(), "Replay finished");

    let frame = game.render_data();
    if json {
        println!(
            "{}",
            serde_json::to_string_pretty(&frame).context("Failed to serialize render data")?
        );
    } else {
        print!("{}", frame.to_text());
    }
    Ok(())
}
