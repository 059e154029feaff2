//! Command-line interface for tictactoe_timeline.

use clap::{Parser, Subcommand};

/// Tic-tac-toe with move history and time travel
#[derive(Parser, Debug)]
#[command(name = "tictactoe_timeline")]
#[command(about = "Tic-tac-toe with move history and time travel", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Play in the terminal UI
    Play {
        /// Path to a TOML settings file
        #[arg(short, long)]
        config: Option<std::path::PathBuf>,
    },

    /// Replay a sequence of moves and print the resulting view
    Replay {
        /// Squares to play in order, 0-8 in row-major order
        #[arg(value_parser = clap::value_parser!(u8).range(0..9))]
        cells: Vec<u8>,

        /// List moves newest first
        #[arg(long)]
        descending: bool,

        /// Print the render data as JSON
        #[arg(long)]
        json: bool,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_replay() {
        let cli = Cli::try_parse_from(["tictactoe_timeline", "replay", "4", "0", "8", "--json"])
            .unwrap();
        match cli.command {
            Command::Replay {
                cells,
                descending,
                json,
            } => {
                assert_eq!(cells, vec![4, 0, 8]);
                assert!(!descending);
                assert!(json);
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn test_replay_rejects_off_board_cell() {
        assert!(Cli::try_parse_from(["tictactoe_timeline", "replay", "9"]).is_err());
    }

    #[test]
    fn test_parse_play_with_config() {
        let cli = Cli::try_parse_from(["tictactoe_timeline", "play", "--config", "ttt.toml"])
            .unwrap();
        assert!(matches!(
            cli.command,
            Command::Play { config: Some(path) } if path.ends_with("ttt.toml")
        ));
    }
}
