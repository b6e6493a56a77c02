//! Command-line interface for hangman.

use clap::{Args, Parser, Subcommand};
use hangman::{DEFAULT_CONFIG_PATH, Difficulty};
use std::path::PathBuf;

/// Hangman - guess the word one letter at a time
#[derive(Parser, Debug)]
#[command(name = "hangman")]
#[command(about = "Terminal word-guessing game", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Subcommand to run (defaults to `play`)
    #[command(subcommand)]
    pub command: Option<Command>,
}

impl Cli {
    /// Returns the chosen subcommand, or `play` with default options.
    pub fn into_command(self) -> Command {
        self.command.unwrap_or(Command::Play {
            game: GameArgs::default(),
        })
    }
}

/// Options shared by every way of running a game.
#[derive(Args, Debug, Clone)]
pub struct GameArgs {
    /// Path to the TOML config file
    #[arg(short, long, default_value = DEFAULT_CONFIG_PATH)]
    pub config: PathBuf,

    /// Word-list file (overrides the config file)
    #[arg(short, long)]
    pub words_file: Option<PathBuf>,

    /// Seed for word selection (overrides the config file)
    #[arg(long)]
    pub seed: Option<u64>,

    /// Difficulty tier; skips the difficulty question
    #[arg(short, long, value_enum)]
    pub difficulty: Option<Difficulty>,

    /// Write logs to this file instead of stderr
    #[arg(long)]
    pub log_file: Option<PathBuf>,
}

impl Default for GameArgs {
    fn default() -> Self {
        Self {
            config: PathBuf::from(DEFAULT_CONFIG_PATH),
            words_file: None,
            seed: None,
            difficulty: None,
            log_file: None,
        }
    }
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Play interactively in the terminal
    Play {
        #[command(flatten)]
        game: GameArgs,
    },

    /// Let the built-in AI play and report the tally
    Auto {
        #[command(flatten)]
        game: GameArgs,

        /// Number of rounds to play
        #[arg(short, long, default_value = "5")]
        rounds: u32,

        /// Print only the final tally, as JSON
        #[arg(long)]
        json: bool,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_subcommand_means_play() {
        let cli = Cli::try_parse_from(["hangman"]).unwrap();
        match cli.into_command() {
            Command::Play { game } => {
                assert_eq!(game.config, PathBuf::from(DEFAULT_CONFIG_PATH));
                assert!(game.difficulty.is_none());
            }
            other => panic!("Expected play, got {:?}", other),
        }
    }

    #[test]
    fn test_auto_options() {
        let cli = Cli::try_parse_from([
            "hangman", "auto", "--rounds", "3", "--difficulty", "hard", "--seed", "9", "--json",
        ])
        .unwrap();
        match cli.into_command() {
            Command::Auto { game, rounds, json } => {
                assert_eq!(rounds, 3);
                assert!(json);
                assert_eq!(game.seed, Some(9));
                assert_eq!(game.difficulty, Some(Difficulty::Hard));
            }
            other => panic!("Expected auto, got {:?}", other),
        }
    }

    #[test]
    fn test_rejects_unknown_difficulty() {
        assert!(Cli::try_parse_from(["hangman", "play", "--difficulty", "nightmare"]).is_err());
    }
}
