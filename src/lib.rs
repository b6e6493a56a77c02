//! Hangman - a terminal word-guessing game.
//!
//! This library wires the [`strictly_hangman`] engine to the outside world.
//!
//! # Architecture
//!
//! - **Words**: word sources (built-in tiers or a word-list file)
//! - **Players**: prompt collaborators (stdin/stdout human, simple AI)
//! - **View**: console presentation of game events, with gallows figures
//! - **Orchestrator**: the round loop tying them to a `GameSession`
//! - **Config**: TOML configuration
//!
//! # Example
//!
//! ```no_run
//! use hangman::{BuiltinWords, ConsoleView, GameSession, Orchestrator, SimpleAi};
//!
//! # async fn example() -> anyhow::Result<()> {
//! let mut orchestrator = Orchestrator::new(
//!     GameSession::new(),
//!     Box::new(SimpleAi::new("AI", 3)),
//!     Box::new(BuiltinWords::new(Some(42))),
//!     Box::new(ConsoleView::stdout()),
//! );
//! let tally = orchestrator.run().await?;
//! println!("{}", tally);
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// Private module declarations
mod config;
mod figure;
mod orchestrator;
mod players;
mod view;
mod words;

// Crate-level exports - Configuration
pub use config::{ConfigError, DEFAULT_CONFIG_PATH, HangmanConfig};

// Crate-level exports - Presentation
pub use figure::{STAGES, figure};
pub use view::{ConsoleView, GameEvent, View};

// Crate-level exports - Orchestration
pub use orchestrator::Orchestrator;

// Crate-level exports - Players
pub use players::{FREQUENCY_ORDER, HumanPlayer, Player, SimpleAi, parse_letter, parse_yes_no};

// Crate-level exports - Word sources
pub use words::{
    BuiltinWords, Difficulty, FileWords, WordEntry, WordList, WordPicker, WordSource,
    WordSourceError, from_config as word_source_from_config, is_playable,
};

// Crate-level exports - Engine types
pub use strictly_hangman::{
    DEFAULT_ATTEMPT_BUDGET, GameSession, GuessError, GuessOutcome, GuessReport, LetterCell,
    MAX_ATTEMPT_BUDGET, RoundState, Tally, WordSession,
};
