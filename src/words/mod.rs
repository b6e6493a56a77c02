//! Word sources: where the secret words come from.

mod builtin;
mod difficulty;
mod error;
mod file;
mod picker;

pub use builtin::BuiltinWords;
pub use difficulty::Difficulty;
pub use error::WordSourceError;
pub use file::{FileWords, WordEntry, WordList};
pub use picker::WordPicker;

use crate::config::HangmanConfig;
use tracing::{info, instrument};

/// Supplies one secret word per round.
///
/// Retrieval is fallible and never retried by the source itself; the
/// orchestrator decides what to do when no word is available.
#[async_trait::async_trait]
pub trait WordSource: Send {
    /// Returns a word for the requested tier, or for any tier when `None`.
    async fn word(&mut self, difficulty: Option<Difficulty>) -> Result<String, WordSourceError>;

    /// Short name of the source, for logs.
    fn name(&self) -> &str;
}

/// Returns true if `word` can be played: ASCII letters and spaces, with
/// at least one letter.
pub fn is_playable(word: &str) -> bool {
    word.chars().any(|c| c.is_ascii_alphabetic())
        && word.chars().all(|c| c.is_ascii_alphabetic() || c == ' ')
}

/// Builds the word source selected by the configuration.
#[instrument(skip(config))]
pub fn from_config(config: &HangmanConfig) -> Box<dyn WordSource> {
    match config.words_file() {
        Some(path) => {
            info!(path = %path.display(), "Using word list file");
            Box::new(FileWords::new(path, *config.seed()))
        }
        None => {
            info!("Using built-in word lists");
            Box::new(BuiltinWords::new(*config.seed()))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_playable_words() {
        assert!(is_playable("cat"));
        assert!(is_playable("Ice Cream"));
        assert!(!is_playable(""));
        assert!(!is_playable("   "));
        assert!(!is_playable("don't"));
        assert!(!is_playable("caf\u{e9}"));
    }
}
