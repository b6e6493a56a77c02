//! Built-in word lists, grouped by difficulty.

use super::{Difficulty, WordPicker, WordSource, WordSourceError};
use tracing::{debug, instrument};

const EASY_WORDS: &[&str] = &["cat", "dog", "fish", "book", "apple"];

const MEDIUM_WORDS: &[&str] = &["mountain", "elephant", "computer", "guitar", "soccer"];

const HARD_WORDS: &[&str] = &[
    "flabbergasted",
    "pneumonia",
    "misunderstanding",
    "dichotomy",
    "antidisestablishmentarianism",
];

/// Word source backed by the compiled-in lists.
#[derive(Debug, Clone)]
pub struct BuiltinWords {
    picker: WordPicker,
}

impl BuiltinWords {
    /// Creates the source with a seeded picker.
    #[instrument]
    pub fn new(seed: Option<u64>) -> Self {
        Self {
            picker: WordPicker::new(seed),
        }
    }

    /// Returns the words of one tier.
    pub fn tier(difficulty: Difficulty) -> &'static [&'static str] {
        match difficulty {
            Difficulty::Easy => EASY_WORDS,
            Difficulty::Medium => MEDIUM_WORDS,
            Difficulty::Hard => HARD_WORDS,
        }
    }

    /// Returns the candidates for a request: one tier, or every tier.
    pub fn candidates(difficulty: Option<Difficulty>) -> Vec<&'static str> {
        match difficulty {
            Some(difficulty) => Self::tier(difficulty).to_vec(),
            None => [EASY_WORDS, MEDIUM_WORDS, HARD_WORDS].concat(),
        }
    }
}

#[async_trait::async_trait]
impl WordSource for BuiltinWords {
    #[instrument(skip(self))]
    async fn word(&mut self, difficulty: Option<Difficulty>) -> Result<String, WordSourceError> {
        let candidates = Self::candidates(difficulty);
        let word = self
            .picker
            .choose(&candidates)
            .ok_or_else(|| WordSourceError::new("Built-in word list is empty"))?;
        debug!(len = word.len(), "Picked built-in word");
        Ok((*word).to_string())
    }

    fn name(&self) -> &str {
        "built-in"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_candidates_by_tier() {
        assert_eq!(BuiltinWords::candidates(Some(Difficulty::Easy)).len(), 5);
        assert!(BuiltinWords::candidates(Some(Difficulty::Hard)).contains(&"dichotomy"));
        assert_eq!(BuiltinWords::candidates(None).len(), 15);
    }

    #[test]
    fn test_builtin_words_are_playable() {
        assert!(BuiltinWords::candidates(None).iter().all(|w| crate::words::is_playable(w)));
    }

    #[tokio::test]
    async fn test_word_comes_from_requested_tier() {
        let mut source = BuiltinWords::new(Some(3));
        for _ in 0..10 {
            let word = source.word(Some(Difficulty::Medium)).await.unwrap();
            assert!(MEDIUM_WORDS.contains(&word.as_str()));
        }
    }
}
