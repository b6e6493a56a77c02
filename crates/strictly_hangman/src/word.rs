//! The secret word of a round and its per-letter reveal state.

use super::cell::LetterCell;
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// The secret word for one round.
///
/// Holds one [`LetterCell`] per character, in word order. A session is
/// built for a single word and replaced, never re-targeted, when the next
/// round starts.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WordSession {
    secret_word: String,
    cells: Vec<LetterCell>,
    completed: bool,
}

impl WordSession {
    /// Creates a session with one cell per character of `word`.
    #[instrument(skip(word))]
    pub fn new(word: impl Into<String>) -> Self {
        let secret_word = word.into();
        let cells: Vec<LetterCell> = secret_word.chars().map(LetterCell::new).collect();
        debug!(len = cells.len(), "Word session created");
        let completed = cells.iter().all(LetterCell::is_revealed);
        Self {
            secret_word,
            cells,
            completed,
        }
    }

    /// Returns the secret word.
    pub fn secret_word(&self) -> &str {
        &self.secret_word
    }

    /// Returns the cells in word order.
    pub fn cells(&self) -> &[LetterCell] {
        &self.cells
    }

    /// Returns true if any cell holds `letter`, ignoring ASCII case.
    pub fn contains(&self, letter: char) -> bool {
        self.cells.iter().any(|cell| cell.matches(letter))
    }

    /// Reveals every cell holding `letter` and returns how many matched.
    ///
    /// A letter that matches nothing is not an error; the caller decides
    /// whether that counts as a wrong guess.
    #[instrument(skip(self))]
    pub fn apply_guess(&mut self, letter: char) -> usize {
        let mut matched = 0;
        for cell in self.cells.iter_mut().filter(|cell| cell.matches(letter)) {
            cell.reveal();
            matched += 1;
        }
        debug!(matched, "Applied guess");
        matched
    }

    /// Renders the word as the player sees it.
    pub fn render(&self) -> String {
        self.cells.iter().map(LetterCell::display).collect()
    }

    /// Returns true once every cell is revealed, caching the result.
    pub fn is_complete(&mut self) -> bool {
        self.completed = self.cells.iter().all(LetterCell::is_revealed);
        self.completed
    }

    /// Returns the completion flag from the last [`WordSession::is_complete`] call.
    pub fn completed(&self) -> bool {
        self.completed
    }

    /// Counts the cells currently visible to the player.
    pub fn revealed_count(&self) -> usize {
        self.cells.iter().filter(|cell| cell.is_revealed()).count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_one_cell_per_character() {
        let word = WordSession::new("apple");
        assert_eq!(word.cells().len(), 5);
        assert_eq!(word.render(), " _  _  _  _  _ ");
        assert!(!word.completed());
    }

    #[test]
    fn test_apply_guess_reveals_all_occurrences() {
        let mut word = WordSession::new("apple");
        assert_eq!(word.apply_guess('p'), 2);
        assert_eq!(word.render(), " _  p  p  _  _ ");
        assert_eq!(word.revealed_count(), 2);
    }

    #[test]
    fn test_apply_guess_without_match_is_noop() {
        let mut word = WordSession::new("apple");
        assert_eq!(word.apply_guess('z'), 0);
        assert_eq!(word.revealed_count(), 0);
    }

    #[test]
    fn test_case_insensitive_match() {
        let mut word = WordSession::new("Book");
        assert!(word.contains('b'));
        word.apply_guess('b');
        assert_eq!(word.render(), " B  _  _  _ ");
    }

    #[test]
    fn test_completion() {
        let mut word = WordSession::new("aa");
        assert!(!word.is_complete());
        word.apply_guess('a');
        assert!(word.is_complete());
        assert!(word.completed());
    }

    #[test]
    fn test_spaces_count_as_revealed() {
        let mut word = WordSession::new("ab c");
        assert_eq!(word.revealed_count(), 1);
        assert_eq!(word.render(), " _  _     _ ");
        word.apply_guess('a');
        word.apply_guess('b');
        word.apply_guess('c');
        assert!(word.is_complete());
    }
}
