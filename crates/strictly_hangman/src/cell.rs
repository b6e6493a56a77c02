//! A single character slot of the secret word.

use serde::{Deserialize, Serialize};
use tracing::instrument;

/// Token shown for a letter that has not been guessed yet.
pub const HIDDEN_TOKEN: &str = " _ ";

/// Token shown for a space in the secret word.
pub const SPACE_TOKEN: &str = "   ";

/// One character of the secret word and whether the player can see it.
///
/// Spaces carry no information for the player, so a space cell is
/// revealed as soon as it is created. Rendering never mutates a cell.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct LetterCell {
    character: char,
    revealed: bool,
}

impl LetterCell {
    /// Creates a cell for `character`, hidden unless it is a space.
    #[instrument]
    pub fn new(character: char) -> Self {
        Self {
            character,
            revealed: character == ' ',
        }
    }

    /// Returns the character held by this cell, in its original case.
    pub fn character(&self) -> char {
        self.character
    }

    /// Returns true once the cell is visible to the player.
    pub fn is_revealed(&self) -> bool {
        self.revealed
    }

    /// Marks the cell as revealed. Calling it again has no effect.
    pub fn reveal(&mut self) {
        self.revealed = true;
    }

    /// Returns true if `letter` is this cell's character, ignoring ASCII case.
    pub fn matches(&self, letter: char) -> bool {
        self.character.eq_ignore_ascii_case(&letter)
    }

    /// Returns the presentational token for this cell.
    ///
    /// Every cell renders three columns wide: `" _ "` while hidden,
    /// `" c "` once revealed, and blank for a space.
    pub fn display(&self) -> String {
        if self.character == ' ' {
            SPACE_TOKEN.to_string()
        } else if self.revealed {
            format!(" {} ", self.character)
        } else {
            HIDDEN_TOKEN.to_string()
        }
    }
}

impl std::fmt::Display for LetterCell {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.display())
    }
}
