//! Player trait and implementations.
//!
//! A player answers the questions the orchestrator asks: whether to
//! start, which tier to play, which letter to guess next, and whether to
//! play another round. Answers are validated here, so the engine only
//! ever sees well-formed input.

mod human;
mod simple_ai;

pub use human::HumanPlayer;
pub use simple_ai::{FREQUENCY_ORDER, SimpleAi};

use crate::words::Difficulty;
use anyhow::Result;
use strictly_hangman::GameSession;

/// Trait for players that answer the game's prompts.
#[async_trait::async_trait]
pub trait Player: Send {
    /// Asks whether the player is ready to start. Defaults to yes.
    async fn ready(&mut self) -> Result<bool>;

    /// Asks which tier to play; `None` means any.
    async fn choose_difficulty(&mut self) -> Result<Option<Difficulty>>;

    /// Asks for the next guess: one ASCII letter or a space.
    async fn guess(&mut self, session: &GameSession) -> Result<char>;

    /// Asks whether to play another round. Defaults to yes.
    async fn play_again(&mut self) -> Result<bool>;

    /// Returns the player's display name.
    fn name(&self) -> &str;
}

/// Interprets a yes/no answer by its first character.
///
/// Returns `None` for anything that is neither.
pub fn parse_yes_no(answer: &str) -> Option<bool> {
    match answer.trim().chars().next().map(|c| c.to_ascii_lowercase()) {
        Some('y') => Some(true),
        Some('n') => Some(false),
        _ => None,
    }
}

/// Interprets a guess: exactly one ASCII letter or a single space.
pub fn parse_letter(answer: &str) -> Option<char> {
    let mut chars = answer.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) if c.is_ascii_alphabetic() || c == ' ' => Some(c),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_yes_no() {
        assert_eq!(parse_yes_no("yes"), Some(true));
        assert_eq!(parse_yes_no(" Y"), Some(true));
        assert_eq!(parse_yes_no("nope"), Some(false));
        assert_eq!(parse_yes_no("maybe"), None);
        assert_eq!(parse_yes_no(""), None);
    }

    #[test]
    fn test_letter() {
        assert_eq!(parse_letter("a"), Some('a'));
        assert_eq!(parse_letter("Q"), Some('Q'));
        assert_eq!(parse_letter(" "), Some(' '));
        assert_eq!(parse_letter("ab"), None);
        assert_eq!(parse_letter("7"), None);
        assert_eq!(parse_letter(""), None);
        assert_eq!(parse_letter("\u{e9}"), None);
    }
}
