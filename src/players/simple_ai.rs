//! Simple AI player for automated runs.

use super::Player;
use crate::words::Difficulty;
use anyhow::Result;
use strictly_hangman::GameSession;
use tracing::{debug, instrument};

/// Letters in rough order of English frequency, then the space.
pub const FREQUENCY_ORDER: &str = "etaoinshrdlcumwfgypbvkjxqz ";

/// AI that guesses the most frequent letter not yet tried.
///
/// Plays a fixed number of rounds and then declines to continue.
pub struct SimpleAi {
    name: String,
    rounds: u32,
    rounds_finished: u32,
}

impl SimpleAi {
    /// Creates an AI that plays `rounds` rounds (at least one).
    pub fn new(name: impl Into<String>, rounds: u32) -> Self {
        Self {
            name: name.into(),
            rounds: rounds.max(1),
            rounds_finished: 0,
        }
    }
}

#[async_trait::async_trait]
impl Player for SimpleAi {
    async fn ready(&mut self) -> Result<bool> {
        Ok(true)
    }

    async fn choose_difficulty(&mut self) -> Result<Option<Difficulty>> {
        Ok(None)
    }

    #[instrument(skip(self, session), fields(ai = %self.name))]
    async fn guess(&mut self, session: &GameSession) -> Result<char> {
        let letter = FREQUENCY_ORDER
            .chars()
            .find(|&c| !session.has_guessed(c))
            .ok_or_else(|| anyhow::anyhow!("No letters left to guess"))?;
        debug!(ai = %self.name, %letter, "AI chose letter");
        Ok(letter)
    }

    #[instrument(skip(self), fields(ai = %self.name))]
    async fn play_again(&mut self) -> Result<bool> {
        self.rounds_finished += 1;
        Ok(self.rounds_finished < self.rounds)
    }

    fn name(&self) -> &str {
        &self.name
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_guesses_in_frequency_order() {
        let mut ai = SimpleAi::new("AI", 1);
        let mut session = GameSession::new();
        session.start_round("zebra");

        assert_eq!(ai.guess(&session).await.unwrap(), 'e');
        session.submit_guess('e').unwrap();
        assert_eq!(ai.guess(&session).await.unwrap(), 't');
    }

    #[tokio::test]
    async fn test_stops_after_configured_rounds() {
        let mut ai = SimpleAi::new("AI", 2);
        assert!(ai.play_again().await.unwrap());
        assert!(!ai.play_again().await.unwrap());
    }

    #[tokio::test]
    async fn test_zero_rounds_plays_once() {
        let mut ai = SimpleAi::new("AI", 0);
        assert!(!ai.play_again().await.unwrap());
    }
}
