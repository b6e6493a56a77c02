//! Round states, per-guess outcomes and running tallies.

use derive_getters::Getters;
use serde::{Deserialize, Serialize};

/// Phase of the current round.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, derive_more::Display,
)]
pub enum RoundState {
    /// No round has been started yet.
    #[default]
    #[display("Idle")]
    Idle,
    /// A round is running and expects the next guess.
    #[display("Awaiting guess")]
    AwaitingGuess,
    /// Every letter was revealed.
    #[display("Round won")]
    Won,
    /// The attempt budget ran out.
    #[display("Round lost")]
    Lost,
}

impl RoundState {
    /// Returns true for `Won` and `Lost`.
    pub fn is_over(self) -> bool {
        matches!(self, RoundState::Won | RoundState::Lost)
    }
}

/// Classification of a single guess.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, derive_more::Display)]
pub enum GuessOutcome {
    /// The letter was already guessed this round. Nothing changed.
    #[display("Already guessed")]
    AlreadyGuessed,
    /// The letter occurs in the secret word.
    #[display("Correct guess")]
    CorrectGuess,
    /// The letter does not occur in the secret word; one attempt was spent.
    #[display("Wrong guess, {} attempts remaining", attempts_remaining)]
    WrongGuess {
        /// Attempts left after this guess.
        attempts_remaining: u32,
    },
}

/// What a guess did, plus what the caller needs to display it.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize, derive_new::new)]
pub struct GuessReport {
    /// The normalized letter that was evaluated.
    letter: char,
    /// Classification of the guess.
    outcome: GuessOutcome,
    /// The word as the player now sees it.
    rendered: String,
    /// Attempts left in this round.
    attempts_remaining: u32,
    /// Round phase after the guess.
    state: RoundState,
}

/// Rounds won and lost since the session was created.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Default, Getters, Serialize, Deserialize, derive_more::Display,
)]
#[display("Games Won: {} | Games Lost: {}", won, lost)]
pub struct Tally {
    /// Rounds won.
    won: u32,
    /// Rounds lost.
    lost: u32,
}

impl Tally {
    /// Creates a tally from explicit counts.
    pub fn new(won: u32, lost: u32) -> Self {
        Self { won, lost }
    }

    /// Total finished rounds.
    pub fn total(&self) -> u32 {
        self.won + self.lost
    }

    /// Percentage of finished rounds that were won, or 0.0 before any finished round.
    pub fn win_rate(&self) -> f64 {
        match self.total() {
            0 => 0.0,
            total => f64::from(self.won) * 100.0 / f64::from(total),
        }
    }

    pub(crate) fn record_win(&mut self) {
        self.won += 1;
    }

    pub(crate) fn record_loss(&mut self) {
        self.lost += 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_terminal_states() {
        assert!(!RoundState::Idle.is_over());
        assert!(!RoundState::AwaitingGuess.is_over());
        assert!(RoundState::Won.is_over());
        assert!(RoundState::Lost.is_over());
    }

    #[test]
    fn test_tally_win_rate() {
        assert_eq!(Tally::default().win_rate(), 0.0);
        let tally = Tally::new(3, 1);
        assert_eq!(tally.total(), 4);
        assert!((tally.win_rate() - 75.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_tally_display() {
        assert_eq!(Tally::new(2, 5).to_string(), "Games Won: 2 | Games Lost: 5");
    }

    #[test]
    fn test_outcome_serializes() {
        let outcome = GuessOutcome::WrongGuess { attempts_remaining: 4 };
        let json = serde_json::to_string(&outcome).unwrap();
        let back: GuessOutcome = serde_json::from_str(&json).unwrap();
        assert_eq!(back, outcome);
    }
}
