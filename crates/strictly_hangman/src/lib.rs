//! Pure hangman game logic.
//!
//! The engine owns the secret word, the per-letter reveal state, the
//! attempt budget and the transitions that drive a round to a win or a
//! loss. It performs no I/O: words come in as strings, guesses come in as
//! characters, and every call returns what the caller needs to display.
//!
//! # Example
//!
//! ```
//! use strictly_hangman::{GameSession, GuessOutcome, RoundState};
//!
//! let mut session = GameSession::new();
//! session.start_round("cat");
//!
//! let report = session.submit_guess('c').unwrap();
//! assert_eq!(*report.outcome(), GuessOutcome::CorrectGuess);
//! assert_eq!(report.rendered(), " c  _  _ ");
//!
//! session.submit_guess('a').unwrap();
//! let report = session.submit_guess('t').unwrap();
//! assert_eq!(*report.state(), RoundState::Won);
//! assert_eq!(session.words_won(), 1);
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod cell;
mod invariants;
mod outcome;
mod session;
mod word;

pub use cell::{LetterCell, HIDDEN_TOKEN, SPACE_TOKEN};
pub use invariants::{
    assert_invariants, AttemptsWithinBudget, CellsMatchWord, GuessesUnique, Invariant,
    InvariantSet, InvariantViolation, SessionInvariants,
};
pub use outcome::{GuessOutcome, GuessReport, RoundState, Tally};
pub use session::{GameSession, GuessError, DEFAULT_ATTEMPT_BUDGET, MAX_ATTEMPT_BUDGET};
pub use word::WordSession;
