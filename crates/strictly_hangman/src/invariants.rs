//! Invariants of the game session.
//!
//! Each invariant is a named, independently testable property. The
//! session re-checks the full set after every transition in debug builds.

use super::session::GameSession;
use tracing::warn;

/// A logical property that must hold for a given state.
pub trait Invariant<S> {
    /// Checks if the invariant holds for the given state.
    fn holds(state: &S) -> bool;

    /// Human-readable description of the invariant.
    fn description() -> &'static str;
}

/// Violation of an invariant.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
#[display("{}", description)]
pub struct InvariantViolation {
    /// Description of the violated invariant.
    pub description: String,
}

impl InvariantViolation {
    /// Creates a new invariant violation.
    pub fn new(description: impl Into<String>) -> Self {
        Self {
            description: description.into(),
        }
    }
}

/// A set of invariants checked together.
pub trait InvariantSet<S> {
    /// Returns every violated invariant, or `Ok(())` if all hold.
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>>;
}

impl<S, I1, I2, I3> InvariantSet<S> for (I1, I2, I3)
where
    I1: Invariant<S>,
    I2: Invariant<S>,
    I3: Invariant<S>,
{
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>> {
        let violations: Vec<InvariantViolation> = [
            (I1::holds(state), I1::description()),
            (I2::holds(state), I2::description()),
            (I3::holds(state), I3::description()),
        ]
        .into_iter()
        .filter(|(holds, _)| !holds)
        .map(|(_, description)| InvariantViolation::new(description))
        .collect();

        if violations.is_empty() {
            Ok(())
        } else {
            Err(violations)
        }
    }
}

// ─────────────────────────────────────────────────────────────
//  Session invariants
// ─────────────────────────────────────────────────────────────

/// The active word has exactly one cell per character.
pub struct CellsMatchWord;

impl Invariant<GameSession> for CellsMatchWord {
    fn holds(session: &GameSession) -> bool {
        session
            .word()
            .is_none_or(|word| word.cells().len() == word.secret_word().chars().count())
    }

    fn description() -> &'static str {
        "Word session has one cell per character of the secret word"
    }
}

/// Remaining attempts never exceed the budget.
pub struct AttemptsWithinBudget;

impl Invariant<GameSession> for AttemptsWithinBudget {
    fn holds(session: &GameSession) -> bool {
        session.attempts_remaining() <= session.attempt_budget()
    }

    fn description() -> &'static str {
        "Attempts remaining never exceed the attempt budget"
    }
}

/// No letter is recorded twice within a round.
pub struct GuessesUnique;

impl Invariant<GameSession> for GuessesUnique {
    fn holds(session: &GameSession) -> bool {
        let guessed = session.guessed_letters();
        guessed
            .iter()
            .enumerate()
            .all(|(i, letter)| !guessed[..i].contains(letter))
    }

    fn description() -> &'static str {
        "Each guessed letter appears at most once per round"
    }
}

/// Every invariant of a [`GameSession`].
pub type SessionInvariants = (CellsMatchWord, AttemptsWithinBudget, GuessesUnique);

/// Panics in debug builds if any session invariant is violated.
pub fn assert_invariants(session: &GameSession) {
    if cfg!(debug_assertions) {
        if let Err(violations) = SessionInvariants::check_all(session) {
            for violation in &violations {
                warn!(%violation, "Session invariant violated");
            }
            panic!("Session invariants violated: {:?}", violations);
        }
    }
}
