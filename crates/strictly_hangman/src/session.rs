//! The game session: attempt budget, guessed letters, tallies and the
//! guess-evaluation state machine.

use super::invariants::assert_invariants;
use super::outcome::{GuessOutcome, GuessReport, RoundState, Tally};
use super::word::WordSession;
use tracing::{debug, info, instrument};

/// Wrong guesses allowed per round unless configured otherwise.
pub const DEFAULT_ATTEMPT_BUDGET: u32 = 10;

/// Largest budget that can still run out: 26 letters plus the space.
pub const MAX_ATTEMPT_BUDGET: u32 = 27;

/// Error returned when a guess is submitted outside of a running round.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
pub enum GuessError {
    /// `submit_guess` was called while the round was not awaiting a guess.
    #[display("Cannot accept a guess in state: {}", _0)]
    InvalidState(RoundState),
}

impl std::error::Error for GuessError {}

/// One player's game: the current round plus tallies across rounds.
///
/// Created once per launch. Each call to [`GameSession::start_round`]
/// replaces the word, refills the attempt budget and forgets the guessed
/// letters; the won/lost tallies keep accumulating.
#[derive(Debug, Clone)]
pub struct GameSession {
    attempt_budget: u32,
    attempts_remaining: u32,
    guessed_letters: Vec<char>,
    tally: Tally,
    word: Option<WordSession>,
    state: RoundState,
}

impl GameSession {
    /// Creates a session with the default budget of ten wrong guesses.
    #[instrument]
    pub fn new() -> Self {
        Self::with_attempt_budget(DEFAULT_ATTEMPT_BUDGET)
    }

    /// Creates a session allowing `attempt_budget` wrong guesses per round.
    ///
    /// # Panics
    ///
    /// Panics if `attempt_budget` is zero.
    #[instrument]
    pub fn with_attempt_budget(attempt_budget: u32) -> Self {
        assert!(attempt_budget > 0, "Attempt budget must be at least 1");
        Self {
            attempt_budget,
            attempts_remaining: attempt_budget,
            guessed_letters: Vec::new(),
            tally: Tally::default(),
            word: None,
            state: RoundState::Idle,
        }
    }

    /// Starts a new round with `word`, discarding the previous one.
    #[instrument(skip(self, word), fields(round = self.tally.total() + 1))]
    pub fn start_round(&mut self, word: impl Into<String>) {
        self.attempts_remaining = self.attempt_budget;
        self.guessed_letters.clear();
        self.word = Some(WordSession::new(word));
        self.state = RoundState::AwaitingGuess;
        info!(attempts = self.attempts_remaining, "Round started");
        assert_invariants(self);
    }

    /// Evaluates one guessed letter.
    ///
    /// The letter is lowercased before evaluation. A repeated letter yields
    /// [`GuessOutcome::AlreadyGuessed`] and changes nothing. A matching
    /// letter wins the round when it reveals the last hidden cell; a
    /// missing letter costs one attempt and loses the round at zero.
    ///
    /// # Errors
    ///
    /// Returns [`GuessError::InvalidState`] unless the round is awaiting a guess.
    #[instrument(skip(self), fields(state = %self.state))]
    pub fn submit_guess(&mut self, letter: char) -> Result<GuessReport, GuessError> {
        let Some(word) = self.word.as_mut().filter(|_| self.state == RoundState::AwaitingGuess) else {
            return Err(GuessError::InvalidState(self.state));
        };

        let letter = letter.to_ascii_lowercase();

        let outcome = if self.guessed_letters.contains(&letter) {
            debug!("Letter already guessed");
            GuessOutcome::AlreadyGuessed
        } else {
            self.guessed_letters.push(letter);
            if word.contains(letter) {
                word.apply_guess(letter);
                if word.is_complete() {
                    self.state = RoundState::Won;
                    self.tally.record_win();
                    info!(word = %word.secret_word(), "Round won");
                }
                GuessOutcome::CorrectGuess
            } else {
                self.attempts_remaining = self.attempts_remaining.saturating_sub(1);
                if self.attempts_remaining == 0 {
                    self.state = RoundState::Lost;
                    self.tally.record_loss();
                    info!(word = %word.secret_word(), "Round lost");
                }
                GuessOutcome::WrongGuess {
                    attempts_remaining: self.attempts_remaining,
                }
            }
        };

        let report = GuessReport::new(
            letter,
            outcome,
            word.render(),
            self.attempts_remaining,
            self.state,
        );
        debug!(%outcome, attempts = self.attempts_remaining, "Guess evaluated");
        assert_invariants(self);
        Ok(report)
    }

    /// Returns the attempts left in the current round.
    pub fn attempts_remaining(&self) -> u32 {
        self.attempts_remaining
    }

    /// Returns the wrong guesses allowed per round.
    pub fn attempt_budget(&self) -> u32 {
        self.attempt_budget
    }

    /// Returns the letters guessed this round, in the order they were guessed.
    pub fn guessed_letters(&self) -> &[char] {
        &self.guessed_letters
    }

    /// Returns true if `letter` was already guessed this round, ignoring ASCII case.
    pub fn has_guessed(&self, letter: char) -> bool {
        self.guessed_letters.contains(&letter.to_ascii_lowercase())
    }

    /// Rounds won so far.
    pub fn words_won(&self) -> u32 {
        *self.tally.won()
    }

    /// Rounds lost so far.
    pub fn words_lost(&self) -> u32 {
        *self.tally.lost()
    }

    /// Won/lost counts so far.
    pub fn tally(&self) -> Tally {
        self.tally
    }

    /// Phase of the current round.
    pub fn round_state(&self) -> RoundState {
        self.state
    }

    /// The active word session, if a round was ever started.
    pub fn word(&self) -> Option<&WordSession> {
        self.word.as_ref()
    }

    /// The active word as the player sees it, or an empty string before the first round.
    pub fn render(&self) -> String {
        self.word.as_ref().map(WordSession::render).unwrap_or_default()
    }
}

impl Default for GameSession {
    fn default() -> Self {
        Self::new()
    }
}
