//! Round orchestration between the player, the word source and the view.

use crate::players::Player;
use crate::view::{GameEvent, View};
use crate::words::{Difficulty, WordSource};
use anyhow::Result;
use strictly_hangman::{GameSession, RoundState, Tally};
use tracing::{debug, info, instrument, warn};

/// Drives rounds until the player stops.
///
/// Owns the [`GameSession`] for the whole launch; each round asks the word
/// source for a word, then feeds the player's guesses to the session one
/// at a time and reports every result to the view.
pub struct Orchestrator {
    session: GameSession,
    player: Box<dyn Player>,
    words: Box<dyn WordSource>,
    view: Box<dyn View>,
    difficulty: Option<Difficulty>,
}

impl Orchestrator {
    /// Creates a new orchestrator.
    pub fn new(
        session: GameSession,
        player: Box<dyn Player>,
        words: Box<dyn WordSource>,
        view: Box<dyn View>,
    ) -> Self {
        Self {
            session,
            player,
            words,
            view,
            difficulty: None,
        }
    }

    /// Plays `difficulty` without asking the player. `None` keeps asking.
    #[must_use]
    pub fn with_difficulty(mut self, difficulty: Option<Difficulty>) -> Self {
        self.difficulty = difficulty;
        self
    }

    /// Returns the game session.
    pub fn session(&self) -> &GameSession {
        &self.session
    }

    /// Runs the game loop and returns the final tally.
    ///
    /// # Errors
    ///
    /// Fails when the player's input closes, the view cannot write, or the
    /// session rejects a guess as out of state.
    #[instrument(skip(self), fields(player = %self.player.name(), words = %self.words.name()))]
    pub async fn run(&mut self) -> Result<Tally> {
        info!("Starting game orchestration");
        self.view.show(&GameEvent::Welcome)?;

        if !self.player.ready().await? {
            info!("Player declined to start");
            self.view.show(&GameEvent::Declined)?;
            return Ok(self.session.tally());
        }

        let difficulty = match self.difficulty {
            Some(difficulty) => Some(difficulty),
            None => self.player.choose_difficulty().await?,
        };
        debug!(?difficulty, "Difficulty chosen");

        let mut round = 0;
        loop {
            match self.words.word(difficulty).await {
                Ok(word) => {
                    round += 1;
                    self.play_round(word, round, difficulty).await?;
                }
                Err(e) => {
                    warn!(error = %e, "Could not start round");
                    self.view.show(&GameEvent::SourceFailed {
                        message: e.message.clone(),
                    })?;
                }
            }

            if !self.player.play_again().await? {
                break;
            }
        }

        let tally = self.session.tally();
        info!(%tally, "Game over");
        self.view.show(&GameEvent::Farewell { tally })?;
        Ok(tally)
    }

    #[instrument(skip(self, word))]
    async fn play_round(
        &mut self,
        word: String,
        round: u32,
        difficulty: Option<Difficulty>,
    ) -> Result<()> {
        self.session.start_round(word);
        self.view.show(&GameEvent::RoundStarted {
            round,
            difficulty,
            rendered: self.session.render(),
            attempts_remaining: self.session.attempts_remaining(),
        })?;

        loop {
            debug!(player = %self.player.name(), "Waiting for guess");
            let letter = self.player.guess(&self.session).await?;
            let report = self.session.submit_guess(letter)?;
            let state = *report.state();

            self.view.show(&GameEvent::Guessed {
                report,
                guessed_letters: self.session.guessed_letters().to_vec(),
                attempt_budget: self.session.attempt_budget(),
            })?;

            if state.is_over() {
                let word = self
                    .session
                    .word()
                    .map(|w| w.secret_word().to_string())
                    .unwrap_or_default();
                let tally = self.session.tally();
                let event = if state == RoundState::Won {
                    GameEvent::RoundWon { word, tally }
                } else {
                    GameEvent::RoundLost { word, tally }
                };
                self.view.show(&event)?;
                return Ok(());
            }
        }
    }
}
