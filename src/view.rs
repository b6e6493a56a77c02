//! Presentation of game events.

use crate::figure::figure;
use crate::words::Difficulty;
use std::io::Write;
use strictly_hangman::{GuessOutcome, GuessReport, Tally};
use tracing::instrument;

/// Events sent from the orchestrator to the view.
#[derive(Debug, Clone, PartialEq)]
pub enum GameEvent {
    /// The game was launched.
    Welcome,
    /// The player was not ready to play.
    Declined,
    /// A round started.
    RoundStarted {
        /// 1-based round number.
        round: u32,
        /// Tier the word was drawn from, if any.
        difficulty: Option<Difficulty>,
        /// The hidden word.
        rendered: String,
        /// Attempts available this round.
        attempts_remaining: u32,
    },
    /// A guess was evaluated.
    Guessed {
        /// The evaluation result.
        report: GuessReport,
        /// Letters guessed so far this round.
        guessed_letters: Vec<char>,
        /// Wrong guesses allowed per round.
        attempt_budget: u32,
    },
    /// The round was won.
    RoundWon {
        /// The secret word.
        word: String,
        /// Tallies after the round.
        tally: Tally,
    },
    /// The round was lost.
    RoundLost {
        /// The secret word.
        word: String,
        /// Tallies after the round.
        tally: Tally,
    },
    /// No word could be obtained, so no round started.
    SourceFailed {
        /// What went wrong.
        message: String,
    },
    /// The player is done.
    Farewell {
        /// Final tallies.
        tally: Tally,
    },
}

/// Sink for game events.
pub trait View: Send {
    /// Presents one event.
    ///
    /// # Errors
    ///
    /// Returns any error from the underlying output.
    fn show(&mut self, event: &GameEvent) -> std::io::Result<()>;
}

/// Line-oriented view writing plain text.
pub struct ConsoleView<W> {
    out: W,
}

impl ConsoleView<std::io::Stdout> {
    /// Creates a view on stdout.
    pub fn stdout() -> Self {
        Self::new(std::io::stdout())
    }
}

impl<W: Write + Send> ConsoleView<W> {
    /// Creates a view writing to `out`.
    pub fn new(out: W) -> Self {
        Self { out }
    }

    /// Consumes the view and returns its writer.
    pub fn into_inner(self) -> W {
        self.out
    }
}

fn join_letters(letters: &[char]) -> String {
    letters
        .iter()
        .map(|c| c.to_string())
        .collect::<Vec<_>>()
        .join(",")
}

impl<W: Write + Send> View for ConsoleView<W> {
    #[instrument(skip(self, event))]
    fn show(&mut self, event: &GameEvent) -> std::io::Result<()> {
        let out = &mut self.out;
        match event {
            GameEvent::Welcome => {
                writeln!(
                    out,
                    "\n Let's get ready for Hangman, good luck! (Remember, a space also counts as a guess!) \n"
                )?;
            }
            GameEvent::Declined => {
                writeln!(out, "\n Thank you for playing Hangman! \n")?;
            }
            GameEvent::RoundStarted {
                round,
                difficulty,
                rendered,
                attempts_remaining,
            } => {
                if *round > 1 {
                    writeln!(out, "Starting a new game!\n")?;
                }
                writeln!(
                    out,
                    "\n --------------------- \n Let's start, good luck! \n --------------------- \n"
                )?;
                match difficulty {
                    Some(difficulty) => writeln!(out, "Round {}: a {} word.", round, difficulty)?,
                    None => writeln!(out, "Round {}.", round)?,
                }
                writeln!(out, "You have {} tries.\n", attempts_remaining)?;
                writeln!(out, "{}\n", rendered)?;
            }
            GameEvent::Guessed {
                report,
                guessed_letters,
                attempt_budget,
            } => match report.outcome() {
                GuessOutcome::AlreadyGuessed => {
                    writeln!(
                        out,
                        "\n Letters already guessed: {} \n",
                        join_letters(guessed_letters)
                    )?;
                    writeln!(out, "You already chose this letter!\n")?;
                }
                GuessOutcome::CorrectGuess => {
                    writeln!(out, "\n Letters guessed: {} \n", join_letters(guessed_letters))?;
                    writeln!(out, "{}\n", report.rendered())?;
                    writeln!(out, "Yes! Correct guess!\n")?;
                }
                GuessOutcome::WrongGuess { attempts_remaining } => {
                    writeln!(out, "\n Letters guessed: {} \n", join_letters(guessed_letters))?;
                    writeln!(out, "{}\n", report.rendered())?;
                    writeln!(out, "Nope, try again! \n")?;
                    writeln!(out, "You have {} tries left, keep thinking!\n", attempts_remaining)?;
                    writeln!(out, "{}\n", figure(*attempts_remaining, *attempt_budget))?;
                }
            },
            GameEvent::RoundWon { word, tally } => {
                writeln!(out, "Yes! The word was {}, congratulations!\n", word)?;
                writeln!(out, "{}\n", tally)?;
            }
            GameEvent::RoundLost { word, tally } => {
                writeln!(out, "No more tries, sorry! The correct word was {}.\n", word)?;
                writeln!(out, "{}\n", tally)?;
            }
            GameEvent::SourceFailed { message } => {
                writeln!(out, "Could not pick a word: {}\n", message)?;
            }
            GameEvent::Farewell { tally } => {
                if tally.total() > 0 {
                    writeln!(out, "{} (win rate {:.1}%)\n", tally, tally.win_rate())?;
                }
                writeln!(out, "GAME OVER! Thanks for playing, goodbye!\n")?;
            }
        }
        out.flush()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strictly_hangman::RoundState;

    fn shown(event: GameEvent) -> String {
        let mut view = ConsoleView::new(Vec::new());
        view.show(&event).unwrap();
        String::from_utf8(view.into_inner()).unwrap()
    }

    #[test]
    fn test_wrong_guess_shows_tries_and_figure() {
        let report = GuessReport::new(
            'x',
            GuessOutcome::WrongGuess { attempts_remaining: 0 },
            " _  _  _ ".to_string(),
            0,
            RoundState::Lost,
        );
        let text = shown(GameEvent::Guessed {
            report,
            guessed_letters: vec!['x'],
            attempt_budget: 10,
        });
        assert!(text.contains("Nope, try again!"));
        assert!(text.contains("You have 0 tries left"));
        assert!(text.contains("/|\\"));
    }

    #[test]
    fn test_correct_guess_lists_letters() {
        let report = GuessReport::new(
            'a',
            GuessOutcome::CorrectGuess,
            " _  a  _ ".to_string(),
            10,
            RoundState::AwaitingGuess,
        );
        let text = shown(GameEvent::Guessed {
            report,
            guessed_letters: vec!['z', 'a'],
            attempt_budget: 10,
        });
        assert!(text.contains("Letters guessed: z,a"));
        assert!(text.contains("Yes! Correct guess!"));
    }

    #[test]
    fn test_round_results() {
        let won = shown(GameEvent::RoundWon {
            word: "cat".to_string(),
            tally: Tally::new(1, 0),
        });
        assert!(won.contains("Yes! The word was cat, congratulations!"));
        assert!(won.contains("Games Won: 1 | Games Lost: 0"));

        let lost = shown(GameEvent::RoundLost {
            word: "dog".to_string(),
            tally: Tally::new(1, 1),
        });
        assert!(lost.contains("The correct word was dog."));
    }

    #[test]
    fn test_farewell() {
        let text = shown(GameEvent::Farewell {
            tally: Tally::default(),
        });
        assert!(text.contains("GAME OVER! Thanks for playing, goodbye!"));
        assert!(!text.contains("win rate"));
    }
}
