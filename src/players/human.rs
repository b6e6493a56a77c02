//! Human player answering prompts line by line.

use super::{Player, parse_letter, parse_yes_no};
use crate::words::Difficulty;
use anyhow::Result;
use strictly_hangman::GameSession;
use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt, BufReader, Stdin, Stdout};
use tracing::{debug, instrument};

const YES_NO_HINT: &str = "Please input either yes or no only!";
const LETTER_HINT: &str = "You have to choose a letter of the alphabet, or a space!";
const DIFFICULTY_HINT: &str = "Please choose easy, medium or hard (or press enter for any).";

/// Human player reading answers from `R` and writing prompts to `W`.
///
/// Invalid answers are re-prompted until a valid one arrives; only a
/// closed input stream is an error.
pub struct HumanPlayer<R, W> {
    name: String,
    input: R,
    output: W,
}

impl HumanPlayer<BufReader<Stdin>, Stdout> {
    /// Creates a player on the process's stdin and stdout.
    pub fn stdio(name: impl Into<String>) -> Self {
        Self::new(name, BufReader::new(tokio::io::stdin()), tokio::io::stdout())
    }
}

impl<R, W> HumanPlayer<R, W>
where
    R: AsyncBufRead + Unpin + Send,
    W: AsyncWrite + Unpin + Send,
{
    /// Creates a new human player.
    pub fn new(name: impl Into<String>, input: R, output: W) -> Self {
        Self {
            name: name.into(),
            input,
            output,
        }
    }

    /// Consumes the player and returns its output sink.
    pub fn into_output(self) -> W {
        self.output
    }

    async fn say(&mut self, text: &str) -> Result<()> {
        self.output.write_all(text.as_bytes()).await?;
        self.output.flush().await?;
        Ok(())
    }

    /// Prints `question` and reads one line, without its line terminator.
    ///
    /// An empty answer is replaced by `default` when one is given.
    async fn ask(&mut self, question: &str, default: Option<&str>) -> Result<String> {
        let prompt = match default {
            Some(default) => format!("? {} ({}) ", question, default),
            None => format!("? {} ", question),
        };
        self.say(&prompt).await?;

        let mut line = String::new();
        if self.input.read_line(&mut line).await? == 0 {
            anyhow::bail!("Input closed");
        }
        let answer = line.trim_end_matches(['\n', '\r']);
        debug!(player = %self.name, answer, "Read answer");

        match default {
            Some(default) if answer.trim().is_empty() => Ok(default.to_string()),
            _ => Ok(answer.to_string()),
        }
    }

    async fn ask_yes_no(&mut self, question: &str) -> Result<bool> {
        loop {
            let answer = self.ask(question, Some("yes")).await?;
            match parse_yes_no(&answer) {
                Some(yes) => return Ok(yes),
                None => self.say(&format!("{}\n", YES_NO_HINT)).await?,
            }
        }
    }
}

#[async_trait::async_trait]
impl<R, W> Player for HumanPlayer<R, W>
where
    R: AsyncBufRead + Unpin + Send,
    W: AsyncWrite + Unpin + Send,
{
    #[instrument(skip(self), fields(player = %self.name))]
    async fn ready(&mut self) -> Result<bool> {
        self.ask_yes_no("Start Hangman?").await
    }

    #[instrument(skip(self), fields(player = %self.name))]
    async fn choose_difficulty(&mut self) -> Result<Option<Difficulty>> {
        loop {
            let answer = self
                .ask("Choose your difficulty level: [1] easy, [2] medium, [3] hard", None)
                .await?;
            match Difficulty::parse_choice(&answer) {
                Ok(choice) => return Ok(choice),
                Err(_) => self.say(&format!("{}\n", DIFFICULTY_HINT)).await?,
            }
        }
    }

    #[instrument(skip(self, _session), fields(player = %self.name))]
    async fn guess(&mut self, _session: &GameSession) -> Result<char> {
        loop {
            let answer = self.ask("Choose a letter!", None).await?;
            match parse_letter(&answer) {
                Some(letter) => return Ok(letter),
                None => self.say(&format!("{}\n", LETTER_HINT)).await?,
            }
        }
    }

    #[instrument(skip(self), fields(player = %self.name))]
    async fn play_again(&mut self) -> Result<bool> {
        self.ask_yes_no("Play again?").await
    }

    fn name(&self) -> &str {
        &self.name
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn player(input: &'static str) -> HumanPlayer<&'static [u8], Vec<u8>> {
        HumanPlayer::new("Tester", input.as_bytes(), Vec::new())
    }

    #[tokio::test]
    async fn test_empty_answer_defaults_to_yes() {
        let mut p = player("\n");
        assert!(p.ready().await.unwrap());
    }

    #[tokio::test]
    async fn test_invalid_yes_no_is_reprompted() {
        let mut p = player("maybe\nno\n");
        assert!(!p.play_again().await.unwrap());
        let output = String::from_utf8(p.into_output()).unwrap();
        assert!(output.contains(YES_NO_HINT));
        assert_eq!(output.matches("Play again?").count(), 2);
    }

    #[tokio::test]
    async fn test_letter_validation() {
        let mut p = player("ab\n3\nk\n");
        let session = GameSession::new();
        assert_eq!(p.guess(&session).await.unwrap(), 'k');
        let output = String::from_utf8(p.into_output()).unwrap();
        assert_eq!(output.matches(LETTER_HINT).count(), 2);
    }

    #[tokio::test]
    async fn test_space_is_a_valid_guess() {
        let mut p = player(" \r\n");
        let session = GameSession::new();
        assert_eq!(p.guess(&session).await.unwrap(), ' ');
    }

    #[tokio::test]
    async fn test_difficulty_choice() {
        let mut p = player("impossible\n2\n");
        assert_eq!(p.choose_difficulty().await.unwrap(), Some(Difficulty::Medium));
    }

    #[tokio::test]
    async fn test_closed_input_is_an_error() {
        let mut p = player("");
        assert!(p.ready().await.is_err());
    }
}
