//! Difficulty tiers for word selection.

use serde::{Deserialize, Serialize};
use std::str::FromStr;
use tracing::instrument;

/// How hard the secret word should be.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    clap::ValueEnum,
    strum::Display,
    strum::EnumString,
    strum::EnumIter,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum Difficulty {
    /// Short, common words.
    Easy,
    /// Longer everyday words.
    Medium,
    /// Long or unusual words.
    Hard,
}

impl Difficulty {
    /// Parses a player's answer to the difficulty question.
    ///
    /// Accepts the tier name in any case, its first letter, or its menu
    /// number (1-3). An empty answer means no preference.
    ///
    /// # Errors
    ///
    /// Returns the parse error for anything else.
    #[instrument]
    pub fn parse_choice(answer: &str) -> Result<Option<Self>, strum::ParseError> {
        let answer = answer.trim();
        let difficulty = match answer.to_ascii_lowercase().as_str() {
            "" => return Ok(None),
            "1" | "e" => Difficulty::Easy,
            "2" | "m" => Difficulty::Medium,
            "3" | "h" => Difficulty::Hard,
            _ => Difficulty::from_str(answer)?,
        };
        Ok(Some(difficulty))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn test_parse_names() {
        assert_eq!(Difficulty::parse_choice("easy"), Ok(Some(Difficulty::Easy)));
        assert_eq!(Difficulty::parse_choice("MEDIUM"), Ok(Some(Difficulty::Medium)));
        assert_eq!(Difficulty::parse_choice(" Hard \n"), Ok(Some(Difficulty::Hard)));
    }

    #[test]
    fn test_parse_shortcuts() {
        assert_eq!(Difficulty::parse_choice("1"), Ok(Some(Difficulty::Easy)));
        assert_eq!(Difficulty::parse_choice("m"), Ok(Some(Difficulty::Medium)));
        assert_eq!(Difficulty::parse_choice("H"), Ok(Some(Difficulty::Hard)));
    }

    #[test]
    fn test_parse_empty_means_any() {
        assert_eq!(Difficulty::parse_choice(""), Ok(None));
        assert_eq!(Difficulty::parse_choice("   "), Ok(None));
    }

    #[test]
    fn test_parse_rejects_unknown() {
        assert!(Difficulty::parse_choice("extreme").is_err());
        assert!(Difficulty::parse_choice("4").is_err());
    }

    #[test]
    fn test_display_round_trips_through_parse() {
        for difficulty in Difficulty::iter() {
            assert_eq!(
                Difficulty::parse_choice(&difficulty.to_string()),
                Ok(Some(difficulty))
            );
        }
    }
}
