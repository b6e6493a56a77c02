//! Word source that reads a word-list file.
//!
//! The file holds one word per line. Blank lines and lines starting with
//! `#` are ignored. A `[easy]`, `[medium]` or `[hard]` header assigns the
//! words below it to that tier; words above the first header belong to
//! no tier. Lines that are not playable words are skipped.

use super::{Difficulty, WordPicker, WordSource, WordSourceError, is_playable};
use std::path::{Path, PathBuf};
use std::str::FromStr;
use tracing::{debug, info, instrument, warn};

/// One parsed line of a word-list file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WordEntry {
    /// Tier the word was listed under, if any.
    pub difficulty: Option<Difficulty>,
    /// The word itself.
    pub word: String,
}

/// Parsed contents of a word-list file.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WordList {
    entries: Vec<WordEntry>,
}

impl WordList {
    /// Parses word-list text.
    #[instrument(skip(content), fields(bytes = content.len()))]
    pub fn parse(content: &str) -> Self {
        let mut current: Option<Difficulty> = None;
        let mut entries = Vec::new();

        for (index, raw) in content.lines().enumerate() {
            let line = raw.trim();
            if line.is_empty() || line.starts_with('#') {
                continue;
            }

            if let Some(section) = line.strip_prefix('[').and_then(|l| l.strip_suffix(']')) {
                current = match Difficulty::from_str(section.trim()) {
                    Ok(difficulty) => Some(difficulty),
                    Err(_) => {
                        warn!(line = index + 1, section, "Unknown section, words below are untiered");
                        None
                    }
                };
                continue;
            }

            if !is_playable(line) {
                warn!(line = index + 1, "Skipping unplayable word");
                continue;
            }

            entries.push(WordEntry {
                difficulty: current,
                word: line.to_string(),
            });
        }

        debug!(words = entries.len(), "Parsed word list");
        Self { entries }
    }

    /// Returns every parsed entry.
    pub fn entries(&self) -> &[WordEntry] {
        &self.entries
    }

    /// Returns true if the list has no playable words.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Returns the words matching a request.
    ///
    /// A tier with no words falls back to the whole list.
    pub fn candidates(&self, difficulty: Option<Difficulty>) -> Vec<&str> {
        let all = || self.entries.iter().map(|e| e.word.as_str()).collect::<Vec<_>>();
        let Some(difficulty) = difficulty else {
            return all();
        };

        let tiered: Vec<&str> = self
            .entries
            .iter()
            .filter(|e| e.difficulty == Some(difficulty))
            .map(|e| e.word.as_str())
            .collect();

        if tiered.is_empty() {
            debug!(%difficulty, "No words for tier, using the whole list");
            all()
        } else {
            tiered
        }
    }
}

/// Word source reading a word-list file on every request.
#[derive(Debug, Clone)]
pub struct FileWords {
    path: PathBuf,
    picker: WordPicker,
}

impl FileWords {
    /// Creates a source for the file at `path`.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn new(path: impl AsRef<Path>, seed: Option<u64>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
            picker: WordPicker::new(seed),
        }
    }

    /// Reads and parses the file.
    ///
    /// # Errors
    ///
    /// Fails if the file cannot be read or holds no playable word.
    #[instrument(skip(self), fields(path = %self.path.display()))]
    pub async fn load(&self) -> Result<WordList, WordSourceError> {
        let content = tokio::fs::read_to_string(&self.path).await.map_err(|e| {
            WordSourceError::new(format!(
                "Failed to read word list {}: {}",
                self.path.display(),
                e
            ))
        })?;

        let list = WordList::parse(&content);
        if list.is_empty() {
            return Err(WordSourceError::new(format!(
                "Word list {} has no playable words",
                self.path.display()
            )));
        }

        info!(words = list.entries().len(), "Word list loaded");
        Ok(list)
    }
}

#[async_trait::async_trait]
impl WordSource for FileWords {
    #[instrument(skip(self), fields(path = %self.path.display()))]
    async fn word(&mut self, difficulty: Option<Difficulty>) -> Result<String, WordSourceError> {
        let list = self.load().await?;
        let candidates = list.candidates(difficulty);
        let word = self
            .picker
            .choose(&candidates)
            .ok_or_else(|| WordSourceError::new("Word list has no candidates"))?;
        Ok((*word).to_string())
    }

    fn name(&self) -> &str {
        "file"
    }
}
