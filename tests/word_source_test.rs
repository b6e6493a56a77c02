//! Tests for the built-in and file word sources.

use hangman::{
    BuiltinWords, Difficulty, FileWords, HangmanConfig, WordSource, word_source_from_config,
};
use std::io::Write;
use tempfile::NamedTempFile;

fn word_file(content: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().expect("Create temp file");
    file.write_all(content.as_bytes()).expect("Write temp file");
    file
}

#[tokio::test]
async fn test_file_words_respect_tier() {
    let file = word_file("[easy]\ncat\n[hard]\npneumonia\n");
    let mut source = FileWords::new(file.path(), Some(7));

    for _ in 0..5 {
        assert_eq!(source.word(Some(Difficulty::Easy)).await.unwrap(), "cat");
        assert_eq!(source.word(Some(Difficulty::Hard)).await.unwrap(), "pneumonia");
    }
}

#[tokio::test]
async fn test_file_is_reread_on_every_request() {
    let file = word_file("cat\n");
    let mut source = FileWords::new(file.path(), Some(1));
    assert_eq!(source.word(None).await.unwrap(), "cat");

    std::fs::write(file.path(), "dog\n").unwrap();
    assert_eq!(source.word(None).await.unwrap(), "dog");
}

#[tokio::test]
async fn test_missing_file_is_an_error() {
    let dir = tempfile::tempdir().unwrap();
    let mut source = FileWords::new(dir.path().join("nope.txt"), None);

    let err = source.word(None).await.unwrap_err();
    assert!(err.message.contains("Failed to read word list"));
}

#[tokio::test]
async fn test_file_without_playable_words_is_an_error() {
    let file = word_file("# only comments\n123\n\n");
    let mut source = FileWords::new(file.path(), None);

    let err = source.word(None).await.unwrap_err();
    assert!(err.message.contains("no playable words"));
}

#[tokio::test]
async fn test_same_seed_same_words() {
    let mut a = BuiltinWords::new(Some(2024));
    let mut b = BuiltinWords::new(Some(2024));

    for _ in 0..10 {
        assert_eq!(a.word(None).await.unwrap(), b.word(None).await.unwrap());
    }
}

#[tokio::test]
async fn test_builtin_words_come_from_requested_tier() {
    let mut source = BuiltinWords::new(Some(3));
    for _ in 0..10 {
        let word = source.word(Some(Difficulty::Medium)).await.unwrap();
        assert!(BuiltinWords::tier(Difficulty::Medium).contains(&word.as_str()));
    }
}

#[tokio::test]
async fn test_config_selects_source() {
    let file = word_file("zebra\n");
    let config =
        HangmanConfig::default().with_overrides(Some(file.path().to_path_buf()), Some(5), None);

    let mut source = word_source_from_config(&config);
    assert_eq!(source.name(), "file");
    assert_eq!(source.word(None).await.unwrap(), "zebra");

    let source = word_source_from_config(&HangmanConfig::default());
    assert_eq!(source.name(), "built-in");
}
