//! Hangman - terminal word-guessing game.

#![warn(missing_docs)]

mod cli;

use anyhow::Result;
use clap::Parser;
use cli::{Cli, Command, GameArgs};
use hangman::{
    ConsoleView, GameSession, HangmanConfig, HumanPlayer, Orchestrator, SimpleAi, Tally,
    word_source_from_config,
};
use serde::Serialize;
use std::path::Path;
use tracing::{info, instrument};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    match cli.into_command() {
        Command::Play { game } => run_play(game).await,
        Command::Auto { game, rounds, json } => run_auto(game, rounds, json).await,
    }
}

/// Run an interactive game on stdin/stdout
#[instrument(skip_all)]
async fn run_play(game: GameArgs) -> Result<()> {
    initialize_tracing(game.log_file.as_deref())?;
    info!("Starting hangman");

    let config = load_config(&game)?;
    let mut orchestrator = Orchestrator::new(
        GameSession::with_attempt_budget(*config.attempt_budget()),
        Box::new(HumanPlayer::stdio("Player")),
        word_source_from_config(&config),
        Box::new(ConsoleView::stdout()),
    )
    .with_difficulty(*config.difficulty());

    tokio::select! {
        result = orchestrator.run() => {
            let tally = result?;
            info!(%tally, "Game finished");
        }
        _ = tokio::signal::ctrl_c() => {
            let tally = orchestrator.session().tally();
            info!(%tally, "Interrupted");
            println!("\n\n{}\nGAME OVER! Thanks for playing, goodbye!", tally);
            // The stdin reader thread would otherwise hold the runtime open.
            std::process::exit(0);
        }
    }

    Ok(())
}

/// Final report of an automated run.
#[derive(Debug, Serialize)]
struct AutoSummary {
    rounds: u32,
    tally: Tally,
    win_rate: f64,
}

/// Let the simple AI play a fixed number of rounds
#[instrument(skip(game))]
async fn run_auto(game: GameArgs, rounds: u32, json: bool) -> Result<()> {
    initialize_tracing(game.log_file.as_deref())?;
    info!("Starting automated hangman run");

    let config = load_config(&game)?;
    let view: Box<dyn hangman::View> = if json {
        Box::new(ConsoleView::new(std::io::sink()))
    } else {
        Box::new(ConsoleView::stdout())
    };

    let mut orchestrator = Orchestrator::new(
        GameSession::with_attempt_budget(*config.attempt_budget()),
        Box::new(SimpleAi::new("AI", rounds)),
        word_source_from_config(&config),
        view,
    )
    .with_difficulty(*config.difficulty());

    let tally = orchestrator.run().await?;

    if json {
        let summary = AutoSummary {
            rounds: tally.total(),
            tally,
            win_rate: tally.win_rate(),
        };
        println!("{}", serde_json::to_string_pretty(&summary)?);
    }

    Ok(())
}

#[instrument(skip(game), fields(config_path = %game.config.display()))]
fn load_config(game: &GameArgs) -> Result<HangmanConfig> {
    info!("Loading configuration");
    let config = HangmanConfig::load_or_default(&game.config)?.with_overrides(
        game.words_file.clone(),
        game.seed,
        game.difficulty,
    );
    if config.words_file().is_none() {
        info!("No word list configured, using built-in words");
    }
    Ok(config)
}

/// Logs go to stderr at `warn` so they stay out of the game text, or to a
/// file at debug level when one is given. `RUST_LOG` overrides either.
fn initialize_tracing(log_file: Option<&Path>) -> Result<()> {
    match log_file {
        Some(path) => {
            let file = std::fs::File::create(path)?;
            tracing_subscriber::fmt()
                .with_env_filter(
                    EnvFilter::try_from_default_env().unwrap_or_else(|_| {
                        EnvFilter::new("info,hangman=debug,strictly_hangman=debug")
                    }),
                )
                .with_writer(std::sync::Arc::new(file))
                .with_ansi(false)
                .init();
        }
        None => {
            tracing_subscriber::fmt()
                .with_env_filter(
                    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
                )
                .with_writer(std::io::stderr)
                .init();
        }
    }
    Ok(())
}
