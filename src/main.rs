//! Terminal hangman (default binary).
//!
//! Startup problems (config, word list, terminal size, no usable word) are
//! reported as a plain message before the terminal is taken over.

use std::path::PathBuf;
use std::process::ExitCode;
use std::time::{SystemTime, UNIX_EPOCH};

use anyhow::{Context, Result};
use clap::Parser;

use tui_hangman::config::{validate_quit_key, HangmanConfig};
use tui_hangman::core::{parse_word_list, GameState, SimpleRng};
use tui_hangman::engine::{Controller, RoundSummary};
use tui_hangman::logging::init_logging;
use tui_hangman::term::{ensure_min_size, terminal_viewport, CrosstermSurface};

#[derive(Parser)]
#[command(name = "tui-hangman", version, about = "Guess the word before the gallows fills up")]
struct Cli {
    /// Word list, one word or phrase per line (default: words.txt)
    words: Option<PathBuf>,

    /// Config file (default: hangman.toml in the current or executable directory)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Seed for the word choice, to replay a round
    #[arg(long)]
    seed: Option<u32>,

    /// Skip words this long or shorter
    #[arg(long)]
    min_len: Option<usize>,

    /// Skip words this long or longer
    #[arg(long)]
    max_len: Option<usize>,

    /// Key that ends the round
    #[arg(long)]
    quit_key: Option<char>,
}

fn main() -> ExitCode {
    match run(Cli::parse()) {
        Ok(_) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {e:#}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<RoundSummary> {
    let mut config = HangmanConfig::load(cli.config.as_deref())?;
    apply_cli(&mut config, &cli)?;
    init_logging(&config.log)?;
    if let Some(letter) = config.shadowed_letter() {
        tracing::warn!(
            quit_key = %letter,
            "quit key is a letter; words containing it cannot be won"
        );
    }

    let text = std::fs::read_to_string(&config.words_path)
        .with_context(|| format!("reading word list {}", config.words_path.display()))?;
    let words = parse_word_list(&text);

    // The terminal must fit before any game state exists.
    let viewport = terminal_viewport().context("querying terminal size")?;
    ensure_min_size(viewport)?;

    let seed = cli.seed.unwrap_or_else(clock_seed);
    tracing::info!(seed, words = %config.words_path.display(), "starting");
    let mut rng = SimpleRng::new(seed);
    let state = GameState::start(&words, config.bounds, &mut rng)
        .with_context(|| format!("cannot start a round from {}", config.words_path.display()))?;

    let controller = Controller::new(config.quit_key);
    let mut surface = CrosstermSurface::enter()?;
    let result = controller.play(&mut surface, state);

    // Always restore the terminal before reporting anything.
    drop(surface);
    result
}

fn apply_cli(config: &mut HangmanConfig, cli: &Cli) -> Result<()> {
    if let Some(path) = &cli.words {
        config.words_path = path.clone();
    }
    if let Some(min) = cli.min_len {
        config.bounds.min = min;
    }
    if let Some(max) = cli.max_len {
        config.bounds.max = max;
    }
    if let Some(key) = cli.quit_key {
        config.quit_key = validate_quit_key(key)?;
    }
    Ok(())
}

fn clock_seed() -> u32 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.subsec_nanos() ^ (d.as_secs() as u32))
        .unwrap_or(1)
}
