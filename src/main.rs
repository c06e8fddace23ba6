//! Word Game - CLI
//!
//! Plays the word game on the terminal. Word lists default to the embedded ones.

use anyhow::{Context, Result};
use clap::Parser;
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::time::Duration;
use tracing::info;
use word_game::{
    game::{Console, GameConfig, GameSession},
    wordlists::{DICTIONARY, EMBEDDED_DICTIONARY, EMBEDDED_TARGETS, TARGETS, WordCatalog},
};

#[derive(Parser)]
#[command(
    name = "word_game",
    about = "Guess hidden words of increasing length, 4 to 13 letters",
    version,
    author
)]
struct Cli {
    /// Target words: 'embedded' (default) or path to a word list file
    #[arg(short, long, default_value = "embedded")]
    targets: String,

    /// Guess dictionary: 'embedded' (default), 'none' to accept any letters, or path to file
    #[arg(short, long, default_value = "embedded")]
    dictionary: String,

    /// Seed for word selection (random if omitted)
    #[arg(long)]
    seed: Option<u64>,

    /// Pause after an invalid guess, in milliseconds
    #[arg(long, default_value = "0")]
    pause_ms: u64,
}

/// Load the target catalog based on the -t flag
fn load_targets(mode: &str) -> Result<WordCatalog> {
    let catalog = match mode {
        "embedded" => WordCatalog::from_slice(EMBEDDED_TARGETS, TARGETS)?,
        path => WordCatalog::from_file(path)?,
    };
    Ok(catalog)
}

/// Load the guess dictionary based on the -d flag
///
/// Returns `None` for "none", which accepts any alphabetic guess.
fn load_dictionary(mode: &str) -> Result<Option<WordCatalog>> {
    let catalog = match mode {
        "none" => None,
        "embedded" => Some(WordCatalog::from_slice(EMBEDDED_DICTIONARY, DICTIONARY)?),
        path => Some(WordCatalog::from_file(path)?),
    };
    Ok(catalog)
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "warn".into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let targets = load_targets(&cli.targets).context("Failed to load target words")?;
    let dictionary = load_dictionary(&cli.dictionary).context("Failed to load dictionary")?;
    let config =
        GameConfig::new(targets, dictionary).with_pause(Duration::from_millis(cli.pause_ms));

    let rng = cli
        .seed
        .map_or_else(StdRng::from_os_rng, StdRng::seed_from_u64);
    info!(seed = ?cli.seed, "starting word game");

    let mut session = GameSession::new(&config, rng);
    let mut console = Console::stdio();
    session.run(&mut console)
}
