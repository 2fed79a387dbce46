//! Wordle Game - CLI
//!
//! Terminal Wordle with TUI and plain CLI modes.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use wordle_game::{
    commands::run_simple,
    wordlists::{Dictionary, WORDS, loader::load_from_file},
};

#[derive(Parser)]
#[command(
    name = "wordle_game",
    about = "Terminal Wordle: guess the hidden 5-letter word in 6 tries",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Wordlist: 'embedded' (default) or path to a file with one word per line
    #[arg(short = 'w', long, global = true, default_value = "embedded")]
    wordlist: String,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive TUI mode (default)
    Play,

    /// Simple CLI mode (line-based, no TUI)
    Simple,
}

/// Load the dictionary based on the -w flag
fn load_dictionary(wordlist_mode: &str) -> Result<Dictionary> {
    match wordlist_mode {
        "embedded" => Dictionary::from_slice(WORDS).context("embedded word list is unusable"),
        path => {
            let words = load_from_file(path)
                .with_context(|| format!("failed to read word list from {path}"))?;
            Dictionary::new(words)
                .with_context(|| format!("no playable 5-letter words in {path}"))
        }
    }
}

fn main() -> Result<()> {
    env_logger::init();

    let cli = Cli::parse();
    let dictionary = load_dictionary(&cli.wordlist)?;

    // Default to Play mode if no command given
    let command = cli.command.unwrap_or(Commands::Play);

    match command {
        Commands::Play => {
            use wordle_game::interactive::{App, run_tui};

            let app = App::new(&dictionary);
            run_tui(app)
        }
        Commands::Simple => run_simple(&dictionary).map_err(|e| anyhow::anyhow!(e)),
    }
}
