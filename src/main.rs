//! Wordle - CLI
//!
//! Play Wordle in the terminal, either as a full TUI or a plain
//! prompt-and-print loop.

use anyhow::Result;
use clap::{Parser, Subcommand};
use wordle_game::{
    commands::run_play,
    wordlists::{WORDS, loader},
};

#[derive(Parser)]
#[command(
    name = "wordle_game",
    about = "Play Wordle in the terminal",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Path to a custom word list (one word per line); bundled list by default
    #[arg(short, long, global = true)]
    wordlist: Option<String>,

    /// Maximum number of guesses per game
    #[arg(short = 'n', long, global = true, default_value_t = 6)]
    max_tries: usize,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive TUI mode (default)
    Play,

    /// Plain CLI mode (prompt-and-print, no TUI)
    Simple,
}

/// Load the dictionary from the -w flag, falling back to the embedded list
fn load_words(wordlist: Option<&str>) -> Result<Vec<String>> {
    match wordlist {
        Some(path) => Ok(loader::load_from_file(path)?),
        None => Ok(loader::words_from_slice(WORDS)),
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let words = load_words(cli.wordlist.as_deref())?;

    // Default to Play mode if no command given
    let command = cli.command.unwrap_or(Commands::Play);

    match command {
        Commands::Play => run_play_command(&words, cli.max_tries),
        Commands::Simple => run_play(&words, cli.max_tries).map_err(|e| anyhow::anyhow!(e)),
    }
}

fn run_play_command(words: &[String], max_tries: usize) -> Result<()> {
    use wordle_game::interactive::{App, run_tui};

    let app = App::new(words, max_tries)?;
    run_tui(app)
}
