//! Plain interactive CLI mode
//!
//! Text-based game loop without TUI: print the grid, read a word, play it.

use crate::core::{Alphabet, AnswerFlag};
use crate::game::{InputStatus, Wordle};
use crate::output::{print_grid, print_outcome, share_card};
use colored::Colorize;
use std::io::{self, Write};

/// Run the plain CLI game loop
///
/// Each round constructs a fresh session with a random secret; the loop ends
/// when the player declines to play again or types `quit`.
///
/// # Errors
///
/// Returns an error if the dictionary is rejected by the session constructor
/// or if reading user input fails.
pub fn run_play(words: &[String], max_tries: usize) -> Result<(), String> {
    println!("\n.---------------.");
    println!("| Hello Wordle! |");
    println!("'---------------'\n");

    loop {
        let mut game = Wordle::new(words, None, max_tries).map_err(|e| e.to_string())?;
        let word_size = game.word_size();

        print_grid(game.state(), word_size);

        while game.state().is_playing() {
            let input = get_user_input(&format!("➡️  Enter a {word_size} letter word"))?;

            if matches!(input.to_lowercase().as_str(), "quit" | "q" | "exit") {
                println!("\n👋 Thanks for playing!\n");
                return Ok(());
            }

            match game.play_word(&input) {
                InputStatus::Valid => {
                    println!();
                    print_grid(game.state(), word_size);
                    print_alphabet(&Alphabet::from_answers(game.state().answers()));
                    print_outcome(game.state());
                }
                status => {
                    println!(" ❌ '{input}' is invalid: {status}\n");
                }
            }
        }

        if let Some(card) = share_card(game.state()) {
            println!("\n{card}");
        }

        let again = get_user_input("🔄 Play again? (y/N)")?;
        if !again.eq_ignore_ascii_case("y") {
            println!("\n👋 Thanks for playing!\n");
            return Ok(());
        }
        println!();
    }
}

/// Print the A-Z summary line colored by best-known status
fn print_alphabet(alphabet: &Alphabet) {
    let row: String = alphabet
        .iter()
        .map(|(letter, flag)| {
            let styled = match flag {
                AnswerFlag::Correct => letter.to_string().black().on_green(),
                AnswerFlag::Present => letter.to_string().black().on_yellow(),
                AnswerFlag::Absent => letter.to_string().dimmed(),
                AnswerFlag::Unknown => letter.to_string().normal(),
            };
            format!("{styled} ")
        })
        .collect();
    println!("  {row}\n");
}

/// Get user input with a prompt
fn get_user_input(prompt: &str) -> Result<String, String> {
    print!("{prompt}: ");
    io::stdout().flush().map_err(|e| e.to_string())?;

    let mut input = String::new();
    io::stdin()
        .read_line(&mut input)
        .map_err(|e| e.to_string())?;

    Ok(input.trim().to_string())
}
