//! Display functions for the plain CLI game
//!
//! Renders the guess grid with terminal colors and builds the shareable
//! result card for finished games.

use super::formatters::answer_to_emoji;
use crate::core::{Answer, AnswerFlag};
use crate::game::GameState;
use colored::Colorize;

/// Format one played row with colored letter tiles
#[must_use]
pub fn format_answer(answer: &Answer) -> String {
    answer
        .letters()
        .iter()
        .zip(answer.flags())
        .map(|(&letter, &flag)| {
            let tile = format!(" {letter} ");
            let styled = match flag {
                AnswerFlag::Correct => tile.black().on_green(),
                AnswerFlag::Present => tile.black().on_yellow(),
                AnswerFlag::Absent => tile.white().on_bright_black(),
                AnswerFlag::Unknown => tile.dimmed(),
            };
            styled.to_string()
        })
        .collect::<Vec<_>>()
        .join(" ")
}

/// Print the whole grid: played rows plus blank rows up to the attempt limit
pub fn print_grid(state: &GameState, word_size: usize) {
    for answer in state.answers() {
        println!("  {}", format_answer(answer));
    }
    let empty = Answer::empty(word_size);
    for _ in state.answers().len()..state.max_tries() {
        println!("  {}", format_answer(&empty));
    }
    println!();
}

/// Print the closing line for a finished game
pub fn print_outcome(state: &GameState) {
    match state {
        GameState::Playing { answers, max_tries } => {
            if !answers.is_empty() {
                println!("Keep going… {}/{max_tries}", answers.len());
            }
        }
        GameState::Won { selected_word, .. } => {
            println!(
                "{}",
                format!("Congrats! You found the correct answer 🎉: {selected_word}")
                    .green()
                    .bold()
            );
        }
        GameState::Lost { selected_word, .. } => {
            println!(
                "{}",
                format!("Doh! You didn't find the answer 🤭: {selected_word}").red()
            );
        }
    }
}

/// Build the shareable result card for a finished game
///
/// `None` while the game is still in progress.
///
/// # Examples
/// ```
/// use wordle_game::game::Wordle;
/// use wordle_game::output::share_card;
///
/// let mut game = Wordle::new(&["WEEDS", "SPEED"], Some("SPEED"), 2).unwrap();
/// assert_eq!(share_card(game.state()), None);
/// game.play_word("WEEDS");
/// game.play_word("SPEED");
/// let card = share_card(game.state()).unwrap();
/// assert!(card.starts_with("Wordle 1 2/2\n"));
/// ```
#[must_use]
pub fn share_card(state: &GameState) -> Option<String> {
    let header = match state {
        GameState::Playing { .. } => return None,
        GameState::Won {
            answers,
            max_tries,
            wordle_id,
            ..
        } => format!("Wordle {wordle_id} {}/{max_tries}", answers.len()),
        GameState::Lost {
            max_tries,
            wordle_id,
            ..
        } => format!("Wordle {wordle_id} X/{max_tries}"),
    };

    let mut card = header;
    for answer in state.answers() {
        card.push('\n');
        card.push_str(&answer_to_emoji(answer));
    }
    card.push('\n');
    Some(card)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::Wordle;

    #[test]
    fn share_card_none_while_playing() {
        let game = Wordle::new(&["TOTOT", "TUTUT"], Some("TUTUT"), 6).unwrap();
        assert_eq!(share_card(game.state()), None);
    }

    #[test]
    fn share_card_for_a_win() {
        let mut game = Wordle::new(&["TOTOT", "TUTUT"], Some("TUTUT"), 6).unwrap();
        game.play_word("TUTUT");
        let card = share_card(game.state()).unwrap();
        assert_eq!(card, "Wordle 1 1/6\n🟩🟩🟩🟩🟩\n");
    }

    #[test]
    fn share_card_for_a_loss() {
        let mut game = Wordle::new(&["TOTOT", "TUTUT"], Some("TUTUT"), 1).unwrap();
        game.play_word("TOTOT");
        let card = share_card(game.state()).unwrap();
        assert!(card.starts_with("Wordle 1 X/1\n"));
        assert_eq!(card.lines().count(), 2);
    }

    #[test]
    fn format_answer_has_one_tile_per_letter() {
        let answer = Answer::compute("TOTOT", "TUTUT").unwrap();
        let row = format_answer(&answer);
        // Letters survive the styling
        for letter in ['T', 'O'] {
            assert!(row.contains(letter));
        }
    }
}
