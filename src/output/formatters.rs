//! Formatting utilities for terminal output

use crate::core::{Answer, AnswerFlag};

/// Format a flag as its emoji square
#[must_use]
pub fn flag_to_emoji(flag: AnswerFlag) -> char {
    match flag {
        AnswerFlag::Unknown => '⬜',
        AnswerFlag::Present => '🟨',
        AnswerFlag::Absent => '⬛',
        AnswerFlag::Correct => '🟩',
    }
}

/// Format an answer's feedback as an emoji row
#[must_use]
pub fn answer_to_emoji(answer: &Answer) -> String {
    answer.flags().iter().map(|&f| flag_to_emoji(f)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn emoji_for_each_flag() {
        assert_eq!(flag_to_emoji(AnswerFlag::Correct), '🟩');
        assert_eq!(flag_to_emoji(AnswerFlag::Present), '🟨');
        assert_eq!(flag_to_emoji(AnswerFlag::Absent), '⬛');
        assert_eq!(flag_to_emoji(AnswerFlag::Unknown), '⬜');
    }

    #[test]
    fn answer_to_emoji_row() {
        let answer = Answer::compute("WEEDS", "SPEED").unwrap();
        assert_eq!(answer_to_emoji(&answer), "⬛🟨🟩🟨🟨");
    }

    #[test]
    fn empty_answer_is_white_squares() {
        let answer = Answer::empty(5);
        assert_eq!(answer_to_emoji(&answer), "⬜⬜⬜⬜⬜");
    }
}
