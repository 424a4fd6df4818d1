//! Alphabet-wide letter status summary
//!
//! Presentation layers show a keyboard where each letter carries the best
//! feedback ever observed for it across all answers so far.

use super::{Answer, AnswerFlag};

/// Best-known status for each letter A-Z
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Alphabet {
    statuses: [AnswerFlag; 26],
}

impl Alphabet {
    /// Fold all answers into a per-letter summary
    ///
    /// A letter's status is the maximum flag observed for it, so `Correct`
    /// never regresses to `Present` or `Absent` on a later ambiguous guess.
    /// Only ASCII uppercase letters are tracked.
    ///
    /// # Examples
    /// ```
    /// use wordle_game::core::{Alphabet, Answer, AnswerFlag};
    ///
    /// let answers = vec![Answer::compute("WEEDS", "SPEED").unwrap()];
    /// let alphabet = Alphabet::from_answers(&answers);
    /// assert_eq!(alphabet.status('E'), AnswerFlag::Correct);
    /// assert_eq!(alphabet.status('W'), AnswerFlag::Absent);
    /// assert_eq!(alphabet.status('Z'), AnswerFlag::Unknown);
    /// ```
    #[must_use]
    pub fn from_answers(answers: &[Answer]) -> Self {
        let mut statuses = [AnswerFlag::Unknown; 26];

        for answer in answers {
            for (&letter, &flag) in answer.letters().iter().zip(answer.flags()) {
                if letter.is_ascii_uppercase() {
                    let slot = &mut statuses[(letter as u8 - b'A') as usize];
                    *slot = (*slot).max(flag);
                }
            }
        }

        Self { statuses }
    }

    /// Status of a single letter (case insensitive)
    ///
    /// Returns `Unknown` for anything outside A-Z.
    #[must_use]
    pub fn status(&self, letter: char) -> AnswerFlag {
        let upper = letter.to_ascii_uppercase();
        if upper.is_ascii_uppercase() {
            self.statuses[(upper as u8 - b'A') as usize]
        } else {
            AnswerFlag::Unknown
        }
    }

    /// Iterate over all letters A-Z with their statuses
    pub fn iter(&self) -> impl Iterator<Item = (char, AnswerFlag)> + '_ {
        ('A'..='Z').zip(self.statuses.iter().copied())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_history_is_all_unknown() {
        let alphabet = Alphabet::from_answers(&[]);
        assert!(alphabet.iter().all(|(_, flag)| flag == AnswerFlag::Unknown));
    }

    #[test]
    fn best_status_wins() {
        let answers = vec![
            // E misplaced here...
            Answer::compute("EDUCT", "SPEED").unwrap(),
            // ...then correctly placed
            Answer::compute("WEEDS", "SPEED").unwrap(),
        ];
        let alphabet = Alphabet::from_answers(&answers);
        assert_eq!(alphabet.status('E'), AnswerFlag::Correct);
    }

    #[test]
    fn correct_never_regresses() {
        let answers = vec![
            Answer::compute("SPEED", "SPEED").unwrap(),
            // Third E gets Absent, but E stays Correct overall
            Answer::compute("EEEZZ", "SPEED").unwrap(),
        ];
        let alphabet = Alphabet::from_answers(&answers);
        assert_eq!(alphabet.status('E'), AnswerFlag::Correct);
        assert_eq!(alphabet.status('Z'), AnswerFlag::Absent);
    }

    #[test]
    fn status_is_case_insensitive() {
        let answers = vec![Answer::compute("AAAAA", "AAAAA").unwrap()];
        let alphabet = Alphabet::from_answers(&answers);
        assert_eq!(alphabet.status('a'), AnswerFlag::Correct);
        assert_eq!(alphabet.status('A'), AnswerFlag::Correct);
    }

    #[test]
    fn non_letters_are_unknown() {
        let alphabet = Alphabet::from_answers(&[]);
        assert_eq!(alphabet.status('3'), AnswerFlag::Unknown);
        assert_eq!(alphabet.status('é'), AnswerFlag::Unknown);
    }

    #[test]
    fn iter_covers_whole_alphabet() {
        let alphabet = Alphabet::from_answers(&[]);
        let letters: Vec<char> = alphabet.iter().map(|(c, _)| c).collect();
        assert_eq!(letters.len(), 26);
        assert_eq!(letters.first(), Some(&'A'));
        assert_eq!(letters.last(), Some(&'Z'));
    }
}
