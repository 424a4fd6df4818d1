//! Guess evaluation against the secret word
//!
//! An [`Answer`] pairs the letters of a played guess with one [`AnswerFlag`]
//! per position. [`Answer::compute`] implements Wordle's exact feedback
//! rules, including proper handling of duplicate letters.

use super::AnswerFlag;
use rustc_hash::FxHashMap;
use std::fmt;

/// An evaluated guess: letters with their per-position feedback
///
/// Invariant: `letters` and `flags` always have the same length. Two answers
/// are equal iff both sequences are equal element-wise.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Answer {
    letters: Vec<char>,
    flags: Vec<AnswerFlag>,
}

/// Error type for guess evaluation
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AnswerError {
    LengthMismatch { guess: usize, secret: usize },
}

impl fmt::Display for AnswerError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::LengthMismatch { guess, secret } => {
                write!(
                    f,
                    "guess ({guess} letters) and secret ({secret} letters) must have the same size"
                )
            }
        }
    }
}

impl std::error::Error for AnswerError {}

impl Answer {
    /// Evaluate `guess` against `secret`
    ///
    /// Two passes over the guess with a shrinking multiset of the secret's
    /// letters:
    /// 1. Mark exact position matches `Correct` and consume their occurrence.
    /// 2. Left to right, mark `Present` while unconsumed occurrences remain,
    ///    `Absent` otherwise.
    ///
    /// A single pass over "does the secret contain this letter" would credit
    /// a repeated guess letter more times than the secret holds it; the
    /// multiset decrement caps credit at the available occurrences, ties
    /// resolving to the earliest unclaimed position.
    ///
    /// # Errors
    /// Returns [`AnswerError::LengthMismatch`] if the two words differ in
    /// length. That is a caller bug, not a user input condition.
    ///
    /// # Examples
    /// ```
    /// use wordle_game::core::{Answer, AnswerFlag};
    ///
    /// let answer = Answer::compute("WEEDS", "SPEED").unwrap();
    /// assert_eq!(
    ///     answer.flags(),
    ///     &[
    ///         AnswerFlag::Absent,
    ///         AnswerFlag::Present,
    ///         AnswerFlag::Correct,
    ///         AnswerFlag::Present,
    ///         AnswerFlag::Present,
    ///     ]
    /// );
    /// ```
    pub fn compute(guess: &str, secret: &str) -> Result<Self, AnswerError> {
        let letters: Vec<char> = guess.chars().collect();
        let secret_letters: Vec<char> = secret.chars().collect();

        if letters.len() != secret_letters.len() {
            return Err(AnswerError::LengthMismatch {
                guess: letters.len(),
                secret: secret_letters.len(),
            });
        }

        let mut available: FxHashMap<char, u8> = FxHashMap::default();
        for &letter in &secret_letters {
            *available.entry(letter).or_insert(0) += 1;
        }

        let mut flags = vec![AnswerFlag::Absent; letters.len()];

        // First pass: exact position matches, consumed before the scan for
        // misplaced letters
        for (i, &letter) in letters.iter().enumerate() {
            if letter == secret_letters[i] {
                flags[i] = AnswerFlag::Correct;
                if let Some(count) = available.get_mut(&letter) {
                    *count = count.saturating_sub(1);
                }
            }
        }

        // Second pass: misplaced letters from the remaining pool
        for (i, &letter) in letters.iter().enumerate() {
            if flags[i] != AnswerFlag::Correct
                && let Some(count) = available.get_mut(&letter)
                && *count > 0
            {
                flags[i] = AnswerFlag::Present;
                *count -= 1;
            }
        }

        Ok(Self { letters, flags })
    }

    /// An unplayed row of `word_size` blanks, used to pad the guess grid
    #[must_use]
    pub fn empty(word_size: usize) -> Self {
        Self {
            letters: vec![' '; word_size],
            flags: vec![AnswerFlag::Unknown; word_size],
        }
    }

    /// The guessed letters
    #[inline]
    #[must_use]
    pub fn letters(&self) -> &[char] {
        &self.letters
    }

    /// Per-position feedback, parallel to [`letters`](Self::letters)
    #[inline]
    #[must_use]
    pub fn flags(&self) -> &[AnswerFlag] {
        &self.flags
    }

    /// The guessed word as a string
    #[must_use]
    pub fn word(&self) -> String {
        self.letters.iter().collect()
    }
}

impl fmt::Display for Answer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for flag in &self.flags {
            write!(f, "{flag}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use AnswerFlag::{Absent, Correct, Present};

    #[test]
    fn compute_no_common_letters() {
        let answer = Answer::compute("AAAAA", "BBBBB").unwrap();
        assert_eq!(answer.flags(), &[Absent; 5]);
    }

    #[test]
    fn compute_exact_match() {
        let answer = Answer::compute("AAAAA", "AAAAA").unwrap();
        assert_eq!(answer.flags(), &[Correct; 5]);
        assert_eq!(answer.word(), "AAAAA");
    }

    #[test]
    fn compute_duplicate_letters_capped_by_secret() {
        // SPEED holds one correctly placed E; the remaining E, the S and the
        // D are each credited once, the W not at all
        let answer = Answer::compute("WEEDS", "SPEED").unwrap();
        assert_eq!(answer.flags(), &[Absent, Present, Correct, Present, Present]);
    }

    #[test]
    fn compute_exact_match_consumes_before_misplaced_scan() {
        // ERASE has two E's; the guess's third E gets no credit
        let answer = Answer::compute("EEEZZ", "ERASE").unwrap();
        assert_eq!(answer.flags(), &[Correct, Present, Absent, Absent, Absent]);
    }

    #[test]
    fn compute_misplaced_ties_resolve_left_to_right() {
        // Secret has a single O and no exact matches anywhere; only the
        // guess's first O claims it
        let answer = Answer::compute("OOAAA", "BBBOB").unwrap();
        assert_eq!(answer.flags(), &[Present, Absent, Absent, Absent, Absent]);
    }

    #[test]
    fn compute_green_takes_priority_over_earlier_yellow() {
        let answer = Answer::compute("ROBOT", "FLOOR").unwrap();
        assert_eq!(answer.flags(), &[Present, Present, Absent, Correct, Absent]);
    }

    #[test]
    fn compute_length_mismatch() {
        assert_eq!(
            Answer::compute("ABC", "ABCDEF"),
            Err(AnswerError::LengthMismatch {
                guess: 3,
                secret: 6
            })
        );
    }

    #[test]
    fn compute_output_length_matches_input() {
        for (guess, secret) in [("ABC", "XYZ"), ("WEEDS", "SPEED"), ("AB", "AB")] {
            let answer = Answer::compute(guess, secret).unwrap();
            assert_eq!(answer.letters().len(), guess.chars().count());
            assert_eq!(answer.flags().len(), answer.letters().len());
        }
    }

    #[test]
    fn compute_correct_plus_present_capped_per_letter() {
        // Secret SPEED has two E's; guess EEEEE gets exactly two credits
        let answer = Answer::compute("EEEEE", "SPEED").unwrap();
        let credited = answer
            .flags()
            .iter()
            .filter(|&&f| f == Correct || f == Present)
            .count();
        assert_eq!(credited, 2);
    }

    #[test]
    fn answer_equality_is_element_wise() {
        let a = Answer::compute("WEEDS", "SPEED").unwrap();
        let b = Answer::compute("WEEDS", "SPEED").unwrap();
        let c = Answer::compute("SPEED", "SPEED").unwrap();
        assert_eq!(a, b);
        assert_ne!(a, c);
    }

    #[test]
    fn empty_answer_is_all_unknown() {
        let answer = Answer::empty(5);
        assert_eq!(answer.letters(), &[' '; 5]);
        assert_eq!(answer.flags(), &[AnswerFlag::Unknown; 5]);
    }

    #[test]
    fn answer_display_uses_flag_symbols() {
        let answer = Answer::compute("WEEDS", "SPEED").unwrap();
        assert_eq!(answer.to_string(), " -+--");
    }
}
