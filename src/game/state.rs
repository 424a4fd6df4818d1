//! Game lifecycle state
//!
//! A game is `Playing` until the secret is found (`Won`) or the attempts run
//! out (`Lost`). Terminal variants carry the revealed secret and the index of
//! the puzzle in the dictionary; `Playing` deliberately does not.

use crate::core::Answer;

/// Current outcome of a game
///
/// Each transition replaces the whole value; answer lists are never mutated
/// in place, so a caller holding an earlier snapshot keeps a consistent view.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GameState {
    /// Game still in progress
    Playing {
        answers: Vec<Answer>,
        max_tries: usize,
    },
    /// The last guess matched the secret word
    Won {
        answers: Vec<Answer>,
        max_tries: usize,
        wordle_id: usize,
        selected_word: String,
    },
    /// All attempts consumed without a match
    Lost {
        answers: Vec<Answer>,
        max_tries: usize,
        wordle_id: usize,
        selected_word: String,
    },
}

impl GameState {
    /// Guesses played so far, in order
    #[must_use]
    pub fn answers(&self) -> &[Answer] {
        match self {
            Self::Playing { answers, .. }
            | Self::Won { answers, .. }
            | Self::Lost { answers, .. } => answers,
        }
    }

    /// Configured attempt limit
    #[must_use]
    pub fn max_tries(&self) -> usize {
        match self {
            Self::Playing { max_tries, .. }
            | Self::Won { max_tries, .. }
            | Self::Lost { max_tries, .. } => *max_tries,
        }
    }

    /// Whether further guesses are accepted
    #[must_use]
    pub fn is_playing(&self) -> bool {
        matches!(self, Self::Playing { .. })
    }

    /// The secret word, revealed only once the game is over
    #[must_use]
    pub fn selected_word(&self) -> Option<&str> {
        match self {
            Self::Playing { .. } => None,
            Self::Won { selected_word, .. } | Self::Lost { selected_word, .. } => {
                Some(selected_word)
            }
        }
    }

    /// Index of the puzzle in the dictionary, known once the game is over
    #[must_use]
    pub fn wordle_id(&self) -> Option<usize> {
        match self {
            Self::Playing { .. } => None,
            Self::Won { wordle_id, .. } | Self::Lost { wordle_id, .. } => Some(*wordle_id),
        }
    }
}
