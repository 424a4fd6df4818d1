//! Game session: dictionary, secret word and turn bookkeeping
//!
//! [`Wordle`] owns the normalized dictionary and drives the state machine in
//! [`GameState`](super::GameState). The only mutating operation is
//! [`Wordle::play_word`]; [`Wordle::check_word`] is a side-effect-free query
//! so presentation layers can give live validity feedback.

use super::{GameState, sanitize};
use crate::core::Answer;
use rand::Rng;
use rustc_hash::FxHashSet;
use std::fmt;

/// Validity of a submitted word
///
/// These are ordinary return values the caller branches on for user
/// feedback, not errors. Only `Valid` mutates the session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputStatus {
    /// Fewer letters than the dictionary word size
    TooShort,
    /// More letters than the dictionary word size
    TooLong,
    /// Right length but not an accepted word
    NotInDictionary,
    /// The game is already won or lost
    NotPlaying,
    /// Accepted (and, for `play_word`, played)
    Valid,
}

impl fmt::Display for InputStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let cause = match self {
            Self::TooShort => "too short",
            Self::TooLong => "too long",
            Self::NotInDictionary => "not in dictionary",
            Self::NotPlaying => "not playing",
            Self::Valid => "valid",
        };
        write!(f, "{cause}")
    }
}

/// Error type for session construction
///
/// A construction failure means a misconfigured dictionary, not a user
/// mistake; the caller must fix the word list and retry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GameError {
    EmptyWordList,
    InvalidWord(String),
    UnknownSelectedWord(String),
}

impl fmt::Display for GameError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyWordList => write!(f, "at least one word is required"),
            Self::InvalidWord(word) => {
                write!(
                    f,
                    "'{word}' is invalid: words must all be the same length and made of latin letters only"
                )
            }
            Self::UnknownSelectedWord(word) => {
                write!(f, "selected word '{word}' isn't part of the available words")
            }
        }
    }
}

impl std::error::Error for GameError {}

/// A single game: fixed dictionary, fixed secret, bounded attempts
///
/// There is no reset; starting over means constructing a fresh session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Wordle {
    words: Vec<String>,
    selected_word: String,
    wordle_id: usize,
    max_tries: usize,
    state: GameState,
}

impl Wordle {
    /// Create a session over `words`, guessing `selected`
    ///
    /// Every word is sanitized (case folded, diacritics stripped) and
    /// duplicates are removed, order preserved. The word size is taken from
    /// the first word. When `selected` is `None` the secret is picked
    /// uniformly at random from the dictionary.
    ///
    /// A `max_tries` of zero makes the game unplayable: it starts directly
    /// in the `Lost` state with an empty history.
    ///
    /// # Errors
    /// - [`GameError::EmptyWordList`] if no words remain after sanitizing.
    /// - [`GameError::InvalidWord`] if any word is not made of exactly
    ///   `word_size` ASCII letters.
    /// - [`GameError::UnknownSelectedWord`] if the sanitized secret is not in
    ///   the dictionary.
    ///
    /// # Examples
    /// ```
    /// use wordle_game::game::Wordle;
    ///
    /// let game = Wordle::new(&["TOTOT", "TUTUT"], Some("TUTUT"), 6).unwrap();
    /// assert_eq!(game.word_size(), 5);
    /// assert!(game.state().is_playing());
    /// ```
    pub fn new<S: AsRef<str>>(
        words: &[S],
        selected: Option<&str>,
        max_tries: usize,
    ) -> Result<Self, GameError> {
        let mut seen = FxHashSet::default();
        let words: Vec<String> = words
            .iter()
            .map(|w| sanitize(w.as_ref()))
            .filter(|w| seen.insert(w.clone()))
            .collect();

        if words.is_empty() {
            return Err(GameError::EmptyWordList);
        }

        let word_size = words[0].chars().count();
        if word_size == 0 {
            return Err(GameError::InvalidWord(String::new()));
        }
        for word in &words {
            let valid = word.chars().count() == word_size
                && word.chars().all(|c| c.is_ascii_uppercase());
            if !valid {
                return Err(GameError::InvalidWord(word.clone()));
            }
        }

        let selected_word = match selected {
            Some(word) => sanitize(word),
            None => words[rand::rng().random_range(0..words.len())].clone(),
        };
        let wordle_id = words
            .iter()
            .position(|w| *w == selected_word)
            .ok_or_else(|| GameError::UnknownSelectedWord(selected_word.clone()))?;

        let state = if max_tries > 0 {
            GameState::Playing {
                answers: Vec::new(),
                max_tries,
            }
        } else {
            GameState::Lost {
                answers: Vec::new(),
                max_tries,
                wordle_id,
                selected_word: selected_word.clone(),
            }
        };

        Ok(Self {
            words,
            selected_word,
            wordle_id,
            max_tries,
            state,
        })
    }

    /// Current game state
    #[inline]
    #[must_use]
    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// The normalized, deduplicated dictionary
    #[inline]
    #[must_use]
    pub fn words(&self) -> &[String] {
        &self.words
    }

    /// Letter count shared by every dictionary word
    #[must_use]
    pub fn word_size(&self) -> usize {
        self.words[0].chars().count()
    }

    /// Configured attempt limit
    #[inline]
    #[must_use]
    pub fn max_tries(&self) -> usize {
        self.max_tries
    }

    /// Check whether `input` would be accepted, without playing it
    ///
    /// Length checks take precedence over dictionary membership. Never
    /// returns `NotPlaying`; validity of a word is independent of the game
    /// lifecycle.
    #[must_use]
    pub fn check_word(&self, input: &str) -> InputStatus {
        let sanitized = sanitize(input);
        let len = sanitized.chars().count();
        let word_size = self.word_size();

        if len < word_size {
            InputStatus::TooShort
        } else if len > word_size {
            InputStatus::TooLong
        } else if self.words.iter().any(|w| *w == sanitized) {
            InputStatus::Valid
        } else {
            InputStatus::NotInDictionary
        }
    }

    /// Play `input` as the next guess
    ///
    /// Re-validates the input (so callers need not call
    /// [`check_word`](Self::check_word) first) and, when `Valid`, appends the
    /// evaluated answer and advances the state machine: `Won` on an exact
    /// match, `Lost` when this guess consumes the last attempt, `Playing`
    /// otherwise. Any non-`Valid` status leaves the session untouched.
    pub fn play_word(&mut self, input: &str) -> InputStatus {
        let answers = match &self.state {
            GameState::Playing { answers, .. } => answers,
            _ => return InputStatus::NotPlaying,
        };

        let sanitized = sanitize(input);
        let status = self.check_word(&sanitized);
        if status != InputStatus::Valid {
            return status;
        }

        // Lengths are equal: both words come from the validated dictionary
        let answer = Answer::compute(&sanitized, &self.selected_word)
            .expect("dictionary words share one length");

        let mut answers = answers.clone();
        answers.push(answer);

        self.state = if sanitized == self.selected_word {
            GameState::Won {
                answers,
                max_tries: self.max_tries,
                wordle_id: self.wordle_id,
                selected_word: self.selected_word.clone(),
            }
        } else if answers.len() == self.max_tries {
            GameState::Lost {
                answers,
                max_tries: self.max_tries,
                wordle_id: self.wordle_id,
                selected_word: self.selected_word.clone(),
            }
        } else {
            GameState::Playing {
                answers,
                max_tries: self.max_tries,
            }
        };

        InputStatus::Valid
    }
}
