//! Core domain types for Wordle
//!
//! This module contains the fundamental domain types with zero game state.
//! All types here are pure, testable, and have clear properties.

mod alphabet;
mod answer;
mod flag;

pub use alphabet::Alphabet;
pub use answer::{Answer, AnswerError};
pub use flag::AnswerFlag;
