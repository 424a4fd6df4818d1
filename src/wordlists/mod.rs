//! Word lists for the game
//!
//! Provides the embedded dictionary compiled into the binary plus a loader
//! for custom word list files.

mod embedded;
pub mod loader;

pub use embedded::{WORDS, WORDS_COUNT};
