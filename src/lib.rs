//! Wordle
//!
//! A Wordle rules engine: guess evaluation with correct duplicate-letter
//! handling, a bounded-attempts state machine, and terminal front ends
//! (plain CLI and TUI) built on top of it.
//!
//! # Quick Start
//!
//! ```rust
//! use wordle_game::game::{InputStatus, Wordle};
//!
//! let mut game = Wordle::new(&["WEEDS", "SPEED"], Some("SPEED"), 6).unwrap();
//! assert_eq!(game.play_word("weeds"), InputStatus::Valid);
//! assert_eq!(game.state().answers().len(), 1);
//! ```

// Core domain types
pub mod core;

// Game session and state machine
pub mod game;

// Word lists
pub mod wordlists;

// Terminal output formatting
pub mod output;

// Command implementations
pub mod commands;

// Interactive TUI interface
pub mod interactive;
