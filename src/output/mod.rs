//! Terminal output formatting
//!
//! Display utilities for the CLI game grid and the shareable result card.

pub mod display;
pub mod formatters;

pub use display::{format_answer, print_grid, print_outcome, share_card};
pub use formatters::{answer_to_emoji, flag_to_emoji};
