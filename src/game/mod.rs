//! Game session and state machine
//!
//! Everything needed to run one game: input sanitization, the lifecycle
//! state and the rules engine that ties them to the evaluator in
//! [`core`](crate::core).

mod sanitize;
mod session;
mod state;

pub use sanitize::sanitize;
pub use session::{GameError, InputStatus, Wordle};
pub use state::GameState;
