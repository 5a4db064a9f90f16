//! Round controller.
//!
//! Owns the [`GameState`](tui_hangman_core::GameState) for one round, feeds it
//! classified key presses and redraws the screen through a
//! [`Surface`](tui_hangman_term::Surface) until the round ends.

pub mod round;

pub use tui_hangman_core as core;
pub use tui_hangman_input as input;
pub use tui_hangman_term as term;
pub use tui_hangman_types as types;

pub use round::{Controller, Round, RoundSummary};
