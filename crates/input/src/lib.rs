//! Terminal input module (engine-facing).
//!
//! This module is independent of the renderer. It turns `crossterm` key
//! events into [`crate::types::GameAction`]s: letters become guesses, the quit
//! key (or Ctrl-C) becomes `Quit`, and every other key is inert.

pub mod map;

pub use tui_hangman_types as types;

pub use map::{classify_key, should_quit};
