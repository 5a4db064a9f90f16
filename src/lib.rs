//! TUI Hangman (workspace facade crate).
//!
//! Re-exports the implementation crates under `tui_hangman::{core,engine,input,term,types}`
//! and hosts the binary's configuration and logging setup.

pub mod config;
pub mod logging;

pub use tui_hangman_core as core;
pub use tui_hangman_engine as engine;
pub use tui_hangman_input as input;
pub use tui_hangman_term as term;
pub use tui_hangman_types as types;
