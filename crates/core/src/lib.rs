//! Core game logic module - pure, deterministic, and testable
//!
//! This crate holds the hangman rules and has **no dependency** on the
//! terminal or on input handling:
//!
//! - **Deterministic**: word selection is driven by a seeded [`SimpleRng`]
//! - **Per-round**: a [`GameState`] is built fresh for every round and shares nothing
//! - **Testable**: every rule is covered by unit tests next to the code
//!
//! # Module Structure
//!
//! - [`game_state`]: guesses, misses, win/loss and the derived display data
//! - [`words`]: word-list parsing and bounded random selection
//! - [`gallows`]: the seven failure-stage illustrations
//! - [`rng`]: small LCG used to pick the word
//! - [`error`]: [`HangmanError`]
//!
//! # Game Rules
//!
//! - The word is picked among entries whose trimmed length is strictly between the bounds (4 and 60 by default)
//! - Guesses are single ASCII letters; case is ignored
//! - A wrong letter costs one chance the first time it is guessed
//! - Seven chances: the seventh distinct wrong letter loses the round
//!
//! # Example
//!
//! ```
//! use tui_hangman_core::{GameState, GuessOutcome};
//!
//! let mut game = GameState::new("cat");
//!
//! assert_eq!(game.apply_guess('c'), Ok(GuessOutcome::Hit));
//! assert_eq!(game.apply_guess('x'), Ok(GuessOutcome::Miss));
//! assert_eq!(game.masked_display(), "c _ _");
//! assert_eq!(game.remaining_chances(), 6);
//!
//! game.apply_guess('a').unwrap();
//! game.apply_guess('T').unwrap();
//! assert!(game.is_winner());
//! ```

pub mod error;
pub mod gallows;
pub mod game_state;
pub mod rng;
pub mod words;

pub use tui_hangman_types as types;

// Re-export commonly used types for convenience
pub use error::HangmanError;
pub use gallows::{stage, stage_width, GALLOWS, GALLOWS_ROWS};
pub use game_state::{GameState, GuessOutcome};
pub use rng::SimpleRng;
pub use words::{parse_word_list, select_word, WordBounds};
