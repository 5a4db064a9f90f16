//! Shared types module - constants and plain data enums
//!
//! Everything here is pure data with no external dependencies, so it can be
//! used from the game rules, the key mapping and the renderer alike.
//!
//! # Word Bounds
//!
//! Candidate words are filtered with **exclusive** bounds on their trimmed
//! length: `MIN_WORD_LEN < len < MAX_WORD_LEN`.
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `MIN_WORD_LEN` | 4 | Words of this length or shorter are skipped |
//! | `MAX_WORD_LEN` | 60 | Words of this length or longer are skipped |
//! | `MAX_FAILURES` | 6 | Highest gallows stage index |
//! | `STAGE_COUNT` | 7 | Number of gallows stages (0..=6) |
//!
//! # Layout
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `GALLOWS_PANEL_WIDTH` | 20 | Fixed width of the left panel |
//! | `PANEL_HEIGHT` | 20 | Height of both panels |
//! | `MIN_TERM_WIDTH` | 64 | Narrowest terminal a round can start in |
//! | `MIN_TERM_HEIGHT` | 22 | Shortest terminal a round can start in |
//!
//! # Examples
//!
//! ```
//! use tui_hangman_types::{GameAction, Phase, MAX_FAILURES, STAGE_COUNT};
//!
//! assert_eq!(STAGE_COUNT, MAX_FAILURES + 1);
//!
//! let action = GameAction::Guess('e');
//! assert_eq!(action.letter(), Some('e'));
//!
//! assert!(!Phase::Playing.is_terminal());
//! assert!(Phase::Won.is_terminal());
//! ```

/// Default exclusive lower bound on word length.
pub const MIN_WORD_LEN: usize = 4;

/// Default exclusive upper bound on word length.
pub const MAX_WORD_LEN: usize = 60;

/// Highest failure stage. A seventh distinct miss ends the round.
pub const MAX_FAILURES: u8 = 6;

/// Number of gallows illustrations.
pub const STAGE_COUNT: u8 = MAX_FAILURES + 1;

/// The key that ends a round immediately.
pub const QUIT_KEY: char = 'q';

/// Most letters a player can guess once input is case-folded.
pub const ALPHABET_LEN: usize = 26;

/// Width in columns of the gallows panel, border included.
pub const GALLOWS_PANEL_WIDTH: u16 = 20;

/// Height in rows of both panels, border included.
pub const PANEL_HEIGHT: u16 = 20;

/// Narrowest status panel that still reads sensibly once wrapped.
pub const MIN_STATUS_PANEL_WIDTH: u16 = 40;

/// Terminal columns needed for both panels plus their margins.
pub const MIN_TERM_WIDTH: u16 = GALLOWS_PANEL_WIDTH + MIN_STATUS_PANEL_WIDTH + 4;

/// Terminal rows needed for the panels plus the top margin.
pub const MIN_TERM_HEIGHT: u16 = PANEL_HEIGHT + 2;

/// A key event after classification.
///
/// Anything that is neither a letter nor the quit key never becomes an action.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GameAction {
    /// Guess a letter. Always lowercase once produced by the key mapper.
    Guess(char),
    /// Leave the round.
    Quit,
}

impl GameAction {
    /// The guessed letter, if this is a guess.
    pub fn letter(&self) -> Option<char> {
        match self {
            GameAction::Guess(c) => Some(*c),
            GameAction::Quit => None,
        }
    }
}

/// Round phase
///
/// `Playing` is the only phase that accepts guesses; the other three end the
/// round and are never left again.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Phase {
    Playing,
    Won,
    Lost,
    Quit,
}

impl Phase {
    /// True once the round is over.
    pub fn is_terminal(&self) -> bool {
        !matches!(self, Phase::Playing)
    }

    /// Lowercase name, used in logs.
    pub fn as_str(&self) -> &'static str {
        match self {
            Phase::Playing => "playing",
            Phase::Won => "won",
            Phase::Lost => "lost",
            Phase::Quit => "quit",
        }
    }
}
