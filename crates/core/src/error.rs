use thiserror::Error;

/// Errors raised by the game rules.
///
/// None of these are fatal to the process: the caller reports them and ends
/// (or never starts) the round.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum HangmanError {
    #[error("no word in the list is longer than {min} and shorter than {max} characters")]
    NoEligibleWord { min: usize, max: usize },
    #[error("{0:?} is not a letter and cannot be guessed")]
    InvalidGuessInput(char),
}
