//! Game state module - one round of hangman
//!
//! A `GameState` is built once per round around the chosen word and is owned
//! by whoever drives the round. It never touches the terminal.

use arrayvec::ArrayVec;

use crate::error::HangmanError;
use crate::rng::SimpleRng;
use crate::types::{ALPHABET_LEN, MAX_FAILURES, STAGE_COUNT};
use crate::words::{select_word, WordBounds};

/// What a single guess did to the round.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GuessOutcome {
    /// New letter that occurs in the word.
    Hit,
    /// New letter that does not occur in the word; costs a chance.
    Miss,
    /// Letter was already guessed. Nothing changes.
    Repeat,
}

/// Complete state of one round
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameState {
    word: String,
    /// Lowercased guesses, in the order they were made.
    guessed: ArrayVec<char, ALPHABET_LEN>,
    /// Distinct wrong letters. Reaches `STAGE_COUNT` on the losing guess.
    misses: u8,
}

impl GameState {
    /// Start a round around a known word.
    pub fn new(word: impl Into<String>) -> Self {
        Self {
            word: word.into(),
            guessed: ArrayVec::new(),
            misses: 0,
        }
    }

    /// Pick a word from `words` and start a round around it.
    pub fn start<S: AsRef<str>>(
        words: &[S],
        bounds: WordBounds,
        rng: &mut SimpleRng,
    ) -> Result<Self, HangmanError> {
        let word = select_word(words, bounds, rng)?;
        tracing::info!(
            candidates = words.len(),
            word_len = word.chars().count(),
            "round started"
        );
        Ok(Self::new(word))
    }

    pub fn word(&self) -> &str {
        &self.word
    }

    /// Guessed letters in guess order.
    pub fn guessed_letters(&self) -> &[char] {
        &self.guessed
    }

    /// Apply one guess.
    ///
    /// Only ASCII letters are accepted; case is folded before comparing. A
    /// wrong letter costs a chance the first time only.
    pub fn apply_guess(&mut self, letter: char) -> Result<GuessOutcome, HangmanError> {
        if !letter.is_ascii_alphabetic() {
            return Err(HangmanError::InvalidGuessInput(letter));
        }
        let letter = letter.to_ascii_lowercase();

        if self.guessed.contains(&letter) {
            tracing::debug!(%letter, "repeated guess");
            return Ok(GuessOutcome::Repeat);
        }
        // At most 26 distinct lowercase ASCII letters ever reach this push.
        self.guessed.push(letter);

        if self.word.chars().any(|c| fold(c) == letter) {
            tracing::debug!(%letter, "hit");
            return Ok(GuessOutcome::Hit);
        }

        if self.misses < STAGE_COUNT {
            self.misses += 1;
        }
        tracing::debug!(%letter, misses = self.misses, "miss");
        Ok(GuessOutcome::Miss)
    }

    /// Every distinct character of the word has been guessed.
    pub fn is_winner(&self) -> bool {
        self.word.chars().all(|c| self.guessed.contains(&fold(c)))
    }

    /// The guess after the last gallows stage was drawn has been spent.
    pub fn is_lost(&self) -> bool {
        self.misses > MAX_FAILURES
    }

    pub fn is_game_over(&self) -> bool {
        self.is_winner() || self.is_lost()
    }

    /// Gallows stage to draw, `0..=MAX_FAILURES`.
    pub fn failure_count(&self) -> u8 {
        self.misses.min(MAX_FAILURES)
    }

    /// Wrong letters guessed so far. Shown in the end-of-round message.
    pub fn attempts(&self) -> u8 {
        self.misses
    }

    /// Wrong guesses left before the round is lost: `STAGE_COUNT - misses`.
    ///
    /// While playing this equals `MAX_FAILURES + 1 - failure_count()`. Once
    /// the round is lost it is 0, although `failure_count()` stays at
    /// `MAX_FAILURES` because that is the last drawing.
    pub fn remaining_chances(&self) -> u8 {
        STAGE_COUNT.saturating_sub(self.misses)
    }

    /// Each character of the word with whether it has been revealed.
    pub fn masked_word(&self) -> Vec<(char, bool)> {
        self.word
            .chars()
            .map(|c| (c, self.guessed.contains(&fold(c))))
            .collect()
    }

    /// Space-separated word with `_` for hidden characters, e.g. `c _ t`.
    pub fn masked_display(&self) -> String {
        let mut out = String::with_capacity(self.word.len() * 2);
        for (i, (c, revealed)) in self.masked_word().into_iter().enumerate() {
            if i > 0 {
                out.push(' ');
            }
            out.push(if revealed { c } else { '_' });
        }
        out
    }

    /// Distinct revealed characters, in the order they first appear in the word.
    pub fn revealed_letters(&self) -> Vec<char> {
        let mut out: Vec<char> = Vec::new();
        for (c, revealed) in self.masked_word() {
            if revealed && !out.contains(&c) {
                out.push(c);
            }
        }
        out
    }
}

fn fold(c: char) -> char {
    c.to_lowercase().next().unwrap_or(c)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn play(word: &str, guesses: &str) -> GameState {
        let mut state = GameState::new(word);
        for c in guesses.chars() {
            state.apply_guess(c).unwrap();
        }
        state
    }

    #[test]
    fn test_new_game_state() {
        let state = GameState::new("cat");

        assert_eq!(state.word(), "cat");
        assert!(state.guessed_letters().is_empty());
        assert_eq!(state.failure_count(), 0);
        assert_eq!(state.remaining_chances(), 7);
        assert!(!state.is_winner());
        assert!(!state.is_game_over());
    }

    #[test]
    fn test_start_picks_eligible_word() {
        let words = ["ox", "  zebra \n", "cat"];
        let mut rng = SimpleRng::new(5);
        let state = GameState::start(&words, WordBounds::default(), &mut rng).unwrap();
        assert_eq!(state.word(), "zebra");
    }

    #[test]
    fn test_start_without_eligible_word_fails() {
        let words = ["ox", "cat"];
        let mut rng = SimpleRng::new(5);
        assert!(matches!(
            GameState::start(&words, WordBounds::default(), &mut rng),
            Err(HangmanError::NoEligibleWord { .. })
        ));
    }

    #[test]
    fn test_hit_and_miss() {
        let mut state = GameState::new("cat");
        assert_eq!(state.apply_guess('c'), Ok(GuessOutcome::Hit));
        assert_eq!(state.apply_guess('x'), Ok(GuessOutcome::Miss));
        assert_eq!(state.failure_count(), 1);
        assert_eq!(state.remaining_chances(), 6);
    }

    #[test]
    fn test_repeated_wrong_guess_costs_once() {
        let mut state = GameState::new("cat");
        state.apply_guess('x').unwrap();
        assert_eq!(state.apply_guess('x'), Ok(GuessOutcome::Repeat));
        assert_eq!(state.apply_guess('X'), Ok(GuessOutcome::Repeat));
        assert_eq!(state.failure_count(), 1);
        assert_eq!(state.guessed_letters(), &['x']);
    }

    #[test]
    fn test_uppercase_guess_matches_lowercase_word() {
        let state = play("cat", "CAT");
        assert!(state.is_winner());
        assert_eq!(state.guessed_letters(), &['c', 'a', 't']);
    }

    #[test]
    fn test_lowercase_guess_matches_mixed_case_word() {
        let state = play("Paris", "pars");
        assert!(!state.is_winner());
        let state = play("Paris", "paris");
        assert!(state.is_winner());
        assert_eq!(state.masked_display(), "P a r i s");
    }

    #[test]
    fn test_non_letter_is_rejected_without_state_change() {
        let mut state = GameState::new("cat");
        let before = state.clone();
        assert_eq!(
            state.apply_guess('7'),
            Err(HangmanError::InvalidGuessInput('7'))
        );
        assert_eq!(state.apply_guess(' '), Err(HangmanError::InvalidGuessInput(' ')));
        assert_eq!(state, before);
    }

    #[test]
    fn test_masked_word_and_revealed_letters() {
        let state = play("letter", "tz");
        assert_eq!(state.masked_display(), "_ _ t t _ _");
        assert_eq!(state.revealed_letters(), vec!['t']);

        let state = play("letter", "ret");
        assert_eq!(state.masked_display(), "_ e t t e r");
        assert_eq!(state.revealed_letters(), vec!['e', 't', 'r']);
    }

    #[test]
    fn test_seventh_distinct_miss_loses() {
        let mut state = GameState::new("cat");
        for c in "bdefgh".chars() {
            state.apply_guess(c).unwrap();
            assert!(!state.is_lost());
        }
        assert_eq!(state.failure_count(), 6);
        assert_eq!(state.remaining_chances(), 1);

        state.apply_guess('i').unwrap();
        assert!(state.is_lost());
        assert!(state.is_game_over());
        assert_eq!(state.failure_count(), 6);
        assert_eq!(state.attempts(), 7);
        assert_eq!(state.remaining_chances(), 0);
    }

    #[test]
    fn test_misses_stop_counting_after_loss() {
        let state = play("cat", "bdefghijklm");
        assert_eq!(state.attempts(), 7);
        assert_eq!(state.failure_count(), 6);
    }

    #[test]
    fn test_punctuation_in_word_blocks_win() {
        let state = play("o'clock", "oclk");
        assert!(!state.is_winner());
        assert_eq!(state.masked_display(), "o _ c l o c k");
    }
}
