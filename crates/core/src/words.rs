//! Word list handling: parsing and bounded random selection.

use crate::error::HangmanError;
use crate::rng::SimpleRng;
use crate::types::{MAX_WORD_LEN, MIN_WORD_LEN};

/// Exclusive length bounds for candidate words.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WordBounds {
    pub min: usize,
    pub max: usize,
}

impl WordBounds {
    pub fn new(min: usize, max: usize) -> Self {
        Self { min, max }
    }

    /// `min < len < max`, measured in characters.
    pub fn admits(&self, word: &str) -> bool {
        let len = word.chars().count();
        self.min < len && len < self.max
    }
}

impl Default for WordBounds {
    fn default() -> Self {
        Self::new(MIN_WORD_LEN, MAX_WORD_LEN)
    }
}

/// Split newline-separated text into candidates.
///
/// Lines are kept untrimmed; whitespace-only lines are dropped.
pub fn parse_word_list(text: &str) -> Vec<String> {
    text.lines()
        .filter(|line| !line.trim().is_empty())
        .map(str::to_owned)
        .collect()
}

/// Pick a trimmed word whose length lies strictly inside `bounds`.
///
/// Every eligible entry is equally likely. An empty list, or one where nothing
/// fits, is a [`HangmanError::NoEligibleWord`].
pub fn select_word<S: AsRef<str>>(
    words: &[S],
    bounds: WordBounds,
    rng: &mut SimpleRng,
) -> Result<String, HangmanError> {
    let eligible: Vec<&str> = words
        .iter()
        .map(|w| w.as_ref().trim())
        .filter(|w| bounds.admits(w))
        .collect();

    rng.choose(&eligible)
        .map(|w| (*w).to_owned())
        .ok_or(HangmanError::NoEligibleWord {
            min: bounds.min,
            max: bounds.max,
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_drops_blank_lines() {
        let words = parse_word_list("apple\n\n  banana  \n   \ncherry\n");
        assert_eq!(words, vec!["apple", "  banana  ", "cherry"]);
    }

    #[test]
    fn parse_handles_crlf() {
        let words = parse_word_list("apple\r\nbanana\r\n");
        assert_eq!(words, vec!["apple", "banana"]);
    }

    #[test]
    fn bounds_are_exclusive() {
        let bounds = WordBounds::new(4, 8);
        assert!(!bounds.admits("four"));
        assert!(bounds.admits("fiver"));
        assert!(bounds.admits("sevenly"));
        assert!(!bounds.admits("eightish"));
    }

    #[test]
    fn bounds_count_characters_not_bytes() {
        let bounds = WordBounds::new(4, 8);
        assert!(bounds.admits("ééééé"));
    }

    #[test]
    fn select_trims_the_chosen_word() {
        let words = ["   elephant \n"];
        let mut rng = SimpleRng::new(1);
        assert_eq!(
            select_word(&words, WordBounds::default(), &mut rng),
            Ok("elephant".to_string())
        );
    }

    #[test]
    fn select_measures_trimmed_length() {
        // Padding must not push a short word over the minimum.
        let words = ["  cat   "];
        let mut rng = SimpleRng::new(1);
        assert!(select_word(&words, WordBounds::default(), &mut rng).is_err());
    }

    #[test]
    fn select_empty_list_has_no_eligible_word() {
        let words: [&str; 0] = [];
        let mut rng = SimpleRng::new(1);
        assert_eq!(
            select_word(&words, WordBounds::default(), &mut rng),
            Err(HangmanError::NoEligibleWord { min: 4, max: 60 })
        );
    }

    #[test]
    fn select_only_returns_eligible_words() {
        let words = ["cat", "tiger", "ox", "giraffe", "bear"];
        let mut rng = SimpleRng::new(42);
        for _ in 0..100 {
            let w = select_word(&words, WordBounds::default(), &mut rng).unwrap();
            assert!(w == "tiger" || w == "giraffe", "unexpected {w}");
        }
    }
}
