//! Key mapping from terminal events to game actions.

use crate::types::GameAction;
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

/// Map a key press to a game action.
///
/// The quit check runs first, so the quit key is never taken as a guess.
/// Letters of either case are accepted and lowercased. Releases, repeats and
/// all other keys map to `None`.
pub fn classify_key(key: KeyEvent, quit_key: char) -> Option<GameAction> {
    if key.kind != KeyEventKind::Press {
        return None;
    }
    if should_quit(key, quit_key) {
        return Some(GameAction::Quit);
    }
    if key.modifiers.intersects(KeyModifiers::CONTROL | KeyModifiers::ALT) {
        return None;
    }

    match key.code {
        KeyCode::Char(c) if c.is_ascii_alphabetic() => {
            Some(GameAction::Guess(c.to_ascii_lowercase()))
        }
        _ => None,
    }
}

/// Check if key should quit the game.
///
/// The quit key matches exactly as configured; Ctrl-C always quits.
pub fn should_quit(key: KeyEvent, quit_key: char) -> bool {
    match key.code {
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => true,
        KeyCode::Char(c) => c == quit_key && !key.modifiers.contains(KeyModifiers::CONTROL),
        _ => false,
    }
}
