//! External configuration loader.
//!
//! Reads `hangman.toml` from the current directory or the executable's
//! directory, or from an explicit `--config` path. Missing files and missing
//! keys fall back to defaults; command-line flags are applied on top.

use std::path::{Path, PathBuf};

use anyhow::{anyhow, bail, Context, Result};
use serde::Deserialize;

use crate::core::WordBounds;
use crate::types::{MAX_WORD_LEN, MIN_WORD_LEN, QUIT_KEY};

pub const CONFIG_FILE: &str = "hangman.toml";

// ── Public Config Struct ──

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HangmanConfig {
    pub words_path: PathBuf,
    pub bounds: WordBounds,
    pub quit_key: char,
    pub log: LogConfig,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LogConfig {
    /// Log file. `None` keeps logging off unless `HANGMAN_LOG` is set.
    pub file: Option<PathBuf>,
    pub filter: String,
}

// ── TOML Schema (with serde defaults) ──

#[derive(Deserialize, Debug, Default)]
#[serde(deny_unknown_fields)]
struct TomlConfig {
    #[serde(default)]
    words: TomlWords,
    #[serde(default)]
    keys: TomlKeys,
    #[serde(default)]
    log: TomlLog,
}

#[derive(Deserialize, Debug)]
struct TomlWords {
    #[serde(default = "default_words_path")]
    path: String,
    #[serde(default = "default_min_len")]
    min_len: usize,
    #[serde(default = "default_max_len")]
    max_len: usize,
}

#[derive(Deserialize, Debug)]
struct TomlKeys {
    #[serde(default = "default_quit")]
    quit: String,
}

#[derive(Deserialize, Debug)]
struct TomlLog {
    #[serde(default)]
    file: Option<String>,
    #[serde(default = "default_log_filter")]
    filter: String,
}

// ── Defaults ──

fn default_words_path() -> String { "words.txt".into() }
fn default_min_len() -> usize { MIN_WORD_LEN }
fn default_max_len() -> usize { MAX_WORD_LEN }
fn default_quit() -> String { QUIT_KEY.to_string() }
fn default_log_filter() -> String { "tui_hangman=info".into() }

impl Default for TomlWords {
    fn default() -> Self {
        TomlWords {
            path: default_words_path(),
            min_len: default_min_len(),
            max_len: default_max_len(),
        }
    }
}

impl Default for TomlKeys {
    fn default() -> Self {
        TomlKeys { quit: default_quit() }
    }
}

impl Default for TomlLog {
    fn default() -> Self {
        TomlLog {
            file: None,
            filter: default_log_filter(),
        }
    }
}

impl Default for HangmanConfig {
    fn default() -> Self {
        HangmanConfig {
            words_path: PathBuf::from(default_words_path()),
            bounds: WordBounds::default(),
            quit_key: QUIT_KEY,
            log: LogConfig {
                file: None,
                filter: default_log_filter(),
            },
        }
    }
}

// ── Loading ──

impl HangmanConfig {
    /// Load configuration.
    ///
    /// An explicit path must exist and parse. Without one, the first
    /// `hangman.toml` found in the candidate directories is used; a broken
    /// implicit file is reported and defaults are used instead.
    pub fn load(explicit: Option<&Path>) -> Result<Self> {
        if let Some(path) = explicit {
            let text = std::fs::read_to_string(path)
                .with_context(|| format!("reading config {}", path.display()))?;
            return Self::from_toml_str(&text)
                .with_context(|| format!("parsing config {}", path.display()));
        }

        for dir in candidate_dirs() {
            let path = dir.join(CONFIG_FILE);
            if !path.exists() {
                continue;
            }
            let parsed = std::fs::read_to_string(&path)
                .map_err(anyhow::Error::from)
                .and_then(|text| Self::from_toml_str(&text));
            match parsed {
                Ok(cfg) => return Ok(cfg),
                Err(e) => {
                    eprintln!("Warning: {}: {e:#}", path.display());
                    eprintln!("Using default settings.");
                    return Ok(Self::default());
                }
            }
        }
        Ok(Self::default())
    }

    pub fn from_toml_str(text: &str) -> Result<Self> {
        let toml_cfg: TomlConfig = toml::from_str(text)?;
        Self::from_toml(toml_cfg)
    }

    fn from_toml(toml_cfg: TomlConfig) -> Result<Self> {
        Ok(HangmanConfig {
            words_path: PathBuf::from(toml_cfg.words.path),
            bounds: WordBounds::new(toml_cfg.words.min_len, toml_cfg.words.max_len),
            quit_key: parse_quit_key(&toml_cfg.keys.quit)?,
            log: LogConfig {
                file: toml_cfg.log.file.map(PathBuf::from),
                filter: toml_cfg.log.filter,
            },
        })
    }
}

/// The quit key must be a single printable character.
pub fn parse_quit_key(s: &str) -> Result<char> {
    let mut chars = s.chars();
    let key = match (chars.next(), chars.next()) {
        (Some(c), None) => c,
        _ => bail!("quit key must be a single character, got {s:?}"),
    };
    validate_quit_key(key)
}

pub fn validate_quit_key(key: char) -> Result<char> {
    if key.is_control() || key.is_whitespace() {
        return Err(anyhow!("quit key {key:?} is not a printable character"));
    }
    Ok(key)
}

impl HangmanConfig {
    /// A letter quit key that differs from the default. Words containing it
    /// cannot be won, since the key ends the round before it is guessed.
    pub fn shadowed_letter(&self) -> Option<char> {
        let key = self.quit_key;
        (key.is_ascii_alphabetic() && key != QUIT_KEY).then_some(key)
    }
}

/// Candidate directories to search: CWD first, then the executable's directory.
fn candidate_dirs() -> Vec<PathBuf> {
    let mut dirs = vec![];

    if let Ok(cwd) = std::env::current_dir() {
        dirs.push(cwd);
    }

    if let Ok(exe) = std::env::current_exe() {
        let resolved = exe.canonicalize().unwrap_or(exe);
        if let Some(parent) = resolved.parent() {
            if !dirs.iter().any(|d| d == parent) {
                dirs.push(parent.to_path_buf());
            }
        }
    }

    dirs
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_file_gives_defaults() {
        let cfg = HangmanConfig::from_toml_str("").unwrap();
        assert_eq!(cfg, HangmanConfig::default());
        assert_eq!(cfg.words_path, PathBuf::from("words.txt"));
        assert_eq!(cfg.bounds, WordBounds::new(4, 60));
        assert_eq!(cfg.quit_key, 'q');
        assert_eq!(cfg.log.file, None);
    }

    #[test]
    fn partial_sections_keep_other_defaults() {
        let cfg = HangmanConfig::from_toml_str(
            r#"
            [words]
            min_len = 6

            [log]
            file = "round.log"
            "#,
        )
        .unwrap();
        assert_eq!(cfg.bounds, WordBounds::new(6, 60));
        assert_eq!(cfg.log.file, Some(PathBuf::from("round.log")));
        assert_eq!(cfg.log.filter, "tui_hangman=info");
    }

    #[test]
    fn custom_quit_key() {
        let cfg = HangmanConfig::from_toml_str("[keys]\nquit = \"!\"\n").unwrap();
        assert_eq!(cfg.quit_key, '!');
    }

    #[test]
    fn letter_quit_key_is_reported_as_shadowed() {
        let cfg = HangmanConfig::from_toml_str("[keys]\nquit = \"e\"\n").unwrap();
        assert_eq!(cfg.quit_key, 'e');
        assert_eq!(cfg.shadowed_letter(), Some('e'));

        let cfg = HangmanConfig::from_toml_str("[keys]\nquit = \"!\"\n").unwrap();
        assert_eq!(cfg.shadowed_letter(), None);
        assert_eq!(HangmanConfig::default().shadowed_letter(), None);
    }

    #[test]
    fn multi_character_quit_key_is_rejected() {
        assert!(HangmanConfig::from_toml_str("[keys]\nquit = \"esc\"\n").is_err());
        assert!(parse_quit_key("").is_err());
        assert!(parse_quit_key(" ").is_err());
    }

    #[test]
    fn unknown_section_is_rejected() {
        assert!(HangmanConfig::from_toml_str("[speed]\ntick = 3\n").is_err());
    }

    #[test]
    fn explicit_missing_file_is_an_error() {
        let missing = Path::new("/definitely/not/here/hangman.toml");
        assert!(HangmanConfig::load(Some(missing)).is_err());
    }
}
