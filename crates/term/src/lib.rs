//! Terminal rendering module.
//!
//! A small, game-oriented rendering layer: the play screen is composed into a
//! plain framebuffer by a pure [`GameView`] and flushed to the terminal by
//! [`TerminalRenderer`].
//!
//! Goals:
//! - Keep `core` free of any terminal concerns
//! - Keep layout and text testable without a terminal
//! - Put the real terminal behind the [`Surface`] trait so the round loop can be driven in tests

pub mod fb;
pub mod game_view;
pub mod layout;
pub mod renderer;
pub mod surface;

pub use tui_hangman_core as core;
pub use tui_hangman_types as types;

pub use fb::{Cell, CellStyle, FrameBuffer, Rgb};
pub use game_view::{end_message, GameView, EXIT_PROMPT};
pub use layout::{PanelLayout, Region, Viewport};
pub use renderer::{encode_diff_into, encode_full_into, TerminalRenderer};
pub use surface::{ensure_min_size, terminal_viewport, CrosstermSurface, Surface, TermError};
