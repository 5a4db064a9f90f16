//! Display surface: where frames go and where keys come from.
//!
//! The round controller only talks to [`Surface`]. [`CrosstermSurface`] is the
//! real terminal; tests drive the controller with an in-memory surface.

use std::io;
use std::sync::Once;

use anyhow::Result;
use crossterm::event::{self, Event, KeyEvent, KeyEventKind};
use crossterm::{cursor, execute, terminal};
use thiserror::Error;

use crate::fb::FrameBuffer;
use crate::layout::Viewport;
use crate::renderer::TerminalRenderer;
use crate::types::{MIN_TERM_HEIGHT, MIN_TERM_WIDTH};

/// A bounded drawing surface that also delivers key events.
pub trait Surface {
    /// Current size in cells.
    fn viewport(&self) -> Result<Viewport>;

    /// Show a frame. The buffer may be swapped with the previous frame.
    fn present(&mut self, fb: &mut FrameBuffer) -> Result<()>;

    /// Block until the next key press.
    fn read_key(&mut self) -> Result<KeyEvent>;
}

/// Terminal acquisition failures.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TermError {
    #[error(
        "terminal is {width}x{height}, but hangman needs at least {min_width}x{min_height}"
    )]
    TooSmall {
        width: u16,
        height: u16,
        min_width: u16,
        min_height: u16,
    },
}

/// Fail unless both panels fit.
pub fn ensure_min_size(viewport: Viewport) -> Result<(), TermError> {
    if viewport.width < MIN_TERM_WIDTH || viewport.height < MIN_TERM_HEIGHT {
        return Err(TermError::TooSmall {
            width: viewport.width,
            height: viewport.height,
            min_width: MIN_TERM_WIDTH,
            min_height: MIN_TERM_HEIGHT,
        });
    }
    Ok(())
}

/// Size of the controlling terminal.
pub fn terminal_viewport() -> Result<Viewport> {
    let (w, h) = terminal::size()?;
    Ok(Viewport::new(w, h))
}

/// The real terminal.
///
/// Raw mode and the alternate screen are held for the lifetime of the value
/// and released on drop.
pub struct CrosstermSurface {
    renderer: TerminalRenderer,
}

impl CrosstermSurface {
    pub fn enter() -> Result<Self> {
        install_panic_hook();
        let mut renderer = TerminalRenderer::new();
        if let Err(e) = renderer.enter() {
            let _ = renderer.exit();
            return Err(e);
        }
        Ok(Self { renderer })
    }
}

impl Surface for CrosstermSurface {
    fn viewport(&self) -> Result<Viewport> {
        terminal_viewport()
    }

    fn present(&mut self, fb: &mut FrameBuffer) -> Result<()> {
        self.renderer.present(fb)
    }

    fn read_key(&mut self) -> Result<KeyEvent> {
        loop {
            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => return Ok(key),
                Event::Resize(..) => self.renderer.invalidate(),
                _ => {}
            }
        }
    }
}

impl Drop for CrosstermSurface {
    fn drop(&mut self) {
        let _ = self.renderer.exit();
    }
}

/// Restore the terminal before the default panic message prints.
fn install_panic_hook() {
    static HOOK: Once = Once::new();
    HOOK.call_once(|| {
        let previous = std::panic::take_hook();
        std::panic::set_hook(Box::new(move |info| {
            let _ = terminal::disable_raw_mode();
            let _ = execute!(
                io::stdout(),
                terminal::EnableLineWrap,
                cursor::Show,
                terminal::LeaveAlternateScreen
            );
            previous(info);
        }));
    });
}
