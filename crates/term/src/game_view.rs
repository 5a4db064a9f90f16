//! GameView: maps `core::GameState` into a terminal framebuffer.
//!
//! This module is pure (no I/O). It can be unit-tested.

use crate::core::{stage, stage_width, GameState};
use crate::fb::{Cell, CellStyle, FrameBuffer, Rgb};
use crate::layout::{PanelLayout, Region, Viewport};
use crate::types::{Phase, QUIT_KEY};

const PANEL_FG: Rgb = Rgb::new(0, 0, 0);
const PANEL_BG: Rgb = Rgb::new(215, 175, 0);

/// Exit prompt shown under the outcome message.
pub const EXIT_PROMPT: &str = "Press any key to exit, the game is over...";

/// Renders the play screen and the end-of-round screen.
pub struct GameView {
    quit_key: char,
    panel: CellStyle,
    art: CellStyle,
    screen: CellStyle,
}

impl Default for GameView {
    fn default() -> Self {
        let panel = CellStyle::new(PANEL_FG, PANEL_BG);
        Self {
            quit_key: QUIT_KEY,
            panel,
            art: panel.bold(),
            screen: CellStyle::default(),
        }
    }
}

impl GameView {
    /// Name the quit key in the instructions.
    pub fn with_quit_key(mut self, quit_key: char) -> Self {
        self.quit_key = quit_key;
        self
    }

    /// Render both panels for the current state into `fb`.
    pub fn render_into(&self, state: &GameState, viewport: Viewport, fb: &mut FrameBuffer) {
        fb.resize(viewport.width, viewport.height);
        fb.clear(Cell {
            ch: ' ',
            style: self.screen,
        });

        let layout = PanelLayout::for_viewport(viewport);
        self.draw_gallows_panel(fb, state, layout.gallows);
        self.draw_status_panel(fb, state, layout.status);
    }

    /// Convenience helper that allocates a new framebuffer.
    pub fn render(&self, state: &GameState, viewport: Viewport) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_into(state, viewport, &mut fb);
        fb
    }

    /// Render the end-of-round screen: outcome message and exit prompt, centered.
    pub fn render_end_into(
        &self,
        state: &GameState,
        phase: Phase,
        viewport: Viewport,
        fb: &mut FrameBuffer,
    ) {
        fb.resize(viewport.width, viewport.height);
        fb.clear(Cell {
            ch: ' ',
            style: self.screen,
        });

        let mid_y = viewport.height / 2;
        let message = end_message(state, phase);
        put_centered(fb, mid_y, &message, self.screen.bold());
        put_centered(fb, mid_y.saturating_add(2), EXIT_PROMPT, self.screen);
    }

    pub fn render_end(&self, state: &GameState, phase: Phase, viewport: Viewport) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_end_into(state, phase, viewport, &mut fb);
        fb
    }

    /// Status panel text before wrapping. Empty strings are spacer rows.
    pub fn status_lines(&self, state: &GameState) -> Vec<String> {
        let letters: Vec<String> = state.guessed_letters().iter().map(char::to_string).collect();
        let revealed: Vec<String> = state.revealed_letters().iter().map(char::to_string).collect();

        vec![
            format!(
                "Welcome to hangman.  Press \"{}\" at anytime to quit out of the game.",
                self.quit_key
            ),
            format!(
                "You have {} chance(s) left to solve the puzzle before you lose.",
                state.remaining_chances()
            ),
            String::new(),
            format!("You've chosen the following letters: {}", letters.join(" ")),
            String::new(),
            format!(
                "Your word so far is ({}): {}",
                state.masked_display(),
                revealed.join(" ")
            ),
        ]
    }

    fn draw_panel(&self, fb: &mut FrameBuffer, region: Region) {
        fb.fill_rect(region.x, region.y, region.width, region.height, ' ', self.panel);
        draw_border(fb, region, self.panel);
    }

    fn draw_gallows_panel(&self, fb: &mut FrameBuffer, state: &GameState, region: Region) {
        if region.is_empty() {
            return;
        }
        self.draw_panel(fb, region);

        let inner = region.inner();
        let art = stage(state.failure_count());
        let art_w = stage_width(art) as u16;
        let art_h = art.len() as u16;
        let left = inner.x + inner.width.saturating_sub(art_w) / 2;
        let top = inner.y + inner.height.saturating_sub(art_h) / 2;

        for (i, row) in art.iter().enumerate() {
            let y = top + i as u16;
            if y >= inner.y + inner.height {
                break;
            }
            let room = inner.width.saturating_sub(left - inner.x);
            fb.put_str_clipped(left, y, room, row, self.art);
        }
    }

    fn draw_status_panel(&self, fb: &mut FrameBuffer, state: &GameState, region: Region) {
        if region.is_empty() {
            return;
        }
        self.draw_panel(fb, region);

        // One blank column inside the border on each side.
        let x = region.x.saturating_add(2);
        let text_w = region.width.saturating_sub(4);
        let bottom = region.y + region.height.saturating_sub(1);
        let mut y = region.y + 1;

        for line in self.status_lines(state) {
            for row in wrap(&line, text_w as usize) {
                if y >= bottom {
                    return;
                }
                fb.put_str_clipped(x, y, text_w, &row, self.panel);
                y += 1;
            }
        }
    }
}

/// Outcome message for a finished round.
pub fn end_message(state: &GameState, phase: Phase) -> String {
    match phase {
        Phase::Won => format!(
            "Congratulations, you solved the word \"{}\" in {} attempt(s)",
            state.word(),
            state.attempts()
        ),
        Phase::Quit => format!(
            "You gave up on the word \"{}\" after {} attempt(s)",
            state.word(),
            state.attempts()
        ),
        Phase::Lost | Phase::Playing => format!(
            "You failed to guess the word \"{}\" after {} attempts",
            state.word(),
            state.attempts()
        ),
    }
}

fn put_centered(fb: &mut FrameBuffer, y: u16, text: &str, style: CellStyle) {
    let text_w = text.chars().count() as u16;
    let x = fb.width().saturating_sub(text_w) / 2;
    fb.put_str(x, y, text, style);
}

fn draw_border(fb: &mut FrameBuffer, region: Region, style: CellStyle) {
    let Region {
        x,
        y,
        width: w,
        height: h,
    } = region;
    if w < 2 || h < 2 {
        return;
    }

    fb.put_char(x, y, '┌', style);
    fb.put_char(x + w - 1, y, '┐', style);
    fb.put_char(x, y + h - 1, '└', style);
    fb.put_char(x + w - 1, y + h - 1, '┘', style);

    for dx in 1..w - 1 {
        fb.put_char(x + dx, y, '─', style);
        fb.put_char(x + dx, y + h - 1, '─', style);
    }
    for dy in 1..h - 1 {
        fb.put_char(x, y + dy, '│', style);
        fb.put_char(x + w - 1, y + dy, '│', style);
    }
}

/// Greedy word wrap. Words wider than `width` are split.
fn wrap(text: &str, width: usize) -> Vec<String> {
    if width == 0 {
        return Vec::new();
    }
    if text.chars().count() <= width {
        return vec![text.to_string()];
    }

    let mut rows = Vec::new();
    let mut current = String::new();
    let mut current_len = 0;

    for word in text.split_whitespace() {
        let mut word: Vec<char> = word.chars().collect();
        while word.len() > width {
            if current_len > 0 {
                rows.push(std::mem::take(&mut current));
                current_len = 0;
            }
            let rest = word.split_off(width);
            rows.push(word.into_iter().collect());
            word = rest;
        }

        let needed = if current_len == 0 { word.len() } else { current_len + 1 + word.len() };
        if needed > width {
            rows.push(std::mem::take(&mut current));
            current_len = 0;
        }
        if current_len > 0 {
            current.push(' ');
            current_len += 1;
        }
        current_len += word.len();
        current.extend(word);
    }
    if current_len > 0 {
        rows.push(current);
    }
    rows
}
