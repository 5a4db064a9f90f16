//! Panel geometry for the play screen.

use crate::types::{GALLOWS_PANEL_WIDTH, PANEL_HEIGHT};

/// Terminal viewport dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    pub width: u16,
    pub height: u16,
}

impl Viewport {
    pub fn new(width: u16, height: u16) -> Self {
        Self { width, height }
    }
}

/// A rectangle on screen, border included.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Region {
    pub x: u16,
    pub y: u16,
    pub width: u16,
    pub height: u16,
}

impl Region {
    pub fn new(x: u16, y: u16, width: u16, height: u16) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// The area inside a one-cell border.
    pub fn inner(&self) -> Region {
        Region {
            x: self.x.saturating_add(1),
            y: self.y.saturating_add(1),
            width: self.width.saturating_sub(2),
            height: self.height.saturating_sub(2),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }

    /// Intersect with the viewport so nothing is drawn off-screen.
    fn clamp_to(self, viewport: Viewport) -> Region {
        let width = self.width.min(viewport.width.saturating_sub(self.x));
        let height = self.height.min(viewport.height.saturating_sub(self.y));
        Region { width, height, ..self }
    }
}

/// The two side-by-side panels of the play screen.
///
/// The gallows panel has a fixed width at the left; the status panel takes the
/// rest of the row. Both start one row below the top edge.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PanelLayout {
    pub gallows: Region,
    pub status: Region,
}

impl PanelLayout {
    pub fn for_viewport(viewport: Viewport) -> Self {
        let top = 1;
        let gallows = Region::new(1, top, GALLOWS_PANEL_WIDTH, PANEL_HEIGHT).clamp_to(viewport);
        let status_x = GALLOWS_PANEL_WIDTH + 2;
        let status_w = viewport.width.saturating_sub(GALLOWS_PANEL_WIDTH + 4);
        let status = Region::new(status_x, top, status_w, PANEL_HEIGHT).clamp_to(viewport);
        Self { gallows, status }
    }
}
