//! Viewport width and the responsive breakpoints derived from it.
//!
//! DESIGN
//! ======
//! Breakpoints decide which components exist in the rendered tree at all;
//! nothing below a breakpoint is merely hidden with CSS.

#[cfg(test)]
#[path = "viewport_test.rs"]
mod viewport_test;

/// Minimum width (px) at which the header search field is rendered.
pub const SEARCH_BREAKPOINT_PX: u32 = 768;

/// Minimum width (px) at which the suggestions column is rendered.
pub const SUGGESTIONS_BREAKPOINT_PX: u32 = 1024;

/// Width assumed during server rendering and before the first measurement.
pub const DEFAULT_VIEWPORT_WIDTH_PX: u32 = 1280;

/// Current browser viewport, in CSS pixels.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Viewport {
    pub width: u32,
}

impl Default for Viewport {
    fn default() -> Self {
        Self { width: DEFAULT_VIEWPORT_WIDTH_PX }
    }
}

impl Viewport {
    pub fn new(width: u32) -> Self {
        Self { width }
    }

    /// Whether the header search field is part of the tree.
    pub fn shows_search(self) -> bool {
        self.width >= SEARCH_BREAKPOINT_PX
    }

    /// Whether the suggestions column is part of the tree.
    pub fn shows_suggestions(self) -> bool {
        self.width >= SUGGESTIONS_BREAKPOINT_PX
    }
}
