//! Read-only views over the host's rendered chat widgets.

use super::geometry::Bounds;
use crate::font::FontMetrics;

/// One rendered chat line as seen during a single hover test.
///
/// The host framework owns the widget; this is a borrowed snapshot.
#[derive(Clone, Copy)]
pub struct ChatLine<'a> {
    /// Line text including markup such as `<img=N>`. `None` for widgets
    /// without text.
    pub text: Option<&'a str>,
    /// Pixel bounds in the same space as the mouse position.
    pub bounds: Bounds,
    /// Top of the line relative to its scrolling parent.
    pub relative_y: i32,
    /// Font the line is rendered with.
    pub font: &'a dyn FontMetrics,
}

impl<'a> ChatLine<'a> {
    /// Create a line view.
    pub fn new(
        text: Option<&'a str>,
        bounds: Bounds,
        relative_y: i32,
        font: &'a dyn FontMetrics,
    ) -> Self {
        Self {
            text,
            bounds,
            relative_y,
            font,
        }
    }

    /// Bottom edge relative to the scrolling parent.
    pub fn relative_bottom(&self) -> i64 {
        i64::from(self.relative_y) + i64::from(self.bounds.height)
    }
}

impl std::fmt::Debug for ChatLine<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ChatLine")
            .field("text", &self.text)
            .field("bounds", &self.bounds)
            .field("relative_y", &self.relative_y)
            .finish_non_exhaustive()
    }
}

/// The scrollable region chat lines are rendered into.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ChatViewport {
    /// Current vertical scroll offset.
    pub scroll_y: i32,
    /// Visible height of the container.
    pub height: i32,
}

impl ChatViewport {
    /// Create a viewport.
    pub fn new(scroll_y: i32, height: i32) -> Self {
        Self { scroll_y, height }
    }

    /// Whether a line's bottom edge falls strictly inside the scrolled window.
    pub fn shows(&self, line: &ChatLine<'_>) -> bool {
        let bottom = line.relative_bottom();
        let scroll = i64::from(self.scroll_y);
        bottom > scroll && bottom < i64::from(self.height) + scroll
    }
}
