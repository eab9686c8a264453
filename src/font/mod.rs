//! Font metrics used to measure the rendered width of chat text.
//!
//! The host client owns the real fonts; the resolver only needs a width
//! measurement for the `"Pets (N)"` prefix that precedes the icons.

use unicode_width::UnicodeWidthStr;

/// Measures rendered text width in pixels.
pub trait FontMetrics {
    /// Rendered pixel width of `text`.
    fn text_width(&self, text: &str) -> i32;
}

impl<F: FontMetrics + ?Sized> FontMetrics for &F {
    fn text_width(&self, text: &str) -> i32 {
        (**self).text_width(text)
    }
}

/// Font where every display column advances the pen by the same amount.
///
/// Wide (East Asian) characters count as two columns, zero-width
/// characters as none.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedAdvanceFont {
    advance: i32,
}

impl FixedAdvanceFont {
    /// Advance of the small chat font in the reference client.
    pub const DEFAULT_ADVANCE: i32 = 6;

    /// Create a font with the given per-column advance in pixels.
    pub const fn new(advance: i32) -> Self {
        Self { advance }
    }
}

impl Default for FixedAdvanceFont {
    fn default() -> Self {
        Self::new(Self::DEFAULT_ADVANCE)
    }
}

impl FontMetrics for FixedAdvanceFont {
    fn text_width(&self, text: &str) -> i32 {
        let columns = i32::try_from(text.width()).unwrap_or(i32::MAX);
        columns.saturating_mul(self.advance)
    }
}
