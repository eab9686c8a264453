//! Hover resolution for inline pet icon lists.
//!
//! A pets line renders as a `"Pets: (N)"` prefix followed by `N` fixed-size
//! icons. When the icons don't fit on one row the line is two icon rows
//! tall: the first row starts after the prefix, the second starts at the
//! line's left edge. This module maps a cursor position to the icon under it.
//!
//! All arithmetic is integer and uses floor division, so a cursor just left
//! of the first icon lands on column -1 rather than 0.

use crate::model::{Bounds, ChatLine, ChatViewport, PetCatalog, Point};
use crate::parser::extract_icon_ids;
use tracing::trace;

/// Text every pets line contains.
pub const PETS_MARKER: &str = "Pets: (";

/// Markup that introduces an inline icon.
pub const ICON_MARKER: &str = "<img=";

/// Rendered size of one pet icon.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IconMetrics {
    width: i32,
    height: i32,
}

/// Error returned when an icon dimension is not positive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("icon dimensions must be positive (got {width}x{height})")]
pub struct InvalidIconMetrics {
    /// Rejected width.
    pub width: i32,
    /// Rejected height.
    pub height: i32,
}

impl IconMetrics {
    /// Icon size used by the reference chat box.
    pub const DEFAULT: Self = Self {
        width: 21,
        height: 14,
    };

    /// Smart constructor: both dimensions must be >= 1.
    pub fn new(width: i32, height: i32) -> Result<Self, InvalidIconMetrics> {
        if width <= 0 || height <= 0 {
            Err(InvalidIconMetrics { width, height })
        } else {
            Ok(Self { width, height })
        }
    }

    /// Icon width in pixels.
    pub fn width(&self) -> i32 {
        self.width
    }

    /// Icon height in pixels.
    pub fn height(&self) -> i32 {
        self.height
    }
}

impl Default for IconMetrics {
    fn default() -> Self {
        Self::DEFAULT
    }
}

/// The pet under the cursor for the current frame.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PetHover {
    /// Position of the icon within the line, 0-indexed.
    pub position: usize,
    /// Raw icon index from the line markup.
    pub icon_index: i32,
    /// Pet name from the catalog.
    pub name: String,
}

impl PetHover {
    /// Tooltip text shown for this pet.
    pub fn tooltip_text(&self) -> String {
        format!("Pet: {}", self.name)
    }
}

/// Whether `text` has the shape of a pets listing.
pub fn is_pets_line(text: &str) -> bool {
    text.contains(PETS_MARKER) && text.contains(ICON_MARKER)
}

/// Icon slot under `mouse`, given a line already known to contain it.
///
/// `text_offset` is the rendered width of the prefix that precedes the first
/// row of icons. Returns `None` when the computed slot is outside
/// `0..count`.
pub fn hovered_icon_position(
    mouse: Point,
    bounds: Bounds,
    text_offset: i32,
    count: usize,
    icons: IconMetrics,
) -> Option<usize> {
    let count = i64::try_from(count).ok()?;
    let (icon_w, icon_h) = (i64::from(icons.width), i64::from(icons.height));
    let (mx, my) = (i64::from(mouse.x), i64::from(mouse.y));
    let (x, y) = (i64::from(bounds.x), i64::from(bounds.y));
    let offset = i64::from(text_offset);

    let per_line = if i64::from(bounds.height) > icon_h {
        (i64::from(bounds.width) - offset).div_euclid(icon_w)
    } else {
        count
    };

    let column = if my < y + icon_h {
        (mx - (offset + x)).div_euclid(icon_w)
    } else {
        (mx - x).div_euclid(icon_w) + per_line
    };

    if (0..count).contains(&column) {
        usize::try_from(column).ok()
    } else {
        None
    }
}

/// Resolves the hovered pet across the rendered chat lines.
#[derive(Debug, Clone, Copy)]
pub struct HoverResolver<'c> {
    catalog: &'c PetCatalog,
    icons: IconMetrics,
}

impl<'c> HoverResolver<'c> {
    /// Create a resolver over `catalog` with the given icon size.
    pub fn new(catalog: &'c PetCatalog, icons: IconMetrics) -> Self {
        Self { catalog, icons }
    }

    /// First line in `lines` with a pet under `mouse`.
    ///
    /// Resolves nothing while the catalog is loading.
    pub fn resolve(
        &self,
        viewport: ChatViewport,
        lines: &[ChatLine<'_>],
        mouse: Point,
    ) -> Option<PetHover> {
        if self.catalog.is_loading() {
            return None;
        }

        lines
            .iter()
            .find_map(|line| self.resolve_line(viewport, line, mouse))
    }

    /// Pet under `mouse` within a single line.
    pub fn resolve_line(
        &self,
        viewport: ChatViewport,
        line: &ChatLine<'_>,
        mouse: Point,
    ) -> Option<PetHover> {
        let text = line.text?;
        if !viewport.shows(line) || !is_pets_line(text) {
            return None;
        }

        if !line.bounds.contains(mouse) {
            return None;
        }

        // Icons follow the "(N)" count; a line without ")" has nothing to hover.
        let icon_text = &text[text.find(')')?..];
        let icon_ids = extract_icon_ids(icon_text);

        let text_offset = line
            .font
            .text_width(&format!("Pets ({})", icon_ids.len()));

        let position =
            hovered_icon_position(mouse, line.bounds, text_offset, icon_ids.len(), self.icons)?;
        let icon_index = icon_ids[position];
        let name = self.catalog.lookup(icon_index)?;

        trace!(position, icon_index, pet = name, "Resolved hovered pet");

        Some(PetHover {
            position,
            icon_index,
            name: name.to_string(),
        })
    }
}

#[cfg(test)]
#[path = "hover_tests.rs"]
mod tests;
