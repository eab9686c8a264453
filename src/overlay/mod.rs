//! Per-frame pets tooltip overlay.
//!
//! The host client supplies the chat widgets, the cursor and a tooltip sink;
//! the overlay runs one hover test per frame and emits at most one tooltip.

use crate::config::ResolvedConfig;
use crate::hover::{HoverResolver, IconMetrics, PetHover};
use crate::model::{Bounds, ChatLine, ChatViewport, PetCatalog, Point};
use serde::Serialize;
use tracing::{info, trace};

/// Snapshot of the chat box's message-lines container.
#[derive(Debug, Clone)]
pub struct MessageLines<'a> {
    /// Container bounds in mouse space.
    pub bounds: Bounds,
    /// Scroll position and visible height.
    pub viewport: ChatViewport,
    /// Rendered lines, top to bottom. `None` when the widget has no children.
    pub lines: Option<Vec<ChatLine<'a>>>,
}

/// Access to the host's chat widgets.
pub trait ChatWidgets {
    /// The message-lines container, or `None` when the chat box isn't built.
    fn message_lines(&self) -> Option<MessageLines<'_>>;
}

/// Access to the host's cursor.
pub trait MouseSource {
    /// Cursor position in the chat container's coordinate space.
    fn mouse_position(&self) -> Point;
}

/// Text to draw near the cursor for the current frame.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Tooltip {
    /// Tooltip body.
    pub text: String,
}

impl Tooltip {
    /// Create a tooltip.
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }
}

/// Receives tooltips to render this frame.
pub trait TooltipSink {
    /// Queue `tooltip` for display.
    fn add(&mut self, tooltip: Tooltip);
}

impl TooltipSink for Vec<Tooltip> {
    fn add(&mut self, tooltip: Tooltip) {
        self.push(tooltip);
    }
}

/// Shows the name of the pet under the cursor in pets chat listings.
#[derive(Debug, Clone)]
pub struct PetsOverlay {
    enabled: bool,
    icons: IconMetrics,
    catalog: PetCatalog,
}

impl PetsOverlay {
    /// Create an overlay.
    pub fn new(enabled: bool, icons: IconMetrics, catalog: PetCatalog) -> Self {
        Self {
            enabled,
            icons,
            catalog,
        }
    }

    /// Create an overlay using resolved settings.
    pub fn from_config(config: &ResolvedConfig, catalog: PetCatalog) -> Self {
        Self::new(config.pets_tooltip, config.icons, catalog)
    }

    /// Whether the overlay draws anything.
    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// Current catalog.
    pub fn catalog(&self) -> &PetCatalog {
        &self.catalog
    }

    /// Replace the catalog, e.g. once the pet icons have been registered.
    pub fn set_catalog(&mut self, catalog: PetCatalog) {
        if let PetCatalog::Loaded { base_index, names } = &catalog {
            info!(base_index, pets = names.len(), "Pet catalog loaded");
        }
        self.catalog = catalog;
    }

    /// Run one frame: resolve the hovered pet and queue its tooltip.
    ///
    /// Returns the hover that produced a tooltip, if any.
    pub fn render<W, M, S>(&self, widgets: &W, mouse: &M, sink: &mut S) -> Option<PetHover>
    where
        W: ChatWidgets + ?Sized,
        M: MouseSource + ?Sized,
        S: TooltipSink + ?Sized,
    {
        if !self.enabled {
            return None;
        }

        if self.catalog.is_loading() {
            trace!("Pet catalog still loading, skipping frame");
            return None;
        }

        let mouse = mouse.mouse_position();
        let container = widgets.message_lines()?;
        if !container.bounds.contains(mouse) {
            return None;
        }

        let lines = container.lines?;
        let hover = HoverResolver::new(&self.catalog, self.icons).resolve(
            container.viewport,
            &lines,
            mouse,
        )?;

        sink.add(Tooltip::new(hover.tooltip_text()));
        Some(hover)
    }
}

#[cfg(test)]
#[path = "overlay_tests.rs"]
mod tests;
