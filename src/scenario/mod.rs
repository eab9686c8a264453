//! Frame scenarios: a TOML snapshot of the chat box, cursor and catalog.
//!
//! Lets the hover logic run outside the game client, e.g. to reproduce a
//! tooltip report from a captured frame.
//!
//! ```toml
//! mouse = { x = 75, y = 20 }
//! font_advance = 6
//!
//! [container]
//! bounds = { x = 0, y = 0, width = 500, height = 140 }
//! scroll_y = 0
//!
//! [catalog]
//! base_index = 200
//! names = ["Heron", "Rocky", "Beaver"]
//!
//! [[lines]]
//! text = "Pets: (3) <img=200><img=201><img=202>"
//! bounds = { x = 0, y = 14, width = 500, height = 14 }
//! ```

use crate::font::FixedAdvanceFont;
use crate::hover::PetHover;
use crate::model::{Bounds, ChatLine, ChatViewport, PetCatalog, Point};
use crate::overlay::{ChatWidgets, MessageLines, MouseSource};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Errors loading a scenario file.
#[derive(Debug, Error)]
pub enum ScenarioError {
    /// The file could not be read.
    #[error("Failed to read scenario {path:?}: {source}")]
    Read {
        /// Scenario path.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// The file is not a valid scenario document.
    #[error("Invalid scenario {path:?}: {source}")]
    Parse {
        /// Scenario path.
        path: PathBuf,
        /// TOML error.
        #[source]
        source: toml::de::Error,
    },

    /// The font advance must be at least one pixel.
    #[error("font_advance must be positive (got {0})")]
    InvalidFontAdvance(i32),
}

/// Chat container section.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ContainerSpec {
    /// Container bounds in mouse space; `height` is the visible height.
    pub bounds: Bounds,
    /// Vertical scroll offset.
    #[serde(default)]
    pub scroll_y: i32,
    /// Set to false to model a container whose children aren't built.
    #[serde(default = "default_true")]
    pub has_children: bool,
}

/// Loaded catalog section.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CatalogSpec {
    /// Icon index of the first pet.
    pub base_index: i32,
    /// Pet names in icon order.
    pub names: Vec<String>,
}

/// One chat line.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct LineSpec {
    /// Line text; omit for widgets without text.
    #[serde(default)]
    pub text: Option<String>,
    /// Line bounds in mouse space.
    pub bounds: Bounds,
    /// Top within the scrolled content; defaults to the line's offset from
    /// the container top plus the container's scroll.
    #[serde(default)]
    pub relative_y: Option<i32>,
}

/// A single captured frame.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Scenario {
    /// Cursor position.
    pub mouse: Point,
    /// Pixel advance per text column.
    #[serde(default = "default_advance")]
    pub font_advance: i32,
    /// Message-lines container; omit when the chat box isn't built.
    #[serde(default)]
    pub container: Option<ContainerSpec>,
    /// Pet catalog; omit while icons are still loading.
    #[serde(default)]
    pub catalog: Option<CatalogSpec>,
    /// Rendered lines, top to bottom.
    #[serde(default)]
    pub lines: Vec<LineSpec>,
    #[serde(skip)]
    font: FixedAdvanceFont,
}

impl ContainerSpec {
    /// Content-space y of a screen-space `y` inside this container.
    pub fn content_y(&self, y: i32) -> i32 {
        y.saturating_sub(self.bounds.y).saturating_add(self.scroll_y)
    }
}

fn default_true() -> bool {
    true
}

fn default_advance() -> i32 {
    FixedAdvanceFont::DEFAULT_ADVANCE
}

impl Scenario {
    /// Parse a scenario from TOML text.
    ///
    /// # Errors
    ///
    /// Returns [`ScenarioError::Parse`] for invalid TOML (reported against
    /// `origin`) and [`ScenarioError::InvalidFontAdvance`] for a
    /// non-positive advance.
    pub fn from_toml(text: &str, origin: &Path) -> Result<Self, ScenarioError> {
        let mut scenario: Scenario = toml::from_str(text).map_err(|source| ScenarioError::Parse {
            path: origin.to_path_buf(),
            source,
        })?;

        if scenario.font_advance <= 0 {
            return Err(ScenarioError::InvalidFontAdvance(scenario.font_advance));
        }
        scenario.font = FixedAdvanceFont::new(scenario.font_advance);

        Ok(scenario)
    }

    /// Load a scenario file.
    ///
    /// # Errors
    ///
    /// Returns [`ScenarioError::Read`] if the file can't be read, otherwise
    /// as [`Scenario::from_toml`].
    pub fn load(path: &Path) -> Result<Self, ScenarioError> {
        let text = std::fs::read_to_string(path).map_err(|source| ScenarioError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml(&text, path)
    }

    /// The catalog this frame was captured with.
    pub fn catalog(&self) -> PetCatalog {
        match &self.catalog {
            Some(spec) => PetCatalog::loaded(spec.base_index, spec.names.clone()),
            None => PetCatalog::Loading,
        }
    }
}

impl ChatWidgets for Scenario {
    fn message_lines(&self) -> Option<MessageLines<'_>> {
        let container = self.container.as_ref()?;

        let lines = container.has_children.then(|| {
            self.lines
                .iter()
                .map(|line| {
                    ChatLine::new(
                        line.text.as_deref(),
                        line.bounds,
                        line.relative_y.unwrap_or_else(|| container.content_y(line.bounds.y)),
                        &self.font,
                    )
                })
                .collect::<Vec<_>>()
        });

        Some(MessageLines {
            bounds: container.bounds,
            viewport: ChatViewport::new(container.scroll_y, container.bounds.height),
            lines,
        })
    }
}

impl MouseSource for Scenario {
    fn mouse_position(&self) -> Point {
        self.mouse
    }
}

/// Outcome of running one scenario frame, as printed by the CLI.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FrameReport {
    /// Cursor position used.
    pub mouse: Point,
    /// Hovered pet, if any.
    pub hover: Option<HoverReport>,
}

/// Serializable form of [`PetHover`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HoverReport {
    /// Icon position within its line.
    pub position: usize,
    /// Raw icon index.
    pub icon_index: i32,
    /// Pet name.
    pub name: String,
    /// Tooltip text shown.
    pub tooltip: String,
}

impl From<PetHover> for HoverReport {
    fn from(hover: PetHover) -> Self {
        Self {
            tooltip: hover.tooltip_text(),
            position: hover.position,
            icon_index: hover.icon_index,
            name: hover.name,
        }
    }
}

impl FrameReport {
    /// Build a report from a frame's outcome.
    pub fn new(mouse: Point, hover: Option<PetHover>) -> Self {
        Self {
            mouse,
            hover: hover.map(HoverReport::from),
        }
    }

    /// One-line human readable summary.
    pub fn summary(&self) -> String {
        match &self.hover {
            Some(hover) => hover.tooltip.clone(),
            None => "no pet under cursor".to_string(),
        }
    }
}
