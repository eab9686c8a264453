//! Domain model types (pure).
//!
//! All types in this module are plain data read during a single hover test.

pub mod catalog;
pub mod chat_line;
pub mod geometry;

// Re-export for convenience
pub use catalog::PetCatalog;
pub use chat_line::{ChatLine, ChatViewport};
pub use geometry::{Bounds, Point};
