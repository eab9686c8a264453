//! Pet hover resolution for game chat overlays.
//!
//! A `!pets` chat reply lists every owned pet as an inline icon after a
//! `"Pets: (N)"` prefix. This crate maps the cursor to the icon under it and
//! produces the tooltip naming that pet.
//!
//! The pure core lives in [`parser`] (icon markers) and [`hover`] (hit
//! testing). [`overlay`] drives it once per frame against host-supplied
//! collaborators; [`config`], [`logging`] and [`scenario`] form the shell
//! used by the `pethover` binary.

pub mod config;
pub mod font;
pub mod hover;
pub mod logging;
pub mod model;
pub mod overlay;
pub mod parser;
pub mod scenario;
