//! Statusglyph engine crate.
//!
//! Renderer-agnostic primitives shared by the status bar glyphs: geometry,
//! packed colors, polygon sets, the draw stream, clocks and animations.

pub mod time;

pub mod logging;
pub mod coords;
pub mod paint;
pub mod path;
pub mod scene;
pub mod text;
