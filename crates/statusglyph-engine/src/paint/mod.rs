//! Paint model shared between the glyph renderers and the tint coordinator.
//!
//! Colors are opaque packed ARGB words as handed out by the theming layer.
//! Geometry types remain in `coords` and `path`.

pub mod color;

pub use color::Color;
