//! Coordinate and geometry types shared by the glyph renderers.
//!
//! Canonical CPU space:
//! - View pixels
//! - Origin top-left
//! - +X right, +Y down

mod insets;
mod rect;
mod vec2;
mod viewport;

pub use insets::Insets;
pub use rect::Rect;
pub use vec2::Vec2;
pub use viewport::Viewport;
