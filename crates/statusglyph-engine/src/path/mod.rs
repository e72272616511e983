//! Polygon sets and boolean composition.
//!
//! Glyph outlines are built from constructed polygons only, so the boolean
//! operations here have no error path: degenerate input simply yields an empty
//! set. Coordinates are view pixels (`f32`) at the API and `f64` inside `geo`.

mod shape;

pub use shape::Shape;
