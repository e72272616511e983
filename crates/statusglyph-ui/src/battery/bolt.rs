use statusglyph_engine::coords::{Rect, Vec2};
use statusglyph_engine::path::Shape;

use crate::error::ConfigError;

/// Default lightning-bolt polyline, in integer design units.
pub const DEFAULT_BOLT_POINTS: [i32; 14] = [
    73, 0, //
    392, 0, //
    201, 259, //
    442, 259, //
    4, 703, //
    157, 334, //
    0, 334,
];

/// Bolt outline normalized to the unit square.
///
/// Validated once at construction; rendering never sees malformed points.
#[derive(Debug, Clone, PartialEq)]
pub struct BoltPoints {
    points: Vec<Vec2>,
}

impl BoltPoints {
    /// Normalizes a flat `x0, y0, x1, y1, …` list by its maximum extent.
    pub fn from_raw(raw: &[i32]) -> Result<Self, ConfigError> {
        if raw.len() % 2 != 0 {
            return Err(ConfigError::OddBoltPoints(raw.len()));
        }
        if raw.len() < 6 {
            return Err(ConfigError::TooFewBoltPoints(raw.len() / 2));
        }
        if let Some(&neg) = raw.iter().find(|&&v| v < 0) {
            return Err(ConfigError::NegativeBoltCoordinate(neg));
        }

        let max_x = raw.iter().step_by(2).copied().max().unwrap_or(0);
        let max_y = raw.iter().skip(1).step_by(2).copied().max().unwrap_or(0);
        if max_x <= 0 || max_y <= 0 {
            return Err(ConfigError::DegenerateBolt);
        }

        let points = raw
            .chunks_exact(2)
            .map(|xy| Vec2::new(xy[0] as f32 / max_x as f32, xy[1] as f32 / max_y as f32))
            .collect();
        Ok(Self { points })
    }

    #[inline]
    pub fn points(&self) -> &[Vec2] {
        &self.points
    }

    /// Bolt polygon stretched into `frame`.
    pub fn shape_in(&self, frame: Rect) -> Shape {
        let scaled: Vec<Vec2> = self
            .points
            .iter()
            .map(|p| Vec2::new(frame.left + p.x * frame.width(), frame.top + p.y * frame.height()))
            .collect();
        Shape::polygon(&scaled)
    }
}

impl Default for BoltPoints {
    fn default() -> Self {
        // The built-in table is a valid outline; build it without the fallible path.
        let max_x = 442.0;
        let max_y = 703.0;
        let points = DEFAULT_BOLT_POINTS
            .chunks_exact(2)
            .map(|xy| Vec2::new(xy[0] as f32 / max_x, xy[1] as f32 / max_y))
            .collect();
        Self { points }
    }
}
