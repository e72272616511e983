use geo::{Area, BooleanOps, BoundingRect, Contains, Coord, LineString, MultiPolygon, Point, Polygon};

use crate::coords::{Rect, Vec2};

/// A set of filled polygons (even-odd with holes) in view pixels.
#[derive(Debug, Clone, PartialEq)]
pub struct Shape {
    polys: MultiPolygon<f64>,
}

impl Default for Shape {
    fn default() -> Self {
        Self::empty()
    }
}

impl Shape {
    #[inline]
    pub fn empty() -> Self {
        Self { polys: MultiPolygon::new(Vec::new()) }
    }

    /// Closed polygon through `points`. The ring is closed implicitly; a
    /// repeated first point at the end is accepted.
    ///
    /// Fewer than three points, non-finite points, or a zero-area ring give
    /// the empty shape.
    pub fn polygon(points: &[Vec2]) -> Self {
        if points.len() < 3 || points.iter().any(|p| !p.is_finite()) {
            return Self::empty();
        }
        let ring: Vec<Coord<f64>> = points
            .iter()
            .map(|p| Coord { x: p.x as f64, y: p.y as f64 })
            .collect();
        let poly = Polygon::new(LineString::new(ring), Vec::new());
        if poly.unsigned_area() <= f64::EPSILON {
            return Self::empty();
        }
        Self { polys: MultiPolygon::new(vec![poly]) }
    }

    /// Axis-aligned rectangle; empty or inverted rects give the empty shape.
    pub fn rect(rect: Rect) -> Self {
        if rect.is_empty() || !rect.is_finite() {
            return Self::empty();
        }
        Self::polygon(&rect.corners())
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.polys.0.is_empty() || self.area() <= f32::EPSILON
    }

    /// Area in square pixels. Holes are subtracted.
    #[inline]
    pub fn area(&self) -> f32 {
        self.polys.unsigned_area() as f32
    }

    pub fn bounds(&self) -> Option<Rect> {
        self.polys.bounding_rect().map(|r| {
            Rect::from_ltrb(r.min().x as f32, r.min().y as f32, r.max().x as f32, r.max().y as f32)
        })
    }

    /// Point-in-shape test; points on an edge are outside.
    pub fn contains(&self, p: Vec2) -> bool {
        self.polys.contains(&Point::new(p.x as f64, p.y as f64))
    }

    /// `self − other`.
    pub fn difference(&self, other: &Shape) -> Shape {
        if self.polys.0.is_empty() || other.polys.0.is_empty() {
            return self.clone();
        }
        Self { polys: self.polys.difference(&other.polys) }
    }

    /// `self ∩ other`.
    pub fn intersection(&self, other: &Shape) -> Shape {
        if self.polys.0.is_empty() || other.polys.0.is_empty() {
            return Self::empty();
        }
        Self { polys: self.polys.intersection(&other.polys) }
    }

    /// `self ∪ other`.
    pub fn union(&self, other: &Shape) -> Shape {
        if other.polys.0.is_empty() {
            return self.clone();
        }
        if self.polys.0.is_empty() {
            return other.clone();
        }
        Self { polys: self.polys.union(&other.polys) }
    }

    /// Number of disjoint polygons in the set.
    #[inline]
    pub fn polygon_count(&self) -> usize {
        self.polys.0.len()
    }

    /// Underlying `geo` geometry, for renderers that rasterize or tessellate.
    #[inline]
    pub fn as_multi_polygon(&self) -> &MultiPolygon<f64> {
        &self.polys
    }
}
