//! Voronoi Cell Structure
//!
//! A cell is one generator's convex polygon. It starts as a seed shape (an
//! outline or a square) and shrinks by repeated half-plane clips against the
//! perpendicular bisectors of neighboring generators.

use glam::DVec2;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::geometry::{signed_area, Line, LineIntersection, Side};

/// Pruning radius multiplier applied to the farthest vertex distance
const RADIUS_FACTOR: f64 = 2.1;

/// A single Voronoi cell
///
/// # Design Notes
///
/// The polygon keeps the winding of its seed shape; clipping never flips
/// it. A cell whose generator is dominated by its neighbors collapses to an
/// empty vertex list and is dropped by the solvers.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, PartialEq)]
pub struct Cell {
    /// Index of the generator in the caller's point list
    pub id: usize,

    /// Generator (site) the cell is built around
    pub generator: DVec2,

    /// Polygon vertices in consistent winding
    pub vertices: Vec<DVec2>,
}

impl Cell {
    /// Seed a cell from an explicit outline polygon
    ///
    /// The outline should be convex. Fewer than three vertices yields an
    /// empty cell.
    pub fn from_outline(id: usize, generator: DVec2, outline: &[DVec2]) -> Self {
        let vertices = if outline.len() < 3 {
            Vec::new()
        } else {
            outline.to_vec()
        };
        Self {
            id,
            generator,
            vertices,
        }
    }

    /// Seed a cell as an axis-aligned square centered on the generator
    pub fn square(id: usize, generator: DVec2, half_extent: f64) -> Self {
        let h = half_extent.abs();
        let vertices = vec![
            generator + DVec2::new(-h, -h),
            generator + DVec2::new(h, -h),
            generator + DVec2::new(h, h),
            generator + DVec2::new(-h, h),
        ];
        Self {
            id,
            generator,
            vertices,
        }
    }

    /// Clip the cell against the bisector between its generator and `other`
    ///
    /// Keeps the half-plane containing the generator. Returns whether the
    /// polygon changed; coincident generators and empty cells never change.
    pub fn slice(&mut self, other: DVec2) -> bool {
        if self.is_empty() {
            return false;
        }
        let Some(bisector) = Line::bisector(self.generator, other) else {
            return false;
        };
        let keep = bisector.side(self.generator);
        clip_convex_polygon(&mut self.vertices, &bisector, keep)
    }

    /// Conservative pruning bound: 2.1x the farthest vertex distance
    ///
    /// A generator farther than this from the cell's generator cannot cut the
    /// cell. The bound never grows as the cell is clipped.
    pub fn radius(&self) -> f64 {
        let max_sq = self
            .vertices
            .iter()
            .map(|v| v.distance_squared(self.generator))
            .fold(0.0, f64::max);
        RADIUS_FACTOR * max_sq.sqrt()
    }

    /// Check whether the cell has collapsed
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.vertices.len() < 3
    }

    /// Get the vertex count (polygon complexity)
    #[inline]
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    /// Unsigned polygon area
    pub fn area(&self) -> f64 {
        signed_area(&self.vertices).abs()
    }

    /// Area centroid, falling back to the generator for degenerate polygons
    pub fn centroid(&self) -> DVec2 {
        let area = signed_area(&self.vertices);
        if self.is_empty() || area == 0.0 {
            return self.generator;
        }
        let mut sum = DVec2::ZERO;
        for i in 0..self.vertices.len() {
            let a = self.vertices[i];
            let b = self.vertices[(i + 1) % self.vertices.len()];
            sum += (a + b) * a.perp_dot(b);
        }
        sum / (6.0 * area)
    }

    /// Check whether a point lies inside or on the boundary of the cell
    pub fn contains(&self, p: DVec2) -> bool {
        if self.is_empty() {
            return false;
        }
        let winding = signed_area(&self.vertices).signum();
        (0..self.vertices.len()).all(|i| {
            let a = self.vertices[i];
            let b = self.vertices[(i + 1) % self.vertices.len()];
            (b - a).perp_dot(p - a) * winding >= 0.0
        })
    }
}

/// Clip a convex polygon in place to one side of a line
///
/// Vertices on `keep` side or exactly on the line survive; a crossing point
/// is inserted after the start vertex of every edge that strictly crosses
/// the line, unless it lands on one of the edge's endpoints. When the line
/// coincides with a polygon edge the outcome follows the rest of the
/// polygon: unchanged if it lies on the kept side, collapsed if it does not.
///
/// A result with fewer than three vertices clears the polygon. Returns
/// whether anything was removed.
pub fn clip_convex_polygon(vertices: &mut Vec<DVec2>, line: &Line, keep: Side) -> bool {
    let n = vertices.len();
    if n == 0 {
        return false;
    }
    let discard = keep.opposite();

    let mut clipped = Vec::with_capacity(n + 2);
    let mut changed = false;

    for i in 0..n {
        let a = vertices[i];
        let b = vertices[(i + 1) % n];

        if discard != Side::Coincident && line.side(a) == discard {
            changed = true;
        } else {
            clipped.push(a);
        }

        if let LineIntersection::Point(t) = line.intersect_segment(a, b) {
            if t > 0.0 && t < 1.0 {
                let crossing = a + (b - a) * t;
                if crossing != a && crossing != b {
                    clipped.push(crossing);
                }
            }
        }
    }

    if !changed {
        return false;
    }
    if clipped.len() < 3 {
        clipped.clear();
    }
    *vertices = clipped;
    true
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn square_outline(h: f64) -> Vec<DVec2> {
        vec![
            DVec2::new(-h, -h),
            DVec2::new(h, -h),
            DVec2::new(h, h),
            DVec2::new(-h, h),
        ]
    }

    #[test]
    fn test_cell_creation() {
        let cell = Cell::square(3, DVec2::new(1.0, 1.0), 2.0);
        assert_eq!(cell.id, 3);
        assert_eq!(cell.vertex_count(), 4);
        assert_relative_eq!(cell.area(), 16.0);
        assert_relative_eq!(cell.centroid().x, 1.0, epsilon = 1e-12);
        assert_relative_eq!(cell.centroid().y, 1.0, epsilon = 1e-12);
        assert!(cell.contains(DVec2::new(2.5, -0.5)));
        assert!(!cell.contains(DVec2::new(3.5, 0.0)));
    }

    #[test]
    fn test_outline_too_small() {
        let cell = Cell::from_outline(0, DVec2::ZERO, &[DVec2::ZERO, DVec2::X]);
        assert!(cell.is_empty());
        assert_eq!(cell.radius(), 0.0);
    }

    #[test]
    fn test_slice_halves_square() {
        let mut cell = Cell::from_outline(0, DVec2::new(0.0, 0.0), &square_outline(10.0));
        assert!(cell.slice(DVec2::new(2.0, 0.0)));

        assert_eq!(cell.vertex_count(), 4);
        assert_relative_eq!(cell.area(), 20.0 * 11.0, epsilon = 1e-9);
        let max_x = cell.vertices.iter().map(|v| v.x).fold(f64::MIN, f64::max);
        assert_relative_eq!(max_x, 1.0, epsilon = 1e-12);
        assert!(signed_area(&cell.vertices) > 0.0, "winding should be preserved");
    }

    #[test]
    fn test_slice_far_point_is_noop() {
        let mut cell = Cell::from_outline(0, DVec2::ZERO, &square_outline(1.0));
        let before = cell.clone();
        assert!(!cell.slice(DVec2::new(50.0, 3.0)));
        assert_eq!(cell, before);
    }

    #[test]
    fn test_slice_coincident_generator() {
        let mut cell = Cell::from_outline(0, DVec2::new(0.5, 0.5), &square_outline(1.0));
        assert!(!cell.slice(DVec2::new(0.5, 0.5)));
        assert_eq!(cell.vertex_count(), 4);
    }

    #[test]
    fn test_clip_through_vertices() {
        // Diagonal through two corners: no duplicated corner points
        let mut vertices = square_outline(1.0);
        let line = Line::new(DVec2::ZERO, DVec2::new(1.0, 1.0));
        assert!(clip_convex_polygon(&mut vertices, &line, Side::Right));
        assert_eq!(
            vertices,
            vec![DVec2::new(-1.0, -1.0), DVec2::new(1.0, -1.0), DVec2::new(1.0, 1.0)]
        );
    }

    #[test]
    fn test_clip_coincident_edge_kept_side() {
        let mut vertices = square_outline(1.0);
        let line = Line::new(DVec2::new(-1.0, -1.0), DVec2::X);
        assert_eq!(line.side(DVec2::ZERO), Side::Left);
        assert!(!clip_convex_polygon(&mut vertices, &line, Side::Left));
        assert_eq!(vertices, square_outline(1.0));
    }

    #[test]
    fn test_clip_coincident_edge_discarded_side() {
        let mut vertices = square_outline(1.0);
        let line = Line::new(DVec2::new(-1.0, -1.0), DVec2::X);
        assert!(clip_convex_polygon(&mut vertices, &line, Side::Right));
        assert!(vertices.is_empty());
    }

    #[test]
    fn test_clip_everything() {
        let mut vertices = square_outline(1.0);
        let line = Line::new(DVec2::new(5.0, 0.0), DVec2::Y);
        assert!(clip_convex_polygon(&mut vertices, &line, Side::Right));
        assert!(vertices.is_empty());
    }

    #[test]
    fn test_radius_shrinks() {
        let mut cell = Cell::from_outline(0, DVec2::ZERO, &square_outline(10.0));
        let initial = cell.radius();
        assert_relative_eq!(initial, 2.1 * 200f64.sqrt(), epsilon = 1e-9);

        let mut previous = initial;
        for other in [
            DVec2::new(3.0, 0.0),
            DVec2::new(0.0, -4.0),
            DVec2::new(-2.0, 2.0),
            DVec2::new(1.0, 1.5),
        ] {
            cell.slice(other);
            let r = cell.radius();
            assert!(r <= previous + 1e-12);
            previous = r;
        }
        assert!(previous < initial);
    }
}
