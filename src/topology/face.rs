//! Triangle faces

use glam::DVec2;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::geometry::Circle;

/// A triangle given by three vertex indices
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Face {
    /// First corner
    pub a: usize,
    /// Second corner
    pub b: usize,
    /// Third corner
    pub c: usize,
}

impl Face {
    /// Create a face from three vertex indices
    #[inline]
    pub fn new(a: usize, b: usize, c: usize) -> Self {
        Self { a, b, c }
    }

    /// A face is valid when its three corners are pairwise distinct
    #[inline]
    pub fn is_valid(&self) -> bool {
        self.a != self.b && self.b != self.c && self.a != self.c
    }

    /// Corners as an array
    #[inline]
    pub fn vertices(&self) -> [usize; 3] {
        [self.a, self.b, self.c]
    }

    /// The three boundary edges, in winding order
    #[inline]
    pub fn edges(&self) -> [(usize, usize); 3] {
        [(self.a, self.b), (self.b, self.c), (self.c, self.a)]
    }

    /// Check whether `vertex` is one of the corners
    #[inline]
    pub fn contains_vertex(&self, vertex: usize) -> bool {
        self.a == vertex || self.b == vertex || self.c == vertex
    }

    /// Apply a mapping to every corner
    #[inline]
    pub fn map(&self, mut f: impl FnMut(usize) -> usize) -> Face {
        Face::new(f(self.a), f(self.b), f(self.c))
    }

    /// Twice the signed area given vertex positions (positive when counter-clockwise)
    pub fn signed_area2(&self, points: &[DVec2]) -> f64 {
        let a = points[self.a];
        (points[self.b] - a).perp_dot(points[self.c] - a)
    }

    /// Same face with the last two corners swapped if it winds clockwise
    pub fn oriented_ccw(&self, points: &[DVec2]) -> Face {
        if self.signed_area2(points) < 0.0 {
            Face::new(self.a, self.c, self.b)
        } else {
            *self
        }
    }
}

/// A face with its circumcircle cached
///
/// The circle is fitted once at construction. Changing the corners means
/// building a new `FaceEx`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FaceEx {
    face: Face,
    circle: Circle,
    front: f64,
}

impl FaceEx {
    /// Build a face and fit its circumcircle from the corner positions
    pub fn new(face: Face, points: &[DVec2]) -> Self {
        let circle = Circle::from_points(points[face.a], points[face.b], points[face.c]);
        let front = circle.center.x + circle.radius;
        // Degenerate circles sort last and never leave the active set early.
        let front = if front.is_nan() { f64::INFINITY } else { front };
        Self { face, circle, front }
    }

    /// The underlying triangle
    #[inline]
    pub fn face(&self) -> Face {
        self.face
    }

    /// Cached circumcircle
    #[inline]
    pub fn circle(&self) -> &Circle {
        &self.circle
    }

    /// Rightmost x extent of the circumcircle
    #[inline]
    pub fn front(&self) -> f64 {
        self.front
    }

    /// Strict circumcircle containment test
    #[inline]
    pub fn circle_contains(&self, p: DVec2) -> bool {
        self.circle.contains(p)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_face_validity() {
        assert!(Face::new(0, 1, 2).is_valid());
        assert!(!Face::new(0, 1, 1).is_valid());
        assert!(!Face::new(3, 1, 3).is_valid());
    }

    #[test]
    fn test_orientation() {
        let points = [DVec2::new(0.0, 0.0), DVec2::new(1.0, 0.0), DVec2::new(0.0, 1.0)];
        let ccw = Face::new(0, 1, 2);
        let cw = Face::new(0, 2, 1);
        assert!(ccw.signed_area2(&points) > 0.0);
        assert_eq!(ccw.oriented_ccw(&points), ccw);
        assert_eq!(cw.oriented_ccw(&points), ccw);
    }

    #[test]
    fn test_face_ex_front() {
        let points = [DVec2::new(0.0, 0.0), DVec2::new(2.0, 0.0), DVec2::new(0.0, 2.0)];
        let face = FaceEx::new(Face::new(0, 1, 2), &points);
        assert_relative_eq!(face.front(), 1.0 + 2f64.sqrt(), epsilon = 1e-12);
        assert!(face.circle_contains(DVec2::new(1.0, 1.0)));
        assert!(!face.circle_contains(DVec2::new(3.0, 3.0)));
    }

    #[test]
    fn test_degenerate_front_sorts_last() {
        let points = [DVec2::new(0.0, 0.0), DVec2::new(1.0, 0.0), DVec2::new(2.0, 0.0)];
        let face = FaceEx::new(Face::new(0, 1, 2), &points);
        assert_eq!(face.front(), f64::INFINITY);
    }

    #[test]
    fn test_edges_and_map() {
        let face = Face::new(4, 7, 9);
        assert_eq!(face.edges(), [(4, 7), (7, 9), (9, 4)]);
        assert!(face.contains_vertex(7));
        assert!(!face.contains_vertex(5));
        assert_eq!(face.map(|i| i - 4), Face::new(0, 3, 5));
    }
}
