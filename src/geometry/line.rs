//! Infinite lines, side classification and segment crossings

use glam::DVec2;

/// Which side of a directed line a point lies on
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    /// Left of the direction of travel
    Left,
    /// Right of the direction of travel
    Right,
    /// Exactly on the line
    Coincident,
}

impl Side {
    /// The side across the line; `Coincident` stays put
    #[inline]
    pub fn opposite(self) -> Side {
        match self {
            Side::Left => Side::Right,
            Side::Right => Side::Left,
            Side::Coincident => Side::Coincident,
        }
    }
}

/// How a segment relates to a line
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum LineIntersection {
    /// The segment does not reach the line
    None,
    /// The segment is parallel to the line and off it
    Parallel,
    /// The segment lies on the line
    Coincident,
    /// Single crossing at parameter `t` in `[0, 1]` along the segment
    Point(f64),
}

/// A directed infinite line
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Line {
    /// Any point on the line
    pub origin: DVec2,
    /// Direction (not necessarily normalized)
    pub direction: DVec2,
}

impl Line {
    /// Line through `origin` along `direction`
    #[inline]
    pub fn new(origin: DVec2, direction: DVec2) -> Self {
        Self { origin, direction }
    }

    /// Perpendicular bisector of `a` and `b`, `None` when they coincide
    ///
    /// The line is directed so that `a` lies on its right and `b` on its left.
    pub fn bisector(a: DVec2, b: DVec2) -> Option<Self> {
        let ab = b - a;
        if ab.length_squared() == 0.0 {
            return None;
        }
        Some(Self::new((a + b) * 0.5, -ab.perp()))
    }

    /// Signed side value: positive on the left, negative on the right
    #[inline]
    pub fn side_value(&self, p: DVec2) -> f64 {
        self.direction.perp_dot(p - self.origin)
    }

    /// Classify a point against the line
    pub fn side(&self, p: DVec2) -> Side {
        let value = self.side_value(p);
        if value > 0.0 {
            Side::Left
        } else if value < 0.0 {
            Side::Right
        } else {
            Side::Coincident
        }
    }

    /// Classify the segment `a -> b` against the line
    pub fn intersect_segment(&self, a: DVec2, b: DVec2) -> LineIntersection {
        let sa = self.side_value(a);
        let sb = self.side_value(b);
        let denom = sa - sb;
        if denom == 0.0 {
            return if sa == 0.0 {
                LineIntersection::Coincident
            } else {
                LineIntersection::Parallel
            };
        }
        let t = sa / denom;
        if (0.0..=1.0).contains(&t) {
            LineIntersection::Point(t)
        } else {
            LineIntersection::None
        }
    }
}
