//! Circumcircle fitting

use glam::DVec2;

/// A circle with its squared radius cached for containment tests
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Circle {
    /// Center
    pub center: DVec2,
    /// Radius
    pub radius: f64,
    /// Radius squared
    pub radius_squared: f64,
}

impl Circle {
    /// Circle through three points
    ///
    /// Collinear input has no finite circumcircle; the result then carries
    /// infinite or NaN components. Callers avoid this by jittering input.
    pub fn from_points(a: DVec2, b: DVec2, c: DVec2) -> Self {
        let ab = b - a;
        let ac = c - a;
        let d = 2.0 * ab.perp_dot(ac);
        let ab2 = ab.length_squared();
        let ac2 = ac.length_squared();

        let offset = DVec2::new(ac.y * ab2 - ab.y * ac2, ab.x * ac2 - ac.x * ab2) / d;
        let radius_squared = offset.length_squared();

        Self {
            center: a + offset,
            radius: radius_squared.sqrt(),
            radius_squared,
        }
    }

    /// Strict containment: points on the circle are outside
    ///
    /// Always false for a degenerate (NaN) circle.
    #[inline]
    pub fn contains(&self, p: DVec2) -> bool {
        self.center.distance_squared(p) < self.radius_squared
    }

    /// Whether the fit produced a usable circle
    #[inline]
    pub fn is_finite(&self) -> bool {
        self.center.is_finite() && self.radius.is_finite()
    }
}
