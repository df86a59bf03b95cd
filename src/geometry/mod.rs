//! Elementary 2D primitives used by the solvers
//!
//! Points are `glam::DVec2`. This module adds the handful of pieces the
//! triangulation and clipping code lean on: tagged nodes, bounding boxes,
//! circumcircle fitting, line classification and a convex hull wrapper.

mod circle;
mod hull;
mod line;
mod node;

pub use circle::Circle;
pub use hull::convex_hull;
pub use line::{Line, LineIntersection, Side};
pub use node::{jitter_nodes, renumber_nodes, sort_nodes, BoundingBox, Node};

use crate::error::{DiagramError, Result};
use glam::DVec2;

/// Reject point sets containing NaN or infinite coordinates
pub(crate) fn ensure_finite(points: &[DVec2], what: &str) -> Result<()> {
    match points.iter().position(|p| !p.is_finite()) {
        Some(idx) => Err(DiagramError::InvalidArgument(format!(
            "{} {} has non-finite coordinates",
            what, idx
        ))),
        None => Ok(()),
    }
}

/// Signed area of a polygon (positive for counter-clockwise winding)
pub fn signed_area(vertices: &[DVec2]) -> f64 {
    if vertices.len() < 3 {
        return 0.0;
    }
    let mut twice_area = 0.0;
    for i in 0..vertices.len() {
        let a = vertices[i];
        let b = vertices[(i + 1) % vertices.len()];
        twice_area += a.perp_dot(b);
    }
    twice_area * 0.5
}
