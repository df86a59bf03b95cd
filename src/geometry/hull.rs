//! Convex hull via parry's 2D hull routine

use glam::DVec2;
use parry2d_f64::math::Point;
use parry2d_f64::transformation;

use super::BoundingBox;

/// Compute the convex hull of a point set
///
/// Returns the hull boundary as indices into `points`, in order around the
/// hull, or `None` when the set is too small or too degenerate to enclose
/// any area. Coincident or non-finite input yields `None`.
pub fn convex_hull(points: &[DVec2]) -> Option<Vec<usize>> {
    if points.len() < 3 || points.iter().any(|p| !p.is_finite()) {
        return None;
    }
    // parry asserts on a point cloud with no extent
    let bounds = BoundingBox::from_points(points.iter().copied())?;
    if bounds.size().max_element() <= 0.0 {
        return None;
    }

    let parry_points: Vec<Point<f64>> = points.iter().map(|p| Point::new(p.x, p.y)).collect();
    let indices = transformation::convex_hull_idx(&parry_points);

    if indices.len() < 3 {
        None
    } else {
        Some(indices)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_square_with_interior_point() {
        let points = vec![
            DVec2::new(0.0, 0.0),
            DVec2::new(1.0, 0.0),
            DVec2::new(0.5, 0.5),
            DVec2::new(1.0, 1.0),
            DVec2::new(0.0, 1.0),
        ];

        let mut hull = convex_hull(&points).unwrap();
        assert_eq!(hull.len(), 4);
        hull.sort();
        assert_eq!(hull, vec![0, 1, 3, 4]);
    }

    #[test]
    fn test_too_few_points() {
        assert!(convex_hull(&[DVec2::ZERO, DVec2::X]).is_none());
    }

    #[test]
    fn test_coincident_points() {
        assert!(convex_hull(&[DVec2::new(1.0, 1.0); 3]).is_none());
        assert!(convex_hull(&[DVec2::splat(4.0); 5]).is_none());
    }

    #[test]
    fn test_non_finite_points() {
        let points = [DVec2::ZERO, DVec2::X, DVec2::new(f64::NAN, 1.0)];
        assert!(convex_hull(&points).is_none());
    }
}
