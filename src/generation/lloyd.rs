//! Lloyd's Relaxation for uniform point distribution
//!
//! Lloyd's Relaxation iteratively improves the uniformity of a point set
//! inside an outline by moving each point to the centroid of its Voronoi
//! cell.

use glam::DVec2;
use std::time::Instant;

use crate::geometry::BoundingBox;

use super::voronoi::solve_brute_force;

/// Options for Lloyd's relaxation algorithm
#[derive(Debug, Clone, Copy)]
pub struct LloydOptions {
    /// Maximum number of iterations to run
    pub max_iterations: usize,
    /// Convergence threshold as a fraction of the outline diagonal
    ///
    /// Stop when the largest point displacement drops below this.
    /// Set to 0.0 to disable early termination.
    pub convergence_threshold: f64,
}

impl Default for LloydOptions {
    fn default() -> Self {
        Self {
            max_iterations: 5,
            convergence_threshold: 0.001,
        }
    }
}

/// Apply Lloyd's Relaxation with a fixed iteration count
///
/// # Arguments
///
/// * `points` - Initial point distribution
/// * `outline` - Convex region the cells are clipped to
/// * `iterations` - Number of relaxation iterations (typically 3-5)
pub fn lloyd_relaxation(points: Vec<DVec2>, outline: &[DVec2], iterations: usize) -> Vec<DVec2> {
    let options = LloydOptions {
        max_iterations: iterations,
        ..Default::default()
    };
    lloyd_relaxation_with_options(points, outline, options)
}

/// Apply Lloyd's Relaxation with custom options
///
/// # Algorithm
///
/// For each iteration:
/// 1. Clip a Voronoi cell for every point against the outline
/// 2. Move each point to its cell's area centroid
/// 3. Stop early once the largest move falls below the threshold
///
/// Points whose cell collapsed (for example, points outside the outline)
/// stay where they are.
pub fn lloyd_relaxation_with_options(
    mut points: Vec<DVec2>,
    outline: &[DVec2],
    options: LloydOptions,
) -> Vec<DVec2> {
    let diagonal = BoundingBox::from_points(outline.iter().copied())
        .map(|b| b.diagonal())
        .unwrap_or(0.0);
    let convergence_threshold = options.convergence_threshold * diagonal;
    let total_start = Instant::now();

    log::debug!(
        "[Lloyd] Starting: {} points, max {} iterations, threshold {:.4} (abs: {:.6})",
        points.len(),
        options.max_iterations,
        options.convergence_threshold,
        convergence_threshold
    );

    let mut iterations_run = 0;
    let mut converged = false;

    for iteration in 0..options.max_iterations {
        let iter_start = Instant::now();

        let cells = solve_brute_force(&points, outline);

        let mut max_displacement: f64 = 0.0;
        for (point, cell) in points.iter_mut().zip(cells.iter()) {
            if let Some(cell) = cell {
                let centroid = cell.centroid();
                max_displacement = max_displacement.max(point.distance(centroid));
                *point = centroid;
            }
        }
        iterations_run = iteration + 1;

        log::debug!(
            "[Lloyd] Iter {}: total={:?}, max_disp={:.6}",
            iteration + 1,
            iter_start.elapsed(),
            max_displacement
        );

        if convergence_threshold > 0.0 && max_displacement < convergence_threshold {
            converged = true;
            break;
        }
    }

    log::info!(
        "[Lloyd] Finished: {} iterations (of max {}), converged={}, total={:?}",
        iterations_run,
        options.max_iterations,
        converged,
        total_start.elapsed()
    );

    points
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generation::points::generate_random_points;

    fn outline() -> Vec<DVec2> {
        vec![
            DVec2::new(0.0, 0.0),
            DVec2::new(10.0, 0.0),
            DVec2::new(10.0, 10.0),
            DVec2::new(0.0, 10.0),
        ]
    }

    /// Smallest distance between any two points
    fn min_spacing(points: &[DVec2]) -> f64 {
        let mut best = f64::MAX;
        for i in 0..points.len() {
            for j in i + 1..points.len() {
                best = best.min(points[i].distance(points[j]));
            }
        }
        best
    }

    #[test]
    fn test_lloyd_relaxation() {
        let points = generate_random_points(100, DVec2::ZERO, DVec2::splat(10.0), 42);
        let before = min_spacing(&points);
        let relaxed = lloyd_relaxation(points, &outline(), 5);

        assert_eq!(relaxed.len(), 100);
        for p in &relaxed {
            assert!(p.x > 0.0 && p.x < 10.0 && p.y > 0.0 && p.y < 10.0);
        }
        assert!(min_spacing(&relaxed) > before);
    }

    #[test]
    fn test_lloyd_relaxation_determinism() {
        let points1 = generate_random_points(50, DVec2::ZERO, DVec2::splat(10.0), 12345);
        let points2 = generate_random_points(50, DVec2::ZERO, DVec2::splat(10.0), 12345);

        let relaxed1 = lloyd_relaxation(points1, &outline(), 2);
        let relaxed2 = lloyd_relaxation(points2, &outline(), 2);
        assert_eq!(relaxed1, relaxed2);
    }

    #[test]
    fn test_lloyd_converges_early() {
        // A centered point in a square is already at its centroid.
        let options = LloydOptions {
            max_iterations: 10,
            convergence_threshold: 0.01,
        };
        let relaxed = lloyd_relaxation_with_options(vec![DVec2::new(5.0, 5.0)], &outline(), options);
        assert!((relaxed[0] - DVec2::new(5.0, 5.0)).length() < 1e-12);
    }

    #[test]
    fn test_lloyd_options_default() {
        let options = LloydOptions::default();
        assert_eq!(options.max_iterations, 5);
        assert!((options.convergence_threshold - 0.001).abs() < 1e-12);
    }

    #[test]
    fn test_lloyd_no_convergence_threshold() {
        let points = generate_random_points(50, DVec2::ZERO, DVec2::splat(10.0), 42);
        let options = LloydOptions {
            max_iterations: 3,
            convergence_threshold: 0.0,
        };
        let relaxed = lloyd_relaxation_with_options(points, &outline(), options);
        assert_eq!(relaxed.len(), 50);
    }
}
