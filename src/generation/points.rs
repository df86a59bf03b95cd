//! Seeded uniform point sets

use glam::DVec2;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// Generate `count` points uniformly distributed in the rectangle `[min, max)`
///
/// The same seed always yields the same points.
///
/// # Example
///
/// ```
/// use planar_voronoi::generation::generate_random_points;
/// use glam::DVec2;
///
/// let points = generate_random_points(100, DVec2::ZERO, DVec2::splat(10.0), 42);
/// assert_eq!(points.len(), 100);
/// ```
pub fn generate_random_points(count: usize, min: DVec2, max: DVec2, seed: u64) -> Vec<DVec2> {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    let lo = min.min(max);
    let size = (max - min).abs();

    (0..count)
        .map(|_| {
            let u: f64 = rng.gen();
            let v: f64 = rng.gen();
            lo + size * DVec2::new(u, v)
        })
        .collect()
}
