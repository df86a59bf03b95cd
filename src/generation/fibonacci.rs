//! Golden-Angle Disc Distribution
//!
//! Generates near-uniform point distributions on a disc using Vogel's
//! sunflower spiral with added jitter for natural-looking Voronoi cells.
//!
//! # Algorithm
//!
//! Point `i` of `n` is placed at:
//! - Angle: `2π * i / φ²` (golden angle increments)
//! - Radius: `R * sqrt((i + 0.5) / n)` so every ring holds equal area
//!
//! Small random jitter breaks up the visible spiral arms while keeping the
//! density uniform. The regular spiral also sits close to many concyclic
//! configurations, so the jitter doubles as the perturbation the Delaunay
//! solver needs.

use glam::DVec2;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use std::f64::consts::PI;

/// Golden ratio φ = (1 + √5) / 2
const PHI: f64 = 1.618_033_988_749_895;

/// Jitter strength as fraction of average point spacing
/// 0.0 = no jitter (pure spiral)
/// 0.5 = strong jitter (breaks up spiral arms well)
const JITTER_STRENGTH: f64 = 0.3;

/// Generate points on a disc using the golden-angle spiral with jitter
///
/// Produces a near-uniform distribution in O(n), much faster than random
/// points followed by Lloyd relaxation.
///
/// # Arguments
///
/// * `count` - Number of points to generate
/// * `center` - Disc center
/// * `radius` - Disc radius
/// * `seed` - Random seed for deterministic jitter
///
/// # Example
///
/// ```rust
/// use planar_voronoi::generation::generate_sunflower_points;
/// use glam::DVec2;
///
/// let points = generate_sunflower_points(1000, DVec2::ZERO, 10.0, 42);
/// assert_eq!(points.len(), 1000);
/// ```
pub fn generate_sunflower_points(count: usize, center: DVec2, radius: f64, seed: u64) -> Vec<DVec2> {
    if count == 0 {
        return Vec::new();
    }

    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    let n = count as f64;
    let golden_angle = 2.0 * PI / (PHI * PHI);

    // Average spacing between neighboring points (disc area / n)
    let avg_spacing = (PI * radius * radius / n).sqrt();
    let jitter_amount = avg_spacing * JITTER_STRENGTH;

    (0..count)
        .map(|i| {
            let i_f = i as f64;
            let theta = golden_angle * i_f;
            let r = radius * ((i_f + 0.5) / n).sqrt();
            let base = DVec2::new(r * theta.cos(), r * theta.sin());

            let jitter_theta: f64 = rng.gen_range(0.0..2.0 * PI);
            let jitter_mag: f64 = if jitter_amount > 0.0 {
                rng.gen_range(0.0..jitter_amount)
            } else {
                0.0
            };
            let jittered = base + DVec2::from_angle(jitter_theta) * jitter_mag;

            // Keep the point inside the disc
            let len = jittered.length();
            let clamped = if len > radius { jittered * (radius / len) } else { jittered };

            center + clamped
        })
        .collect()
}
