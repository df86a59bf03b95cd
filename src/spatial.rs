//! Spatial indexing for fast position-to-cell lookups
//!
//! This module is only available with the `spatial-index` feature.

#[cfg(feature = "spatial-index")]
use glam::DVec2;
#[cfg(feature = "spatial-index")]
use kiddo::immutable::float::kdtree::ImmutableKdTree;
#[cfg(feature = "spatial-index")]
use kiddo::SquaredEuclidean;

/// Wrapper around KD-tree for nearest-generator queries
///
/// Within the outline, the nearest generator to a position is exactly the
/// generator whose Voronoi cell contains it.
///
/// # Performance
///
/// - Construction: O(n log n)
/// - Query: O(log n)
#[cfg(feature = "spatial-index")]
#[derive(Clone)]
pub struct SpatialIndex {
    tree: ImmutableKdTree<f64, usize, 2, 32>,
}

#[cfg(feature = "spatial-index")]
impl SpatialIndex {
    /// Build spatial index from generator positions
    ///
    /// # Example
    ///
    /// ```
    /// use planar_voronoi::*;
    /// use glam::DVec2;
    ///
    /// # #[cfg(feature = "spatial-index")]
    /// # {
    /// let generators = vec![
    ///     DVec2::new(0.0, 0.0),
    ///     DVec2::new(10.0, 0.0),
    ///     DVec2::new(0.0, 10.0),
    /// ];
    ///
    /// let index = SpatialIndex::new(&generators);
    /// assert_eq!(index.find_nearest(DVec2::new(9.0, 1.0)), 1);
    /// # }
    /// ```
    pub fn new(generators: &[DVec2]) -> Self {
        let points: Vec<[f64; 2]> = generators.iter().map(|g| [g.x, g.y]).collect();

        Self {
            tree: ImmutableKdTree::new_from_slice(&points),
        }
    }

    /// Find the index of the generator nearest to `position`
    pub fn find_nearest(&self, position: DVec2) -> usize {
        let query = [position.x, position.y];
        self.tree.nearest_one::<SquaredEuclidean>(&query).item
    }
}

#[cfg(test)]
#[cfg(feature = "spatial-index")]
mod tests {
    use super::*;

    #[test]
    fn test_spatial_index_basic() {
        let generators = vec![
            DVec2::new(1.0, 0.0),
            DVec2::new(0.0, 1.0),
            DVec2::new(-1.0, 0.0),
            DVec2::new(0.0, -1.0),
        ];

        let index = SpatialIndex::new(&generators);

        assert_eq!(index.find_nearest(DVec2::new(0.9, 0.1)), 0);
        assert_eq!(index.find_nearest(DVec2::new(0.1, 0.95)), 1);
        assert_eq!(index.find_nearest(DVec2::new(-0.8, 0.0)), 2);
        assert_eq!(index.find_nearest(DVec2::new(0.2, -3.0)), 3);
    }

    #[test]
    fn test_spatial_index_exact_match() {
        let generators = vec![DVec2::new(10.0, 0.0), DVec2::new(0.0, 10.0)];

        let index = SpatialIndex::new(&generators);

        assert_eq!(index.find_nearest(generators[0]), 0);
        assert_eq!(index.find_nearest(generators[1]), 1);
    }
}
