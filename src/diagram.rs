//! VoronoiDiagram main structure

use glam::DVec2;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use std::collections::HashSet;

use crate::cell::Cell;
use crate::config::{CellStrategy, DiagramConfig};
use crate::error::{DiagramError, Result};
use crate::generation::{delaunay, lloyd_relaxation_with_options, voronoi, Connectivity, LloydOptions};
use crate::geometry;
use crate::topology::Face;

#[cfg(feature = "spatial-index")]
use crate::spatial::SpatialIndex;

/// A complete triangulation plus Voronoi partition of an outline
///
/// Holds the (optionally relaxed) generators, their Delaunay faces and
/// adjacency, and one clipped cell per generator.
///
/// # Examples
///
/// ```
/// use planar_voronoi::*;
///
/// let outline = [
///     DVec2::new(0.0, 0.0),
///     DVec2::new(10.0, 0.0),
///     DVec2::new(10.0, 10.0),
///     DVec2::new(0.0, 10.0),
/// ];
/// let points = generate_random_points(50, DVec2::splat(0.5), DVec2::splat(9.5), 7);
/// let config = DiagramConfigBuilder::new().seed(42).build().unwrap();
///
/// let diagram = VoronoiDiagram::generate(&points, &outline, config).unwrap();
/// println!("Generated {} cells", diagram.cell_count());
///
/// if let Some(cell) = diagram.get_cell(0) {
///     println!("Cell 0 area: {}", cell.area());
/// }
/// ```
#[derive(Clone)]
pub struct VoronoiDiagram {
    /// Configuration used to generate this diagram
    config: DiagramConfig,

    /// Generator positions after relaxation (indexed by cell ID)
    generators: Vec<DVec2>,

    /// Counter-clockwise Delaunay triangles over the generators
    faces: Vec<Face>,

    /// Delaunay adjacency of the generators
    connectivity: Connectivity,

    /// One slot per generator, `None` where the cell collapsed
    cells: Vec<Option<Cell>>,

    /// Spatial index for fast position-to-cell lookups (optional, requires spatial-index feature)
    #[cfg(feature = "spatial-index")]
    spatial_index: SpatialIndex,
}

impl VoronoiDiagram {
    /// Generate a diagram from points and a convex outline
    ///
    /// # Errors
    ///
    /// - `InsufficientInput` for fewer than 3 points
    /// - `InvalidArgument` for non-finite points or outline vertices
    pub fn generate(points: &[DVec2], outline: &[DVec2], config: DiagramConfig) -> Result<Self> {
        if points.len() < 3 {
            return Err(DiagramError::InsufficientInput {
                expected: 3,
                actual: points.len(),
            });
        }
        geometry::ensure_finite(points, "point")?;
        geometry::ensure_finite(outline, "outline vertex")?;

        let generators = if config.lloyd_iterations > 0 {
            let options = LloydOptions {
                max_iterations: config.lloyd_iterations,
                convergence_threshold: config.lloyd_convergence,
            };
            lloyd_relaxation_with_options(points.to_vec(), outline, options)
        } else {
            points.to_vec()
        };

        let mut rng = ChaCha8Rng::seed_from_u64(config.seed);
        let faces = delaunay::solve(&generators, config.jitter, &mut rng)?;
        let connectivity = Connectivity::build(&generators, &faces, config.include_hull_edges)?;

        let cells = match config.strategy {
            CellStrategy::BruteForce => voronoi::solve_brute_force(&generators, outline),
            CellStrategy::Connectivity => {
                voronoi::solve_connectivity(&generators, &connectivity, outline)?
            }
        };

        log::debug!(
            "diagram: {} generators, {} faces, {} cells ({})",
            generators.len(),
            faces.len(),
            cells.iter().flatten().count(),
            config.strategy.name()
        );

        #[cfg(feature = "spatial-index")]
        let spatial_index = SpatialIndex::new(&generators);

        Ok(Self {
            config,
            generators,
            faces,
            connectivity,
            cells,
            #[cfg(feature = "spatial-index")]
            spatial_index,
        })
    }

    /// Get the configuration used to generate this diagram
    #[inline]
    pub fn config(&self) -> &DiagramConfig {
        &self.config
    }

    /// Number of generators (including any whose cell collapsed)
    #[inline]
    pub fn cell_count(&self) -> usize {
        self.cells.len()
    }

    /// Generator positions, after relaxation if any was configured
    #[inline]
    pub fn generators(&self) -> &[DVec2] {
        &self.generators
    }

    /// Delaunay triangles over the generators
    #[inline]
    pub fn faces(&self) -> &[Face] {
        &self.faces
    }

    /// Delaunay adjacency
    #[inline]
    pub fn connectivity(&self) -> &Connectivity {
        &self.connectivity
    }

    /// Get a cell by ID
    ///
    /// Returns `None` if the ID is out of bounds or the cell collapsed.
    #[inline]
    pub fn get_cell(&self, id: usize) -> Option<&Cell> {
        self.cells.get(id).and_then(|c| c.as_ref())
    }

    /// All cell slots, indexed by generator
    #[inline]
    pub fn cells(&self) -> &[Option<Cell>] {
        &self.cells
    }

    /// Get neighbor IDs for a cell
    ///
    /// Returns empty slice if cell ID is invalid.
    #[inline]
    pub fn get_neighbors(&self, cell_id: usize) -> &[usize] {
        self.connectivity.get(cell_id)
    }

    /// Find the cell containing a position (requires spatial-index feature)
    ///
    /// Returns the ID of the nearest generator, which owns the position
    /// whenever it lies inside the outline.
    #[cfg(feature = "spatial-index")]
    pub fn find_cell_at(&self, position: DVec2) -> usize {
        self.spatial_index.find_nearest(position)
    }

    /// Find cells within a given hop count from a center cell (BFS)
    ///
    /// Returns the IDs reachable within `hops` steps over the adjacency,
    /// including the center. Returns an empty vec if `center_id` is invalid.
    pub fn find_cells_within_hops(&self, center_id: usize, hops: usize) -> Vec<usize> {
        if center_id >= self.cells.len() {
            return vec![];
        }

        let mut visited = HashSet::new();
        let mut current = vec![center_id];
        visited.insert(center_id);

        for _ in 0..hops {
            let mut next = Vec::new();
            for &cell_id in &current {
                for &neighbor in self.get_neighbors(cell_id) {
                    if visited.insert(neighbor) {
                        next.push(neighbor);
                    }
                }
            }
            current = next;
        }

        let mut found: Vec<usize> = visited.into_iter().collect();
        found.sort_unstable();
        found
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::DiagramConfigBuilder;
    use crate::generation::generate_random_points;
    use approx::assert_relative_eq;

    fn outline() -> Vec<DVec2> {
        vec![
            DVec2::new(0.0, 0.0),
            DVec2::new(20.0, 0.0),
            DVec2::new(20.0, 20.0),
            DVec2::new(0.0, 20.0),
        ]
    }

    fn diagram(strategy: CellStrategy) -> VoronoiDiagram {
        let points = generate_random_points(80, DVec2::splat(1.0), DVec2::splat(19.0), 42);
        let config = DiagramConfigBuilder::new()
            .seed(42)
            .strategy(strategy)
            .build()
            .unwrap();
        VoronoiDiagram::generate(&points, &outline(), config).unwrap()
    }

    #[test]
    fn test_diagram_generation() {
        let diagram = diagram(CellStrategy::Connectivity);
        assert_eq!(diagram.cell_count(), 80);
        assert!(!diagram.faces().is_empty());

        let total: f64 = diagram.cells().iter().flatten().map(|c| c.area()).sum();
        assert_relative_eq!(total, 400.0, epsilon = 1e-6);
    }

    #[test]
    fn test_strategies_match() {
        let a = diagram(CellStrategy::Connectivity);
        let b = diagram(CellStrategy::BruteForce);
        for id in 0..a.cell_count() {
            let (ca, cb) = (a.get_cell(id).unwrap(), b.get_cell(id).unwrap());
            assert_relative_eq!(ca.area(), cb.area(), epsilon = 1e-6);
        }
    }

    #[test]
    fn test_get_cell() {
        let diagram = diagram(CellStrategy::Connectivity);
        assert!(diagram.get_cell(0).is_some());
        assert!(diagram.get_cell(diagram.cell_count()).is_none());
    }

    #[test]
    fn test_get_neighbors() {
        let diagram = diagram(CellStrategy::Connectivity);
        let neighbors = diagram.get_neighbors(0);
        assert!(neighbors.len() >= 2);
        assert!(diagram.get_neighbors(999_999).is_empty());
    }

    #[cfg(feature = "spatial-index")]
    #[test]
    fn test_find_cell_at() {
        let diagram = diagram(CellStrategy::Connectivity);

        let generator = diagram.generators()[5];
        assert_eq!(diagram.find_cell_at(generator), 5);

        let centroid = diagram.get_cell(5).unwrap().centroid();
        let found = diagram.find_cell_at(centroid);
        assert!(diagram.get_cell(found).unwrap().contains(centroid));
    }

    #[test]
    fn test_find_cells_within_hops() {
        let diagram = diagram(CellStrategy::Connectivity);

        let cells_r0 = diagram.find_cells_within_hops(0, 0);
        assert_eq!(cells_r0, vec![0]);

        let cells_r1 = diagram.find_cells_within_hops(0, 1);
        assert_eq!(cells_r1.len(), 1 + diagram.get_neighbors(0).len());

        let cells_r2 = diagram.find_cells_within_hops(0, 2);
        assert!(cells_r2.len() > cells_r1.len());

        assert!(diagram.find_cells_within_hops(999_999, 3).is_empty());
    }

    #[test]
    fn test_lloyd_relaxed_generation() {
        let points = generate_random_points(40, DVec2::splat(1.0), DVec2::splat(19.0), 3);
        let config = DiagramConfigBuilder::new()
            .seed(1)
            .lloyd_iterations(3)
            .unwrap()
            .build()
            .unwrap();
        let diagram = VoronoiDiagram::generate(&points, &outline(), config).unwrap();

        assert_ne!(diagram.generators(), &points[..]);
        for (id, cell) in diagram.cells().iter().enumerate() {
            let cell = cell.as_ref().unwrap();
            assert!(cell.contains(diagram.generators()[id]));
        }
    }

    #[test]
    fn test_too_few_points() {
        let config = DiagramConfig::default();
        let result = VoronoiDiagram::generate(&[DVec2::ZERO, DVec2::ONE], &outline(), config);
        assert!(matches!(
            result,
            Err(DiagramError::InsufficientInput { expected: 3, actual: 2 })
        ));
    }

    #[test]
    fn test_determinism() {
        let a = diagram(CellStrategy::Connectivity);
        let b = diagram(CellStrategy::Connectivity);
        assert_eq!(a.faces(), b.faces());
        assert_eq!(a.cells(), b.cells());
    }

    #[test]
    fn test_coincident_generators() {
        let config = DiagramConfigBuilder::new().seed(3).build().unwrap();
        let diagram = VoronoiDiagram::generate(&[DVec2::splat(4.0); 3], &outline(), config).unwrap();
        assert_eq!(diagram.cell_count(), 3);
    }
}
