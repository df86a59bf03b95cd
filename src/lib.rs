//! Sweep-line Delaunay triangulation and clipped Voronoi cells
//!
//! A standalone library for triangulating planar point sets and carving a
//! convex outline into one Voronoi cell per point.
//!
//! # Quick Start
//!
//! ```rust
//! use planar_voronoi::*;
//!
//! let outline = [
//!     DVec2::new(0.0, 0.0),
//!     DVec2::new(100.0, 0.0),
//!     DVec2::new(100.0, 100.0),
//!     DVec2::new(0.0, 100.0),
//! ];
//! let points = generate_random_points(200, DVec2::splat(1.0), DVec2::splat(99.0), 42);
//!
//! let config = DiagramConfigBuilder::new()
//!     .seed(42)
//!     .strategy(CellStrategy::Connectivity)
//!     .build().unwrap();
//!
//! let diagram = VoronoiDiagram::generate(&points, &outline, config).unwrap();
//! println!("{} triangles, {} cells", diagram.faces().len(), diagram.cell_count());
//! ```
//!
//! The individual stages are usable on their own:
//!
//! ```rust
//! use planar_voronoi::*;
//! use rand::SeedableRng;
//!
//! let points = generate_sunflower_points(64, DVec2::ZERO, 10.0, 7);
//! let mut rng = rand_chacha::ChaCha8Rng::seed_from_u64(7);
//! let faces = delaunay::solve(&points, 1e-9, &mut rng).unwrap();
//! let connectivity = Connectivity::build(&points, &faces, true).unwrap();
//!
//! let outline = [
//!     DVec2::new(-12.0, -12.0),
//!     DVec2::new(12.0, -12.0),
//!     DVec2::new(12.0, 12.0),
//!     DVec2::new(-12.0, 12.0),
//! ];
//! let cells = voronoi::solve_connectivity(&points, &connectivity, &outline).unwrap();
//! assert_eq!(cells.len(), 64);
//! ```
//!
//! # Features
//!
//! - `spatial-index` (default): Enables O(log n) position-to-cell lookups using KD-tree
//! - `serde`: Enables serialization support for configuration, faces and cells

// Modules
pub mod error;
pub mod config;
pub mod geometry;
pub mod topology;
pub mod cell;
pub mod generation;
pub mod diagram;

#[cfg(feature = "spatial-index")]
pub mod spatial;

// Re-export core types for convenience
pub use error::{DiagramError, Result};
pub use config::{CellStrategy, DiagramConfig, DiagramConfigBuilder};
pub use cell::{clip_convex_polygon, Cell};
pub use topology::Face;
pub use diagram::VoronoiDiagram;
pub use generation::{delaunay, voronoi};
pub use generation::{
    generate_random_points, generate_sunflower_points, lloyd_relaxation, Connectivity,
    LloydOptions,
};

#[cfg(feature = "spatial-index")]
pub use spatial::SpatialIndex;

// Re-export glam::DVec2 for convenience
pub use glam::DVec2;
