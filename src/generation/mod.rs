//! Core triangulation and Voronoi generation algorithms
//!
//! Data flows points → [`delaunay`] → faces → [`Connectivity`] →
//! [`voronoi::solve_connectivity`], or straight from points to
//! [`voronoi::solve_brute_force`].

pub mod connectivity;
pub mod delaunay;
pub mod voronoi;
mod fibonacci;
mod lloyd;
mod points;

pub use connectivity::Connectivity;
pub use fibonacci::generate_sunflower_points;
pub use lloyd::{lloyd_relaxation, lloyd_relaxation_with_options, LloydOptions};
pub use points::generate_random_points;
