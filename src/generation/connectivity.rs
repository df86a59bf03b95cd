//! Vertex adjacency extracted from a triangulation

use glam::DVec2;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::error::{DiagramError, Result};
use crate::geometry::convex_hull;
use crate::topology::Face;

/// Per-vertex neighbor lists
///
/// Every list is sorted ascending and free of duplicates. Built once and
/// read-only afterwards.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Connectivity {
    neighbors: Vec<Vec<usize>>,
}

impl Connectivity {
    /// Build adjacency from a face list
    ///
    /// Each face edge connects its endpoints in both directions. With
    /// `include_hull_edges`, convex hull boundary edges are added as well.
    ///
    /// # Errors
    ///
    /// `InvalidArgument` if a face references a vertex outside `points`.
    pub fn build(points: &[DVec2], faces: &[Face], include_hull_edges: bool) -> Result<Self> {
        let count = points.len();
        let mut neighbors: Vec<Vec<usize>> = vec![Vec::new(); count];

        for face in faces {
            if let Some(&bad) = face.vertices().iter().find(|&&v| v >= count) {
                return Err(DiagramError::InvalidArgument(format!(
                    "face {:?} references vertex {} but only {} points were given",
                    face, bad, count
                )));
            }
            for (u, v) in face.edges() {
                neighbors[u].push(v);
                neighbors[v].push(u);
            }
        }

        if include_hull_edges {
            if let Some(hull) = convex_hull(points) {
                for i in 0..hull.len() {
                    let u = hull[i];
                    let v = hull[(i + 1) % hull.len()];
                    neighbors[u].push(v);
                    neighbors[v].push(u);
                }
            }
        }

        Ok(Self::from_neighbors(neighbors))
    }

    /// Wrap raw neighbor lists, sorting and deduplicating each
    pub fn from_neighbors(mut neighbors: Vec<Vec<usize>>) -> Self {
        for list in neighbors.iter_mut() {
            list.sort_unstable();
            list.dedup();
        }
        Self { neighbors }
    }

    /// Neighbors of `id`, empty if `id` is out of range
    #[inline]
    pub fn get(&self, id: usize) -> &[usize] {
        self.neighbors.get(id).map(|n| n.as_slice()).unwrap_or(&[])
    }

    /// Number of vertices covered
    #[inline]
    pub fn len(&self) -> usize {
        self.neighbors.len()
    }

    /// Check if no vertices are covered
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.neighbors.is_empty()
    }

    /// Iterate `(vertex, neighbors)` pairs
    pub fn iter(&self) -> impl Iterator<Item = (usize, &[usize])> {
        self.neighbors.iter().enumerate().map(|(i, n)| (i, n.as_slice()))
    }

    /// Total number of undirected edges
    pub fn edge_count(&self) -> usize {
        self.neighbors.iter().map(|n| n.len()).sum::<usize>() / 2
    }
}
