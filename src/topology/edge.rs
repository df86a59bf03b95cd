//! Undirected edge multiset

use crate::topology::Face;

/// Canonical undirected edge with a multiplicity count
///
/// The endpoints are stored as `(min, max)` so `(u, v)` and `(v, u)` are the
/// same edge. `count` is the number of triangles currently sharing it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Edge {
    /// Smaller endpoint
    pub a: usize,
    /// Larger endpoint
    pub b: usize,
    /// Multiplicity
    pub count: usize,
}

impl Edge {
    #[inline]
    fn key(u: usize, v: usize) -> (usize, usize) {
        if u <= v {
            (u, v)
        } else {
            (v, u)
        }
    }
}

/// Edges kept sorted by canonical endpoint pair
#[derive(Debug, Clone, Default)]
pub struct EdgeList {
    edges: Vec<Edge>,
}

impl EdgeList {
    /// Create an empty list
    pub fn new() -> Self {
        Self::default()
    }

    /// Boundary edges of a set of triangles, each counted once per incident face
    pub fn from_faces<'a>(faces: impl IntoIterator<Item = &'a Face>) -> Self {
        let mut list = Self::new();
        for face in faces {
            for (u, v) in face.edges() {
                list.add_edge(u, v);
            }
        }
        list
    }

    fn search(&self, u: usize, v: usize) -> std::result::Result<usize, usize> {
        let key = Edge::key(u, v);
        self.edges.binary_search_by_key(&key, |e| (e.a, e.b))
    }

    /// Insert an edge or bump its multiplicity
    pub fn add_edge(&mut self, u: usize, v: usize) {
        match self.search(u, v) {
            Ok(idx) => self.edges[idx].count += 1,
            Err(idx) => {
                let (a, b) = Edge::key(u, v);
                self.edges.insert(idx, Edge { a, b, count: 1 });
            }
        }
    }

    /// Decrement an edge's multiplicity, dropping it at zero
    ///
    /// Returns false if the edge was not present.
    pub fn remove_edge(&mut self, u: usize, v: usize) -> bool {
        match self.search(u, v) {
            Ok(idx) => {
                self.edges[idx].count -= 1;
                if self.edges[idx].count == 0 {
                    self.edges.remove(idx);
                }
                true
            }
            Err(_) => false,
        }
    }

    /// Check whether an edge is present
    pub fn contains_edge(&self, u: usize, v: usize) -> bool {
        self.search(u, v).is_ok()
    }

    /// Multiplicity of an edge, zero if absent
    pub fn count(&self, u: usize, v: usize) -> usize {
        self.search(u, v).map(|idx| self.edges[idx].count).unwrap_or(0)
    }

    /// Drop every edge shared by more than one triangle
    ///
    /// What remains is the boundary of the triangle set. Returns the number
    /// of edges removed.
    pub fn trim_high_valence_edges(&mut self) -> usize {
        let before = self.edges.len();
        self.edges.retain(|e| e.count <= 1);
        before - self.edges.len()
    }

    /// Number of distinct edges
    #[inline]
    pub fn len(&self) -> usize {
        self.edges.len()
    }

    /// Check if the list is empty
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.edges.is_empty()
    }

    /// Iterate edges in canonical order
    pub fn iter(&self) -> impl Iterator<Item = &Edge> {
        self.edges.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reversed_edge_is_same_edge() {
        let mut list = EdgeList::new();
        list.add_edge(3, 7);
        list.add_edge(7, 3);
        assert_eq!(list.len(), 1);
        assert_eq!(list.count(3, 7), 2);

        assert_eq!(list.trim_high_valence_edges(), 1);
        assert!(list.is_empty());
    }

    #[test]
    fn test_remove_edge() {
        let mut list = EdgeList::new();
        list.add_edge(1, 2);
        list.add_edge(2, 1);
        assert!(list.remove_edge(1, 2));
        assert!(list.contains_edge(2, 1));
        assert!(list.remove_edge(2, 1));
        assert!(!list.contains_edge(1, 2));
        assert!(!list.remove_edge(1, 2));
    }

    #[test]
    fn test_sorted_order() {
        let mut list = EdgeList::new();
        list.add_edge(5, 1);
        list.add_edge(0, 9);
        list.add_edge(2, 1);
        let keys: Vec<(usize, usize)> = list.iter().map(|e| (e.a, e.b)).collect();
        assert_eq!(keys, vec![(0, 9), (1, 2), (1, 5)]);
    }

    #[test]
    fn test_boundary_of_two_triangles() {
        // Two triangles sharing the diagonal 0-2 of a quad 0-1-2-3
        let faces = [Face::new(0, 1, 2), Face::new(0, 2, 3)];
        let mut list = EdgeList::from_faces(&faces);
        assert_eq!(list.len(), 5);
        assert_eq!(list.count(0, 2), 2);

        assert_eq!(list.trim_high_valence_edges(), 1);
        assert_eq!(list.len(), 4);
        assert!(!list.contains_edge(0, 2));
        for (u, v) in [(0, 1), (1, 2), (2, 3), (3, 0)] {
            assert!(list.contains_edge(u, v));
        }
    }
}
