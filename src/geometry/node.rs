//! Tagged points and bounding boxes

use glam::DVec2;
use rand::Rng;

/// A point carrying a stable tag back to the caller's original index
///
/// Solvers reorder and augment their working point arrays; the tag is the
/// only way to map a working index back to the caller's numbering.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Node {
    /// Original index of this point in the caller's input
    pub tag: usize,
    /// Position
    pub pos: DVec2,
}

impl Node {
    /// Create a node with an explicit tag
    #[inline]
    pub fn new(tag: usize, pos: DVec2) -> Self {
        Self { tag, pos }
    }

    /// Squared distance to another node
    #[inline]
    pub fn distance_squared(&self, other: &Node) -> f64 {
        self.pos.distance_squared(other.pos)
    }
}

/// Set every node's tag to its current index
pub fn renumber_nodes(nodes: &mut [Node]) {
    for (idx, node) in nodes.iter_mut().enumerate() {
        node.tag = idx;
    }
}

/// Perturb every coordinate by a uniform offset in `[-amount, amount]`
///
/// The circumcircle fit is ill-conditioned for collinear or concyclic
/// triples, so structured input (grids, regular polygons) must be jittered
/// before triangulation. `amount` should exceed the floating-point epsilon of
/// the coordinates while staying small against nearest-neighbor spacing.
/// A zero amount leaves the nodes untouched.
pub fn jitter_nodes<R: Rng + ?Sized>(nodes: &mut [Node], amount: f64, rng: &mut R) {
    let amount = amount.abs();
    if amount == 0.0 || !amount.is_finite() {
        return;
    }
    for node in nodes.iter_mut() {
        node.pos.x += rng.gen_range(-amount..=amount);
        node.pos.y += rng.gen_range(-amount..=amount);
    }
}

/// Sort nodes ascending by x, breaking ties on y
pub fn sort_nodes(nodes: &mut [Node]) {
    nodes.sort_by(|a, b| {
        a.pos
            .x
            .total_cmp(&b.pos.x)
            .then_with(|| a.pos.y.total_cmp(&b.pos.y))
    });
}

/// Axis-aligned bounding box
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoundingBox {
    /// Lower-left corner
    pub min: DVec2,
    /// Upper-right corner
    pub max: DVec2,
}

impl BoundingBox {
    /// Bounding box of a point set, `None` when empty
    pub fn from_points(points: impl IntoIterator<Item = DVec2>) -> Option<Self> {
        let mut iter = points.into_iter();
        let first = iter.next()?;
        let (min, max) = iter.fold((first, first), |(min, max), p| (min.min(p), max.max(p)));
        Some(Self { min, max })
    }

    /// Width and height
    #[inline]
    pub fn size(&self) -> DVec2 {
        self.max - self.min
    }

    /// Length of the diagonal
    #[inline]
    pub fn diagonal(&self) -> f64 {
        self.size().length()
    }

    /// Grow the box on every side by `factor` times its largest extent
    ///
    /// A box with zero extent grows by `factor` units instead, so a single
    /// point or a set of coincident points still yields a proper box.
    pub fn expanded(&self, factor: f64) -> Self {
        let extent = self.size().max_element();
        let margin = if extent > 0.0 { extent * factor } else { factor };
        let margin = DVec2::splat(margin);
        Self {
            min: self.min - margin,
            max: self.max + margin,
        }
    }

    /// Corners in counter-clockwise order starting at the lower-left
    pub fn corners(&self) -> [DVec2; 4] {
        [
            self.min,
            DVec2::new(self.max.x, self.min.y),
            self.max,
            DVec2::new(self.min.x, self.max.y),
        ]
    }

    /// Check whether a point lies inside or on the boundary
    #[inline]
    pub fn contains(&self, p: DVec2) -> bool {
        p.x >= self.min.x && p.x <= self.max.x && p.y >= self.min.y && p.y <= self.max.y
    }
}
