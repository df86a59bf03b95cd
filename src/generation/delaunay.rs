//! Sweep-line Delaunay triangulation
//!
//! An incremental Bowyer-Watson construction that inserts points in
//! ascending x order. Triangles live in a [`FaceExList`] whose active set is
//! sorted by circumcircle front: once the sweep passes a triangle's front,
//! no later point can fall inside its circumcircle, so it is retired to the
//! finished set and never looked at again. This keeps the active set close
//! to the size of the sweep front.
//!
//! # Algorithm
//!
//! 1. Tag every input point with its original index and optionally jitter it
//! 2. Surround the input with a four-corner scaffold box (10x margin)
//! 3. Sort everything by x and seed two scaffold triangles
//! 4. For each real point: retire passed triangles, cull the triangles whose
//!    circumcircle contains the point, and fan the cavity boundary to it
//! 5. Drop scaffold-incident triangles, orient CCW, map back to input indices

use glam::DVec2;
use rand::Rng;

use crate::error::{DiagramError, Result};
use crate::generation::connectivity::Connectivity;
use crate::geometry::{self, jitter_nodes, renumber_nodes, sort_nodes, BoundingBox, Node};
use crate::topology::{EdgeList, Face, FaceEx, FaceExList};

/// Margin factor applied to the input bounding box to place the scaffold corners
const SCAFFOLD_MARGIN: f64 = 10.0;

/// Working indices of the four synthetic corners after sorting
struct Scaffold {
    corners: [usize; 4],
}

impl Scaffold {
    /// Append four corners around `nodes`, tagged past the real points
    fn append(nodes: &mut Vec<Node>) -> Result<()> {
        let bbox = BoundingBox::from_points(nodes.iter().map(|n| n.pos)).ok_or_else(|| {
            DiagramError::InsufficientInput {
                expected: 3,
                actual: 0,
            }
        })?;
        let real = nodes.len();
        for (offset, corner) in bbox.expanded(SCAFFOLD_MARGIN).corners().into_iter().enumerate() {
            nodes.push(Node::new(real + offset, corner));
        }
        Ok(())
    }

    /// Locate the corners in the sorted working array
    ///
    /// The corners keep their counter-clockwise order (lower-left,
    /// lower-right, upper-right, upper-left).
    fn locate(nodes: &[Node], real: usize) -> Self {
        let mut corners = [0; 4];
        for (idx, node) in nodes.iter().enumerate() {
            if node.tag >= real {
                corners[node.tag - real] = idx;
            }
        }
        Self { corners }
    }

    fn seed_faces(&self) -> [Face; 2] {
        let [c0, c1, c2, c3] = self.corners;
        [Face::new(c0, c1, c2), Face::new(c0, c2, c3)]
    }

    fn touches(&self, face: &Face) -> bool {
        self.corners.iter().any(|&c| face.contains_vertex(c))
    }
}

/// Triangulate a point set
///
/// Returns counter-clockwise faces indexing into `points`. `jitter` is the
/// maximum per-coordinate perturbation applied before triangulating (zero
/// disables it); structured input such as grids needs a small positive
/// value because exactly collinear or concyclic points make the circumcircle
/// fit ill-conditioned. The random source is injected so results are
/// reproducible for a given seed.
///
/// # Errors
///
/// - `InsufficientInput` for fewer than 3 points
/// - `InvalidArgument` for non-finite coordinates
///
/// # Example
///
/// ```
/// use planar_voronoi::delaunay;
/// use glam::DVec2;
/// use rand::SeedableRng;
/// use rand_chacha::ChaCha8Rng;
///
/// let points = [
///     DVec2::new(0.0, 0.0),
///     DVec2::new(1.0, 0.0),
///     DVec2::new(0.0, 1.0),
///     DVec2::new(1.0, 1.0),
/// ];
/// let mut rng = ChaCha8Rng::seed_from_u64(42);
/// let faces = delaunay::solve(&points, 1e-6, &mut rng).unwrap();
/// assert_eq!(faces.len(), 2);
/// ```
pub fn solve<R: Rng + ?Sized>(points: &[DVec2], jitter: f64, rng: &mut R) -> Result<Vec<Face>> {
    if points.len() < 3 {
        return Err(DiagramError::InsufficientInput {
            expected: 3,
            actual: points.len(),
        });
    }
    geometry::ensure_finite(points, "point")?;

    let real = points.len();
    let mut nodes: Vec<Node> = points.iter().map(|&p| Node::new(0, p)).collect();
    renumber_nodes(&mut nodes);
    jitter_nodes(&mut nodes, jitter, rng);

    Scaffold::append(&mut nodes)?;
    sort_nodes(&mut nodes);
    let scaffold = Scaffold::locate(&nodes, real);

    let positions: Vec<DVec2> = nodes.iter().map(|n| n.pos).collect();
    let faces = sweep(&nodes, &positions, &scaffold, real);

    // Scaffold-incident faces go; survivors are oriented on the working
    // coordinates, then mapped from working order to caller indices.
    let faces: Vec<Face> = faces
        .into_iter()
        .filter(|f| !scaffold.touches(f))
        .map(|f| f.oriented_ccw(&positions).map(|idx| nodes[idx].tag))
        .collect();

    log::debug!(
        "delaunay: {} points triangulated into {} faces",
        real,
        faces.len()
    );

    Ok(faces)
}

/// Run the x-sweep over the sorted working nodes
fn sweep(nodes: &[Node], positions: &[DVec2], scaffold: &Scaffold, real: usize) -> Vec<Face> {
    let mut faces = FaceExList::new();
    for seed in scaffold.seed_faces() {
        faces.insert_dynamic(FaceEx::new(seed, positions));
    }

    let mut culled = Vec::new();
    let mut peak_active = faces.dynamic_len();

    for (idx, node) in nodes.iter().enumerate() {
        if node.tag >= real {
            continue;
        }

        faces.migrate_behind(node.pos.x);

        culled.clear();
        if faces.cull_containing(node.pos, &mut culled) == 0 {
            continue;
        }

        let mut boundary = EdgeList::from_faces(&culled);
        boundary.trim_high_valence_edges();

        for edge in boundary.iter() {
            faces.insert_dynamic(FaceEx::new(Face::new(edge.a, edge.b, idx), positions));
        }
        peak_active = peak_active.max(faces.dynamic_len());
    }

    faces.finish_all();
    log::trace!(
        "delaunay sweep: {} faces before scaffold removal, peak active set {}",
        faces.finished_len(),
        peak_active
    );
    faces.into_finished()
}

/// Triangulate and extract vertex adjacency in one call
///
/// Two points are simply connected to each other. With
/// `include_hull_edges` set, convex hull edges are added explicitly so hull
/// neighbors stay connected even where a thin boundary triangle was lost to
/// the scaffold.
///
/// # Errors
///
/// - `InsufficientInput` for fewer than 2 points
/// - `InvalidArgument` for non-finite coordinates
pub fn solve_connectivity<R: Rng + ?Sized>(
    points: &[DVec2],
    jitter: f64,
    include_hull_edges: bool,
    rng: &mut R,
) -> Result<Connectivity> {
    match points.len() {
        0 | 1 => Err(DiagramError::InsufficientInput {
            expected: 2,
            actual: points.len(),
        }),
        2 => {
            geometry::ensure_finite(points, "point")?;
            Ok(Connectivity::from_neighbors(vec![vec![1], vec![0]]))
        }
        _ => {
            let faces = solve(points, jitter, rng)?;
            Connectivity::build(points, &faces, include_hull_edges)
        }
    }
}
