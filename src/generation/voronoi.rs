//! Voronoi cell construction by half-plane clipping
//!
//! Every generator starts with the full outline and is clipped against the
//! bisectors of candidate neighbors. Two strategies pick the candidates:
//!
//! - [`solve_brute_force`] scans generators in x order and prunes with each
//!   cell's shrinking [`Cell::radius`] bound
//! - [`solve_connectivity`] only visits Delaunay neighbors, a superset of
//!   the true Voronoi neighbors
//!
//! Both return one slot per input point, `None` where the generator's cell
//! collapsed entirely.

use glam::DVec2;

use crate::cell::Cell;
use crate::error::{DiagramError, Result};
use crate::generation::connectivity::Connectivity;
use crate::geometry;

/// Build cells by scanning neighbors in x order
///
/// For each generator the scan walks left, then right, through the
/// x-sorted generators and stops in each direction as soon as a candidate's
/// x offset exceeds the current pruning radius. The radius only tightens as
/// the cell shrinks, so nothing beyond that point can still cut the cell.
///
/// # Example
///
/// ```
/// use planar_voronoi::voronoi;
/// use glam::DVec2;
///
/// let outline = [
///     DVec2::new(-10.0, -10.0),
///     DVec2::new(10.0, -10.0),
///     DVec2::new(10.0, 10.0),
///     DVec2::new(-10.0, 10.0),
/// ];
/// let points = [DVec2::new(0.0, 0.0), DVec2::new(2.0, 0.0)];
/// let cells = voronoi::solve_brute_force(&points, &outline);
/// assert_eq!(cells.len(), 2);
/// ```
pub fn solve_brute_force(points: &[DVec2], outline: &[DVec2]) -> Vec<Option<Cell>> {
    let mut order: Vec<usize> = (0..points.len()).collect();
    order.sort_by(|&a, &b| points[a].x.total_cmp(&points[b].x));

    let mut cells: Vec<Option<Cell>> = vec![None; points.len()];
    let mut slices = 0usize;

    for (rank, &id) in order.iter().enumerate() {
        let mut cell = Cell::from_outline(id, points[id], outline);

        slices += scan_direction(&mut cell, points, order[..rank].iter().rev());
        if !cell.is_empty() {
            slices += scan_direction(&mut cell, points, order[rank + 1..].iter());
        }

        if !cell.is_empty() {
            cells[id] = Some(cell);
        }
    }

    log::debug!(
        "voronoi (brute force): {} generators, {} effective slices, {} collapsed",
        points.len(),
        slices,
        cells.iter().filter(|c| c.is_none()).count()
    );

    cells
}

/// Slice `cell` against x-ordered candidates until one falls outside the pruning radius
///
/// Returns the number of slices that changed the cell.
fn scan_direction<'a>(
    cell: &mut Cell,
    points: &[DVec2],
    candidates: impl Iterator<Item = &'a usize>,
) -> usize {
    let mut radius = cell.radius();
    let mut slices = 0;
    for &other in candidates {
        if (points[other].x - cell.generator.x).abs() > radius {
            break;
        }
        if cell.slice(points[other]) {
            slices += 1;
            if cell.is_empty() {
                break;
            }
            radius = cell.radius();
        }
    }
    slices
}

/// Build cells by clipping only against Delaunay neighbors
///
/// `connectivity` must cover exactly the input points, as produced by
/// [`delaunay::solve_connectivity`](crate::generation::delaunay::solve_connectivity).
/// Self references in the neighbor lists are skipped.
///
/// # Errors
///
/// - `InvalidArgument` when the connectivity size does not match `points`
/// - `InvalidArgument` for non-finite coordinates
pub fn solve_connectivity(
    points: &[DVec2],
    connectivity: &Connectivity,
    outline: &[DVec2],
) -> Result<Vec<Option<Cell>>> {
    if connectivity.len() != points.len() {
        return Err(DiagramError::InvalidArgument(format!(
            "connectivity covers {} vertices but {} points were given",
            connectivity.len(),
            points.len()
        )));
    }
    geometry::ensure_finite(points, "point")?;
    geometry::ensure_finite(outline, "outline vertex")?;

    let mut slices = 0usize;
    let cells: Vec<Option<Cell>> = points
        .iter()
        .enumerate()
        .map(|(id, &generator)| {
            let mut cell = Cell::from_outline(id, generator, outline);
            for &other in connectivity.get(id) {
                if cell.is_empty() {
                    break;
                }
                if other == id || other >= points.len() {
                    continue;
                }
                if cell.slice(points[other]) {
                    slices += 1;
                }
            }
            (!cell.is_empty()).then_some(cell)
        })
        .collect();

    log::debug!(
        "voronoi (connectivity): {} generators, {} effective slices, {} collapsed",
        points.len(),
        slices,
        cells.iter().filter(|c| c.is_none()).count()
    );

    Ok(cells)
}
