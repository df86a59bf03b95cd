//! Two-phase face container used by the sweep

use glam::DVec2;

use crate::topology::{Face, FaceEx};

/// Faces split into an active set and a finished set
///
/// The active (dynamic) set is kept sorted ascending by circumcircle front,
/// so every face the sweep has passed sits in a prefix. The finished
/// (static) set is an unordered accumulator. A face lives in exactly one
/// of the two.
#[derive(Debug, Clone, Default)]
pub struct FaceExList {
    dynamic: Vec<FaceEx>,
    finished: Vec<FaceEx>,
}

impl FaceExList {
    /// Create an empty list
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a face into the active set at its sorted position
    pub fn insert_dynamic(&mut self, face: FaceEx) {
        let idx = self
            .dynamic
            .partition_point(|f| f.front().total_cmp(&face.front()).is_le());
        self.dynamic.insert(idx, face);
    }

    /// Move every active face whose front lies left of `x` to the finished set
    ///
    /// Such a circumcircle can no longer contain any point still to come.
    /// Returns the number of faces moved.
    pub fn migrate_behind(&mut self, x: f64) -> usize {
        let split = self.dynamic.partition_point(|f| f.front() < x);
        self.finished.extend(self.dynamic.drain(..split));
        split
    }

    /// Remove every active face whose circumcircle strictly contains `p`
    ///
    /// The removed faces are appended to `culled`; the sort order of the
    /// survivors is preserved. Returns the number of faces removed.
    pub fn cull_containing(&mut self, p: DVec2, culled: &mut Vec<Face>) -> usize {
        let before = culled.len();
        self.dynamic.retain(|f| {
            if f.circle_contains(p) {
                culled.push(f.face());
                false
            } else {
                true
            }
        });
        culled.len() - before
    }

    /// Move all remaining active faces to the finished set
    pub fn finish_all(&mut self) {
        self.finished.append(&mut self.dynamic);
    }

    /// Number of active faces
    #[inline]
    pub fn dynamic_len(&self) -> usize {
        self.dynamic.len()
    }

    /// Number of finished faces
    #[inline]
    pub fn finished_len(&self) -> usize {
        self.finished.len()
    }

    /// Active faces in front order
    pub fn dynamic(&self) -> &[FaceEx] {
        &self.dynamic
    }

    /// Consume the list, returning the finished faces
    ///
    /// Faces still active are not included; call [`finish_all`](Self::finish_all) first.
    pub fn into_finished(self) -> Vec<Face> {
        self.finished.into_iter().map(|f| f.face()).collect()
    }
}
