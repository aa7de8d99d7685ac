// SPDX-License-Identifier: Apache-2.0

//! Transform bookkeeping for unfoldings
//!
//! Each fold step appends one immutable record: the rigid motion applied
//! and the ids of every face it moved. Records hold motion deltas, so
//! replaying any id-filtered subsequence left to right reproduces the
//! trajectory of that face. Seed records carry identity motions so every
//! face id appears in the list even if it never moves.

use crate::error::{Error, Result};
use crate::geometry::PlanarSurface;
use crate::topology::face::FaceEntity;
use crate::topology::graph::FaceGraph;
use ahash::AHashMap;
use nalgebra::{Isometry3, Point3};
use serde::{Deserialize, Serialize};

/// One rigid motion and the face ids it applied to
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TransformRecord {
    pub motion: Isometry3<f64>,
    pub ids: Vec<usize>,
}

impl TransformRecord {
    pub fn new(motion: Isometry3<f64>, ids: Vec<usize>) -> Self {
        Self { motion, ids }
    }

    pub fn identity(ids: Vec<usize>) -> Self {
        Self::new(Isometry3::identity(), ids)
    }

    pub fn applies_to(&self, id: usize) -> bool {
        self.ids.contains(&id)
    }

    fn offset_ids(&self, offset: usize) -> Self {
        Self {
            motion: self.motion,
            ids: self.ids.iter().map(|id| id + offset).collect(),
        }
    }
}

/// The complete outcome of unfolding one set of faces
#[derive(Debug, Clone)]
pub struct UnfoldingResult {
    /// Input faces at their original placement, one per id
    pub starting_faces: Vec<FaceEntity>,
    /// Final coplanar groups (islands), one surface list each
    pub flattened: Vec<Vec<PlanarSurface>>,
    /// Ordered motion records for replay
    pub records: Vec<TransformRecord>,
    /// Polygon center of each starting face, keyed by id
    pub starting_centers: AHashMap<usize, Point3<f64>>,
    /// Post-fold composite entities, one per island
    pub unfolded_faces: Vec<FaceEntity>,
    /// Adjacency graph the unfolding was computed from. `None` after
    /// merging, which is why merged results cannot generate tabs.
    pub original_graph: Option<FaceGraph>,
}

impl UnfoldingResult {
    pub fn new(
        starting_faces: Vec<FaceEntity>,
        flattened: Vec<Vec<PlanarSurface>>,
        records: Vec<TransformRecord>,
        unfolded_faces: Vec<FaceEntity>,
        original_graph: Option<FaceGraph>,
    ) -> Self {
        let starting_centers = starting_faces
            .iter()
            .map(|f| (f.id, f.polygon_center()))
            .collect();
        Self {
            starting_faces,
            flattened,
            records,
            starting_centers,
            unfolded_faces,
            original_graph,
        }
    }

    pub fn face_count(&self) -> usize {
        self.starting_faces.len()
    }

    pub fn island_count(&self) -> usize {
        self.flattened.len()
    }

    /// Records that moved `id`, in application order.
    /// Errors if the id never appears, which means it is not part of
    /// this unfolding.
    pub fn records_for(&self, id: usize) -> Result<Vec<&TransformRecord>> {
        let chain: Vec<&TransformRecord> =
            self.records.iter().filter(|r| r.applies_to(id)).collect();
        if chain.is_empty() {
            return Err(Error::UnknownFaceId(id));
        }
        Ok(chain)
    }
}

fn offset_entity(mut entity: FaceEntity, offset: usize) -> FaceEntity {
    entity.id += offset;
    for id in &mut entity.ids {
        *id += offset;
    }
    entity
}

/// Combine independently computed unfoldings into one result.
///
/// Face ids of the i-th input are shifted by the total face count of the
/// inputs before it, so ids stay unique. The merged result keeps every
/// island and every record but no adjacency graph.
pub fn merge_unfoldings(results: Vec<UnfoldingResult>) -> UnfoldingResult {
    let mut starting_faces = Vec::new();
    let mut flattened = Vec::new();
    let mut records = Vec::new();
    let mut unfolded_faces = Vec::new();

    let mut offset = 0;
    for result in results {
        let count = result.face_count();
        starting_faces.extend(
            result
                .starting_faces
                .into_iter()
                .map(|f| offset_entity(f, offset)),
        );
        flattened.extend(result.flattened);
        records.extend(result.records.iter().map(|r| r.offset_ids(offset)));
        unfolded_faces.extend(
            result
                .unfolded_faces
                .into_iter()
                .map(|f| offset_entity(f, offset)),
        );
        offset += count;
    }

    UnfoldingResult::new(starting_faces, flattened, records, unfolded_faces, None)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::topology::face::Face;
    use nalgebra::Vector3;

    fn entity(id: usize, x0: f64) -> FaceEntity {
        FaceEntity::new(
            id,
            Face::from_surface(
                PlanarSurface::new(vec![
                    Point3::new(x0, 0.0, 0.0),
                    Point3::new(x0 + 1.0, 0.0, 0.0),
                    Point3::new(x0 + 1.0, 1.0, 0.0),
                    Point3::new(x0, 1.0, 0.0),
                ])
                .unwrap(),
            ),
        )
    }

    fn small_result(n: usize) -> UnfoldingResult {
        let faces: Vec<FaceEntity> = (0..n).map(|i| entity(i, i as f64 * 2.0)).collect();
        let flattened = faces.iter().map(|f| f.surfaces.clone()).collect();
        let records = faces
            .iter()
            .map(|f| TransformRecord::identity(vec![f.id]))
            .collect();
        let unfolded = faces.clone();
        UnfoldingResult::new(faces, flattened, records, unfolded, None)
    }

    #[test]
    fn test_record_filtering() {
        let result = small_result(3);
        assert_eq!(result.records_for(1).unwrap().len(), 1);
        assert!(matches!(
            result.records_for(9),
            Err(Error::UnknownFaceId(9))
        ));
    }

    #[test]
    fn test_starting_centers() {
        let result = small_result(2);
        let c = result.starting_centers[&1];
        assert!((c - Point3::new(2.5, 0.5, 0.0)).norm() < 1e-12);
    }

    #[test]
    fn test_merge_offsets_ids() {
        let merged = merge_unfoldings(vec![small_result(2), small_result(3)]);
        assert_eq!(merged.face_count(), 5);
        assert_eq!(merged.island_count(), 5);
        assert_eq!(merged.records.len(), 5);

        let ids: Vec<usize> = merged.starting_faces.iter().map(|f| f.id).collect();
        assert_eq!(ids, vec![0, 1, 2, 3, 4]);
        // second input's record for its face 0 now names id 2
        assert!(merged.records[2].applies_to(2));
        assert!(merged.original_graph.is_none());
    }

    #[test]
    fn test_records_replay_left_to_right() {
        let step1 = TransformRecord::new(
            Isometry3::translation(1.0, 0.0, 0.0),
            vec![0],
        );
        let step2 = TransformRecord::new(
            Isometry3::new(Vector3::zeros(), Vector3::new(0.0, 0.0, 1.0)),
            vec![0],
        );
        let p = Point3::new(1.0, 0.0, 0.0);
        let replayed = step2.motion * (step1.motion * p);
        // (2, 0, 0) rotated one radian about z
        let expected = Point3::new(2.0 * 1.0_f64.cos(), 2.0 * 1.0_f64.sin(), 0.0);
        assert!((replayed - expected).norm() < 1e-12);
    }
}
