// SPDX-License-Identifier: Apache-2.0

//! The core fold loop
//!
//! Working over a clone of the spanning forest, the engine repeatedly
//! takes the deepest remaining vertex (highest finish time), folds its
//! accumulated fold state into its parent's plane around their shared
//! hinge, and either merges it into the parent or splits it off as an
//! independent island when the fold would overlap. Every motion is
//! recorded for later replay.
//!
//! The overlap check only tests the rotated branch against the parent's
//! current fold state. Siblings already folded elsewhere and finished
//! islands are not consulted, so separate islands may still land on each
//! other in 3-D space before packing. Whether that locality is
//! sufficient is an open behavioral question; the packing step is what
//! currently guarantees disjoint placement.

use crate::error::{Error, Result};
use crate::geometry::overlap::surfaces_overlap;
use crate::topology::face::{union_ids, FaceEntity};
use crate::topology::graph::FaceGraph;
use crate::unfold::align::{coplanar_rotation, normal_consistency};
use crate::unfold::record::{TransformRecord, UnfoldingResult};
use log::debug;
use nalgebra::Isometry3;

/// Unfold a spanning forest into coplanar islands.
///
/// `post_transform`, when given, is applied to every final group and
/// recorded, so replayed geometry reaches the same frame as the output
/// surfaces.
pub fn planar_unfold(
    forest: &FaceGraph,
    post_transform: Option<Isometry3<f64>>,
) -> Result<UnfoldingResult> {
    let original = forest.clone();
    let mut work = forest.clone();

    let starting_faces: Vec<FaceEntity> =
        work.vertices.iter().map(|v| v.face.clone()).collect();

    // seed records so every id has a chain even if it never moves
    let mut records: Vec<TransformRecord> = starting_faces
        .iter()
        .map(|f| TransformRecord::identity(f.ids.clone()))
        .collect();

    // deepest vertex last; fold order walks this list from the back
    let mut active: Vec<usize> = (0..work.vertices.len()).collect();
    active.sort_by_key(|&i| work.vertices[i].finish_time);

    let mut islands: Vec<FaceEntity> = Vec::new();

    while active.len() > 1 {
        if active
            .iter()
            .all(|&i| work.vertices[i].parent.is_none())
        {
            break;
        }

        let Some(&child_idx) = active.last() else {
            break;
        };
        let Some(parent_idx) = work.vertices[child_idx].parent else {
            break;
        };

        let child_id = work.vertices[child_idx].face.id;
        let parent_id = work.vertices[parent_idx].face.id;
        let hinge = work.vertices[parent_idx]
            .tree_edges
            .iter()
            .find(|e| e.head == child_idx)
            .map(|e| e.entity.clone())
            .ok_or(Error::MissingHinge {
                child: child_id,
                parent: parent_id,
            })?;

        let consistency = normal_consistency(
            &work.vertices[child_idx].face,
            &work.vertices[parent_idx].face,
            &hinge,
        )?;
        let (rotated, motion) = coplanar_rotation(
            consistency,
            &work.vertices[child_idx].fold_state,
            &work.vertices[parent_idx].face,
            &hinge,
        );

        let outcome = surfaces_overlap(&rotated, &work.vertices[parent_idx].fold_state.surfaces);
        debug!(
            "fold child {} (finish {}) into parent {}: {:?}",
            child_id, work.vertices[child_idx].finish_time, parent_id, outcome
        );

        if outcome.blocks_merge() {
            // split off the branch at its current placement
            let mut island = work.vertices[child_idx].fold_state.clone();
            union_ids(&mut island.ids, &[child_id]);
            records.push(TransformRecord::identity(island.ids.clone()));
            islands.push(island);
        } else {
            let child_ids = work.vertices[child_idx].fold_state.ids.clone();
            let parent_prev_ids = work.vertices[parent_idx].fold_state.ids.clone();

            // parent surfaces stay first; the representative surface
            // drives later rotation and flattening math
            let mut surfaces = work.vertices[parent_idx].fold_state.surfaces.clone();
            surfaces.extend(rotated);

            let mut ids = child_ids.clone();
            union_ids(&mut ids, &[child_id]);
            union_ids(&mut ids, &parent_prev_ids);

            let mut moved_ids = vec![child_id];
            union_ids(&mut moved_ids, &child_ids);
            records.push(TransformRecord::new(motion, moved_ids));

            work.vertices[parent_idx].fold_state =
                FaceEntity::composite(parent_id, ids, surfaces);
        }

        active.pop();
        work.detach_vertex(child_idx);
    }

    let mut final_states: Vec<FaceEntity> = active
        .iter()
        .map(|&i| work.vertices[i].fold_state.clone())
        .collect();
    final_states.append(&mut islands);

    if let Some(post) = post_transform {
        for state in &mut final_states {
            for surface in &mut state.surfaces {
                *surface = surface.transformed(&post);
            }
            records.push(TransformRecord::new(post, state.ids.clone()));
        }
    }

    let flattened = final_states.iter().map(|s| s.surfaces.clone()).collect();
    debug!(
        "unfolding finished: {} faces, {} islands, {} records",
        starting_faces.len(),
        final_states.len(),
        records.len()
    );
    Ok(UnfoldingResult::new(
        starting_faces,
        flattened,
        records,
        final_states,
        Some(original),
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::PlanarSurface;
    use crate::topology::bfs::bfs_forest;
    use crate::topology::face::entities_from_surfaces;
    use nalgebra::Point3;

    fn l_bracket() -> Vec<PlanarSurface> {
        // horizontal square plus a vertical square standing on its far
        // edge, both wound for upward/outward normals
        let base = PlanarSurface::new(vec![
            Point3::new(0.0, 0.0, 0.0),
            Point3::new(1.0, 0.0, 0.0),
            Point3::new(1.0, 1.0, 0.0),
            Point3::new(0.0, 1.0, 0.0),
        ])
        .unwrap();
        let wall = PlanarSurface::new(vec![
            Point3::new(1.0, 0.0, 0.0),
            Point3::new(1.0, 1.0, 0.0),
            Point3::new(1.0, 1.0, 1.0),
            Point3::new(1.0, 0.0, 1.0),
        ])
        .unwrap();
        vec![base, wall]
    }

    #[test]
    fn test_two_face_fold() {
        let forest = bfs_forest(&FaceGraph::build(entities_from_surfaces(l_bracket())));
        let result = planar_unfold(&forest, None).unwrap();

        assert_eq!(result.face_count(), 2);
        assert_eq!(result.island_count(), 1);
        // 2 seeds + 1 fold
        assert_eq!(result.records.len(), 3);

        let group = &result.flattened[0];
        assert_eq!(group.len(), 2);
        for surface in group {
            for p in surface.boundary() {
                assert!(p.z.abs() < 1e-9);
            }
        }
    }

    #[test]
    fn test_single_face_is_one_island() {
        let surfaces = vec![l_bracket().remove(0)];
        let forest = bfs_forest(&FaceGraph::build(entities_from_surfaces(surfaces)));
        let result = planar_unfold(&forest, None).unwrap();
        assert_eq!(result.island_count(), 1);
        assert_eq!(result.records.len(), 1);
    }

    #[test]
    fn test_empty_input() {
        let forest = bfs_forest(&FaceGraph::build(Vec::new()));
        let result = planar_unfold(&forest, None).unwrap();
        assert_eq!(result.face_count(), 0);
        assert_eq!(result.island_count(), 0);
    }

    #[test]
    fn test_post_transform_is_recorded() {
        let forest = bfs_forest(&FaceGraph::build(entities_from_surfaces(l_bracket())));
        let post = Isometry3::translation(10.0, 0.0, 0.0);
        let result = planar_unfold(&forest, Some(post)).unwrap();

        // one extra record per island
        assert_eq!(result.records.len(), 4);
        for surface in &result.flattened[0] {
            for p in surface.boundary() {
                assert!(p.x >= 10.0 - 1e-9);
            }
        }
    }
}
