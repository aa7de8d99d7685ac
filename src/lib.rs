// SPDX-License-Identifier: Apache-2.0

//! # foldnet
//!
//! Flattens connected 3-D planar faces into 2-D "nets" for papercraft
//! and sheet fabrication. Faces sharing an edge become vertices of an
//! adjacency graph; a BFS spanning forest picks the fold hinges; the
//! engine then folds every branch flat, splitting off an island whenever
//! a fold would overlap already-placed material. Every motion is
//! recorded, so tabs, labels or any other geometry can be replayed onto
//! the finished layout. Separate packing, tab and label passes turn the
//! islands into a fabrication-ready sheet.
//!
//! ```
//! use foldnet::{unfold_surfaces, PlanarSurface};
//! use nalgebra::Point3;
//!
//! let base = PlanarSurface::new(vec![
//!     Point3::new(0.0, 0.0, 0.0),
//!     Point3::new(1.0, 0.0, 0.0),
//!     Point3::new(1.0, 1.0, 0.0),
//!     Point3::new(0.0, 1.0, 0.0),
//! ])
//! .unwrap();
//! let wall = PlanarSurface::new(vec![
//!     Point3::new(1.0, 0.0, 0.0),
//!     Point3::new(1.0, 1.0, 0.0),
//!     Point3::new(1.0, 1.0, 1.0),
//!     Point3::new(1.0, 0.0, 1.0),
//! ])
//! .unwrap();
//!
//! let unfolding = unfold_surfaces(vec![base, wall]).unwrap();
//! assert_eq!(unfolding.island_count(), 1);
//! ```

pub mod error;
pub mod geometry;
pub mod labels;
pub mod packing;
pub mod tabs;
pub mod topology;
pub mod unfold;

pub use error::{Error, Result};
pub use geometry::{
    surfaces_from_triangles, tessellate, tessellate_with, BoundingBox, EdgeEntity, FanTessellator,
    GlyphSource, PlanarSurface, Polyline, SegmentFont, Tessellator, Transformable,
};
pub use labels::{generate_labels, generate_labels_with, FaceLabel};
pub use packing::{pack, pack_with, BinPacker, Extent2, ShelfPacker};
pub use tabs::{generate_tabs, generate_tabs_with, Tab};
pub use topology::{Face, FaceEntity, FaceGraph};
pub use unfold::{
    map_geometry_direct, map_geometry_fresh, merge_unfoldings, planar_unfold, TransformRecord,
    UnfoldingResult,
};

use nalgebra::Isometry3;
use topology::bfs::{bfs_forest, tree_view};
use topology::face::{entities_from_faces, entities_from_surfaces};
use topology::tarjan::is_acyclic;

fn unfold_entities(
    entities: Vec<FaceEntity>,
    post_transform: Option<Isometry3<f64>>,
) -> Result<UnfoldingResult> {
    let graph = FaceGraph::build(entities);
    let forest = bfs_forest(&graph);
    debug_assert!(is_acyclic(&tree_view(&forest)), "spanning forest has a cycle");
    unfold::engine::planar_unfold(&forest, post_transform)
}

/// Unfold faces that carry explicit boundary edges
pub fn unfold_faces(faces: Vec<Face>) -> Result<UnfoldingResult> {
    unfold_entities(entities_from_faces(faces), None)
}

/// Unfold bare surfaces; boundary edges come from their perimeters
pub fn unfold_surfaces(surfaces: Vec<PlanarSurface>) -> Result<UnfoldingResult> {
    unfold_entities(entities_from_surfaces(surfaces), None)
}

/// Unfold surfaces that live in a placement frame.
///
/// Inputs are pulled back into the local frame before unfolding and the
/// frame is re-applied (and recorded) on the finished layout, matching
/// results computed on the local geometry.
pub fn unfold_surfaces_in_frame(
    surfaces: Vec<PlanarSurface>,
    frame: &Isometry3<f64>,
) -> Result<UnfoldingResult> {
    let inverse = frame.inverse();
    let local = surfaces
        .into_iter()
        .map(|s| s.transformed(&inverse))
        .collect();
    unfold_entities(entities_from_surfaces(local), Some(*frame))
}

#[cfg(test)]
mod tests {
    use super::*;
    use nalgebra::{Point3, Vector3};

    #[test]
    fn test_frame_round_trip() {
        let base = PlanarSurface::new(vec![
            Point3::new(0.0, 0.0, 0.0),
            Point3::new(1.0, 0.0, 0.0),
            Point3::new(1.0, 1.0, 0.0),
            Point3::new(0.0, 1.0, 0.0),
        ])
        .unwrap();
        let frame = Isometry3::new(Vector3::new(5.0, 0.0, 0.0), Vector3::zeros());
        let placed = base.transformed(&frame);

        let unfolding = unfold_surfaces_in_frame(vec![placed], &frame).unwrap();
        assert_eq!(unfolding.island_count(), 1);
        // output stays in the placement frame
        let center = unfolding.flattened[0][0].polygon_center();
        assert!((center - Point3::new(5.5, 0.5, 0.0)).norm() < 1e-9);
        // seed plus recorded frame application
        assert_eq!(unfolding.records.len(), 2);
    }
}
