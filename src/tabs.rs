// SPDX-License-Identifier: Apache-2.0

//! Glue-tab generation
//!
//! Fold edges keep neighboring faces attached, so only the remaining
//! shared edges (cut during unfolding) need tabs. Each such edge gets a
//! small trapezoid hanging off one of the two faces that shared it; the
//! tab is generated at the face's starting placement and then replayed
//! through that face's motion chain onto the flat layout.

use crate::error::{Error, Result};
use crate::geometry::{EdgeEntity, PlanarSurface, SpatialEdgeKey};
use crate::topology::face::FaceEntity;
use crate::unfold::mapper::map_geometry_direct;
use crate::unfold::record::UnfoldingResult;
use ahash::{AHashMap, AHashSet};

pub const DEFAULT_TAB_OFFSET: f64 = 0.3;

/// One glue tab, attached to the face named by `face_id`
#[derive(Debug, Clone)]
pub struct Tab {
    pub face_id: usize,
    /// Tab at the face's starting placement
    pub surface: PlanarSurface,
    /// Tab replayed onto the unfolded layout
    pub unfolded: PlanarSurface,
}

/// Trapezoid between the edge and a trimmed copy offset away from the
/// face center
fn tab_surface(face: &FaceEntity, edge: &EdgeEntity, offset: f64) -> Option<PlanarSurface> {
    let center = face.polygon_center();
    let direction = (edge.midpoint() - center).normalize();
    let shifted = edge.translated(&(direction * offset));
    PlanarSurface::new(vec![
        edge.start,
        edge.end,
        shifted.point_at(0.8),
        shifted.point_at(0.2),
    ])
}

/// Generate tabs with the default offset
pub fn generate_tabs(unfolding: &UnfoldingResult) -> Result<AHashMap<usize, Vec<Tab>>> {
    generate_tabs_with(unfolding, DEFAULT_TAB_OFFSET)
}

/// Generate one tab per non-fold shared edge, grouped by the id of the
/// face carrying the tab.
///
/// Non-fold edges are the spatially-deduplicated adjacency edges minus
/// the spanning-tree edges. Each edge's tab hangs off the first face (in
/// vertex order) that reports the edge. Merged results carry no graph
/// and cannot generate tabs.
pub fn generate_tabs_with(
    unfolding: &UnfoldingResult,
    offset: f64,
) -> Result<AHashMap<usize, Vec<Tab>>> {
    let graph = unfolding.original_graph.as_ref().ok_or(Error::NoTopology)?;

    let tree_keys: AHashSet<SpatialEdgeKey> = graph
        .all_tree_edges()
        .iter()
        .map(|e| e.entity.spatial_key())
        .collect();

    let mut seen: AHashSet<SpatialEdgeKey> = AHashSet::new();
    let mut tabs: AHashMap<usize, Vec<Tab>> = AHashMap::new();

    for vertex in &graph.vertices {
        for graph_edge in &vertex.edges {
            let key = graph_edge.entity.spatial_key();
            if tree_keys.contains(&key) || !seen.insert(key) {
                continue;
            }
            let face = &vertex.face;
            let Some(surface) = tab_surface(face, &graph_edge.entity, offset) else {
                continue;
            };
            let unfolded = map_geometry_direct(unfolding, &[surface.clone()], face.id)?
                .pop()
                .ok_or(Error::UnknownFaceId(face.id))?;
            tabs.entry(face.id).or_default().push(Tab {
                face_id: face.id,
                surface,
                unfolded,
            });
        }
    }
    Ok(tabs)
}
