// SPDX-License-Identifier: Apache-2.0

//! Face adjacency graph
//!
//! Vertices live in an arena (`Vec<GraphVertex>`) and are addressed by
//! index, so `Clone` on the graph is a deep copy in which every index
//! still names the same vertex. All mutation during unfolding happens on
//! such clones; the caller's graph is never touched.

use crate::geometry::{EdgeEntity, SpatialEdgeKey};
use crate::topology::face::FaceEntity;
use ahash::AHashMap;
use log::debug;

/// Directed adjacency edge; `entity` is the tail face's own boundary
/// curve along the shared edge, so its direction follows the tail's
/// winding
#[derive(Debug, Clone)]
pub struct GraphEdge {
    pub tail: usize,
    pub head: usize,
    pub entity: EdgeEntity,
}

#[derive(Debug, Clone)]
pub struct GraphVertex {
    /// The face as it was handed in
    pub face: FaceEntity,
    /// Current geometric state during folding; replaced whole at each
    /// step, never mutated in place
    pub fold_state: FaceEntity,
    pub edges: Vec<GraphEdge>,
    pub tree_edges: Vec<GraphEdge>,
    pub parent: Option<usize>,
    pub explored: bool,
    pub finish_time: u32,
}

impl GraphVertex {
    pub fn new(face: FaceEntity) -> Self {
        Self {
            fold_state: face.clone(),
            face,
            edges: Vec::new(),
            tree_edges: Vec::new(),
            parent: None,
            explored: false,
            finish_time: 0,
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct FaceGraph {
    pub vertices: Vec<GraphVertex>,
}

impl FaceGraph {
    /// Build the adjacency graph over faces that share an edge spatially.
    ///
    /// Self loops are discarded and a second shared edge to the same
    /// neighbor is collapsed onto the first. On closed 2-manifold input
    /// every physical edge yields one directed edge in each direction.
    pub fn build(entities: Vec<FaceEntity>) -> Self {
        let mut vertices: Vec<GraphVertex> = entities.into_iter().map(GraphVertex::new).collect();

        let mut edge_map: AHashMap<SpatialEdgeKey, Vec<usize>> = AHashMap::new();
        for (idx, vertex) in vertices.iter().enumerate() {
            for edge in &vertex.face.edges {
                edge_map.entry(edge.spatial_key()).or_default().push(idx);
            }
        }

        // walk each face's own edge list so neighbor order is
        // deterministic and the edge entity carries the tail's winding
        for tail in 0..vertices.len() {
            let own_edges: Vec<EdgeEntity> = vertices[tail].face.edges.clone();
            for entity in own_edges {
                let Some(members) = edge_map.get(&entity.spatial_key()) else {
                    continue;
                };
                for &head in members {
                    if head == tail {
                        continue;
                    }
                    if vertices[tail].edges.iter().any(|e| e.head == head) {
                        continue;
                    }
                    vertices[tail].edges.push(GraphEdge {
                        tail,
                        head,
                        entity: entity.clone(),
                    });
                }
            }
        }

        let graph = Self { vertices };
        debug!(
            "built face graph: {} vertices, {} directed edges",
            graph.vertices.len(),
            graph.all_edges().len()
        );
        graph
    }

    pub fn all_edges(&self) -> Vec<GraphEdge> {
        self.vertices
            .iter()
            .flat_map(|v| v.edges.iter().cloned())
            .collect()
    }

    pub fn all_tree_edges(&self) -> Vec<GraphEdge> {
        self.vertices
            .iter()
            .flat_map(|v| v.tree_edges.iter().cloned())
            .collect()
    }

    /// Remove a vertex from the live topology without disturbing arena
    /// indices: every edge pointing at it is dropped and its own edge
    /// lists are cleared
    pub fn detach_vertex(&mut self, idx: usize) {
        for vertex in &mut self.vertices {
            vertex.edges.retain(|e| e.head != idx);
            vertex.tree_edges.retain(|e| e.head != idx);
        }
        self.vertices[idx].edges.clear();
        self.vertices[idx].tree_edges.clear();
    }
}
