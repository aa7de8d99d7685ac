// SPDX-License-Identifier: Apache-2.0

//! Face adjacency topology: graph construction, spanning forests and
//! validation

pub mod bfs;
pub mod face;
pub mod graph;
pub mod tarjan;

pub use bfs::{bfs_forest, tree_view};
pub use face::{entities_from_faces, entities_from_surfaces, union_ids, Face, FaceEntity};
pub use graph::{FaceGraph, GraphEdge, GraphVertex};
pub use tarjan::{is_acyclic, strongly_connected_components};
