// SPDX-License-Identifier: Apache-2.0

//! Spanning-forest extraction
//!
//! Breadth-first search over the adjacency graph produces the fold tree:
//! parent pointers, tree edges stored on the discovering vertex, and a
//! discovery counter that makes fold order total. The input graph is
//! never mutated; the forest is a fresh clone.

use crate::topology::graph::FaceGraph;
use log::debug;
use std::collections::VecDeque;

/// Extract the BFS spanning forest of `graph`.
///
/// Roots (one per connected component, lowest index first) keep finish
/// time 0 and no parent. Every discovered vertex is stamped with a
/// strictly increasing global counter, so no two non-root vertices share
/// a finish time even across components.
pub fn bfs_forest(graph: &FaceGraph) -> FaceGraph {
    let mut forest = graph.clone();
    for vertex in &mut forest.vertices {
        vertex.explored = false;
        vertex.parent = None;
        vertex.finish_time = 0;
        vertex.tree_edges.clear();
    }

    let mut counter: u32 = 0;
    let mut roots = 0usize;
    let mut queue = VecDeque::new();

    for root in 0..forest.vertices.len() {
        if forest.vertices[root].explored {
            continue;
        }
        roots += 1;
        forest.vertices[root].explored = true;
        queue.push_back(root);

        while let Some(idx) = queue.pop_front() {
            let neighbors = forest.vertices[idx].edges.clone();
            for edge in neighbors {
                let head = edge.head;
                if forest.vertices[head].explored {
                    continue;
                }
                counter += 1;
                forest.vertices[head].explored = true;
                forest.vertices[head].finish_time = counter;
                forest.vertices[head].parent = Some(idx);
                forest.vertices[idx].tree_edges.push(edge);
                queue.push_back(head);
            }
        }
    }

    debug!(
        "spanning forest: {} vertices, {} roots, {} tree edges",
        forest.vertices.len(),
        roots,
        forest.all_tree_edges().len()
    );
    forest
}

/// A clone of the forest whose adjacency lists hold only the tree edges,
/// for traversal and validation over the fold tree alone
pub fn tree_view(forest: &FaceGraph) -> FaceGraph {
    let mut tree = forest.clone();
    for vertex in &mut tree.vertices {
        vertex.edges = vertex.tree_edges.clone();
    }
    tree
}
