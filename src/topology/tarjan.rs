// SPDX-License-Identifier: Apache-2.0

//! Strongly connected components, used to validate that a spanning
//! forest's tree view is acyclic

use crate::topology::graph::FaceGraph;

struct TarjanState {
    index: Vec<Option<u32>>,
    lowlink: Vec<u32>,
    on_stack: Vec<bool>,
    stack: Vec<usize>,
    next_index: u32,
    components: Vec<Vec<usize>>,
}

/// Tarjan's algorithm over the graph's adjacency lists
pub fn strongly_connected_components(graph: &FaceGraph) -> Vec<Vec<usize>> {
    let n = graph.vertices.len();
    let mut state = TarjanState {
        index: vec![None; n],
        lowlink: vec![0; n],
        on_stack: vec![false; n],
        stack: Vec::new(),
        next_index: 0,
        components: Vec::new(),
    };
    for v in 0..n {
        if state.index[v].is_none() {
            strongconnect(v, graph, &mut state);
        }
    }
    state.components
}

fn strongconnect(v: usize, graph: &FaceGraph, state: &mut TarjanState) {
    let v_index = state.next_index;
    state.index[v] = Some(v_index);
    state.lowlink[v] = v_index;
    state.next_index += 1;
    state.stack.push(v);
    state.on_stack[v] = true;

    for edge in &graph.vertices[v].edges {
        let w = edge.head;
        match state.index[w] {
            None => {
                strongconnect(w, graph, state);
                state.lowlink[v] = state.lowlink[v].min(state.lowlink[w]);
            }
            Some(w_index) if state.on_stack[w] => {
                state.lowlink[v] = state.lowlink[v].min(w_index);
            }
            _ => {}
        }
    }

    if state.lowlink[v] == v_index {
        let mut component = Vec::new();
        while let Some(w) = state.stack.pop() {
            state.on_stack[w] = false;
            component.push(w);
            if w == v {
                break;
            }
        }
        state.components.push(component);
    }
}

/// A graph is acyclic exactly when every component is a single vertex
pub fn is_acyclic(graph: &FaceGraph) -> bool {
    strongly_connected_components(graph)
        .iter()
        .all(|c| c.len() == 1)
}
