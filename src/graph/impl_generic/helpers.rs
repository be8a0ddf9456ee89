//! Shared helper functions for graph algorithms.

use crate::graph::traits::types::AdjacencyMatrix;

use super::edge::Edge;

/// Extract candidate edges from the upper triangle of an adjacency matrix.
///
/// Returns one edge per nonzero entry `(i, j)` with `i < j`, in row-major
/// order. The diagonal and the lower triangle are never read.
pub fn extract_edges(graph: &AdjacencyMatrix) -> Vec<Edge> {
    let n = graph.num_nodes();
    let mut edges = Vec::new();

    for i in 0..n {
        let row = graph.row(i);
        for (j, &weight) in row.iter().enumerate().skip(i + 1) {
            if weight != 0 {
                edges.push(Edge::new(i, j, weight));
            }
        }
    }

    edges
}
