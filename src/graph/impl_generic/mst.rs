//! Minimum spanning tree via Kruskal's algorithm (undirected graphs).
//!
//! Uses union-find with union by size.

use tracing::{debug, trace};

use crate::graph::traits::types::{AdjacencyMatrix, KruskalOptions, SpanningForest};

use super::helpers::extract_edges;
use super::union_find::DisjointSet;

/// Kruskal's minimum spanning tree algorithm.
///
/// Edges are sorted once by weight (stable, so equal weights keep row-major
/// extraction order) and accepted greedily when they join two components.
/// Disconnected graphs produce a minimum spanning forest.
///
/// Time: O(E log E) for sorting + O(E log V) for union-find.
pub fn kruskal_impl(graph: &AdjacencyMatrix, options: &KruskalOptions) -> SpanningForest {
    let n = graph.num_nodes();

    let mut edges = extract_edges(graph);
    edges.sort_by_key(|e| e.weight());
    debug!(num_nodes = n, num_edges = edges.len(), "extracted candidate edges");

    let mut uf = DisjointSet::new(n);
    let mut mst_edges = Vec::with_capacity(n.saturating_sub(1));
    let mut total_weight: u64 = 0;

    for edge in edges {
        let v = edge.either();
        let w = edge.other(v);

        if !uf.union(v, w) {
            continue;
        }

        total_weight = total_weight
            .checked_add(edge.weight())
            .expect("spanning tree weight overflows u64");
        trace!(v, w, weight = edge.weight(), "accepted edge");
        mst_edges.push(edge);

        // Stop when we have n-1 edges
        if options.stop_when_spanning && mst_edges.len() + 1 == n {
            break;
        }
    }

    debug!(
        total_weight,
        num_components = uf.count(),
        accepted = mst_edges.len(),
        "kruskal finished"
    );

    SpanningForest {
        edges: mst_edges,
        total_weight,
        num_nodes: n,
        num_components: uf.count(),
    }
}
