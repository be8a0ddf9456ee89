//! Minimum spanning tree algorithm traits.

use crate::graph::error::GraphResult;

use super::types::{AdjacencyMatrix, SpanningForest};

/// Minimum spanning tree algorithms.
///
/// Finds the subset of edges that connects all nodes with minimum total weight.
/// Graphs are undirected; disconnected graphs yield a spanning forest.
pub trait MSTAlgorithms {
    /// Compute the minimum spanning forest.
    ///
    /// Never fails on a well-formed matrix. `num_components > 1` in the
    /// result means no single spanning tree exists.
    ///
    /// # Complexity
    /// O(E log E) for sorting + O(E log V) for union-find.
    fn minimum_spanning_forest(&self, graph: &AdjacencyMatrix) -> SpanningForest;

    /// Compute the minimum spanning tree.
    ///
    /// # Errors
    /// Returns [`GraphError::Disconnected`](crate::graph::GraphError::Disconnected)
    /// if the graph has more than one component.
    fn minimum_spanning_tree(&self, graph: &AdjacencyMatrix) -> GraphResult<SpanningForest>;

    /// Total weight of the minimum spanning forest.
    fn total_weight(&self, graph: &AdjacencyMatrix) -> u64 {
        self.minimum_spanning_forest(graph).total_weight
    }
}
