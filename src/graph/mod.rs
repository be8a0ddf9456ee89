//! Minimum weight spanning trees of undirected graphs.
//!
//! This module provides:
//! - A dense adjacency matrix graph type ([`AdjacencyMatrix`])
//! - Minimum spanning tree / forest (Kruskal) behind [`MSTAlgorithms`]
//! - The disjoint-set forest and edge type used by Kruskal
//!   ([`impl_generic::DisjointSet`], [`impl_generic::Edge`])

mod cpu;
mod error;
pub mod impl_generic;
pub mod traits;

pub use cpu::KruskalSolver;
pub use error::{GraphError, GraphResult};
pub use traits::*;

/// Total weight of a minimum weight spanning tree of `graph`.
///
/// For a disconnected graph this is the weight of the minimum spanning
/// forest; use [`MSTAlgorithms::minimum_spanning_tree`] to detect that case.
///
/// ```
/// use mwst::graph::{mwst, AdjacencyMatrix};
///
/// let graph = AdjacencyMatrix::from_rows(vec![
///     vec![0, 1, 3],
///     vec![1, 0, 2],
///     vec![3, 2, 0],
/// ])
/// .unwrap();
/// assert_eq!(mwst(&graph), 3);
/// ```
pub fn mwst(graph: &AdjacencyMatrix) -> u64 {
    KruskalSolver::default().total_weight(graph)
}
