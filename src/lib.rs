//! mwst - Minimum weight spanning trees of dense graphs
//!
//! mwst computes the total weight of a minimum weight spanning tree of an
//! undirected, weighted, simple graph given as a dense adjacency matrix,
//! using Kruskal's algorithm over a union-by-size disjoint-set forest.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────┐
//! │                  mwst binary (driver)                    │
//! │      (file/stdin selection, per-graph report, timing)   │
//! └──────────────────────────┬──────────────────────────────┘
//!                            │ uses
//! ┌──────────────────────────▼──────────────────────────────┐
//! │      io::GraphReader  ──►  graph::MSTAlgorithms          │
//! │   (text stream → AdjacencyMatrix → SpanningForest)      │
//! └─────────────────────────────────────────────────────────┘
//! ```
//!
//! # Modules
//!
//! - [`graph`] - Adjacency matrices, Kruskal's algorithm, union-find
//! - [`io`] - Reading concatenated adjacency matrices from text
//!
//! # Disconnected graphs
//!
//! Kruskal's algorithm naturally produces a minimum spanning *forest*. The
//! total weight is returned unconditionally; inspect
//! [`SpanningForest::num_components`] or call
//! [`MSTAlgorithms::minimum_spanning_tree`] to detect that no single tree
//! exists.
//!
//! # Logging
//!
//! The library emits `tracing` events at `debug` and `trace` level and never
//! installs a subscriber.
//!
//! # Example
//!
//! ```
//! use mwst::{AdjacencyMatrix, KruskalSolver, MSTAlgorithms};
//!
//! let graph = AdjacencyMatrix::from_rows(vec![
//!     vec![0, 1, 2, 3],
//!     vec![1, 0, 4, 5],
//!     vec![2, 4, 0, 6],
//!     vec![3, 5, 6, 0],
//! ])
//! .unwrap();
//!
//! let solver = KruskalSolver::default();
//! let forest = solver.minimum_spanning_tree(&graph).unwrap();
//! assert_eq!(forest.total_weight, 6);
//! assert_eq!(forest.edges.len(), 3);
//! ```

pub mod graph;
pub mod io;

// Re-export main types for convenience
pub use graph::{
    AdjacencyMatrix, GraphError, GraphResult, KruskalOptions, KruskalSolver, MSTAlgorithms,
    SpanningForest, mwst,
};
pub use io::GraphReader;
