//! Graph data types and result structures.

use crate::graph::error::{GraphError, GraphResult};
use crate::graph::impl_generic::Edge;

/// Undirected graph as a dense adjacency matrix.
///
/// Entry `(i, j)` is the weight of the edge between `i` and `j`; zero means
/// no edge. The matrix is expected to be symmetric. Only the upper triangle
/// is read by the spanning tree algorithms, and the diagonal is ignored.
///
/// # Construction
///
/// ```
/// use mwst::graph::AdjacencyMatrix;
///
/// // From rows
/// let graph = AdjacencyMatrix::from_rows(vec![vec![0, 5], vec![5, 0]]).unwrap();
///
/// // From a row-major buffer
/// let graph = AdjacencyMatrix::from_row_major(2, vec![0, 5, 5, 0]).unwrap();
/// assert_eq!(graph.num_nodes(), 2);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct AdjacencyMatrix {
    /// Row-major weights [n * n]
    weights: Vec<u64>,
    /// Number of nodes in the graph
    num_nodes: usize,
}

impl AdjacencyMatrix {
    /// Create a graph from a row-major buffer of `n * n` weights.
    ///
    /// A node count whose square overflows `usize` is reported as a length
    /// mismatch against `usize::MAX`.
    pub fn from_row_major(num_nodes: usize, weights: Vec<u64>) -> GraphResult<Self> {
        let expected = num_nodes.checked_mul(num_nodes).unwrap_or(usize::MAX);
        if weights.len() != expected {
            return Err(GraphError::LengthMismatch {
                expected,
                got: weights.len(),
            });
        }
        Ok(Self { weights, num_nodes })
    }

    /// Create a graph from `n` rows of `n` weights each.
    pub fn from_rows(rows: Vec<Vec<u64>>) -> GraphResult<Self> {
        let num_nodes = rows.len();
        let capacity = num_nodes.checked_mul(num_nodes).unwrap_or(0);
        let mut weights = Vec::with_capacity(capacity);

        for (row, entries) in rows.into_iter().enumerate() {
            if entries.len() != num_nodes {
                return Err(GraphError::NotSquare {
                    row,
                    expected: num_nodes,
                    got: entries.len(),
                });
            }
            weights.extend(entries);
        }

        Ok(Self { weights, num_nodes })
    }

    pub fn num_nodes(&self) -> usize {
        self.num_nodes
    }

    /// Weight of entry `(i, j)`.
    ///
    /// # Panics
    /// If `i` or `j` is out of range.
    pub fn weight(&self, i: usize, j: usize) -> u64 {
        assert!(
            i < self.num_nodes && j < self.num_nodes,
            "entry ({i}, {j}) out of range for {} nodes",
            self.num_nodes
        );
        self.weights[i * self.num_nodes + j]
    }

    /// Row `i` of the matrix.
    ///
    /// # Panics
    /// If `i` is out of range.
    pub fn row(&self, i: usize) -> &[u64] {
        let n = self.num_nodes;
        &self.weights[i * n..(i + 1) * n]
    }

    /// Whether `A[i][j] == A[j][i]` for every pair.
    pub fn is_symmetric(&self) -> bool {
        let n = self.num_nodes;
        (0..n).all(|i| ((i + 1)..n).all(|j| self.weight(i, j) == self.weight(j, i)))
    }
}

/// Result of minimum spanning tree algorithms.
///
/// For a disconnected graph this is a minimum spanning forest: one tree per
/// connected component.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SpanningForest {
    /// Accepted edges, in the order they were accepted.
    pub edges: Vec<Edge>,
    /// Sum of the accepted edge weights.
    pub total_weight: u64,
    /// Number of nodes in the graph.
    pub num_nodes: usize,
    /// Number of connected components.
    pub num_components: usize,
}

impl SpanningForest {
    /// Whether the forest is a single spanning tree.
    ///
    /// The empty graph counts as connected.
    pub fn is_spanning_tree(&self) -> bool {
        self.num_components <= 1
    }
}

/// Options for Kruskal's algorithm.
#[derive(Debug, Clone)]
pub struct KruskalOptions {
    /// Stop scanning edges once `n - 1` have been accepted.
    ///
    /// Does not change the result, only skips edges that can no longer be
    /// accepted.
    pub stop_when_spanning: bool,
}

impl Default for KruskalOptions {
    fn default() -> Self {
        Self {
            stop_when_spanning: true,
        }
    }
}
