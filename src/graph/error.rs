//! Error types for graph construction and spanning tree queries.

use std::fmt;

/// Result type for graph operations.
pub type GraphResult<T> = Result<T, GraphError>;

/// Errors that can occur while building graphs or querying spanning trees.
///
/// The spanning tree computation itself never fails on a well-formed
/// [`AdjacencyMatrix`](super::AdjacencyMatrix); these errors belong to the
/// layers that construct matrices or demand a single connected tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GraphError {
    /// A row of the adjacency matrix does not have `n` entries.
    NotSquare {
        row: usize,
        expected: usize,
        got: usize,
    },

    /// A row-major buffer does not hold `n * n` entries.
    LengthMismatch { expected: usize, got: usize },

    /// The graph has more than one connected component.
    Disconnected { components: usize },

    /// A token in a graph stream is not an integer.
    InvalidToken { graph: usize, token: String },

    /// A negative vertex count or edge weight in a graph stream.
    NegativeWeight { graph: usize, value: i64 },

    /// The stream ended before the adjacency matrix was complete.
    TruncatedMatrix {
        graph: usize,
        expected: usize,
        got: usize,
    },

    /// The underlying reader failed.
    Io { message: String },
}

impl fmt::Display for GraphError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NotSquare { row, expected, got } => {
                write!(
                    f,
                    "Adjacency matrix is not square: row {} has {} entries, expected {}",
                    row, got, expected
                )
            }
            Self::LengthMismatch { expected, got } => {
                write!(
                    f,
                    "Length mismatch: expected {} matrix entries, got {}",
                    expected, got
                )
            }
            Self::Disconnected { components } => {
                write!(
                    f,
                    "Graph is disconnected ({} components): no spanning tree exists",
                    components
                )
            }
            Self::InvalidToken { graph, token } => {
                write!(f, "Graph {}: invalid integer '{}'", graph, token)
            }
            Self::NegativeWeight { graph, value } => {
                write!(f, "Graph {}: negative value {} is not allowed", graph, value)
            }
            Self::TruncatedMatrix { graph, .. } => {
                write!(
                    f,
                    "Adjacency matrix for graph {} contains too few values.",
                    graph
                )
            }
            Self::Io { message } => {
                write!(f, "I/O error: {}", message)
            }
        }
    }
}

impl std::error::Error for GraphError {}

impl From<std::io::Error> for GraphError {
    fn from(err: std::io::Error) -> Self {
        Self::Io {
            message: err.to_string(),
        }
    }
}
