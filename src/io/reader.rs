//! Reader for concatenated adjacency matrices in text form.
//!
//! Each graph is a vertex count `n` followed by `n * n` whitespace-separated
//! integers in row-major order. Graphs follow each other with no separator
//! beyond whitespace; end of input ends the sequence.

use std::collections::VecDeque;
use std::io::BufRead;

use tracing::{debug, trace};

use crate::graph::{AdjacencyMatrix, GraphError, GraphResult};

/// Iterator over the graphs encoded in a text stream.
///
/// Yields `Err` at most once: after a malformed or truncated graph the
/// iterator is exhausted.
///
/// ```
/// use mwst::io::GraphReader;
///
/// let input = "2\n0 5\n5 0\n1\n0\n";
/// let graphs: Vec<_> = GraphReader::new(input.as_bytes())
///     .collect::<Result<_, _>>()
///     .unwrap();
/// assert_eq!(graphs.len(), 2);
/// ```
#[derive(Debug)]
pub struct GraphReader<R> {
    reader: R,
    tokens: VecDeque<String>,
    graphs_read: usize,
    finished: bool,
}

impl<R: BufRead> GraphReader<R> {
    pub fn new(reader: R) -> Self {
        Self {
            reader,
            tokens: VecDeque::new(),
            graphs_read: 0,
            finished: false,
        }
    }

    /// Number of graphs successfully read so far.
    pub fn graphs_read(&self) -> usize {
        self.graphs_read
    }

    /// Whether another graph starts in the input.
    ///
    /// Reads ahead to the next token without consuming it. Returns `false`
    /// once the input is exhausted or an earlier graph failed to parse.
    pub fn has_next(&mut self) -> GraphResult<bool> {
        if self.finished {
            return Ok(false);
        }
        self.fill_tokens()
    }

    fn fill_tokens(&mut self) -> GraphResult<bool> {
        let mut line = String::new();
        while self.tokens.is_empty() {
            line.clear();
            if self.reader.read_line(&mut line)? == 0 {
                return Ok(false);
            }
            self.tokens.extend(line.split_whitespace().map(str::to_owned));
        }
        Ok(true)
    }

    fn next_token(&mut self) -> GraphResult<Option<String>> {
        if !self.fill_tokens()? {
            return Ok(None);
        }
        Ok(self.tokens.pop_front())
    }

    fn next_value(&mut self, graph: usize) -> GraphResult<Option<u64>> {
        let Some(token) = self.next_token()? else {
            return Ok(None);
        };

        if token.starts_with('-') {
            return match token.parse::<i64>() {
                Ok(0) => Ok(Some(0)),
                Ok(value) => Err(GraphError::NegativeWeight { graph, value }),
                Err(_) => Err(GraphError::InvalidToken { graph, token }),
            };
        }

        token
            .parse::<u64>()
            .map(Some)
            .map_err(|_| GraphError::InvalidToken { graph, token })
    }

    fn read_graph(&mut self) -> GraphResult<Option<AdjacencyMatrix>> {
        let graph = self.graphs_read + 1;

        let Some(num_nodes) = self.next_value(graph)? else {
            return Ok(None);
        };
        let too_large = || GraphError::InvalidToken {
            graph,
            token: num_nodes.to_string(),
        };
        let num_nodes = usize::try_from(num_nodes).map_err(|_| too_large())?;
        let expected = num_nodes.checked_mul(num_nodes).ok_or_else(too_large)?;
        trace!(graph, num_nodes, "reading adjacency matrix");

        // Capacity grows with the data actually present
        let mut weights = Vec::with_capacity(expected.min(1 << 20));
        while weights.len() < expected {
            match self.next_value(graph)? {
                Some(w) => weights.push(w),
                None => {
                    return Err(GraphError::TruncatedMatrix {
                        graph,
                        expected,
                        got: weights.len(),
                    });
                }
            }
        }

        let matrix = AdjacencyMatrix::from_row_major(num_nodes, weights)?;
        self.graphs_read = graph;
        debug!(graph, num_nodes, "read graph");
        Ok(Some(matrix))
    }
}

impl<R: BufRead> Iterator for GraphReader<R> {
    type Item = GraphResult<AdjacencyMatrix>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.finished {
            return None;
        }

        match self.read_graph() {
            Ok(Some(matrix)) => Some(Ok(matrix)),
            Ok(None) => {
                self.finished = true;
                None
            }
            Err(err) => {
                self.finished = true;
                Some(Err(err))
            }
        }
    }
}
