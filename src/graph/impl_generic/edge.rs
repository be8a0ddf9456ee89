//! Weighted undirected edge.

/// An undirected edge between two distinct vertices.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Edge {
    v: usize,
    w: usize,
    weight: u64,
}

impl Edge {
    pub fn new(v: usize, w: usize, weight: u64) -> Self {
        debug_assert!(v != w, "self-loop on vertex {v}");
        Self { v, w, weight }
    }

    pub fn weight(&self) -> u64 {
        self.weight
    }

    /// One of the two endpoints.
    pub fn either(&self) -> usize {
        self.v
    }

    /// The endpoint opposite `vertex`.
    ///
    /// # Panics
    /// If `vertex` is not an endpoint of this edge.
    pub fn other(&self, vertex: usize) -> usize {
        if vertex == self.v {
            self.w
        } else if vertex == self.w {
            self.v
        } else {
            panic!(
                "inconsistent edge: vertex {} is not an endpoint of {}-{}",
                vertex, self.v, self.w
            );
        }
    }

    pub fn endpoints(&self) -> (usize, usize) {
        (self.v, self.w)
    }
}
