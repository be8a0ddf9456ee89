//! Generic implementations shared by the graph solvers.

pub mod edge;
pub mod helpers;
pub mod mst;
pub mod union_find;

pub use edge::Edge;
pub use helpers::extract_edges;
pub use mst::kruskal_impl;
pub use union_find::DisjointSet;
