//! CPU solvers for graph algorithms.

mod mst;

pub use mst::KruskalSolver;
