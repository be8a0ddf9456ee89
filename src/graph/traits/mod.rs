pub mod mst;
pub mod types;

pub use mst::MSTAlgorithms;
pub use types::*;
