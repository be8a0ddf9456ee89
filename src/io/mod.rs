//! Text input for batches of graphs.

mod reader;

pub use reader::GraphReader;
