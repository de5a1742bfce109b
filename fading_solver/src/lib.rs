mod graph;
mod record;
mod solve;
mod writer;

pub use graph::{enumerate, GameGraph, Node};
pub use record::{Record, RECORD_SIZE};
pub use solve::solve;
pub use writer::write_table;
