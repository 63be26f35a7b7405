pub mod actions;
pub mod tree;

pub use actions::ActionSequence;
pub use tree::{Block, BlockId, ProgramTree};
