//! Bug injection for block-based maze exercises.
//!
//! Takes a correct program — a tree of visual-programming blocks or a flat
//! action sequence — and applies one named mutation strategy to produce a
//! plausible buggy variant for fix-the-bug exercises. Strategies never
//! fail: when no suitable mutation target exists, the input comes back
//! unchanged and batch generation keeps going.

pub mod bugs;
pub mod config;
pub mod error;
pub mod program;
pub mod types;

pub use bugs::{
    apply_category, create_bug, BugCategory, BugGenerator, MutationOutcome, Program,
    Representation,
};
pub use config::BugConfig;
pub use error::{BugforgeError, Result};
pub use program::{ActionSequence, Block, BlockId, ProgramTree};
pub use types::{Action, BlockKind, TurnDirection};
pub use types::{FIELD_DIR, FIELD_NAME, FIELD_NUM, SLOT_DO};
