pub mod category;
pub mod dispatch;
pub mod parameters;
pub mod redundancy;
pub mod structure;

pub use category::{BugCategory, Representation};
pub use dispatch::{apply_category, create_bug, BugGenerator, MutationOutcome, Program};
pub use parameters::{flip_turn_direction, perturb_loop_count};
pub use redundancy::insert_redundant_pair;
pub use structure::{delete_one_statement, swap_two_statements};
