use rand::rngs::StdRng;
use rand::Rng;
use rand::SeedableRng;
use serde::{Deserialize, Serialize};

use crate::bugs::category::{BugCategory, Representation};
use crate::bugs::{parameters, redundancy, structure};
use crate::config::BugConfig;
use crate::program::{ActionSequence, ProgramTree};

/// A program in either of its two interchangeable representations.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Program {
    Tree(ProgramTree),
    Actions(ActionSequence),
}

impl Program {
    pub fn representation(&self) -> Representation {
        match self {
            Program::Tree(_) => Representation::Tree,
            Program::Actions(_) => Representation::Actions,
        }
    }
}

impl From<ProgramTree> for Program {
    fn from(tree: ProgramTree) -> Self {
        Program::Tree(tree)
    }
}

impl From<ActionSequence> for Program {
    fn from(actions: ActionSequence) -> Self {
        Program::Actions(actions)
    }
}

/// Whether a strategy changed its input or found no eligible target.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MutationOutcome {
    Applied,
    Skipped,
}

/// Look up the strategy for `category` and apply it to a private copy of
/// `program`.
///
/// Never fails: an unrecognized category, a category that does not match
/// the program's representation, and a malformed program structure all log
/// a warning and return the input unchanged. A batch generator must keep
/// producing the remaining exercises even when one of them is
/// misconfigured, so the worst case is a "buggy" program identical to the
/// correct one.
pub fn create_bug<R: Rng>(
    category: &str,
    program: &Program,
    config: &BugConfig,
    rng: &mut R,
) -> Program {
    match BugCategory::parse(category) {
        Some(category) => apply_category(category, program, config, rng),
        None => {
            log::warn!("no bug strategy for category '{category}', returning program unchanged");
            program.clone()
        }
    }
}

/// Apply one resolved category, with the same degradation policy as
/// [`create_bug`].
pub fn apply_category<R: Rng>(
    category: BugCategory,
    program: &Program,
    config: &BugConfig,
    rng: &mut R,
) -> Program {
    // Strategies mutate a private copy; the caller's program is never aliased.
    let mut copy = program.clone();
    let outcome = match (category, &mut copy) {
        (
            BugCategory::SequenceError | BugCategory::IncorrectFunctionCallOrder,
            Program::Tree(tree),
        ) => structure::swap_two_statements(tree, rng),
        (BugCategory::MissingBlock, Program::Tree(tree)) => {
            structure::delete_one_statement(tree, rng)
        }
        (BugCategory::IncorrectLoopCount, Program::Tree(tree)) => {
            parameters::perturb_loop_count(tree, rng)
        }
        (BugCategory::IncorrectParameter, Program::Tree(tree)) => {
            parameters::flip_turn_direction(tree, rng)
        }
        (BugCategory::Optimization, Program::Actions(actions)) => {
            redundancy::insert_redundant_pair(actions, config, rng)
        }
        (category, copy) => {
            log::warn!(
                "bug category '{}' expects a {:?} program, got {:?}; returning program unchanged",
                category.as_str(),
                category.representation(),
                copy.representation()
            );
            return program.clone();
        }
    };

    match outcome {
        // On the skip paths the copy is untouched, so both arms return it.
        Ok(MutationOutcome::Applied) | Ok(MutationOutcome::Skipped) => copy,
        Err(error) => {
            log::warn!(
                "failed to apply bug category '{}': {error}; returning program unchanged",
                category.as_str()
            );
            program.clone()
        }
    }
}

/// Bug-injection service owning its random source.
///
/// Seeded generators reproduce the same mutations for the same inputs;
/// unseeded ones draw from OS entropy.
pub struct BugGenerator {
    rng: StdRng,
}

impl BugGenerator {
    pub fn new(seed: Option<u64>) -> Self {
        let rng = match seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        Self { rng }
    }

    pub fn create_bug(&mut self, category: &str, program: &Program, config: &BugConfig) -> Program {
        create_bug(category, program, config, &mut self.rng)
    }
}
