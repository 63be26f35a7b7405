use rand::Rng;

use crate::bugs::dispatch::MutationOutcome;
use crate::error::Result;
use crate::program::{BlockId, ProgramTree};
use crate::types::SLOT_DO;

/// Swap two random top-level statements of the main program.
///
/// Operates on the entry block's body chain. Programs with fewer than two
/// top-level statements are left unchanged; with exactly two the swap is a
/// reversal.
pub fn swap_two_statements<R: Rng>(tree: &mut ProgramTree, rng: &mut R) -> Result<MutationOutcome> {
    let entry = tree.entry();
    let len = tree.children(entry, SLOT_DO).len();
    if len < 2 {
        log::debug!("fewer than two top-level statements, nothing to swap");
        return Ok(MutationOutcome::Skipped);
    }

    let first = rng.gen_range(0..len);
    // Draw from the remaining indices so the pair is always distinct
    let mut second = rng.gen_range(0..len - 1);
    if second >= first {
        second += 1;
    }

    tree.swap_children(entry, SLOT_DO, first, second)?;
    log::debug!("swapped top-level statements {first} and {second}");
    Ok(MutationOutcome::Applied)
}

/// Delete one statement from a chain that has more than one.
///
/// The parent is drawn from every slot that can spare a block. Within it,
/// simple action blocks are preferred targets; loops, procedure calls, and
/// variable assignments are only deleted when nothing else is available.
pub fn delete_one_statement<R: Rng>(tree: &mut ProgramTree, rng: &mut R) -> Result<MutationOutcome> {
    let mut candidates: Vec<(BlockId, String)> = Vec::new();
    for id in tree.reachable() {
        let block = tree.block(id)?;
        for (slot, children) in &block.slots {
            if children.len() > 1 {
                candidates.push((id, slot.clone()));
            }
        }
    }

    if candidates.is_empty() {
        log::debug!("no statement chain has more than one block, nothing to delete");
        return Ok(MutationOutcome::Skipped);
    }

    let (parent, slot) = candidates[rng.gen_range(0..candidates.len())].clone();
    let children = tree.children(parent, &slot).to_vec();

    let simple: Vec<usize> = children
        .iter()
        .enumerate()
        .filter(|&(_, &child)| {
            tree.block(child)
                .map(|block| !block.kind.is_structural())
                .unwrap_or(false)
        })
        .map(|(index, _)| index)
        .collect();

    let remove_at = if simple.is_empty() {
        rng.gen_range(0..children.len())
    } else {
        simple[rng.gen_range(0..simple.len())]
    };

    let removed = tree.remove_child(parent, &slot, remove_at)?;
    log::debug!("removed '{}' block at {remove_at}", removed.kind.as_str());
    Ok(MutationOutcome::Applied)
}
