use rand::Rng;

use crate::bugs::dispatch::MutationOutcome;
use crate::error::{BugforgeError, Result};
use crate::program::{BlockId, ProgramTree};
use crate::types::{BlockKind, TurnDirection, FIELD_DIR, FIELD_NUM};

/// Nudge one random loop's iteration count.
///
/// Counts above 2 go up by one, smaller counts go down by one, and the
/// result never drops below 1. A count of 1 therefore perturbs to itself.
pub fn perturb_loop_count<R: Rng>(tree: &mut ProgramTree, rng: &mut R) -> Result<MutationOutcome> {
    let mut loops: Vec<(BlockId, String)> = Vec::new();
    for id in tree.blocks_of_kind(BlockKind::Repeat) {
        if let Some(value) = tree.field(id, FIELD_NUM) {
            loops.push((id, value.to_string()));
        }
    }

    if loops.is_empty() {
        log::warn!("no loop block with a count field, returning program unchanged");
        return Ok(MutationOutcome::Skipped);
    }

    let (target, raw) = loops[rng.gen_range(0..loops.len())].clone();
    let original: i64 = raw.trim().parse().map_err(|_| {
        BugforgeError::Mutation(format!("loop count '{raw}' is not an integer"))
    })?;

    let mut bugged = if original > 2 { original + 1 } else { original - 1 };
    if bugged <= 0 {
        bugged = 1;
    }

    tree.set_field(target, FIELD_NUM, bugged.to_string())?;
    log::debug!("changed loop count from {original} to {bugged}");
    Ok(MutationOutcome::Applied)
}

/// Flip one random turn between left and right.
pub fn flip_turn_direction<R: Rng>(tree: &mut ProgramTree, rng: &mut R) -> Result<MutationOutcome> {
    let mut turns: Vec<(BlockId, String)> = Vec::new();
    for id in tree.blocks_of_kind(BlockKind::Turn) {
        if let Some(value) = tree.field(id, FIELD_DIR) {
            turns.push((id, value.to_string()));
        }
    }

    if turns.is_empty() {
        log::warn!("no turn block with a direction field, returning program unchanged");
        return Ok(MutationOutcome::Skipped);
    }

    let (target, original) = turns[rng.gen_range(0..turns.len())].clone();
    // Anything that is not a left turn flips to one
    let bugged = if original == TurnDirection::Left.as_str() {
        TurnDirection::Right
    } else {
        TurnDirection::Left
    };

    tree.set_field(target, FIELD_DIR, bugged.as_str())?;
    log::debug!("changed turn direction from {original} to {}", bugged.as_str());
    Ok(MutationOutcome::Applied)
}
