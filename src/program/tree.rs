use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::error::{BugforgeError, Result};
use crate::types::{Action, BlockKind, TurnDirection, FIELD_DIR, FIELD_NAME, FIELD_NUM, SLOT_DO};

/// Stable index of a block in its [`ProgramTree`] arena.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct BlockId(usize);

impl BlockId {
    pub fn index(&self) -> usize {
        self.0
    }
}

/// One node of the visual-programming tree: a kind tag, named string
/// fields, and named child-slots each holding an ordered statement chain.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Block {
    pub kind: BlockKind,
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub fields: BTreeMap<String, String>,
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub slots: BTreeMap<String, Vec<BlockId>>,
}

impl Block {
    pub fn new(kind: BlockKind) -> Self {
        Self {
            kind,
            fields: BTreeMap::new(),
            slots: BTreeMap::new(),
        }
    }

    /// Program entry block with an empty body slot.
    pub fn start() -> Self {
        let mut block = Self::new(BlockKind::Start);
        block.slots.insert(SLOT_DO.to_string(), Vec::new());
        block
    }

    /// Loop block with the given iteration count and an empty body slot.
    pub fn repeat(count: u32) -> Self {
        let mut block = Self::new(BlockKind::Repeat);
        block.fields.insert(FIELD_NUM.to_string(), count.to_string());
        block.slots.insert(SLOT_DO.to_string(), Vec::new());
        block
    }

    pub fn turn(direction: TurnDirection) -> Self {
        let mut block = Self::new(BlockKind::Turn);
        block
            .fields
            .insert(FIELD_DIR.to_string(), direction.as_str().to_string());
        block
    }

    pub fn procedure_call(name: &str) -> Self {
        let mut block = Self::new(BlockKind::ProcedureCall);
        block.fields.insert(FIELD_NAME.to_string(), name.to_string());
        block
    }

    /// Primitive action as a block; turns carry their direction as a field.
    pub fn action(action: Action) -> Self {
        match action {
            Action::TurnLeft => Self::turn(TurnDirection::Left),
            Action::TurnRight => Self::turn(TurnDirection::Right),
            Action::MoveForward => Self::new(BlockKind::Move),
            Action::Collect => Self::new(BlockKind::Collect),
            Action::Jump => Self::new(BlockKind::Jump),
            Action::ToggleSwitch => Self::new(BlockKind::ToggleSwitch),
        }
    }

    pub fn field(&self, name: &str) -> Option<&str> {
        self.fields.get(name).map(String::as_str)
    }

    /// Children of a slot; a missing slot reads as an empty chain.
    pub fn children(&self, slot: &str) -> &[BlockId] {
        self.slots.get(slot).map(Vec::as_slice).unwrap_or(&[])
    }
}

/// Rooted ordered tree of blocks in arena storage.
///
/// Nodes live in an indexed table and reference each other by [`BlockId`],
/// so child lookups and relinking are O(1) vector edits instead of chain
/// re-linking. The ordered child list of a slot *is* the statement chain.
/// Removed subtrees are tombstoned; ids of live blocks stay stable across
/// mutations. Cloning is a deep structural copy, so a clone can be mutated
/// without aliasing the original.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProgramTree {
    nodes: Vec<Option<Block>>,
    entry: BlockId,
}

impl ProgramTree {
    /// Create a tree whose designated entry is the given block.
    pub fn new(entry: Block) -> Self {
        Self {
            nodes: vec![Some(entry)],
            entry: BlockId(0),
        }
    }

    /// The designated entry block representing the program's start.
    pub fn entry(&self) -> BlockId {
        self.entry
    }

    /// Add a detached block; attach it with [`ProgramTree::append_child`]
    /// or [`ProgramTree::insert_child`].
    pub fn insert(&mut self, block: Block) -> BlockId {
        self.nodes.push(Some(block));
        BlockId(self.nodes.len() - 1)
    }

    pub fn block(&self, id: BlockId) -> Result<&Block> {
        self.nodes
            .get(id.0)
            .and_then(Option::as_ref)
            .ok_or_else(|| dangling(id))
    }

    pub fn block_mut(&mut self, id: BlockId) -> Result<&mut Block> {
        self.nodes
            .get_mut(id.0)
            .and_then(Option::as_mut)
            .ok_or_else(|| dangling(id))
    }

    /// Children of a parent slot; a dangling parent or missing slot reads
    /// as an empty chain.
    pub fn children(&self, parent: BlockId, slot: &str) -> &[BlockId] {
        self.nodes
            .get(parent.0)
            .and_then(Option::as_ref)
            .map(|block| block.children(slot))
            .unwrap_or(&[])
    }

    pub fn field(&self, id: BlockId, name: &str) -> Option<&str> {
        self.nodes
            .get(id.0)
            .and_then(Option::as_ref)
            .and_then(|block| block.field(name))
    }

    pub fn set_field(&mut self, id: BlockId, name: &str, value: impl Into<String>) -> Result<()> {
        let block = self.block_mut(id)?;
        block.fields.insert(name.to_string(), value.into());
        Ok(())
    }

    pub fn append_child(&mut self, parent: BlockId, slot: &str, child: BlockId) -> Result<()> {
        self.block(child)?;
        let block = self.block_mut(parent)?;
        block.slots.entry(slot.to_string()).or_default().push(child);
        Ok(())
    }

    /// Insert a new block and append it to the parent slot in one step.
    pub fn append_new(&mut self, parent: BlockId, slot: &str, block: Block) -> Result<BlockId> {
        let id = self.insert(block);
        self.append_child(parent, slot, id)?;
        Ok(id)
    }

    pub fn insert_child(
        &mut self,
        parent: BlockId,
        slot: &str,
        index: usize,
        child: BlockId,
    ) -> Result<()> {
        self.block(child)?;
        let block = self.block_mut(parent)?;
        let children = block.slots.entry(slot.to_string()).or_default();
        if index > children.len() {
            return Err(BugforgeError::IndexOutOfRange {
                slot: slot.to_string(),
                index,
                len: children.len(),
            });
        }
        children.insert(index, child);
        Ok(())
    }

    /// Exchange the chain positions of two children of one slot.
    pub fn swap_children(
        &mut self,
        parent: BlockId,
        slot: &str,
        first: usize,
        second: usize,
    ) -> Result<()> {
        let kind = self.block(parent)?.kind;
        let block = self.block_mut(parent)?;
        let children = block
            .slots
            .get_mut(slot)
            .ok_or_else(|| BugforgeError::MissingSlot {
                kind: kind.as_str().to_string(),
                slot: slot.to_string(),
            })?;
        let len = children.len();
        if first >= len || second >= len {
            return Err(BugforgeError::IndexOutOfRange {
                slot: slot.to_string(),
                index: first.max(second),
                len,
            });
        }
        children.swap(first, second);
        Ok(())
    }

    /// Detach the child at `index` from the chain and free its entire
    /// subtree. Returns the removed block.
    pub fn remove_child(&mut self, parent: BlockId, slot: &str, index: usize) -> Result<Block> {
        let kind = self.block(parent)?.kind;
        let block = self.block_mut(parent)?;
        let children = block
            .slots
            .get_mut(slot)
            .ok_or_else(|| BugforgeError::MissingSlot {
                kind: kind.as_str().to_string(),
                slot: slot.to_string(),
            })?;
        if index >= children.len() {
            return Err(BugforgeError::IndexOutOfRange {
                slot: slot.to_string(),
                index,
                len: children.len(),
            });
        }
        let child = children.remove(index);
        self.free_subtree(child)
    }

    fn free_subtree(&mut self, id: BlockId) -> Result<Block> {
        let block = self
            .nodes
            .get_mut(id.0)
            .and_then(Option::take)
            .ok_or_else(|| dangling(id))?;
        for children in block.slots.values() {
            for &child in children {
                self.free_subtree(child)?;
            }
        }
        Ok(block)
    }

    /// Live blocks reachable from the entry, in preorder.
    pub fn reachable(&self) -> Vec<BlockId> {
        let mut seen = vec![false; self.nodes.len()];
        let mut order = Vec::new();
        let mut stack = vec![self.entry];
        while let Some(id) = stack.pop() {
            if seen.get(id.0).copied().unwrap_or(true) {
                continue;
            }
            seen[id.0] = true;
            let Ok(block) = self.block(id) else { continue };
            order.push(id);
            for children in block.slots.values().rev() {
                for &child in children.iter().rev() {
                    stack.push(child);
                }
            }
        }
        order
    }

    pub fn blocks_of_kind(&self, kind: BlockKind) -> Vec<BlockId> {
        self.reachable()
            .into_iter()
            .filter(|&id| {
                self.block(id)
                    .map(|block| block.kind == kind)
                    .unwrap_or(false)
            })
            .collect()
    }

    /// Number of blocks reachable from the entry.
    pub fn node_count(&self) -> usize {
        self.reachable().len()
    }
}

fn dangling(id: BlockId) -> BugforgeError {
    BugforgeError::InvalidBlock(format!("no live block at index {}", id.0))
}
