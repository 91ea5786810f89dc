//! # Block Mutations
//!
//! Serializable editing intents over the block list. A mutation never
//! fails: an unknown target id or an out-of-range index degrades to a
//! no-op or a clamped index, exactly like the sequence operations it
//! delegates to.
//!
//! ### InsertBlock
//! - Index clamped to `[0, len]`
//! - Refused if the block id is already present
//!
//! ### DragBlock
//! - `from` and `target` are both numbered against the list before the drag
//! - Dropping next to itself is a no-op
//!
//! ### DuplicateBlock
//! - The copy gets a fresh id from the session generator

use crate::sequence::{self, Direction};
use serde::{Deserialize, Serialize};
use webbuilder_model::{Block, BlockId, IdGenerator, Props};

/// Semantic mutations (intent-preserving operations)
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub enum Mutation {
    /// Insert a new block at index
    InsertBlock { index: isize, block: Block },

    /// Append several blocks at the tail
    AppendBlocks { blocks: Vec<Block> },

    /// Move a block to a drop target
    DragBlock { from: usize, target: isize },

    /// Copy a block right after itself
    DuplicateBlock { block_id: BlockId },

    /// Remove a block
    RemoveBlock { block_id: BlockId },

    /// Move a block one step up or down
    NudgeBlock {
        block_id: BlockId,
        direction: Direction,
    },

    /// Shallow-merge props into a block
    PatchProps { block_id: BlockId, props: Props },

    /// Remove every block
    Clear,
}

impl Mutation {
    /// Next sequence after this mutation
    pub fn apply(&self, seq: &[Block], ids: &mut IdGenerator) -> Vec<Block> {
        match self {
            Mutation::InsertBlock { index, block } => {
                sequence::insert_at(seq, *index, block.clone())
            }

            Mutation::AppendBlocks { blocks } => blocks.iter().fold(seq.to_vec(), |acc, block| {
                let len = acc.len() as isize;
                sequence::insert_at(&acc, len, block.clone())
            }),

            Mutation::DragBlock { from, target } => sequence::drag_reorder(seq, *from, *target),

            Mutation::DuplicateBlock { block_id } => sequence::duplicate(seq, block_id, ids),

            Mutation::RemoveBlock { block_id } => sequence::remove(seq, block_id),

            Mutation::NudgeBlock {
                block_id,
                direction,
            } => sequence::move_by_selection(seq, block_id, *direction),

            Mutation::PatchProps { block_id, props } => {
                sequence::patch_props(seq, block_id, props)
            }

            Mutation::Clear => Vec::new(),
        }
    }

    /// Block the mutation is about, when it names one
    pub fn target_id(&self) -> Option<&str> {
        match self {
            Mutation::InsertBlock { block, .. } => Some(&block.id),
            Mutation::DuplicateBlock { block_id }
            | Mutation::RemoveBlock { block_id }
            | Mutation::NudgeBlock { block_id, .. }
            | Mutation::PatchProps { block_id, .. } => Some(block_id),
            Mutation::AppendBlocks { .. } | Mutation::DragBlock { .. } | Mutation::Clear => None,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Mutation::InsertBlock { .. } => "insert_block",
            Mutation::AppendBlocks { .. } => "append_blocks",
            Mutation::DragBlock { .. } => "drag_block",
            Mutation::DuplicateBlock { .. } => "duplicate_block",
            Mutation::RemoveBlock { .. } => "remove_block",
            Mutation::NudgeBlock { .. } => "nudge_block",
            Mutation::PatchProps { .. } => "patch_props",
            Mutation::Clear => "clear",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use webbuilder_model::BlockKind;

    fn seq(ids: &[&str]) -> Vec<Block> {
        ids.iter()
            .map(|id| Block::new(*id, BlockKind::Heading, Props::new()))
            .collect()
    }

    #[test]
    fn test_mutation_serialization() {
        let mutation = Mutation::NudgeBlock {
            block_id: "b-1".to_string(),
            direction: Direction::Down,
        };

        let json = serde_json::to_string(&mutation).unwrap();
        let deserialized: Mutation = serde_json::from_str(&json).unwrap();

        assert_eq!(mutation, deserialized);
    }

    #[test]
    fn test_append_blocks_keeps_order() {
        let mut ids = IdGenerator::from_seed("t");
        let next = Mutation::AppendBlocks {
            blocks: seq(&["c", "d"]),
        }
        .apply(&seq(&["a", "b"]), &mut ids);

        let order: Vec<&str> = next.iter().map(|b| b.id.as_str()).collect();
        assert_eq!(order, vec!["a", "b", "c", "d"]);
    }

    #[test]
    fn test_drag_mutation() {
        let mut ids = IdGenerator::from_seed("t");
        let next = Mutation::DragBlock { from: 1, target: 0 }.apply(&seq(&["a", "b", "c"]), &mut ids);

        let order: Vec<&str> = next.iter().map(|b| b.id.as_str()).collect();
        assert_eq!(order, vec!["b", "a", "c"]);
    }

    #[test]
    fn test_clear() {
        let mut ids = IdGenerator::from_seed("t");
        assert!(Mutation::Clear.apply(&seq(&["a"]), &mut ids).is_empty());
        assert_eq!(Mutation::Clear.target_id(), None);
    }
}
