//! Drag-and-drop protocol for the list canvas.
//!
//! A drag carries a JSON message under [`DRAG_MIME`]: either a palette item
//! (a new block) or the original index of a block already on the canvas.

use crate::errors::EditorError;
use crate::sequence;
use serde::{Deserialize, Serialize};
use webbuilder_model::{new_block, Block, BlockId, BlockKind, IdGenerator, PaletteItem, Props};

/// Transfer type the canvas reads drag payloads from
pub const DRAG_MIME: &str = "application/wb-item";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "source", rename_all = "lowercase")]
pub enum DragPayload {
    Palette {
        #[serde(rename = "type")]
        kind: BlockKind,
        #[serde(default)]
        defaults: Props,
    },
    Canvas {
        index: i64,
    },
}

impl DragPayload {
    pub fn palette(item: &PaletteItem) -> Self {
        DragPayload::Palette {
            kind: item.kind.clone(),
            defaults: item.defaults.clone(),
        }
    }

    pub fn canvas(index: usize) -> Self {
        DragPayload::Canvas {
            index: index as i64,
        }
    }

    pub fn decode(raw: &str) -> Result<Self, EditorError> {
        if raw.trim().is_empty() {
            return Err(EditorError::EmptyPayload);
        }
        serde_json::from_str(raw).map_err(|e| EditorError::InvalidPayload(e.to_string()))
    }

    pub fn encode(&self) -> Result<String, EditorError> {
        Ok(serde_json::to_string(self)?)
    }
}

/// What a drop did to the sequence
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DropOutcome {
    /// A new block was created from the palette
    Inserted(BlockId),
    Moved,
    Unchanged,
}

/// Apply `payload` dropped on target `target`
pub fn resolve_drop(
    seq: &[Block],
    payload: &DragPayload,
    target: isize,
    ids: &mut IdGenerator,
) -> (Vec<Block>, DropOutcome) {
    match payload {
        DragPayload::Palette { kind, defaults } => {
            let block = new_block(ids, kind.clone(), defaults);
            let id = block.id.clone();
            let next = sequence::insert_at(seq, target, block);
            let outcome = if next.len() > seq.len() {
                DropOutcome::Inserted(id)
            } else {
                DropOutcome::Unchanged
            };
            (next, outcome)
        }
        DragPayload::Canvas { index } => {
            let Ok(from) = usize::try_from(*index) else {
                return (seq.to_vec(), DropOutcome::Unchanged);
            };
            let next = sequence::drag_reorder(seq, from, target);
            let outcome = if next == seq {
                DropOutcome::Unchanged
            } else {
                DropOutcome::Moved
            };
            (next, outcome)
        }
    }
}
