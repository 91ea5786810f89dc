//! # List Document
//!
//! The page as an ordered sequence of blocks. Order is the render and
//! export order. Ids are unique within a document; the sequence may be empty.
//!
//! ## Wire format
//!
//! ```json
//! { "blocks": [ { "id": "...", "type": "heading", "props": { "text": "Hi" } } ] }
//! ```
//!
//! A bare array of blocks is also accepted on read, which is how earlier
//! builds persisted the canvas.

use crate::block::{Block, BlockId};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use tracing::warn;

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(from = "DocumentRepr")]
pub struct Document {
    pub blocks: Vec<Block>,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum DocumentRepr {
    Wrapped { blocks: Vec<Block> },
    Legacy(Vec<Block>),
}

impl From<DocumentRepr> for Document {
    fn from(repr: DocumentRepr) -> Self {
        match repr {
            DocumentRepr::Wrapped { blocks } | DocumentRepr::Legacy(blocks) => {
                Document::from_blocks(blocks)
            }
        }
    }
}

impl Document {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a document, dropping any block whose id repeats an earlier one
    pub fn from_blocks(blocks: Vec<Block>) -> Self {
        let mut seen = HashSet::with_capacity(blocks.len());
        let total = blocks.len();
        let blocks: Vec<Block> = blocks
            .into_iter()
            .filter(|block| seen.insert(block.id.clone()))
            .collect();

        if blocks.len() != total {
            warn!(
                dropped = total - blocks.len(),
                "Dropped blocks with duplicate ids"
            );
        }

        Self { blocks }
    }

    pub fn len(&self) -> usize {
        self.blocks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.blocks.is_empty()
    }

    pub fn find(&self, id: &str) -> Option<&Block> {
        self.blocks.iter().find(|b| b.id == id)
    }

    pub fn position(&self, id: &str) -> Option<usize> {
        self.blocks.iter().position(|b| b.id == id)
    }

    pub fn contains(&self, id: &str) -> bool {
        self.position(id).is_some()
    }

    pub fn ids(&self) -> Vec<BlockId> {
        self.blocks.iter().map(|b| b.id.clone()).collect()
    }

    /// True when no two blocks share an id
    pub fn has_unique_ids(&self) -> bool {
        let mut seen = HashSet::with_capacity(self.blocks.len());
        self.blocks.iter().all(|b| seen.insert(b.id.as_str()))
    }

    /// Pretty-printed canonical JSON
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}

impl From<Vec<Block>> for Document {
    fn from(blocks: Vec<Block>) -> Self {
        Document::from_blocks(blocks)
    }
}
