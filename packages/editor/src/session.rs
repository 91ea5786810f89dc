//! # Edit Session
//!
//! One user's editing of one list document.
//!
//! The session owns the document, the selection and the id generator, and
//! writes a snapshot to the key-value store after every change. Every
//! change replaces the whole block list, so the persisted snapshot is
//! always a complete document.
//!
//! Persistence is best effort: a failed write is logged and the in-memory
//! document stays as edited.

use crate::drop::{resolve_drop, DragPayload, DropOutcome};
use crate::errors::EditorError;
use crate::mutations::Mutation;
use crate::sequence::Direction;
use tracing::{debug, info, warn};
use webbuilder_common::KeyValueStore;
use webbuilder_model::{Block, BlockId, BlockKind, Document, IdGenerator, Palette, Props, Template};

/// Store key holding the list document
pub const DOCUMENT_KEY: &str = "document:v1";

pub struct EditSession {
    document: Document,
    selected: Option<BlockId>,
    ids: IdGenerator,
    palette: Palette,
    store: Box<dyn KeyValueStore>,
    /// Increments on every committed change
    version: u64,
}

impl EditSession {
    /// Open a session, reading the persisted document once
    pub fn open(store: Box<dyn KeyValueStore>) -> Self {
        Self::with_ids(store, IdGenerator::new())
    }

    pub fn with_ids(store: Box<dyn KeyValueStore>, ids: IdGenerator) -> Self {
        let document = load_document(store.as_ref());
        info!(blocks = document.len(), "Opened edit session");
        Self {
            document,
            selected: None,
            ids,
            palette: Palette::builder(),
            store,
            version: 0,
        }
    }

    pub fn document(&self) -> &Document {
        &self.document
    }

    pub fn blocks(&self) -> &[Block] {
        &self.document.blocks
    }

    pub fn palette(&self) -> &Palette {
        &self.palette
    }

    pub fn version(&self) -> u64 {
        self.version
    }

    pub fn selected_id(&self) -> Option<&str> {
        self.selected.as_deref()
    }

    pub fn selected_block(&self) -> Option<&Block> {
        self.selected.as_deref().and_then(|id| self.document.find(id))
    }

    pub fn store(&self) -> &dyn KeyValueStore {
        self.store.as_ref()
    }

    pub fn store_mut(&mut self) -> &mut dyn KeyValueStore {
        self.store.as_mut()
    }

    /// Select a block; selecting an id that is not in the document clears the selection
    pub fn select(&mut self, id: Option<&str>) -> bool {
        match id {
            Some(id) if self.document.contains(id) => {
                self.selected = Some(id.to_string());
                true
            }
            Some(id) => {
                debug!(block_id = id, "Ignoring selection of unknown block");
                self.selected = None;
                false
            }
            None => {
                self.selected = None;
                true
            }
        }
    }

    /// Apply a mutation and persist the result
    pub fn apply(&mut self, mutation: &Mutation) {
        let next = mutation.apply(&self.document.blocks, &mut self.ids);
        debug!(mutation = mutation.name(), "Applied mutation");
        self.commit(next);
    }

    /// Append a block from the palette and select it
    pub fn add_from_palette(&mut self, kind: &BlockKind) -> Option<BlockId> {
        let item = self.palette.get(kind)?.clone();
        let block = item.create(&mut self.ids);
        let id = block.id.clone();
        self.apply(&Mutation::InsertBlock {
            index: self.document.len() as isize,
            block,
        });
        self.selected = Some(id.clone());
        Some(id)
    }

    /// Append a block of any kind with explicit props and select it
    pub fn add_block(&mut self, kind: BlockKind, props: Props) -> BlockId {
        let block = Block::new(self.ids.new_id(), kind, props);
        let id = block.id.clone();
        self.apply(&Mutation::InsertBlock {
            index: self.document.len() as isize,
            block,
        });
        self.selected = Some(id.clone());
        id
    }

    /// Handle a drop of a decoded payload on target `target`
    pub fn drop_at(&mut self, payload: &DragPayload, target: isize) -> DropOutcome {
        let (next, outcome) = resolve_drop(&self.document.blocks, payload, target, &mut self.ids);
        if outcome != DropOutcome::Unchanged {
            self.commit(next);
        }
        if let DropOutcome::Inserted(id) = &outcome {
            self.selected = Some(id.clone());
        }
        outcome
    }

    /// Handle a drop of a raw transfer payload; malformed payloads are ignored
    pub fn drop_raw(&mut self, raw: &str, target: isize) -> DropOutcome {
        match DragPayload::decode(raw) {
            Ok(payload) => self.drop_at(&payload, target),
            Err(e) => {
                warn!(error = %e, "Ignoring drop");
                DropOutcome::Unchanged
            }
        }
    }

    /// Append a template and select its first block
    pub fn apply_template(&mut self, template: Template) -> Option<BlockId> {
        let blocks = template.blocks(&mut self.ids);
        let first = blocks.first().map(|b| b.id.clone());
        self.apply(&Mutation::AppendBlocks { blocks });
        if first.is_some() {
            self.selected = first.clone();
        }
        first
    }

    pub fn remove_selected(&mut self) -> bool {
        let Some(id) = self.selected.clone() else {
            return false;
        };
        self.apply(&Mutation::RemoveBlock { block_id: id });
        self.selected = None;
        true
    }

    pub fn duplicate_selected(&mut self) -> bool {
        let Some(id) = self.selected.clone() else {
            return false;
        };
        self.apply(&Mutation::DuplicateBlock { block_id: id });
        true
    }

    pub fn move_selected(&mut self, direction: Direction) -> bool {
        let Some(id) = self.selected.clone() else {
            return false;
        };
        self.apply(&Mutation::NudgeBlock {
            block_id: id,
            direction,
        });
        true
    }

    pub fn patch_selected(&mut self, props: Props) -> bool {
        let Some(id) = self.selected.clone() else {
            return false;
        };
        self.apply(&Mutation::PatchProps {
            block_id: id,
            props,
        });
        true
    }

    /// Empty the document, clear the selection and delete the persisted key
    pub fn clear(&mut self) {
        self.document = Document::new();
        self.selected = None;
        self.version += 1;
        if let Err(e) = self.store.remove(DOCUMENT_KEY) {
            warn!(error = %e, "Failed to delete persisted document");
        }
        info!("Cleared document");
    }

    /// Write the current document now
    pub fn save(&mut self) -> Result<(), EditorError> {
        let json = self.document.to_json()?;
        self.store.set(DOCUMENT_KEY, &json)?;
        Ok(())
    }

    fn commit(&mut self, blocks: Vec<Block>) {
        self.document = Document { blocks };
        self.version += 1;

        if let Some(id) = &self.selected {
            if !self.document.contains(id) {
                self.selected = None;
            }
        }

        if let Err(e) = self.save() {
            warn!(error = %e, "Failed to persist document");
        }
    }
}

/// Read the persisted document; missing or malformed values give an empty one
pub fn load_document(store: &dyn KeyValueStore) -> Document {
    match store.get(DOCUMENT_KEY) {
        Ok(Some(json)) => Document::from_json(&json).unwrap_or_else(|e| {
            warn!(error = %e, "Persisted document is malformed, starting empty");
            Document::new()
        }),
        Ok(None) => Document::new(),
        Err(e) => {
            warn!(error = %e, "Failed to read persisted document, starting empty");
            Document::new()
        }
    }
}
