//! # Webbuilder Editor
//!
//! Editing engine for the list builder.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────┐
//! │ model: blocks, document, palette, ids       │
//! └─────────────────────────────────────────────┘
//!                     ↓
//! ┌─────────────────────────────────────────────┐
//! │ editor: sequence ops + session              │
//! │  - Pure insert/move/duplicate/remove/patch  │
//! │  - Drag-and-drop payload protocol           │
//! │  - Selection, persistence after each change │
//! └─────────────────────────────────────────────┘
//!                     ↓
//! ┌─────────────────────────────────────────────┐
//! │ evaluator: document → canvas VNode tree     │
//! └─────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//!
//! ```rust,ignore
//! use webbuilder_common::FileStore;
//! use webbuilder_editor::{EditSession, Direction};
//! use webbuilder_model::BlockKind;
//!
//! let store = FileStore::open(".webbuilder")?;
//! let mut session = EditSession::open(Box::new(store));
//!
//! session.add_from_palette(&BlockKind::Heading);
//! session.move_selected(Direction::Up);
//! ```

mod drop;
mod errors;
mod mutations;
mod pipeline;
pub mod sequence;
mod session;
mod theme;

pub use drop::{resolve_drop, DragPayload, DropOutcome, DRAG_MIME};
pub use errors::EditorError;
pub use mutations::Mutation;
pub use pipeline::{Pipeline, PipelineResult};
pub use sequence::Direction;
pub use session::{load_document, EditSession, DOCUMENT_KEY};
pub use theme::{ThemeContext, THEME_KEY};
