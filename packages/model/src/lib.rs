//! # Webbuilder Model
//!
//! Data model shared by the list builder and the graph canvas: typed blocks
//! with property bags, the ordered list document, session-scoped id
//! generation and the palette a user adds blocks from.

mod block;
mod document;
mod id_generator;
mod palette;

pub use block::{
    prop_number, prop_text, prop_token, Block, BlockContent, BlockId, BlockKind, BlockPayload,
    Props,
};
pub use document::Document;
pub use id_generator::{new_session_seed, IdGenerator};
pub use palette::{new_block, Palette, PaletteItem, Template};
