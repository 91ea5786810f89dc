//! # Webbuilder Flow
//!
//! The graph canvas mode: block nodes at free positions, directed edges
//! between them, and a static export that reads the page order off the
//! canvas.

mod errors;
mod export;
mod graph;
mod preview;

pub use errors::FlowError;
pub use export::{compile_graph_page, export_markup, export_order, graph_page_options};
pub use graph::{
    FlowDropPayload, GraphDocument, GraphEdge, GraphNode, Position, BLOCK_NODE, FLOW_DRAG_MIME,
};
pub use preview::{render_graph_preview, render_node_preview};
