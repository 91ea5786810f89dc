//! Static export of a graph document.
//!
//! A graph has no sequence of its own; the page order is read off the canvas
//! top to bottom, then left to right. Edges play no part.

use crate::graph::{GraphDocument, GraphNode};
use std::cmp::Ordering;
use tracing::debug;
use webbuilder_compiler_html::{compile_page, render_blocks, CompileOptions, ExportStyle};

fn by_position(a: &GraphNode, b: &GraphNode) -> Ordering {
    a.position
        .y
        .total_cmp(&b.position.y)
        .then_with(|| a.position.x.total_cmp(&b.position.x))
}

/// Block nodes in page order
pub fn export_order(graph: &GraphDocument) -> Vec<&GraphNode> {
    let mut nodes: Vec<&GraphNode> = graph.nodes.iter().filter(|n| n.is_block()).collect();
    // stable: equal positions keep insertion order
    nodes.sort_by(|a, b| by_position(a, b));
    nodes
}

fn render_nodes(graph: &GraphDocument, style: ExportStyle) -> Vec<String> {
    let ordered = export_order(graph);
    debug!(nodes = ordered.len(), "Exporting graph markup");
    render_blocks(ordered.into_iter().map(|n| &n.data), style)
}

/// Markup of every block node in page order, one per line
pub fn export_markup(graph: &GraphDocument, style: ExportStyle) -> String {
    render_nodes(graph, style).join("\n")
}

/// Full HTML page for a graph document
pub fn compile_graph_page(graph: &GraphDocument, options: CompileOptions) -> String {
    let blocks = render_nodes(graph, options.style);
    compile_page(&blocks, options)
}

/// Page options graph exports use by default: class-styled buttons and images
pub fn graph_page_options() -> CompileOptions {
    CompileOptions {
        style: ExportStyle::Classes,
        ..CompileOptions::default()
    }
}
