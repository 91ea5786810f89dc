//! Canvas preview of graph nodes.
//!
//! Each node renders its block with the live preview renderer inside a card.
//! The canvas places cards absolutely at their positions and lists the live
//! edges; the host's graph library draws the connectors.

use crate::graph::{GraphDocument, GraphNode};
use tracing::debug;
use webbuilder_evaluator::{BlockRenderer, LivePreviewRenderer, VNode};

/// Card preview for one node
pub fn render_node_preview(node: &GraphNode) -> VNode {
    VNode::element("div")
        .with_key(node.id.clone())
        .with_attr("data-node-id", node.id.clone())
        .with_classes("rounded-xl border bg-white px-3 py-2 min-w-[160px]")
        .with_child(LivePreviewRenderer::new().render(&node.data))
}

/// Whole graph canvas
pub fn render_graph_preview(graph: &GraphDocument) -> VNode {
    let cards = graph.nodes.iter().filter(|n| n.is_block()).map(|node| {
        render_node_preview(node).with_attr(
            "style",
            format!(
                "position:absolute;left:{}px;top:{}px;",
                node.position.x, node.position.y
            ),
        )
    });

    let edges: Vec<VNode> = graph
        .live_edges()
        .map(|edge| {
            VNode::element("div")
                .with_attr("data-edge-id", edge.effective_id())
                .with_attr("data-source", edge.source.clone())
                .with_attr("data-target", edge.target.clone())
        })
        .collect();

    let dangling = graph.edges.len() - edges.len();
    if dangling > 0 {
        debug!(dangling, "Skipped edges with missing endpoints");
    }

    VNode::element("div")
        .with_classes("relative h-[70vh] overflow-hidden")
        .with_children(cards.collect())
        .with_children(edges)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::Position;
    use webbuilder_model::{BlockKind, BlockPayload, IdGenerator, Palette, Props};

    #[test]
    fn test_node_preview_renders_block() {
        let node = GraphNode::block(
            "n1",
            Position::new(10.0, 20.0),
            BlockPayload::new(BlockKind::Text, Props::new()),
        );
        let preview = render_node_preview(&node);

        assert_eq!(preview.attr("data-node-id"), Some("n1"));
        assert_eq!(preview.children()[0].tag(), Some("p"));
        assert_eq!(preview.text_content(), "Paragraph");
    }

    #[test]
    fn test_graph_preview_positions_cards() {
        let mut ids = IdGenerator::from_seed("v");
        let mut graph = GraphDocument::new();
        let palette = Palette::flow();
        graph.add_from_palette(&palette.items()[0], &mut ids);
        graph.add_from_palette(&palette.items()[2], &mut ids);
        graph.connect("v-1", "v-2");

        let canvas = render_graph_preview(&graph);
        assert_eq!(canvas.children().len(), 3);
        assert_eq!(
            canvas.children()[1].attr("style"),
            Some("position:absolute;left:80px;top:120px;")
        );
        assert_eq!(canvas.children()[2].attr("data-edge-id"), Some("edge-v-1-v-2"));
    }

    #[test]
    fn test_dangling_edges_do_not_break_rendering() {
        let mut ids = IdGenerator::from_seed("v");
        let mut graph = GraphDocument::new();
        graph.add_from_palette(&Palette::flow().items()[1], &mut ids);
        graph.edges.push(crate::graph::GraphEdge::new("v-1", "gone"));
        graph.edges.push(crate::graph::GraphEdge::new("gone", "also-gone"));

        let canvas = render_graph_preview(&graph);
        assert_eq!(canvas.children().len(), 1);
    }
}
