//! # Live Preview
//!
//! Renders blocks into a [`VNode`] tree styled with utility classes, and the
//! whole canvas with its drop zones.
//!
//! ## Canvas layout
//!
//! ```text
//! drop(0) block[0] drop(1) block[1] ... block[n-1] drop(n)
//! ```
//!
//! A document of `n` blocks always exposes `n + 1` drop zones; zone `i`
//! sits just before block `i`.

use crate::renderer::BlockRenderer;
use crate::resolve::{ResolvedBlock, SpacingSteps};
use crate::vdom::VNode;
use tracing::debug;
use webbuilder_model::Document;
use webbuilder_style::Spacing;

/// Renders blocks for the interactive canvas
#[derive(Debug, Default, Clone, Copy)]
pub struct LivePreviewRenderer;

impl LivePreviewRenderer {
    pub fn new() -> Self {
        Self
    }
}

fn spacing_classes(node: VNode, spacing: &SpacingSteps, which: &[Spacing]) -> VNode {
    which.iter().fold(node, |node, s| {
        node.with_class(s.class(spacing.get(*s)))
    })
}

impl BlockRenderer for LivePreviewRenderer {
    type Output = VNode;

    fn render_resolved(&self, block: &ResolvedBlock<'_>) -> VNode {
        match block {
            ResolvedBlock::Heading { text, size, align } => VNode::element("h2")
                .with_classes("m-0 font-semibold")
                .with_class(size.class())
                .with_class(align.class())
                .with_child(VNode::text(text.to_string())),

            ResolvedBlock::Text { text, size, align } => VNode::element("p")
                .with_classes("m-0 text-slate-700")
                .with_class(size.class())
                .with_class(align.class())
                .with_child(VNode::text(text.to_string())),

            ResolvedBlock::Button {
                text,
                href,
                variant,
                radius,
                spacing,
            } => {
                let node = VNode::element("a")
                    .with_attr("href", href.to_string())
                    .with_classes("inline-block text-white")
                    .with_class(radius.class())
                    .with_class(variant.background())
                    .with_class(format!("hover:{}", variant.background()));
                spacing_classes(node, spacing, &Spacing::ALL).with_child(VNode::text(text.to_string()))
            }

            ResolvedBlock::Image {
                src,
                alt,
                radius,
                spacing,
            } => {
                let node = VNode::element("img")
                    .with_attr("src", src.to_string())
                    .with_attr("alt", alt.to_string())
                    .with_classes("w-full h-auto")
                    .with_class(radius.class())
                    .with_class("block");
                spacing_classes(node, spacing, &[Spacing::MarginTop, Spacing::MarginBottom])
            }

            ResolvedBlock::Unknown { kind } => VNode::element("div")
                .with_attr("data-block-type", *kind)
                .with_classes("rounded-md border border-dashed border-slate-300 p-2 text-sm text-slate-500")
                .with_child(VNode::text("Unknown block")),
        }
    }
}

/// Canvas-level highlight state
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct CanvasState<'a> {
    pub selected: Option<&'a str>,
    /// Drop zone currently under the pointer
    pub active_drop: Option<usize>,
}

/// A single drop zone between blocks
pub fn render_drop_zone(index: usize, active: bool) -> VNode {
    let zone = VNode::element("div")
        .with_attr("data-drop-index", index.to_string())
        .with_classes("h-3 border-t-2 border-dashed my-1 transition-colors");
    if active {
        zone.with_classes("border-blue-300 bg-blue-100/40")
    } else {
        zone.with_classes("border-blue-200 bg-transparent")
    }
}

/// Render the whole document as the editing canvas
pub fn render_canvas(document: &Document, state: &CanvasState<'_>) -> VNode {
    let renderer = LivePreviewRenderer::new();
    let mut children = Vec::with_capacity(document.len() * 2 + 1);
    children.push(render_drop_zone(0, state.active_drop == Some(0)));

    for (index, block) in document.blocks.iter().enumerate() {
        let selected = state.selected == Some(block.id.as_str());
        let wrapper = VNode::element("div")
            .with_key(block.id.clone())
            .with_attr("draggable", "true")
            .with_attr("data-index", index.to_string())
            .with_classes("cursor-grab rounded-xl border px-3 py-3");
        let wrapper = if selected {
            wrapper.with_classes("border-blue-400 bg-blue-50")
        } else {
            wrapper.with_classes("border-slate-200 bg-slate-50")
        };

        children.push(wrapper.with_child(renderer.render(block)));
        children.push(render_drop_zone(
            index + 1,
            state.active_drop == Some(index + 1),
        ));
    }

    debug!(
        blocks = document.len(),
        drop_zones = document.len() + 1,
        "Rendered canvas"
    );

    VNode::element("div")
        .with_classes("p-3 min-h-[540px] bg-white/70")
        .with_children(children)
}
