//! # Webbuilder Evaluator
//!
//! Turns blocks into renderings. [`resolve`] applies defaults and style
//! tokens once; [`BlockRenderer`] implementations spell the result. The live
//! preview here produces a [`VNode`] tree, the static exporter in
//! `webbuilder-compiler-html` produces markup text from the same resolution.

pub mod preview;
pub mod renderer;
pub mod resolve;
pub mod vdom;

pub use preview::{render_canvas, render_drop_zone, CanvasState, LivePreviewRenderer};
pub use renderer::BlockRenderer;
pub use resolve::{
    resolve, ResolvedBlock, SpacingSteps, DEFAULT_BUTTON_TEXT, DEFAULT_HEADING_TEXT,
    DEFAULT_HREF, DEFAULT_IMAGE_ALT, DEFAULT_IMAGE_SRC, DEFAULT_PARAGRAPH_TEXT,
};
pub use vdom::VNode;
