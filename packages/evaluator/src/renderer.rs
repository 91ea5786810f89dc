use crate::resolve::{resolve, ResolvedBlock};
use webbuilder_model::BlockContent;

/// A way of spelling resolved blocks.
///
/// Implementations only map a [`ResolvedBlock`] to their output; defaults,
/// token lookups and spacing clamps happen in [`resolve`] so every renderer
/// agrees on what a block means.
pub trait BlockRenderer {
    type Output;

    fn render_resolved(&self, block: &ResolvedBlock<'_>) -> Self::Output;

    fn render<B: BlockContent + ?Sized>(&self, block: &B) -> Self::Output {
        self.render_resolved(&resolve(block))
    }
}
