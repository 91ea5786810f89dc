//! # Editing Pipeline
//!
//! Coordinates Mutate → Render for the list canvas.
//!
//! The Pipeline manages:
//! - Applying mutations through the session
//! - Re-rendering the canvas preview
//! - Drop-zone highlight state while a drag is in flight

use crate::drop::DropOutcome;
use crate::mutations::Mutation;
use crate::session::EditSession;
use webbuilder_evaluator::{render_canvas, CanvasState, VNode};

/// Manages the edit → render pipeline
pub struct Pipeline {
    session: EditSession,
    active_drop: Option<usize>,
    last_canvas: Option<VNode>,
}

impl Pipeline {
    pub fn new(session: EditSession) -> Self {
        Self {
            session,
            active_drop: None,
            last_canvas: None,
        }
    }

    /// Apply mutation and re-render
    pub fn apply_mutation(&mut self, mutation: &Mutation) -> PipelineResult {
        self.session.apply(mutation);
        self.render()
    }

    /// Drop a raw drag payload on a target, ending the drag
    pub fn drop_raw(&mut self, raw: &str, target: isize) -> (DropOutcome, PipelineResult) {
        self.active_drop = None;
        let outcome = self.session.drop_raw(raw, target);
        (outcome, self.render())
    }

    /// Highlight the drop zone under the pointer, or none
    pub fn set_active_drop(&mut self, index: Option<usize>) -> PipelineResult {
        self.active_drop = index.filter(|i| *i <= self.session.document().len());
        self.render()
    }

    /// Full re-render (initial paint, recovery)
    pub fn render(&mut self) -> PipelineResult {
        let state = CanvasState {
            selected: self.session.selected_id(),
            active_drop: self.active_drop,
        };
        let canvas = render_canvas(self.session.document(), &state);
        self.last_canvas = Some(canvas.clone());

        PipelineResult {
            version: self.session.version(),
            canvas,
        }
    }

    pub fn session(&self) -> &EditSession {
        &self.session
    }

    /// Mutable session access; call [`Pipeline::render`] afterwards
    pub fn session_mut(&mut self) -> &mut EditSession {
        &mut self.session
    }

    /// Get last canvas (if any)
    pub fn last_canvas(&self) -> Option<&VNode> {
        self.last_canvas.as_ref()
    }

    /// Clear canvas cache
    pub fn clear_cache(&mut self) {
        self.last_canvas = None;
    }
}

/// Result of pipeline execution
#[derive(Debug, Clone)]
pub struct PipelineResult {
    /// Session version the canvas was rendered from
    pub version: u64,
    pub canvas: VNode,
}

#[cfg(test)]
mod tests {
    use super::*;
    use webbuilder_common::MemoryStore;
    use webbuilder_model::{BlockKind, IdGenerator};

    fn pipeline() -> Pipeline {
        Pipeline::new(EditSession::with_ids(
            Box::new(MemoryStore::new()),
            IdGenerator::from_seed("p"),
        ))
    }

    #[test]
    fn test_pipeline_initial_render() {
        let mut pipeline = pipeline();
        let result = pipeline.render();

        assert_eq!(result.version, 0);
        assert_eq!(result.canvas.children().len(), 1);
        assert!(pipeline.last_canvas().is_some());
    }

    #[test]
    fn test_pipeline_drop_renders_selection() {
        let mut pipeline = pipeline();
        pipeline.set_active_drop(Some(0));
        let (outcome, result) = pipeline.drop_raw(
            r#"{"source":"palette","type":"heading","defaults":{"text":"Hi"}}"#,
            0,
        );

        assert_eq!(outcome, DropOutcome::Inserted("p-1".to_string()));
        assert_eq!(result.version, 1);
        let wrapper = result
            .canvas
            .children()
            .iter()
            .find(|n| n.key() == Some("p-1"))
            .unwrap();
        assert!(wrapper.has_class("border-blue-400"));
        assert!(result
            .canvas
            .children()
            .iter()
            .all(|n| !n.has_class("bg-blue-100/40")));
    }

    #[test]
    fn test_active_drop_out_of_range_is_ignored() {
        let mut pipeline = pipeline();
        pipeline.session_mut().add_from_palette(&BlockKind::Text);
        let result = pipeline.set_active_drop(Some(9));
        assert!(result
            .canvas
            .children()
            .iter()
            .all(|n| !n.has_class("bg-blue-100/40")));
    }

    #[test]
    fn test_pipeline_mutation_increments_version() {
        let mut pipeline = pipeline();
        let result = pipeline.apply_mutation(&Mutation::Clear);
        assert_eq!(result.version, 1);
    }
}
