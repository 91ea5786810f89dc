//! # Graph Document
//!
//! Blocks placed freely on a 2D canvas, with directed edges between them.
//!
//! ## Wire format
//!
//! Nodes and edges use the shape the browser canvas reads and writes:
//!
//! ```json
//! {
//!   "nodes": [
//!     { "id": "n1", "type": "block", "position": { "x": 80, "y": 80 },
//!       "data": { "type": "heading", "props": { "text": "Hi" } } }
//!   ],
//!   "edges": [
//!     { "id": "edge-n1-n2", "source": "n1", "target": "n2", "animated": true }
//!   ]
//! }
//! ```
//!
//! Fields the canvas adds on its own (measured sizes, selection flags,
//! handles) are kept in `extra` and written back untouched.
//!
//! Edges carry no meaning for export. An edge whose endpoint no longer
//! exists is kept but ignored.

use crate::errors::FlowError;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use tracing::debug;
use webbuilder_model::{BlockKind, BlockPayload, IdGenerator, PaletteItem, Props};

/// Node kind for block nodes; the only kind this editor creates
pub const BLOCK_NODE: &str = "block";

/// Transfer type the graph canvas reads palette drops from
pub const FLOW_DRAG_MIME: &str = "application/reactflow";

const CLICK_ADD_X: f64 = 80.0;
const CLICK_ADD_Y: f64 = 80.0;
const CLICK_ADD_STEP: f64 = 40.0;

#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Position {
    pub x: f64,
    pub y: f64,
}

impl Position {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GraphNode {
    pub id: String,
    #[serde(rename = "type", default = "block_node_kind")]
    pub kind: String,
    pub position: Position,
    pub data: BlockPayload,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

fn block_node_kind() -> String {
    BLOCK_NODE.to_string()
}

impl GraphNode {
    pub fn block(id: impl Into<String>, position: Position, data: BlockPayload) -> Self {
        Self {
            id: id.into(),
            kind: block_node_kind(),
            position,
            data,
            extra: Map::new(),
        }
    }

    pub fn is_block(&self) -> bool {
        self.kind == BLOCK_NODE
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GraphEdge {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub source: String,
    pub target: String,
    #[serde(default)]
    pub animated: bool,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl GraphEdge {
    /// Edge id derived from its endpoints
    pub fn id_for(source: &str, target: &str) -> String {
        format!("edge-{}-{}", source, target)
    }

    pub fn new(source: impl Into<String>, target: impl Into<String>) -> Self {
        let source = source.into();
        let target = target.into();
        Self {
            id: Some(Self::id_for(&source, &target)),
            source,
            target,
            animated: true,
            extra: Map::new(),
        }
    }

    /// Id if present, otherwise the endpoint-derived one
    pub fn effective_id(&self) -> String {
        self.id
            .clone()
            .unwrap_or_else(|| Self::id_for(&self.source, &self.target))
    }
}

/// Payload a palette item carries when dragged onto the graph canvas
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FlowDropPayload {
    #[serde(rename = "type")]
    pub kind: BlockKind,
    #[serde(default)]
    pub defaults: Props,
}

impl FlowDropPayload {
    pub fn from_item(item: &PaletteItem) -> Self {
        Self {
            kind: item.kind.clone(),
            defaults: item.defaults.clone(),
        }
    }

    pub fn decode(raw: &str) -> Result<Self, FlowError> {
        if raw.trim().is_empty() {
            return Err(FlowError::EmptyPayload);
        }
        serde_json::from_str(raw).map_err(|e| FlowError::InvalidPayload(e.to_string()))
    }

    pub fn encode(&self) -> Result<String, FlowError> {
        Ok(serde_json::to_string(self)?)
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct GraphDocument {
    #[serde(default)]
    pub nodes: Vec<GraphNode>,
    #[serde(default)]
    pub edges: Vec<GraphEdge>,
}

impl GraphDocument {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty() && self.edges.is_empty()
    }

    pub fn node(&self, id: &str) -> Option<&GraphNode> {
        self.nodes.iter().find(|n| n.id == id)
    }

    fn node_mut(&mut self, id: &str) -> Option<&mut GraphNode> {
        self.nodes.iter_mut().find(|n| n.id == id)
    }

    /// Add a block node; returns its id
    pub fn add_node(
        &mut self,
        data: BlockPayload,
        position: Position,
        ids: &mut IdGenerator,
    ) -> String {
        let id = ids.new_id();
        self.nodes.push(GraphNode::block(id.clone(), position, data));
        debug!(node_id = %id, x = position.x, y = position.y, "Added node");
        id
    }

    /// Add a palette item by click, stacked below the previous ones
    pub fn add_from_palette(&mut self, item: &PaletteItem, ids: &mut IdGenerator) -> String {
        let position = Position::new(
            CLICK_ADD_X,
            CLICK_ADD_Y + CLICK_ADD_STEP * self.nodes.len() as f64,
        );
        self.add_node(item.payload(), position, ids)
    }

    /// Add the block described by a drop payload at a canvas position
    pub fn drop_payload(
        &mut self,
        payload: &FlowDropPayload,
        position: Position,
        ids: &mut IdGenerator,
    ) -> String {
        let data = BlockPayload::new(payload.kind.clone(), payload.defaults.clone());
        self.add_node(data, position, ids)
    }

    pub fn move_node(&mut self, id: &str, position: Position) -> bool {
        match self.node_mut(id) {
            Some(node) => {
                node.position = position;
                true
            }
            None => false,
        }
    }

    /// Shallow-merge props into a node's block payload
    pub fn patch_node_props(&mut self, id: &str, patch: &Props) -> bool {
        match self.node_mut(id) {
            Some(node) => {
                for (key, value) in patch {
                    node.data.props.insert(key.clone(), value.clone());
                }
                true
            }
            None => false,
        }
    }

    /// Remove a node together with every edge touching it
    pub fn remove_node(&mut self, id: &str) -> bool {
        let before = self.nodes.len();
        self.nodes.retain(|n| n.id != id);
        if self.nodes.len() == before {
            return false;
        }
        self.edges.retain(|e| e.source != id && e.target != id);
        true
    }

    /// Connect two existing nodes; returns the new edge id.
    ///
    /// Connecting a pair that is already connected in the same direction
    /// adds nothing. Self-loops are allowed.
    pub fn connect(&mut self, source: &str, target: &str) -> Option<String> {
        if self.node(source).is_none() || self.node(target).is_none() {
            debug!(source, target, "Ignoring connection to unknown node");
            return None;
        }
        if self
            .edges
            .iter()
            .any(|e| e.source == source && e.target == target)
        {
            return None;
        }

        let edge = GraphEdge::new(source, target);
        let id = edge.effective_id();
        self.edges.push(edge);
        Some(id)
    }

    pub fn disconnect(&mut self, edge_id: &str) -> bool {
        let before = self.edges.len();
        self.edges.retain(|e| e.effective_id() != edge_id);
        self.edges.len() != before
    }

    pub fn clear(&mut self) {
        self.nodes.clear();
        self.edges.clear();
    }

    /// Edges with both endpoints present
    pub fn live_edges(&self) -> impl Iterator<Item = &GraphEdge> {
        self.edges
            .iter()
            .filter(|e| self.node(&e.source).is_some() && self.node(&e.target).is_some())
    }

    pub fn to_json(&self) -> Result<String, FlowError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn from_json(json: &str) -> Result<Self, FlowError> {
        Ok(serde_json::from_str(json)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use webbuilder_model::Palette;

    fn graph_with(n: usize, ids: &mut IdGenerator) -> GraphDocument {
        let mut graph = GraphDocument::new();
        let palette = Palette::flow();
        for _ in 0..n {
            graph.add_from_palette(&palette.items()[0], ids);
        }
        graph
    }

    #[test]
    fn test_click_add_stacks_nodes() {
        let mut ids = IdGenerator::from_seed("g");
        let graph = graph_with(3, &mut ids);

        let ys: Vec<f64> = graph.nodes.iter().map(|n| n.position.y).collect();
        assert_eq!(ys, vec![80.0, 120.0, 160.0]);
        assert!(graph.nodes.iter().all(|n| n.position.x == 80.0 && n.is_block()));
        assert_eq!(graph.nodes[0].data.props["size"], "2xl");
    }

    #[test]
    fn test_drop_payload_places_node() {
        let mut ids = IdGenerator::from_seed("g");
        let mut graph = GraphDocument::new();
        let payload =
            FlowDropPayload::decode(r#"{"type":"button","defaults":{"text":"Buy"}}"#).unwrap();

        let id = graph.drop_payload(&payload, Position::new(12.5, 40.0), &mut ids);
        let node = graph.node(&id).unwrap();
        assert_eq!(node.position, Position::new(12.5, 40.0));
        assert_eq!(node.data.kind, BlockKind::Button);
        assert_eq!(node.data.props["text"], "Buy");
    }

    #[test]
    fn test_drop_payload_rejects_garbage() {
        assert!(matches!(FlowDropPayload::decode(" "), Err(FlowError::EmptyPayload)));
        assert!(FlowDropPayload::decode(r#"{"defaults":{}}"#).is_err());
    }

    #[test]
    fn test_connect_skips_duplicates_and_unknown_nodes() {
        let mut ids = IdGenerator::from_seed("g");
        let mut graph = graph_with(2, &mut ids);

        assert_eq!(graph.connect("g-1", "g-2"), Some("edge-g-1-g-2".to_string()));
        assert_eq!(graph.connect("g-1", "g-2"), None);
        assert_eq!(graph.connect("g-2", "g-1"), Some("edge-g-2-g-1".to_string()));
        assert_eq!(graph.connect("g-1", "g-1"), Some("edge-g-1-g-1".to_string()));
        assert_eq!(graph.connect("g-1", "nope"), None);
        assert_eq!(graph.edges.len(), 3);
        assert!(graph.edges.iter().all(|e| e.animated));
    }

    #[test]
    fn test_remove_node_drops_its_edges() {
        let mut ids = IdGenerator::from_seed("g");
        let mut graph = graph_with(3, &mut ids);
        graph.connect("g-1", "g-2");
        graph.connect("g-2", "g-3");
        graph.connect("g-1", "g-3");

        assert!(graph.remove_node("g-2"));
        assert_eq!(graph.nodes.len(), 2);
        assert_eq!(graph.edges.len(), 1);
        assert!(!graph.remove_node("g-2"));
    }

    #[test]
    fn test_disconnect_and_clear() {
        let mut ids = IdGenerator::from_seed("g");
        let mut graph = graph_with(2, &mut ids);
        let edge = graph.connect("g-1", "g-2").unwrap();

        assert!(graph.disconnect(&edge));
        assert!(!graph.disconnect(&edge));

        graph.clear();
        assert!(graph.is_empty());
    }

    #[test]
    fn test_move_and_patch() {
        let mut ids = IdGenerator::from_seed("g");
        let mut graph = graph_with(1, &mut ids);

        assert!(graph.move_node("g-1", Position::new(5.0, 6.0)));
        assert!(graph.patch_node_props(
            "g-1",
            json!({"text": "New"}).as_object().unwrap()
        ));
        assert!(!graph.move_node("x", Position::default()));
        assert!(!graph.patch_node_props("x", &Props::new()));

        let node = graph.node("g-1").unwrap();
        assert_eq!(node.position.y, 6.0);
        assert_eq!(node.data.props["text"], "New");
        assert_eq!(node.data.props["size"], "2xl");
    }

    #[test]
    fn test_dangling_edges_are_kept_but_not_live() {
        let json = r#"{
            "nodes": [{"id": "a", "type": "block", "position": {"x": 0, "y": 0},
                       "data": {"type": "text", "props": {}}}],
            "edges": [{"source": "a", "target": "ghost"}]
        }"#;
        let graph = GraphDocument::from_json(json).unwrap();

        assert_eq!(graph.edges.len(), 1);
        assert_eq!(graph.live_edges().count(), 0);
        assert_eq!(graph.edges[0].effective_id(), "edge-a-ghost");
        assert!(!graph.edges[0].animated);
    }

    #[test]
    fn test_canvas_fields_survive_round_trip() {
        let json = r#"{
            "nodes": [{"id": "a", "type": "block", "position": {"x": 1.5, "y": 2},
                       "data": {"type": "heading", "props": {"text": "T"}},
                       "width": 180, "selected": true}],
            "edges": []
        }"#;
        let graph = GraphDocument::from_json(json).unwrap();
        assert_eq!(graph.nodes[0].extra["width"], 180);

        let again = GraphDocument::from_json(&graph.to_json().unwrap()).unwrap();
        assert_eq!(again, graph);
    }

    #[test]
    fn test_missing_collections_default_to_empty() {
        let graph = GraphDocument::from_json("{}").unwrap();
        assert!(graph.is_empty());
    }
}
