//! Blocks: the typed content units a page is built from.

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;
use std::borrow::Cow;
use std::fmt;

/// Opaque block identifier, unique within a document
pub type BlockId = String;

/// Property bag carried by every block. Values are JSON so numeric spacing
/// steps and free text can live side by side.
pub type Props = serde_json::Map<String, Value>;

/// Block type. Names outside the known set are kept verbatim so documents
/// written by newer builds survive a load/save cycle.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum BlockKind {
    Heading,
    Text,
    Button,
    Image,
    Other(String),
}

impl BlockKind {
    pub const KNOWN: [BlockKind; 4] = [
        BlockKind::Heading,
        BlockKind::Text,
        BlockKind::Button,
        BlockKind::Image,
    ];

    pub fn as_str(&self) -> &str {
        match self {
            BlockKind::Heading => "heading",
            BlockKind::Text => "text",
            BlockKind::Button => "button",
            BlockKind::Image => "image",
            BlockKind::Other(name) => name,
        }
    }

    pub fn is_known(&self) -> bool {
        !matches!(self, BlockKind::Other(_))
    }
}

impl From<String> for BlockKind {
    fn from(name: String) -> Self {
        match name.as_str() {
            "heading" => BlockKind::Heading,
            "text" => BlockKind::Text,
            "button" => BlockKind::Button,
            "image" => BlockKind::Image,
            _ => BlockKind::Other(name),
        }
    }
}

impl From<&str> for BlockKind {
    fn from(name: &str) -> Self {
        BlockKind::from(name.to_string())
    }
}

impl From<BlockKind> for String {
    fn from(kind: BlockKind) -> Self {
        match kind {
            BlockKind::Other(name) => name,
            known => known.as_str().to_string(),
        }
    }
}

impl fmt::Display for BlockKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Anything that carries a block type and a property bag.
///
/// Implemented by list blocks and by graph node payloads so renderers can
/// accept either.
pub trait BlockContent {
    fn kind(&self) -> &BlockKind;
    fn props(&self) -> &Props;
}

/// Missing or `null` props read as an empty bag
fn props_or_empty<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Props, D::Error> {
    Ok(Option::<Props>::deserialize(deserializer)?.unwrap_or_default())
}

/// A block in the list document
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Block {
    pub id: BlockId,
    #[serde(rename = "type")]
    pub kind: BlockKind,
    #[serde(default, deserialize_with = "props_or_empty")]
    pub props: Props,
}

impl Block {
    pub fn new(id: impl Into<BlockId>, kind: BlockKind, props: Props) -> Self {
        Self {
            id: id.into(),
            kind,
            props,
        }
    }

    /// Copy of this block under a new id; props are cloned shallowly
    pub fn duplicate_as(&self, id: impl Into<BlockId>) -> Self {
        Self {
            id: id.into(),
            kind: self.kind.clone(),
            props: self.props.clone(),
        }
    }

    /// Shallow-merge `patch` into the props; keys in the patch win
    pub fn merge_props(&mut self, patch: &Props) {
        for (key, value) in patch {
            self.props.insert(key.clone(), value.clone());
        }
    }
}

impl BlockContent for Block {
    fn kind(&self) -> &BlockKind {
        &self.kind
    }

    fn props(&self) -> &Props {
        &self.props
    }
}

/// Block type and props without identity, as carried by graph nodes
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BlockPayload {
    #[serde(rename = "type")]
    pub kind: BlockKind,
    #[serde(default, deserialize_with = "props_or_empty")]
    pub props: Props,
}

impl BlockPayload {
    pub fn new(kind: BlockKind, props: Props) -> Self {
        Self { kind, props }
    }
}

impl BlockContent for BlockPayload {
    fn kind(&self) -> &BlockKind {
        &self.kind
    }

    fn props(&self) -> &Props {
        &self.props
    }
}

/// Read a prop as display text.
///
/// Missing keys, `null` and empty strings count as absent so callers can
/// substitute their default. Numbers and booleans are stringified.
pub fn prop_text<'a>(props: &'a Props, key: &str) -> Option<Cow<'a, str>> {
    match props.get(key)? {
        Value::Null => None,
        Value::String(s) if s.is_empty() => None,
        Value::String(s) => Some(Cow::Borrowed(s.as_str())),
        Value::Number(n) => Some(Cow::Owned(n.to_string())),
        Value::Bool(b) => Some(Cow::Owned(b.to_string())),
        other => Some(Cow::Owned(other.to_string())),
    }
}

/// Read a prop as a plain token (`size`, `align`, ...); only strings qualify
pub fn prop_token<'a>(props: &'a Props, key: &str) -> Option<&'a str> {
    props.get(key).and_then(Value::as_str)
}

/// Read a prop as a number. Numeric strings are accepted.
pub fn prop_number(props: &Props, key: &str) -> Option<f64> {
    match props.get(key)? {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse::<f64>().ok(),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn props(value: Value) -> Props {
        value.as_object().cloned().unwrap()
    }

    #[test]
    fn test_block_json_shape() {
        let block = Block::new("b-1", BlockKind::Heading, props(json!({"text": "Hi"})));
        let json = serde_json::to_value(&block).unwrap();
        assert_eq!(json, json!({"id": "b-1", "type": "heading", "props": {"text": "Hi"}}));
    }

    #[test]
    fn test_unknown_kind_survives_round_trip() {
        let block: Block =
            serde_json::from_value(json!({"id": "x", "type": "video", "props": {}})).unwrap();
        assert_eq!(block.kind, BlockKind::Other("video".to_string()));
        assert!(!block.kind.is_known());

        let back = serde_json::to_value(&block).unwrap();
        assert_eq!(back["type"], "video");
    }

    #[test]
    fn test_missing_props_default_to_empty() {
        let block: Block = serde_json::from_value(json!({"id": "x", "type": "text"})).unwrap();
        assert!(block.props.is_empty());
    }

    #[test]
    fn test_null_props_read_as_empty() {
        let block: Block =
            serde_json::from_value(json!({"id": "x", "type": "text", "props": null})).unwrap();
        assert!(block.props.is_empty());

        let payload: BlockPayload =
            serde_json::from_value(json!({"type": "image", "props": null})).unwrap();
        assert!(payload.props.is_empty());
    }

    #[test]
    fn test_merge_props_is_shallow() {
        let mut block = Block::new(
            "b-1",
            BlockKind::Button,
            props(json!({"text": "Go", "href": "#", "px": 3})),
        );
        block.merge_props(&props(json!({"text": "Buy", "px": 5})));
        assert_eq!(block.props["text"], "Buy");
        assert_eq!(block.props["href"], "#");
        assert_eq!(block.props["px"], 5);
    }

    #[test]
    fn test_duplicate_keeps_kind_and_props() {
        let block = Block::new("a", BlockKind::Image, props(json!({"alt": "Cat"})));
        let copy = block.duplicate_as("b");
        assert_eq!(copy.id, "b");
        assert_eq!(copy.kind, block.kind);
        assert_eq!(copy.props, block.props);
    }

    #[test]
    fn test_prop_readers() {
        let bag = props(json!({"text": "", "count": 4, "flag": true, "px": "7", "size": "lg"}));
        assert_eq!(prop_text(&bag, "text"), None);
        assert_eq!(prop_text(&bag, "count").as_deref(), Some("4"));
        assert_eq!(prop_text(&bag, "flag").as_deref(), Some("true"));
        assert_eq!(prop_text(&bag, "missing"), None);
        assert_eq!(prop_number(&bag, "px"), Some(7.0));
        assert_eq!(prop_number(&bag, "size"), None);
        assert_eq!(prop_token(&bag, "size"), Some("lg"));
        assert_eq!(prop_token(&bag, "count"), None);
    }
}
