//! Palette entries and multi-block templates.
//!
//! A palette entry is a block type plus the props a freshly added block
//! starts with. The list builder and the graph canvas ship slightly
//! different defaults.

use crate::block::{Block, BlockKind, BlockPayload, Props};
use crate::id_generator::IdGenerator;
use serde_json::{json, Value};

#[derive(Debug, Clone, PartialEq)]
pub struct PaletteItem {
    pub kind: BlockKind,
    pub label: &'static str,
    pub defaults: Props,
}

impl PaletteItem {
    fn new(kind: BlockKind, label: &'static str, defaults: Value) -> Self {
        Self {
            kind,
            label,
            defaults: into_props(defaults),
        }
    }

    /// New block from this entry with a fresh id
    pub fn create(&self, ids: &mut IdGenerator) -> Block {
        new_block(ids, self.kind.clone(), &self.defaults)
    }

    pub fn payload(&self) -> BlockPayload {
        BlockPayload::new(self.kind.clone(), self.defaults.clone())
    }
}

/// A new block: fresh id, shallow copy of the defaults
pub fn new_block(ids: &mut IdGenerator, kind: BlockKind, defaults: &Props) -> Block {
    Block::new(ids.new_id(), kind, defaults.clone())
}

#[derive(Debug, Clone, PartialEq)]
pub struct Palette {
    items: Vec<PaletteItem>,
}

impl Palette {
    /// Palette of the list builder
    pub fn builder() -> Self {
        Self {
            items: vec![
                PaletteItem::new(
                    BlockKind::Heading,
                    "Heading",
                    json!({ "text": "A nice headline" }),
                ),
                PaletteItem::new(
                    BlockKind::Text,
                    "Paragraph",
                    json!({ "text": "Write something compelling here." }),
                ),
                PaletteItem::new(
                    BlockKind::Button,
                    "Button",
                    json!({ "text": "Click me", "href": "#" }),
                ),
                PaletteItem::new(
                    BlockKind::Image,
                    "Image",
                    json!({ "src": "https://picsum.photos/800/300", "alt": "Random" }),
                ),
            ],
        }
    }

    /// Palette of the graph canvas
    pub fn flow() -> Self {
        Self {
            items: vec![
                PaletteItem::new(
                    BlockKind::Heading,
                    "Heading",
                    json!({ "text": "A great title", "size": "2xl" }),
                ),
                PaletteItem::new(
                    BlockKind::Text,
                    "Paragraph",
                    json!({ "text": "Write something nice here." }),
                ),
                PaletteItem::new(
                    BlockKind::Button,
                    "Button",
                    json!({ "text": "Click me", "href": "#", "variant": "primary" }),
                ),
                PaletteItem::new(
                    BlockKind::Image,
                    "Image",
                    json!({ "src": "https://picsum.photos/900/300", "alt": "Random", "radius": "lg" }),
                ),
            ],
        }
    }

    pub fn items(&self) -> &[PaletteItem] {
        &self.items
    }

    pub fn get(&self, kind: &BlockKind) -> Option<&PaletteItem> {
        self.items.iter().find(|item| &item.kind == kind)
    }
}

/// Canned block groups appended in one step
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Template {
    HeroCta,
    BannerText,
}

impl Template {
    pub const ALL: [Template; 2] = [Template::HeroCta, Template::BannerText];

    pub fn from_name(name: &str) -> Option<Self> {
        Template::ALL.into_iter().find(|t| t.name() == name)
    }

    pub fn name(&self) -> &'static str {
        match self {
            Template::HeroCta => "hero-cta",
            Template::BannerText => "banner-text",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Template::HeroCta => "Hero CTA",
            Template::BannerText => "Banner + Text",
        }
    }

    /// Fresh blocks for this template, in insertion order
    pub fn blocks(&self, ids: &mut IdGenerator) -> Vec<Block> {
        let specs = match self {
            Template::HeroCta => vec![
                (
                    BlockKind::Heading,
                    json!({ "text": "Hero title", "align": "center", "size": "3xl", "mb": 4 }),
                ),
                (
                    BlockKind::Text,
                    json!({ "text": "Short subtitle goes here", "align": "center", "size": "lg", "mb": 6 }),
                ),
                (
                    BlockKind::Button,
                    json!({ "text": "Get started", "href": "#", "variant": "success", "align": "center", "px": 4, "py": 3 }),
                ),
            ],
            Template::BannerText => vec![
                (
                    BlockKind::Image,
                    json!({ "src": "https://picsum.photos/1200/360", "alt": "Banner", "radius": "lg", "mb": 4 }),
                ),
                (
                    BlockKind::Heading,
                    json!({ "text": "Welcome to Webbuilder", "size": "2xl", "mb": 2 }),
                ),
                (
                    BlockKind::Text,
                    json!({ "text": "Build with drag and drop blocks.", "size": "base", "mb": 4 }),
                ),
            ],
        };

        specs
            .into_iter()
            .map(|(kind, props)| Block::new(ids.new_id(), kind, into_props(props)))
            .collect()
    }
}

fn into_props(value: Value) -> Props {
    match value {
        Value::Object(map) => map,
        _ => Props::new(),
    }
}
