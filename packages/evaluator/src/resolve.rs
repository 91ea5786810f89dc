//! # Block resolution
//!
//! The block→markup logic both renderers share. A block's raw prop bag is
//! resolved once into a typed view with every default applied and every
//! style prop mapped through the token tables; renderers only decide how
//! that view is spelled.
//!
//! | type    | element | content props (default)                        |
//! |---------|---------|------------------------------------------------|
//! | heading | `h2`    | `text` ("Heading")                             |
//! | text    | `p`     | `text` ("Paragraph")                           |
//! | button  | `a`     | `text` ("Click me"), `href` ("#")              |
//! | image   | `img`   | `src` (placeholder URL), `alt` ("Image")       |
//!
//! Empty strings count as absent.

use std::borrow::Cow;
use webbuilder_model::{prop_number, prop_text, prop_token, BlockContent, BlockKind, Props};
use webbuilder_style::{clamp_spacing, Align, Radius, Spacing, TextSize, Variant};

pub const DEFAULT_HEADING_TEXT: &str = "Heading";
pub const DEFAULT_PARAGRAPH_TEXT: &str = "Paragraph";
pub const DEFAULT_BUTTON_TEXT: &str = "Click me";
pub const DEFAULT_HREF: &str = "#";
pub const DEFAULT_IMAGE_SRC: &str = "https://picsum.photos/800/300";
pub const DEFAULT_IMAGE_ALT: &str = "Image";

/// Spacing steps after defaults and clamping
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SpacingSteps {
    pub px: u8,
    pub py: u8,
    pub mt: u8,
    pub mb: u8,
}

impl SpacingSteps {
    pub fn from_props(props: &Props) -> Self {
        let step = |spacing: Spacing| {
            prop_number(props, spacing.key())
                .map(clamp_spacing)
                .unwrap_or_else(|| spacing.default_step())
        };
        Self {
            px: step(Spacing::PaddingX),
            py: step(Spacing::PaddingY),
            mt: step(Spacing::MarginTop),
            mb: step(Spacing::MarginBottom),
        }
    }

    pub fn get(&self, spacing: Spacing) -> u8 {
        match spacing {
            Spacing::PaddingX => self.px,
            Spacing::PaddingY => self.py,
            Spacing::MarginTop => self.mt,
            Spacing::MarginBottom => self.mb,
        }
    }
}

/// A block with defaults applied, ready to render
#[derive(Debug, Clone, PartialEq)]
pub enum ResolvedBlock<'a> {
    Heading {
        text: Cow<'a, str>,
        size: TextSize,
        align: Align,
    },
    Text {
        text: Cow<'a, str>,
        size: TextSize,
        align: Align,
    },
    Button {
        text: Cow<'a, str>,
        href: Cow<'a, str>,
        variant: Variant,
        radius: Radius,
        spacing: SpacingSteps,
    },
    Image {
        src: Cow<'a, str>,
        alt: Cow<'a, str>,
        radius: Radius,
        spacing: SpacingSteps,
    },
    Unknown {
        kind: &'a str,
    },
}

/// Resolve any block-like value
pub fn resolve<B: BlockContent + ?Sized>(block: &B) -> ResolvedBlock<'_> {
    let props = block.props();
    let text_or = |key: &str, default: &'static str| {
        prop_text(props, key).unwrap_or(Cow::Borrowed(default))
    };

    match block.kind() {
        BlockKind::Heading => ResolvedBlock::Heading {
            text: text_or("text", DEFAULT_HEADING_TEXT),
            size: TextSize::from_token(prop_token(props, "size")),
            align: Align::from_token(prop_token(props, "align")),
        },
        BlockKind::Text => ResolvedBlock::Text {
            text: text_or("text", DEFAULT_PARAGRAPH_TEXT),
            size: TextSize::from_token(prop_token(props, "size")),
            align: Align::from_token(prop_token(props, "align")),
        },
        BlockKind::Button => ResolvedBlock::Button {
            text: text_or("text", DEFAULT_BUTTON_TEXT),
            href: text_or("href", DEFAULT_HREF),
            variant: Variant::from_token(prop_token(props, "variant")),
            radius: Radius::from_token(prop_token(props, "radius")),
            spacing: SpacingSteps::from_props(props),
        },
        BlockKind::Image => ResolvedBlock::Image {
            src: text_or("src", DEFAULT_IMAGE_SRC),
            alt: text_or("alt", DEFAULT_IMAGE_ALT),
            radius: Radius::from_token(prop_token(props, "radius")),
            spacing: SpacingSteps::from_props(props),
        },
        BlockKind::Other(name) => ResolvedBlock::Unknown {
            kind: name.as_str(),
        },
    }
}

impl ResolvedBlock<'_> {
    /// HTML element both renderers emit for this block
    pub fn tag(&self) -> &'static str {
        match self {
            ResolvedBlock::Heading { .. } => "h2",
            ResolvedBlock::Text { .. } => "p",
            ResolvedBlock::Button { .. } => "a",
            ResolvedBlock::Image { .. } => "img",
            ResolvedBlock::Unknown { .. } => "div",
        }
    }
}
