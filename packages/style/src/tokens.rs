//! Semantic style properties and the presentation tokens they map to.
//!
//! Every lookup is total: unrecognized or missing input resolves to the
//! token's documented default instead of failing.

use serde::{Deserialize, Serialize};

/// Lowest spacing step the property panel accepts
pub const SPACING_MIN: u8 = 0;

/// Highest spacing step the property panel accepts
pub const SPACING_MAX: u8 = 16;

/// Text scale (`size` prop)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum TextSize {
    #[serde(rename = "sm")]
    Sm,
    #[default]
    #[serde(rename = "base")]
    Base,
    #[serde(rename = "lg")]
    Lg,
    #[serde(rename = "xl")]
    Xl,
    #[serde(rename = "2xl")]
    Xl2,
    #[serde(rename = "3xl")]
    Xl3,
}

impl TextSize {
    pub const ALL: [TextSize; 6] = [
        TextSize::Sm,
        TextSize::Base,
        TextSize::Lg,
        TextSize::Xl,
        TextSize::Xl2,
        TextSize::Xl3,
    ];

    pub fn from_token(token: Option<&str>) -> Self {
        match token {
            Some("sm") => TextSize::Sm,
            Some("lg") => TextSize::Lg,
            Some("xl") => TextSize::Xl,
            Some("2xl") => TextSize::Xl2,
            Some("3xl") => TextSize::Xl3,
            _ => TextSize::Base,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            TextSize::Sm => "sm",
            TextSize::Base => "base",
            TextSize::Lg => "lg",
            TextSize::Xl => "xl",
            TextSize::Xl2 => "2xl",
            TextSize::Xl3 => "3xl",
        }
    }

    pub fn class(&self) -> &'static str {
        match self {
            TextSize::Sm => "text-sm",
            TextSize::Base => "text-base",
            TextSize::Lg => "text-lg",
            TextSize::Xl => "text-xl",
            TextSize::Xl2 => "text-2xl",
            TextSize::Xl3 => "text-3xl",
        }
    }
}

/// Corner rounding (`radius` prop)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Radius {
    #[serde(rename = "none")]
    None,
    #[serde(rename = "sm")]
    Sm,
    #[serde(rename = "md")]
    Md,
    #[serde(rename = "lg")]
    Lg,
    #[default]
    #[serde(rename = "xl")]
    Xl,
    #[serde(rename = "2xl")]
    Xl2,
    #[serde(rename = "full")]
    Full,
}

impl Radius {
    pub const ALL: [Radius; 7] = [
        Radius::None,
        Radius::Sm,
        Radius::Md,
        Radius::Lg,
        Radius::Xl,
        Radius::Xl2,
        Radius::Full,
    ];

    pub fn from_token(token: Option<&str>) -> Self {
        match token {
            Some("none") => Radius::None,
            Some("sm") => Radius::Sm,
            Some("md") => Radius::Md,
            Some("lg") => Radius::Lg,
            Some("2xl") => Radius::Xl2,
            Some("full") => Radius::Full,
            _ => Radius::Xl,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Radius::None => "none",
            Radius::Sm => "sm",
            Radius::Md => "md",
            Radius::Lg => "lg",
            Radius::Xl => "xl",
            Radius::Xl2 => "2xl",
            Radius::Full => "full",
        }
    }

    pub fn class(&self) -> &'static str {
        match self {
            Radius::None => "rounded-none",
            Radius::Sm => "rounded-sm",
            Radius::Md => "rounded-md",
            Radius::Lg => "rounded-lg",
            Radius::Xl => "rounded-xl",
            Radius::Xl2 => "rounded-2xl",
            Radius::Full => "rounded-full",
        }
    }
}

/// Button color variant (`variant` prop)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Variant {
    #[default]
    Primary,
    Success,
    Danger,
    Muted,
}

impl Variant {
    pub const ALL: [Variant; 4] = [
        Variant::Primary,
        Variant::Success,
        Variant::Danger,
        Variant::Muted,
    ];

    pub fn from_token(token: Option<&str>) -> Self {
        match token {
            Some("success") => Variant::Success,
            Some("danger") => Variant::Danger,
            Some("muted") => Variant::Muted,
            _ => Variant::Primary,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Variant::Primary => "primary",
            Variant::Success => "success",
            Variant::Danger => "danger",
            Variant::Muted => "muted",
        }
    }

    /// Background class for the live preview
    pub fn background(&self) -> &'static str {
        match self {
            Variant::Primary => "bg-blue-500",
            Variant::Success => "bg-emerald-500",
            Variant::Danger => "bg-rose-500",
            Variant::Muted => "bg-slate-600",
        }
    }
}

/// Horizontal text alignment (`align` prop)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Align {
    #[default]
    Left,
    Center,
    Right,
}

impl Align {
    pub const ALL: [Align; 3] = [Align::Left, Align::Center, Align::Right];

    pub fn from_token(token: Option<&str>) -> Self {
        match token {
            Some("center") => Align::Center,
            Some("right") => Align::Right,
            _ => Align::Left,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Align::Left => "left",
            Align::Center => "center",
            Align::Right => "right",
        }
    }

    pub fn class(&self) -> &'static str {
        match self {
            Align::Left => "text-left",
            Align::Center => "text-center",
            Align::Right => "text-right",
        }
    }
}

/// The four spacing props. Each one is a step on the `[0, 16]` scale.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Spacing {
    PaddingX,
    PaddingY,
    MarginTop,
    MarginBottom,
}

impl Spacing {
    pub const ALL: [Spacing; 4] = [
        Spacing::PaddingX,
        Spacing::PaddingY,
        Spacing::MarginTop,
        Spacing::MarginBottom,
    ];

    /// Prop key holding this spacing value
    pub fn key(&self) -> &'static str {
        match self {
            Spacing::PaddingX => "px",
            Spacing::PaddingY => "py",
            Spacing::MarginTop => "mt",
            Spacing::MarginBottom => "mb",
        }
    }

    pub fn from_key(key: &str) -> Option<Self> {
        Spacing::ALL.into_iter().find(|s| s.key() == key)
    }

    /// Step used when the prop is absent
    pub fn default_step(&self) -> u8 {
        match self {
            Spacing::PaddingX => 3,
            Spacing::PaddingY => 2,
            Spacing::MarginTop => 0,
            Spacing::MarginBottom => 2,
        }
    }

    pub fn class(&self, step: u8) -> String {
        format!("{}-{}", self.key(), step.min(SPACING_MAX))
    }
}

/// Clamp a numeric spacing value into `[SPACING_MIN, SPACING_MAX]`.
///
/// NaN clamps to the minimum. Fractional steps are truncated.
pub fn clamp_spacing(value: f64) -> u8 {
    if value.is_nan() {
        return SPACING_MIN;
    }
    value.clamp(SPACING_MIN as f64, SPACING_MAX as f64) as u8
}

/// Clamp raw text from a number input. Blank input is zero, anything that
/// is not a number clamps to the minimum.
pub fn parse_spacing(input: &str) -> u8 {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return SPACING_MIN;
    }
    trimmed
        .parse::<f64>()
        .map(clamp_spacing)
        .unwrap_or(SPACING_MIN)
}
