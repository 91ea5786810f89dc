//! # Webbuilder Style
//!
//! Pure lookup tables from semantic block style properties (`size`, `radius`,
//! `variant`, `align`, spacing steps) to presentation tokens. Shared by the
//! live preview and the static exporter so both read props the same way.

mod theme;
mod tokens;

pub use theme::Theme;
pub use tokens::{
    clamp_spacing, parse_spacing, Align, Radius, Spacing, TextSize, Variant, SPACING_MAX,
    SPACING_MIN,
};
