//! Color themes the host can apply to the page chrome.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Pastel,
    Sunset,
    Mint,
    Lavender,
    Midnight,
}

impl Theme {
    pub const ALL: [Theme; 5] = [
        Theme::Pastel,
        Theme::Sunset,
        Theme::Mint,
        Theme::Lavender,
        Theme::Midnight,
    ];

    /// Parse a theme name; returns `None` for names outside the known set
    pub fn from_name(name: &str) -> Option<Self> {
        Theme::ALL.into_iter().find(|t| t.as_str() == name)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Theme::Pastel => "pastel",
            Theme::Sunset => "sunset",
            Theme::Mint => "mint",
            Theme::Lavender => "lavender",
            Theme::Midnight => "midnight",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Theme::Pastel => "Pastel",
            Theme::Sunset => "Sunset",
            Theme::Mint => "Mint",
            Theme::Lavender => "Lavender",
            Theme::Midnight => "Midnight",
        }
    }
}
