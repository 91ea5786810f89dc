use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use webbuilder_compiler_html::{CompileOptions, ExportStyle};

pub const DEFAULT_CONFIG_NAME: &str = "webbuilder.config.json";

/// Webbuilder configuration file format
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Config {
    /// Directory holding the persisted editor state
    #[serde(default = "default_store_dir")]
    pub store_dir: String,

    /// Where pages and archives are written
    #[serde(default = "default_out_dir")]
    pub out_dir: String,

    /// Page that opens share links
    #[serde(default = "default_share_base_url")]
    pub share_base_url: String,

    #[serde(default)]
    pub export_style: ExportStyle,

    /// Title of exported pages
    #[serde(default = "default_title")]
    pub title: String,
}

fn default_store_dir() -> String {
    ".webbuilder".to_string()
}

fn default_out_dir() -> String {
    "dist".to_string()
}

fn default_share_base_url() -> String {
    "http://localhost:3000/flow".to_string()
}

fn default_title() -> String {
    "Exported Page".to_string()
}

impl Config {
    /// Load config from a directory
    pub fn load(cwd: &str) -> anyhow::Result<Self> {
        let config_path = PathBuf::from(cwd).join(DEFAULT_CONFIG_NAME);

        if config_path.exists() {
            let content = std::fs::read_to_string(&config_path)?;
            let config: Config = serde_json::from_str(&content)?;
            Ok(config)
        } else {
            // Return default config if none exists
            Ok(Config::default())
        }
    }

    pub fn get_store_dir(&self, cwd: &str) -> PathBuf {
        PathBuf::from(cwd).join(&self.store_dir)
    }

    pub fn get_out_dir(&self, cwd: &str) -> PathBuf {
        PathBuf::from(cwd).join(&self.out_dir)
    }

    /// Page options for list documents
    pub fn compile_options(&self) -> CompileOptions {
        CompileOptions {
            style: self.export_style,
            title: self.title.clone(),
            ..CompileOptions::default()
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            store_dir: default_store_dir(),
            out_dir: default_out_dir(),
            share_base_url: default_share_base_url(),
            export_style: ExportStyle::default(),
            title: default_title(),
        }
    }
}
