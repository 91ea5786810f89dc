pub mod archive;
pub mod blocks;
pub mod export;
pub mod flow;
pub mod init;
pub mod open;
pub mod share;
pub mod theme;

pub use archive::{archive, ArchiveArgs};
pub use blocks::{blocks, BlocksArgs};
pub use export::{export, ExportArgs};
pub use flow::{flow, FlowArgs};
pub use init::{init, InitArgs};
pub use open::{open, OpenArgs};
pub use share::{share, ShareArgs};
pub use theme::{theme, ThemeArgs};

use crate::config::Config;
use anyhow::{anyhow, Result};
use serde_json::Value;
use std::path::PathBuf;
use webbuilder_common::FileStore;
use webbuilder_compiler_html::{CompileOptions, ExportStyle};
use webbuilder_editor::{load_document, EditSession};
use webbuilder_export::ExportSource;
use webbuilder_flow::{graph_page_options, GraphDocument};
use webbuilder_model::Props;
use webbuilder_style::{parse_spacing, Spacing};

/// Default graph document file, next to the config
pub const DEFAULT_FLOW_FILE: &str = "flow.json";

#[derive(Debug, Clone, Copy, clap::ValueEnum)]
pub enum StyleArg {
    Inline,
    Classes,
}

impl From<StyleArg> for ExportStyle {
    fn from(style: StyleArg) -> Self {
        match style {
            StyleArg::Inline => ExportStyle::Inline,
            StyleArg::Classes => ExportStyle::Classes,
        }
    }
}

pub(crate) fn open_store(config: &Config, cwd: &str) -> Result<FileStore> {
    Ok(FileStore::open(config.get_store_dir(cwd))?)
}

pub(crate) fn open_session(config: &Config, cwd: &str) -> Result<EditSession> {
    Ok(EditSession::open(Box::new(open_store(config, cwd)?)))
}

pub(crate) fn flow_path(cwd: &str, file: Option<&str>) -> PathBuf {
    PathBuf::from(cwd).join(file.unwrap_or(DEFAULT_FLOW_FILE))
}

/// Read a graph file; a missing file is an empty graph
pub(crate) fn load_graph(path: &std::path::Path) -> Result<GraphDocument> {
    if !path.exists() {
        return Ok(GraphDocument::new());
    }
    let json = std::fs::read_to_string(path)?;
    GraphDocument::from_json(&json)
        .map_err(|e| anyhow!("Cannot read graph {}: {}", path.display(), e))
}

pub(crate) fn save_graph(path: &std::path::Path, graph: &GraphDocument) -> Result<()> {
    std::fs::write(path, graph.to_json()?)?;
    Ok(())
}

/// The document to export and its page options.
///
/// With a graph file the graph is exported, class-styled unless a style is
/// given; otherwise the persisted list document with the configured style.
pub(crate) fn export_source(
    config: &Config,
    cwd: &str,
    flow_file: Option<&str>,
    style: Option<StyleArg>,
) -> Result<(Box<dyn ExportSource>, CompileOptions)> {
    let (source, mut options): (Box<dyn ExportSource>, CompileOptions) = match flow_file {
        Some(file) => {
            let graph = load_graph(&flow_path(cwd, Some(file)))?;
            let options = CompileOptions {
                title: config.title.clone(),
                ..graph_page_options()
            };
            (Box::new(graph), options)
        }
        None => {
            let store = open_store(config, cwd)?;
            (Box::new(load_document(&store)), config.compile_options())
        }
    };

    if let Some(style) = style {
        options.style = style.into();
    }
    Ok((source, options))
}

/// Parse `key=value` pairs into props.
///
/// Values that parse as JSON keep their type, anything else is a string.
/// Spacing keys are clamped to their step range.
pub(crate) fn parse_assignments(pairs: &[String]) -> Result<Props> {
    let mut props = Props::new();
    for pair in pairs {
        let (key, raw) = pair
            .split_once('=')
            .ok_or_else(|| anyhow!("Expected key=value, got '{}'", pair))?;
        let key = key.trim();
        if key.is_empty() {
            return Err(anyhow!("Empty property name in '{}'", pair));
        }

        let value = if Spacing::from_key(key).is_some() {
            Value::from(parse_spacing(raw))
        } else {
            serde_json::from_str::<Value>(raw).unwrap_or_else(|_| Value::String(raw.to_string()))
        };
        props.insert(key.to_string(), value);
    }
    Ok(props)
}

/// One-line summary of a block's main content
pub(crate) fn describe_props(props: &Props) -> String {
    ["text", "src", "href"]
        .iter()
        .find_map(|key| props.get(*key).and_then(Value::as_str))
        .unwrap_or("")
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_assignments() {
        let props = parse_assignments(&[
            "text=Hello world".to_string(),
            "px=40".to_string(),
            "mb=abc".to_string(),
            "flag=true".to_string(),
        ])
        .unwrap();

        assert_eq!(props["text"], "Hello world");
        assert_eq!(props["px"], 16);
        assert_eq!(props["mb"], 0);
        assert_eq!(props["flag"], true);
    }

    #[test]
    fn test_parse_assignments_rejects_bad_pairs() {
        assert!(parse_assignments(&["novalue".to_string()]).is_err());
        assert!(parse_assignments(&["=x".to_string()]).is_err());
    }

    #[test]
    fn test_missing_graph_file_is_empty() {
        let dir = tempfile::tempdir().unwrap();
        let graph = load_graph(&dir.path().join("none.json")).unwrap();
        assert!(graph.is_empty());
    }
}
