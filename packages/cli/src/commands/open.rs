use super::{flow_path, save_graph};
use anyhow::{bail, Result};
use clap::Args;
use colored::Colorize;
use webbuilder_export::decode_share_link;

#[derive(Debug, Args)]
pub struct OpenArgs {
    /// Share link, or any URL carrying a `data` token
    pub url: String,

    /// Graph document file to write
    #[arg(short, long)]
    pub file: Option<String>,

    /// Overwrite an existing file
    #[arg(long)]
    pub force: bool,
}

pub fn open(args: OpenArgs, cwd: &str) -> Result<()> {
    let path = flow_path(cwd, args.file.as_deref());
    if path.exists() && !args.force {
        bail!("{} already exists; use --force to overwrite", path.display());
    }

    let graph = decode_share_link(&args.url)?;
    save_graph(&path, &graph)?;

    println!(
        "  {} {} ({} nodes, {} edges)",
        "✓".green(),
        path.display(),
        graph.nodes.len(),
        graph.edges.len()
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::load_graph;
    use webbuilder_export::build_share_link;
    use webbuilder_flow::{GraphDocument, Position};
    use webbuilder_model::{BlockKind, BlockPayload, IdGenerator, Props};

    #[test]
    fn test_open_writes_shared_graph() {
        let dir = tempfile::tempdir().unwrap();
        let cwd = dir.path().display().to_string();

        let mut graph = GraphDocument::new();
        let mut ids = IdGenerator::from_seed("o");
        let a = graph.add_node(
            BlockPayload::new(BlockKind::Heading, Props::new()),
            Position::new(1.0, 2.0),
            &mut ids,
        );
        graph.connect(&a, &a);
        let url = build_share_link(&graph, "https://x.test/flow").unwrap();

        let args = || OpenArgs {
            url: url.clone(),
            file: None,
            force: false,
        };
        open(args(), &cwd).unwrap();
        assert_eq!(load_graph(&flow_path(&cwd, None)).unwrap(), graph);
        assert!(open(args(), &cwd).is_err());
    }

    #[test]
    fn test_open_rejects_garbage() {
        let dir = tempfile::tempdir().unwrap();
        let cwd = dir.path().display().to_string();
        assert!(open(
            OpenArgs {
                url: "https://x.test/flow?data=%%%".into(),
                file: None,
                force: false,
            },
            &cwd
        )
        .is_err());
    }
}
