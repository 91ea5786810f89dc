use super::{flow_path, load_graph};
use crate::config::Config;
use anyhow::Result;
use clap::Args;
use webbuilder_export::build_share_link;

#[derive(Debug, Args)]
pub struct ShareArgs {
    /// Graph document file
    #[arg(short, long)]
    pub file: Option<String>,

    /// Page that opens the link (overrides config)
    #[arg(long)]
    pub base_url: Option<String>,
}

pub fn share(args: ShareArgs, cwd: &str) -> Result<()> {
    let config = Config::load(cwd)?;
    let graph = load_graph(&flow_path(cwd, args.file.as_deref()))?;
    let base_url = args.base_url.unwrap_or(config.share_base_url);

    println!("{}", build_share_link(&graph, &base_url)?);
    Ok(())
}
