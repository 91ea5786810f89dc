use super::{export_source, StyleArg};
use crate::config::Config;
use anyhow::Result;
use clap::Args;
use colored::Colorize;
use std::fs;
use webbuilder_export::ARCHIVE_HTML;

#[derive(Debug, Args)]
pub struct ExportArgs {
    /// Export a graph document file instead of the list document
    #[arg(long, value_name = "FILE")]
    pub flow: Option<String>,

    /// Markup style for buttons and images
    #[arg(short, long, value_enum)]
    pub style: Option<StyleArg>,

    /// Print the page instead of writing it
    #[arg(long)]
    pub stdout: bool,

    /// Output directory (overrides config)
    #[arg(short, long)]
    pub out_dir: Option<String>,

    /// Do not indent the page body
    #[arg(long)]
    pub compact: bool,
}

pub fn export(args: ExportArgs, cwd: &str) -> Result<()> {
    let mut config = Config::load(cwd)?;
    if let Some(out_dir) = args.out_dir {
        config.out_dir = out_dir;
    }

    let (source, mut options) = export_source(&config, cwd, args.flow.as_deref(), args.style)?;
    options.pretty = !args.compact;
    let html = source.compile_page(options);

    if args.stdout {
        println!("{}", html);
        return Ok(());
    }

    let out_dir = config.get_out_dir(cwd);
    fs::create_dir_all(&out_dir)?;
    let out_path = out_dir.join(ARCHIVE_HTML);
    fs::write(&out_path, html)?;

    println!("  {} {}", "✓".green(), out_path.display());
    Ok(())
}
