use super::{export_source, StyleArg};
use crate::config::Config;
use anyhow::Result;
use clap::Args;
use colored::Colorize;
use std::fs;
use webbuilder_export::{build_archive, ARCHIVE_FILE_NAME};

#[derive(Debug, Args)]
pub struct ArchiveArgs {
    /// Package a graph document file instead of the list document
    #[arg(long, value_name = "FILE")]
    pub flow: Option<String>,

    /// Markup style for buttons and images
    #[arg(short, long, value_enum)]
    pub style: Option<StyleArg>,

    /// Output directory (overrides config)
    #[arg(short, long)]
    pub out_dir: Option<String>,
}

pub fn archive(args: ArchiveArgs, cwd: &str) -> Result<()> {
    let mut config = Config::load(cwd)?;
    if let Some(out_dir) = args.out_dir {
        config.out_dir = out_dir;
    }

    let (source, options) = export_source(&config, cwd, args.flow.as_deref(), args.style)?;
    let bytes = build_archive(source.as_ref(), options)?;

    let out_dir = config.get_out_dir(cwd);
    fs::create_dir_all(&out_dir)?;
    let out_path = out_dir.join(ARCHIVE_FILE_NAME);
    fs::write(&out_path, &bytes)?;

    println!(
        "  {} {} ({} bytes)",
        "✓".green(),
        out_path.display(),
        bytes.len()
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_archive_written_to_out_dir() {
        let dir = tempfile::tempdir().unwrap();
        let cwd = dir.path().display().to_string();

        archive(
            ArchiveArgs {
                flow: None,
                style: None,
                out_dir: None,
            },
            &cwd,
        )
        .unwrap();

        let bytes = fs::read(dir.path().join("dist").join(ARCHIVE_FILE_NAME)).unwrap();
        assert!(bytes.starts_with(b"PK"));
    }
}
