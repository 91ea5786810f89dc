mod commands;
mod config;

use clap::{Parser, Subcommand};
use colored::Colorize;
use commands::{
    archive, blocks, export, flow, init, open, share, theme, ArchiveArgs, BlocksArgs, ExportArgs,
    FlowArgs, InitArgs, OpenArgs, ShareArgs, ThemeArgs,
};
use tracing_subscriber::EnvFilter;

/// Webbuilder CLI - compose pages from blocks and export them as static HTML
#[derive(Parser, Debug)]
#[command(name = "webbuilder")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Log debug output to stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Initialize a new Webbuilder project
    Init(InitArgs),

    /// Edit the list document
    Blocks(BlocksArgs),

    /// Edit a graph document
    Flow(FlowArgs),

    /// Export a document as a static HTML page
    Export(ExportArgs),

    /// Bundle a document, its page and a README into a zip archive
    Archive(ArchiveArgs),

    /// Print a share link for a graph document
    Share(ShareArgs),

    /// Write the graph document a share link carries
    Open(OpenArgs),

    /// Show or change the editor theme
    Theme(ThemeArgs),
}

fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn run(cli: Cli) -> anyhow::Result<()> {
    let cwd = std::env::current_dir()?.display().to_string();

    match cli.command {
        Command::Init(args) => init(args, &cwd),
        Command::Blocks(args) => blocks(args, &cwd),
        Command::Flow(args) => flow(args, &cwd),
        Command::Export(args) => export(args, &cwd),
        Command::Archive(args) => archive(args, &cwd),
        Command::Share(args) => share(args, &cwd),
        Command::Open(args) => open(args, &cwd),
        Command::Theme(args) => theme(args, &cwd),
    }
}

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    if let Err(err) = run(cli) {
        eprintln!();
        eprintln!("{} {}", "Error:".red().bold(), err);
        eprintln!();
        std::process::exit(1);
    }
}
