use super::open_store;
use crate::config::Config;
use anyhow::{anyhow, Result};
use clap::Args;
use colored::Colorize;
use webbuilder_common::KeyValueStore;
use webbuilder_editor::ThemeContext;
use webbuilder_style::Theme;

#[derive(Debug, Args)]
pub struct ThemeArgs {
    /// Theme to switch to; prints the current theme when omitted
    pub name: Option<String>,
}

pub fn theme(args: ThemeArgs, cwd: &str) -> Result<()> {
    let config = Config::load(cwd)?;
    let mut store = open_store(&config, cwd)?;
    let current = apply(args.name.as_deref(), &mut store)?;

    for theme in Theme::ALL {
        let marker = if theme == current { "●".green() } else { "○".dimmed() };
        println!("  {} {:<10} {}", marker, theme.as_str(), theme.label());
    }
    Ok(())
}

fn apply(name: Option<&str>, store: &mut dyn KeyValueStore) -> Result<Theme> {
    let mut context = ThemeContext::load(store);
    if let Some(name) = name {
        let theme = Theme::from_name(name).ok_or_else(|| anyhow!("Unknown theme: {}", name))?;
        context.set(theme, store);
    }
    Ok(context.theme())
}
