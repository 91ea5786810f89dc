use super::{describe_props, open_session, parse_assignments};
use crate::config::Config;
use anyhow::{anyhow, bail, Result};
use clap::{Args, Subcommand, ValueEnum};
use colored::Colorize;
use webbuilder_editor::{Direction, DragPayload, DropOutcome, EditSession};
use webbuilder_model::{BlockKind, Template};

#[derive(Debug, Args)]
pub struct BlocksArgs {
    #[command(subcommand)]
    pub command: BlocksCommand,
}

#[derive(Debug, Subcommand)]
pub enum BlocksCommand {
    /// List the blocks of the document in order
    List,

    /// List the block types that can be added
    Palette,

    /// Add a block from the palette
    Add {
        /// Block type (heading, text, button, image)
        kind: String,

        /// Insert position; defaults to the end
        #[arg(long, allow_negative_numbers = true)]
        at: Option<isize>,

        /// Initial property, as key=value (repeatable)
        #[arg(long = "set", value_name = "KEY=VALUE")]
        set: Vec<String>,
    },

    /// Remove a block
    Remove { id: String },

    /// Insert a copy of a block right after it
    Duplicate { id: String },

    /// Swap a block with its neighbour
    Move {
        id: String,
        #[arg(value_enum)]
        direction: DirectionArg,
    },

    /// Drag the block at index FROM onto drop target TARGET
    Drag {
        from: usize,
        #[arg(allow_negative_numbers = true)]
        target: isize,
    },

    /// Merge properties into a block
    Set {
        id: String,
        #[arg(required = true, value_name = "KEY=VALUE")]
        props: Vec<String>,
    },

    /// Append the blocks of a template (hero-cta, banner-text)
    Template { name: String },

    /// Remove every block
    Clear,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum DirectionArg {
    Up,
    Down,
}

impl From<DirectionArg> for Direction {
    fn from(direction: DirectionArg) -> Self {
        match direction {
            DirectionArg::Up => Direction::Up,
            DirectionArg::Down => Direction::Down,
        }
    }
}

pub fn blocks(args: BlocksArgs, cwd: &str) -> Result<()> {
    let config = Config::load(cwd)?;
    let mut session = open_session(&config, cwd)?;
    run(args.command, &mut session)
}

fn run(command: BlocksCommand, session: &mut EditSession) -> Result<()> {
    match command {
        BlocksCommand::List => {
            print_blocks(session);
            return Ok(());
        }
        BlocksCommand::Palette => {
            for item in session.palette().items() {
                println!("  {:<8} {}", item.kind.as_str().bright_white(), item.label);
            }
            return Ok(());
        }
        BlocksCommand::Add { kind, at, set } => {
            let kind = BlockKind::from(kind);
            let item = session
                .palette()
                .get(&kind)
                .ok_or_else(|| anyhow!("Unknown block type: {}", kind))?;

            let mut defaults = item.defaults.clone();
            defaults.extend(parse_assignments(&set)?);

            let target = at.unwrap_or(session.document().len() as isize);
            match session.drop_at(&DragPayload::Palette { kind, defaults }, target) {
                DropOutcome::Inserted(id) => println!("{} Added {}", "✓".green(), id),
                _ => bail!("Block was not added"),
            }
        }
        BlocksCommand::Remove { id } => {
            select(session, &id)?;
            session.remove_selected();
            println!("{} Removed {}", "✓".green(), id);
        }
        BlocksCommand::Duplicate { id } => {
            select(session, &id)?;
            session.duplicate_selected();
            println!("{} Duplicated {}", "✓".green(), id);
        }
        BlocksCommand::Move { id, direction } => {
            select(session, &id)?;
            session.move_selected(direction.into());
        }
        BlocksCommand::Drag { from, target } => {
            if from >= session.document().len() {
                bail!("No block at index {}", from);
            }
            if session.drop_at(&DragPayload::canvas(from), target) == DropOutcome::Unchanged {
                println!("{} Order unchanged", "•".dimmed());
            }
        }
        BlocksCommand::Set { id, props } => {
            let props = parse_assignments(&props)?;
            select(session, &id)?;
            session.patch_selected(props);
        }
        BlocksCommand::Template { name } => {
            let template = Template::from_name(&name).ok_or_else(|| {
                let names: Vec<&str> = Template::ALL.iter().map(Template::name).collect();
                anyhow!("Unknown template '{}'; expected one of {}", name, names.join(", "))
            })?;
            session.apply_template(template);
            println!("{} Applied {}", "✓".green(), template.label());
        }
        BlocksCommand::Clear => {
            session.clear();
            println!("{} Cleared document", "✓".green());
        }
    }

    print_blocks(session);
    Ok(())
}

fn select(session: &mut EditSession, id: &str) -> Result<()> {
    if !session.select(Some(id)) {
        bail!("No block with id {}", id);
    }
    Ok(())
}

fn print_blocks(session: &EditSession) {
    if session.document().is_empty() {
        println!("{}", "Drag items here".dimmed());
        return;
    }
    for (index, block) in session.blocks().iter().enumerate() {
        println!(
            "{:>3}  {:<14} {:<8} {}",
            index,
            block.id.bright_white(),
            block.kind.as_str().cyan(),
            describe_props(&block.props)
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use webbuilder_common::MemoryStore;
    use webbuilder_model::IdGenerator;

    fn session() -> EditSession {
        EditSession::with_ids(Box::new(MemoryStore::new()), IdGenerator::from_seed("c"))
    }

    fn add(kind: &str, at: Option<isize>, set: &[&str]) -> BlocksCommand {
        BlocksCommand::Add {
            kind: kind.to_string(),
            at,
            set: set.iter().map(|s| s.to_string()).collect(),
        }
    }

    #[test]
    fn test_add_with_props_and_position() {
        let mut session = session();
        run(add("heading", None, &[]), &mut session).unwrap();
        run(add("button", Some(0), &["text=Go", "px=3"]), &mut session).unwrap();

        let blocks = session.blocks();
        assert_eq!(blocks[0].id, "c-2");
        assert_eq!(blocks[0].props["text"], "Go");
        assert_eq!(blocks[0].props["px"], 3);
        assert_eq!(blocks[1].id, "c-1");
        assert_eq!(session.selected_id(), Some("c-2"));
    }

    #[test]
    fn test_unknown_kind_and_id_fail() {
        let mut session = session();
        assert!(run(add("video", None, &[]), &mut session).is_err());
        assert!(run(BlocksCommand::Remove { id: "nope".into() }, &mut session).is_err());
        assert!(session.document().is_empty());
    }

    #[test]
    fn test_drag_and_move() {
        let mut session = session();
        run(BlocksCommand::Template { name: "hero-cta".into() }, &mut session).unwrap();
        run(BlocksCommand::Drag { from: 1, target: 0 }, &mut session).unwrap();
        assert_eq!(session.document().ids(), vec!["c-2", "c-1", "c-3"]);

        run(
            BlocksCommand::Move {
                id: "c-3".into(),
                direction: DirectionArg::Up,
            },
            &mut session,
        )
        .unwrap();
        assert_eq!(session.document().ids(), vec!["c-2", "c-3", "c-1"]);
        assert!(run(BlocksCommand::Drag { from: 7, target: 0 }, &mut session).is_err());
    }

    #[test]
    fn test_set_and_clear() {
        let mut session = session();
        run(add("text", None, &[]), &mut session).unwrap();
        run(
            BlocksCommand::Set {
                id: "c-1".into(),
                props: vec!["align=center".into()],
            },
            &mut session,
        )
        .unwrap();
        assert_eq!(session.blocks()[0].props["align"], "center");

        run(BlocksCommand::Clear, &mut session).unwrap();
        assert!(session.document().is_empty());
    }
}
