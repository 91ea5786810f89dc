use super::{describe_props, flow_path, load_graph, parse_assignments, save_graph};
use anyhow::{anyhow, bail, Result};
use clap::{Args, Subcommand};
use colored::Colorize;
use webbuilder_flow::{FlowDropPayload, GraphDocument, Position};
use webbuilder_model::{BlockKind, IdGenerator, Palette};

#[derive(Debug, Args)]
pub struct FlowArgs {
    /// Graph document file
    #[arg(short, long, global = true)]
    pub file: Option<String>,

    #[command(subcommand)]
    pub command: FlowCommand,
}

#[derive(Debug, Subcommand)]
pub enum FlowCommand {
    /// List nodes and edges
    List,

    /// Add a block node; without a position it is stacked below the others
    Add {
        /// Block type (heading, text, button, image)
        kind: String,

        #[arg(long, requires = "y", allow_negative_numbers = true)]
        x: Option<f64>,

        #[arg(long, requires = "x", allow_negative_numbers = true)]
        y: Option<f64>,
    },

    /// Move a node to a new canvas position
    Move {
        id: String,
        #[arg(allow_negative_numbers = true)]
        x: f64,
        #[arg(allow_negative_numbers = true)]
        y: f64,
    },

    /// Merge properties into a node's block
    Set {
        id: String,
        #[arg(required = true, value_name = "KEY=VALUE")]
        props: Vec<String>,
    },

    /// Remove a node and its edges
    Remove { id: String },

    /// Connect two nodes
    Connect { source: String, target: String },

    /// Remove an edge
    Disconnect { edge_id: String },

    /// Remove every node and edge
    Clear,
}

pub fn flow(args: FlowArgs, cwd: &str) -> Result<()> {
    let path = flow_path(cwd, args.file.as_deref());
    let mut graph = load_graph(&path)?;

    let changed = run(args.command, &mut graph, &mut IdGenerator::new())?;
    if changed {
        save_graph(&path, &graph)?;
    }
    print_graph(&graph);
    Ok(())
}

/// Apply one command; returns whether the graph changed
fn run(command: FlowCommand, graph: &mut GraphDocument, ids: &mut IdGenerator) -> Result<bool> {
    match command {
        FlowCommand::List => return Ok(false),
        FlowCommand::Add { kind, x, y } => {
            let palette = Palette::flow();
            let kind = BlockKind::from(kind);
            let item = palette
                .get(&kind)
                .ok_or_else(|| anyhow!("Unknown block type: {}", kind))?;

            let id = match (x, y) {
                (Some(x), Some(y)) => graph.drop_payload(
                    &FlowDropPayload::from_item(item),
                    Position::new(x, y),
                    ids,
                ),
                _ => graph.add_from_palette(item, ids),
            };
            println!("{} Added {}", "✓".green(), id);
        }
        FlowCommand::Move { id, x, y } => {
            if !graph.move_node(&id, Position::new(x, y)) {
                bail!("No node with id {}", id);
            }
        }
        FlowCommand::Set { id, props } => {
            let props = parse_assignments(&props)?;
            if !graph.patch_node_props(&id, &props) {
                bail!("No node with id {}", id);
            }
        }
        FlowCommand::Remove { id } => {
            if !graph.remove_node(&id) {
                bail!("No node with id {}", id);
            }
        }
        FlowCommand::Connect { source, target } => match graph.connect(&source, &target) {
            Some(edge_id) => println!("{} Connected {}", "✓".green(), edge_id),
            None => {
                if graph.node(&source).is_none() || graph.node(&target).is_none() {
                    bail!("Both endpoints must be existing nodes");
                }
                println!("{} Already connected", "•".dimmed());
                return Ok(false);
            }
        },
        FlowCommand::Disconnect { edge_id } => {
            if !graph.disconnect(&edge_id) {
                bail!("No edge with id {}", edge_id);
            }
        }
        FlowCommand::Clear => graph.clear(),
    }
    Ok(true)
}

fn print_graph(graph: &GraphDocument) {
    if graph.nodes.is_empty() {
        println!("{}", "Drop blocks on the canvas".dimmed());
    }
    for node in &graph.nodes {
        println!(
            "  {:<14} {:<8} ({}, {}) {}",
            node.id.bright_white(),
            node.data.kind.as_str().cyan(),
            node.position.x,
            node.position.y,
            describe_props(&node.data.props)
        );
    }
    for edge in &graph.edges {
        println!("  {} → {}", edge.source, edge.target);
    }
}
