//! CLI entry point for the `adjg` command-line tool.

use std::io;
use std::process;

use clap::{Parser, Subcommand};

use adjgraph::cli::commands::{self, OutputFormat};
use adjgraph::types::{EdgeSpec, GraphConfig};

#[derive(Parser)]
#[command(
    name = "adjg",
    about = "Build an adjacency-list graph from SRC:DST edges and inspect it"
)]
struct Cli {
    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    format: OutputFormat,

    /// Treat edges as one-way
    #[arg(long, global = true)]
    directed: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print every node with its adjacent nodes
    Show {
        /// Edges as SRC:DST, applied in order
        edges: Vec<EdgeSpec>,
    },
    /// Print the breadth-first order from a node
    Bfs {
        /// Value of the start node
        #[arg(long)]
        from: String,
        /// Stop after this many nodes
        #[arg(long)]
        limit: Option<usize>,
        /// Edges as SRC:DST, applied in order
        edges: Vec<EdgeSpec>,
    },
    /// Remove an edge and print the resulting graph
    Remove {
        /// Source node value
        #[arg(long)]
        source: String,
        /// Destination node value
        #[arg(long)]
        destination: String,
        /// Edges as SRC:DST, applied in order
        edges: Vec<EdgeSpec>,
    },
}

fn main() {
    let cli = Cli::parse();
    let json = cli.format.is_json();
    let config = GraphConfig {
        directed: cli.directed,
    };
    let mut out = io::stdout().lock();

    let result = match cli.command {
        Commands::Show { edges } => {
            let graph = commands::build_graph(&edges, config);
            commands::cmd_show(&mut out, &graph, json)
        }
        Commands::Bfs { from, limit, edges } => {
            let graph = commands::build_graph(&edges, config);
            commands::cmd_bfs(&mut out, &graph, &from, limit, json)
        }
        Commands::Remove {
            source,
            destination,
            edges,
        } => {
            let mut graph = commands::build_graph(&edges, config);
            commands::cmd_remove(&mut out, &mut graph, &source, &destination, json)
        }
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}
