//! CLI command implementations.
//!
//! Each command writes to the given sink so the binary can print to stdout
//! and tests can capture the output.

use std::io::Write;

use clap::ValueEnum;

use crate::graph::{Graph, GraphBuilder};
use crate::types::{EdgeSpec, GraphConfig, GraphError, GraphResult, Node};

/// Output format for every command.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

impl OutputFormat {
    pub fn is_json(self) -> bool {
        self == OutputFormat::Json
    }
}

/// What [`cmd_remove`] did to the graph.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RemoveOutcome {
    /// The edge existed and every entry of it was dropped.
    Removed,
    /// Both endpoints exist but are not connected.
    NoSuchEdge,
    /// At least one endpoint does not exist.
    MissingEndpoint,
}

impl RemoveOutcome {
    pub fn name(self) -> &'static str {
        match self {
            RemoveOutcome::Removed => "removed",
            RemoveOutcome::NoSuchEdge => "no_such_edge",
            RemoveOutcome::MissingEndpoint => "missing_endpoint",
        }
    }
}

/// Remove `source -> destination` and report what happened.
pub fn remove_edge_checked(graph: &mut Graph, source: &str, destination: &str) -> RemoveOutcome {
    let (Some(src), Some(dst)) = (graph.node_exists(source), graph.node_exists(destination))
    else {
        return RemoveOutcome::MissingEndpoint;
    };
    // Undirected adjacency is symmetric, so the forward entry decides.
    if !graph.node(src).is_some_and(|node| node.is_adjacent(dst)) {
        return RemoveOutcome::NoSuchEdge;
    }
    graph.remove_edge(source, destination);
    RemoveOutcome::Removed
}

/// Build a graph from edge arguments, in the order given.
pub fn build_graph(edges: &[EdgeSpec], config: GraphConfig) -> Graph {
    GraphBuilder::with_config(config)
        .edges(edges.iter().cloned())
        .build()
}

/// Print every node with its adjacent values.
pub fn cmd_show<W: Write>(out: &mut W, graph: &Graph, json: bool) -> GraphResult<()> {
    let listing = graph.adjacency_listing();

    if json {
        let nodes: Vec<_> = listing
            .iter()
            .map(|(value, adjacents)| {
                serde_json::json!({
                    "value": value,
                    "adjacents": adjacents,
                })
            })
            .collect();
        let info = serde_json::json!({
            "config": graph.config(),
            "node_count": graph.node_count(),
            "adjacency_count": graph.adjacency_count(),
            "nodes": nodes,
        });
        writeln!(out, "{}", serde_json::to_string_pretty(&info)?)?;
    } else {
        writeln!(
            out,
            "{} graph, {} nodes",
            if graph.is_directed() {
                "Directed"
            } else {
                "Undirected"
            },
            graph.node_count()
        )?;
        for (value, adjacents) in &listing {
            writeln!(out, "{}: [{}]", value, adjacents.join(", "))?;
        }
    }
    Ok(())
}

/// Print the breadth-first order starting at `from`.
///
/// With a `limit`, the traversal stops after that many nodes.
pub fn cmd_bfs<W: Write>(
    out: &mut W,
    graph: &Graph,
    from: &str,
    limit: Option<usize>,
    json: bool,
) -> GraphResult<()> {
    let root = graph
        .node_exists(from)
        .ok_or_else(|| GraphError::NodeNotFound(from.to_string()))?;

    let order: Vec<&str> = graph
        .breadth_first(Some(root))
        .take(limit.unwrap_or(usize::MAX))
        .map(Node::value)
        .collect();

    if json {
        let info = serde_json::json!({
            "from": from,
            "order": order,
        });
        writeln!(out, "{}", serde_json::to_string_pretty(&info)?)?;
    } else {
        writeln!(out, "{}", order.join(" > "))?;
    }
    Ok(())
}

/// Remove one edge, then print the resulting graph.
pub fn cmd_remove<W: Write>(
    out: &mut W,
    graph: &mut Graph,
    source: &str,
    destination: &str,
    json: bool,
) -> GraphResult<()> {
    let outcome = remove_edge_checked(graph, source, destination);

    if json {
        let info = serde_json::json!({
            "source": source,
            "destination": destination,
            "removed": outcome == RemoveOutcome::Removed,
            "outcome": outcome.name(),
        });
        writeln!(out, "{}", serde_json::to_string_pretty(&info)?)?;
    } else {
        match outcome {
            RemoveOutcome::Removed => {
                writeln!(out, "Removed edge {}:{}", source, destination)?;
            }
            RemoveOutcome::NoSuchEdge => {
                writeln!(out, "No edge removed: {} is not connected to {}", source, destination)?;
            }
            RemoveOutcome::MissingEndpoint => {
                writeln!(
                    out,
                    "No edge removed: {}:{} has a missing endpoint",
                    source, destination
                )?;
            }
        }
    }
    cmd_show(out, graph, json)
}
