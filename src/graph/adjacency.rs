//! Core graph structure: a node arena with per-node adjacency lists.

use std::collections::HashMap;

use crate::types::{GraphConfig, Node, NodeId};

use super::BreadthFirst;

/// Mutable graph of string-valued nodes, directed or undirected.
///
/// The graph owns every node. Adjacency lists hold [`NodeId`] handles into the
/// arena, so cycles need no shared ownership. Nodes are created on first
/// reference and never removed; only edges can be removed.
#[derive(Debug, Clone, Default)]
pub struct Graph {
    /// All nodes, indexed by `NodeId`, in creation order.
    nodes: Vec<Node>,
    /// Value -> handle.
    index: HashMap<String, NodeId>,
    config: GraphConfig,
}

impl Graph {
    /// Create an empty graph.
    pub fn new(config: GraphConfig) -> Self {
        Self {
            nodes: Vec::new(),
            index: HashMap::new(),
            config,
        }
    }

    /// Create an empty undirected graph.
    pub fn undirected() -> Self {
        Self::new(GraphConfig::undirected())
    }

    /// Create an empty directed graph.
    pub fn directed() -> Self {
        Self::new(GraphConfig::directed())
    }

    pub fn config(&self) -> GraphConfig {
        self.config
    }

    pub fn is_directed(&self) -> bool {
        self.config.directed
    }

    /// Number of nodes.
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Total adjacency entries across all nodes.
    ///
    /// An undirected edge contributes two entries, duplicates count separately.
    pub fn adjacency_count(&self) -> usize {
        self.nodes.iter().map(Node::degree).sum()
    }

    /// Get a node by handle.
    pub fn node(&self, id: NodeId) -> Option<&Node> {
        self.nodes.get(id.0)
    }

    /// All nodes in creation order.
    pub fn nodes(&self) -> impl Iterator<Item = &Node> {
        self.nodes.iter()
    }

    /// Look up the node registered under `value`.
    pub fn node_exists(&self, value: &str) -> Option<NodeId> {
        self.index.get(value).copied()
    }

    /// Return the node for `value`, creating it if needed.
    pub fn add_node(&mut self, value: &str) -> NodeId {
        if let Some(id) = self.node_exists(value) {
            return id;
        }
        let id = NodeId(self.nodes.len());
        self.nodes.push(Node::new(id, value));
        self.index.insert(value.to_string(), id);
        log::debug!("created node {:?} as {}", value, id);
        id
    }

    /// Connect `source` to `destination`, creating either endpoint as needed.
    ///
    /// Undirected graphs also connect `destination` back to `source`. Adding
    /// the same edge again appends another adjacency entry.
    pub fn add_edge(&mut self, source: &str, destination: &str) -> (NodeId, NodeId) {
        let src = self.add_node(source);
        let dst = self.add_node(destination);

        self.nodes[src.0].add_adjacent(dst);
        if !self.config.directed {
            self.nodes[dst.0].add_adjacent(src);
        }
        log::debug!(
            "added edge {:?} {} {:?}",
            source,
            if self.config.directed { "->" } else { "--" },
            destination
        );
        (src, dst)
    }

    /// Disconnect `source` from `destination`.
    ///
    /// Every parallel entry is removed. Returns `None` without touching the
    /// graph if either endpoint does not exist.
    pub fn remove_edge(&mut self, source: &str, destination: &str) -> Option<(NodeId, NodeId)> {
        let src = self.node_exists(source)?;
        let dst = self.node_exists(destination)?;

        let mut removed = self.nodes[src.0].remove_adjacent(dst);
        if !self.config.directed {
            removed += self.nodes[dst.0].remove_adjacent(src);
        }
        log::debug!(
            "removed edge {:?} {:?} ({} adjacency entries)",
            source,
            destination,
            removed
        );
        Some((src, dst))
    }

    /// Lazy breadth-first traversal from `root`.
    pub fn breadth_first(&self, root: Option<NodeId>) -> BreadthFirst<'_> {
        BreadthFirst::new(self, root)
    }

    /// Breadth-first traversal from the node registered under `value`.
    ///
    /// Empty when no such node exists.
    pub fn breadth_first_from(&self, value: &str) -> BreadthFirst<'_> {
        self.breadth_first(self.node_exists(value))
    }

    /// Each node's value with its adjacent values, in creation order.
    pub fn adjacency_listing(&self) -> Vec<(&str, Vec<&str>)> {
        self.nodes
            .iter()
            .map(|node| {
                let adjacent = node
                    .adjacents()
                    .iter()
                    .filter_map(|&id| self.node(id))
                    .map(Node::value)
                    .collect();
                (node.value(), adjacent)
            })
            .collect()
    }
}
