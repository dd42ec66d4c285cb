//! Graph vertices and the handles that refer to them.

use std::fmt;

/// Stable handle to a node, valid for the graph that issued it.
///
/// Handles are arena indices: nodes are never deleted, so a handle never
/// dangles or gets reused within its graph.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(pub(crate) usize);

impl NodeId {
    /// Position of the node in creation order.
    pub fn index(self) -> usize {
        self.0
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// A vertex: its value plus the ordered handles of its neighbours.
///
/// A node does not own its neighbours; the graph owns every node.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Node {
    id: NodeId,
    value: String,
    adjacents: Vec<NodeId>,
}

impl Node {
    pub(crate) fn new(id: NodeId, value: impl Into<String>) -> Self {
        Self {
            id,
            value: value.into(),
            adjacents: Vec::new(),
        }
    }

    /// This node's handle.
    pub fn id(&self) -> NodeId {
        self.id
    }

    /// The value the node is registered under.
    pub fn value(&self) -> &str {
        &self.value
    }

    /// Neighbour handles in insertion order, duplicates included.
    pub fn adjacents(&self) -> &[NodeId] {
        &self.adjacents
    }

    /// Number of adjacency entries (counts duplicates).
    pub fn degree(&self) -> usize {
        self.adjacents.len()
    }

    /// Whether `other` appears among the adjacents.
    pub fn is_adjacent(&self, other: NodeId) -> bool {
        self.adjacents.contains(&other)
    }

    /// Append `other` to the adjacents. No deduplication is done.
    pub fn add_adjacent(&mut self, other: NodeId) -> NodeId {
        self.adjacents.push(other);
        other
    }

    /// Remove every occurrence of `other`, returning how many were dropped.
    pub fn remove_adjacent(&mut self, other: NodeId) -> usize {
        let before = self.adjacents.len();
        self.adjacents.retain(|&id| id != other);
        before - self.adjacents.len()
    }
}
