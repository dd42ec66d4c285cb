//! Lazy breadth-first traversal.

use std::collections::HashSet;
use std::iter::FusedIterator;

use crate::types::{Node, NodeId};

use super::{FrontierQueue, Graph};

/// Breadth-first iterator over the nodes reachable from a root.
///
/// Every adjacent of a yielded node is queued, including ones already seen or
/// already queued; repeats are discarded when they reach the head of the
/// frontier. Each reachable node is therefore yielded exactly once, in order
/// of edge distance from the root, with ties broken by adjacency order.
///
/// The iterator is lazy and single-pass. Once exhausted it keeps returning
/// `None`; call [`Graph::breadth_first`] again for a fresh traversal. It holds
/// a shared borrow of the graph, so the graph cannot be mutated mid-traversal.
///
/// Cloning a partly consumed traversal forks it: the clone continues from the
/// same point with its own copy of the frontier and visited set, it does not
/// start over.
#[derive(Debug, Clone)]
pub struct BreadthFirst<'g> {
    graph: &'g Graph,
    frontier: FrontierQueue<NodeId>,
    visited: HashSet<NodeId>,
}

impl<'g> BreadthFirst<'g> {
    /// Start a traversal at `root`. `None` gives an empty traversal.
    pub fn new(graph: &'g Graph, root: Option<NodeId>) -> Self {
        let mut frontier = FrontierQueue::new();
        if let Some(root) = root {
            frontier.push(root);
        }
        Self {
            graph,
            frontier,
            visited: HashSet::new(),
        }
    }

    /// Nodes yielded so far.
    pub fn visited_count(&self) -> usize {
        self.visited.len()
    }

    /// Entries waiting in the frontier, duplicates included.
    pub fn pending(&self) -> usize {
        self.frontier.size()
    }
}

impl<'g> Iterator for BreadthFirst<'g> {
    type Item = &'g Node;

    fn next(&mut self) -> Option<&'g Node> {
        while let Some(id) = self.frontier.next() {
            let Some(node) = self.graph.node(id) else {
                log::trace!("bfs: {} is not part of this graph", id);
                continue;
            };
            if !self.visited.insert(id) {
                log::trace!("bfs: discarding repeat of {}", id);
                continue;
            }
            self.frontier.extend(node.adjacents().iter().copied());
            log::trace!("bfs: yielding {:?} ({})", node.value(), id);
            return Some(node);
        }
        None
    }
}

impl FusedIterator for BreadthFirst<'_> {}
