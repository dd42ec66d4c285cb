//! adjgraph: an in-memory adjacency-list graph with lazy breadth-first traversal.
//!
//! Nodes are keyed by string value and live in an arena owned by the graph;
//! adjacency lists hold [`NodeId`] handles. Graphs are directed or undirected,
//! fixed at construction.
//!
//! ```
//! use adjgraph::Graph;
//!
//! let mut graph = Graph::undirected();
//! let (a, _) = graph.add_edge("a", "c");
//! graph.add_edge("a", "b");
//! graph.add_edge("c", "d");
//! graph.add_edge("b", "c");
//!
//! let order: Vec<&str> = graph.breadth_first(Some(a)).map(|n| n.value()).collect();
//! assert_eq!(order, ["a", "c", "b", "d"]);
//! ```

pub mod cli;
pub mod graph;
pub mod types;

// Re-export commonly used types at the crate root
pub use graph::{BreadthFirst, FrontierQueue, Graph, GraphBuilder};
pub use types::{EdgeSpec, GraphConfig, GraphError, GraphResult, Node, NodeId};
