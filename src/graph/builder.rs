//! Fluent API for building Graph instances.

use crate::types::{EdgeSpec, GraphConfig};

use super::Graph;

/// Fluent builder for constructing a [`Graph`].
///
/// Nodes and edges are applied in the order they were given, which fixes
/// creation order and adjacency order in the built graph.
#[derive(Debug, Clone, Default)]
pub struct GraphBuilder {
    config: GraphConfig,
    steps: Vec<Step>,
}

#[derive(Debug, Clone)]
enum Step {
    Node(String),
    Edge(EdgeSpec),
}

impl GraphBuilder {
    /// Create a builder for an undirected graph.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a builder with the given configuration.
    pub fn with_config(config: GraphConfig) -> Self {
        Self {
            config,
            steps: Vec::new(),
        }
    }

    /// Set whether the graph is directed.
    pub fn directed(mut self, directed: bool) -> Self {
        self.config.directed = directed;
        self
    }

    /// Add a node, possibly isolated.
    pub fn node(mut self, value: impl Into<String>) -> Self {
        self.steps.push(Step::Node(value.into()));
        self
    }

    /// Add an edge.
    pub fn edge(mut self, source: impl Into<String>, destination: impl Into<String>) -> Self {
        self.steps
            .push(Step::Edge(EdgeSpec::new(source, destination)));
        self
    }

    /// Add several edges.
    pub fn edges<I>(mut self, edges: I) -> Self
    where
        I: IntoIterator<Item = EdgeSpec>,
    {
        self.steps.extend(edges.into_iter().map(Step::Edge));
        self
    }

    /// Build the final Graph.
    pub fn build(self) -> Graph {
        let mut graph = Graph::new(self.config);
        for step in &self.steps {
            match step {
                Step::Node(value) => {
                    graph.add_node(value);
                }
                Step::Edge(edge) => {
                    graph.add_edge(&edge.source, &edge.destination);
                }
            }
        }
        graph
    }
}
