//! Graph construction options.

use serde::{Deserialize, Serialize};

/// Options fixed for the lifetime of a [`Graph`](crate::graph::Graph).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GraphConfig {
    /// When false, every edge mutation is mirrored on both endpoints.
    pub directed: bool,
}

impl GraphConfig {
    /// Configuration for an undirected graph (the default).
    pub fn undirected() -> Self {
        Self { directed: false }
    }

    /// Configuration for a directed graph.
    pub fn directed() -> Self {
        Self { directed: true }
    }
}
