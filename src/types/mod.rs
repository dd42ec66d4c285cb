//! All data types for the adjgraph library.

pub mod config;
pub mod edge_spec;
pub mod error;
pub mod node;

pub use config::GraphConfig;
pub use edge_spec::EdgeSpec;
pub use error::{GraphError, GraphResult};
pub use node::{Node, NodeId};
