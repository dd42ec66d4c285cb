//! In-memory graph operations: the core data structure.

pub mod adjacency;
pub mod builder;
pub mod frontier;
pub mod traversal;

pub use adjacency::Graph;
pub use builder::GraphBuilder;
pub use frontier::FrontierQueue;
pub use traversal::BreadthFirst;
