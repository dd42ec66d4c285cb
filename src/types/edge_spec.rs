//! `SRC:DST` edge arguments.

use std::fmt;
use std::str::FromStr;

use super::error::GraphError;

/// An edge named by its endpoint values, parsed from `SRC:DST`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EdgeSpec {
    pub source: String,
    pub destination: String,
}

impl EdgeSpec {
    pub fn new(source: impl Into<String>, destination: impl Into<String>) -> Self {
        Self {
            source: source.into(),
            destination: destination.into(),
        }
    }
}

impl FromStr for EdgeSpec {
    type Err = GraphError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (source, destination) = s
            .split_once(':')
            .ok_or_else(|| GraphError::InvalidEdgeSpec(s.to_string()))?;
        let (source, destination) = (source.trim(), destination.trim());
        if source.is_empty() || destination.is_empty() {
            return Err(GraphError::InvalidEdgeSpec(s.to_string()));
        }
        Ok(Self::new(source, destination))
    }
}

impl fmt::Display for EdgeSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.source, self.destination)
    }
}
