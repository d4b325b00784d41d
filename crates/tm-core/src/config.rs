//! Network capacity configuration.

use crate::{CoreError, CoreResult};

/// Capacity limits for a road graph.
///
/// Typically loaded from a JSON file by the application crate and passed to
/// `Graph::with_config`.  Inserting past either limit is a hard error.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct NetworkConfig {
    /// Maximum number of locations.  Default: 50.
    pub max_nodes: usize,

    /// Maximum number of directed edge records.  Every road adds two.
    /// Default: 200.
    pub max_edges: usize,
}

impl NetworkConfig {
    pub const DEFAULT_MAX_NODES: usize = 50;
    pub const DEFAULT_MAX_EDGES: usize = 200;

    pub fn new(max_nodes: usize, max_edges: usize) -> CoreResult<Self> {
        let config = Self { max_nodes, max_edges };
        config.validate()?;
        Ok(config)
    }

    /// Reject configurations that cannot hold a single road.
    pub fn validate(&self) -> CoreResult<()> {
        if self.max_nodes < 2 {
            return Err(CoreError::Config(format!(
                "max_nodes {} cannot hold a road (need at least 2)",
                self.max_nodes
            )));
        }
        if self.max_nodes > u32::MAX as usize {
            return Err(CoreError::Config(format!(
                "max_nodes {} exceeds the NodeId range",
                self.max_nodes
            )));
        }
        if self.max_edges % 2 != 0 {
            return Err(CoreError::Config(format!(
                "max_edges {} must be even (roads are stored as edge pairs)",
                self.max_edges
            )));
        }
        if self.max_edges < 2 {
            return Err(CoreError::Config(format!(
                "max_edges {} cannot hold a road (need at least 2)",
                self.max_edges
            )));
        }
        Ok(())
    }
}

impl Default for NetworkConfig {
    fn default() -> Self {
        Self {
            max_nodes: Self::DEFAULT_MAX_NODES,
            max_edges: Self::DEFAULT_MAX_EDGES,
        }
    }
}
