//! Spatial-subsystem error type.

use thiserror::Error;

use tm_core::{CoreError, NodeId};

/// Errors produced by `tm-spatial`.
#[derive(Debug, Error, PartialEq)]
pub enum SpatialError {
    #[error("no route from {} to {}", .from.index(), .to.index())]
    NoRoute { from: NodeId, to: NodeId },

    #[error("node {} not found in network", .0.index())]
    NodeNotFound(NodeId),

    #[error("no location named {0:?}")]
    LocationNotFound(String),

    #[error("{what} capacity of {limit} exceeded")]
    CapacityExceeded { what: &'static str, limit: usize },

    #[error(transparent)]
    Core(#[from] CoreError),
}

pub type SpatialResult<T> = Result<T, SpatialError>;
