/// Error types for graph construction

use crate::types::NodeId;
use thiserror::Error;

/// Graph construction errors
///
/// All of these are fatal for the graph being built: a malformed graph is
/// never handed to the search strategies.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum GraphError {
    /// Location declared twice
    #[error("Duplicate location: {0}")]
    DuplicateNode(NodeId),

    /// Edge references a location that is not in the graph
    #[error("Edge {start} -> {end} references unknown location {missing}")]
    DanglingEdge {
        start: NodeId,
        end: NodeId,
        missing: NodeId,
    },

    /// Negative weight in a weighted graph
    #[error("Edge {start} -> {end} has negative weight {weight}")]
    NegativeWeight {
        start: NodeId,
        end: NodeId,
        weight: f64,
    },

    /// NaN or infinite weight
    #[error("Edge {start} -> {end} has non-finite weight {weight}")]
    NonFiniteWeight {
        start: NodeId,
        end: NodeId,
        weight: f64,
    },
}

/// Result type for graph construction
pub type GraphResult<T> = Result<T, GraphError>;
