use super::defaults::{blank_as_path_type, blank_as_true, default_path_type, default_true};
use super::node_id::NodeId;
use serde::{Deserialize, Serialize};

/// Edge (campus path) between two locations
///
/// Represents a connection with:
/// - Start and end location IDs
/// - Weight (walking distance)
/// - Path type (e.g., "walkway", "stairs")
/// - Accessibility flag
///
/// Field names follow the campus map JSON format, so a serialized edge is a
/// valid entry of the `paths` array.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Edge {
    /// Start location ID
    #[serde(rename = "start_id")]
    pub start: NodeId,

    /// End location ID
    #[serde(rename = "end_id")]
    pub end: NodeId,

    /// Edge weight (distance)
    #[serde(rename = "distance")]
    pub weight: f64,

    /// Path type label
    #[serde(default = "default_path_type", deserialize_with = "blank_as_path_type")]
    pub path_type: String,

    /// Usable by accessible routes
    #[serde(default = "default_true", deserialize_with = "blank_as_true")]
    pub is_accessible: bool,
}

impl Edge {
    /// Create a new accessible walkway
    pub fn new(start: impl Into<NodeId>, end: impl Into<NodeId>, weight: f64) -> Self {
        Self {
            start: start.into(),
            end: end.into(),
            weight,
            path_type: default_path_type(),
            is_accessible: true,
        }
    }

    /// Set the path type
    pub fn with_path_type(mut self, path_type: impl Into<String>) -> Self {
        self.path_type = path_type.into();
        self
    }

    /// Set the accessibility flag
    pub fn with_accessible(mut self, is_accessible: bool) -> Self {
        self.is_accessible = is_accessible;
        self
    }

    /// Check if this edge is a self-loop
    pub fn is_self_loop(&self) -> bool {
        self.start == self.end
    }

    /// Check if the edge touches a location
    pub fn touches(&self, id: &NodeId) -> bool {
        &self.start == id || &self.end == id
    }

    /// Check if the edge connects two locations, in either direction
    pub fn connects(&self, a: &NodeId, b: &NodeId) -> bool {
        (&self.start == a && &self.end == b) || (&self.start == b && &self.end == a)
    }

    /// Reverse the edge direction
    pub fn reverse(&self) -> Self {
        Self {
            start: self.end.clone(),
            end: self.start.clone(),
            weight: self.weight,
            path_type: self.path_type.clone(),
            is_accessible: self.is_accessible,
        }
    }
}
