/// Campus map file model
///
/// The on-disk shape of a campus map, before validation. Loading a map
/// never fails on graph-level problems; those surface when the map is
/// turned into a [`Graph`](crate::graph::Graph).

use super::{ToolError, ToolResult};
use crate::graph::Graph;
use crate::types::{Edge, Location, NodeId};
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

/// Location entry of a campus map
///
/// Older map files list adjacent locations in `connections` instead of (or
/// in addition to) the `paths` array.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MapLocation {
    #[serde(flatten)]
    pub location: Location,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub connections: Vec<NodeId>,
}

impl From<Location> for MapLocation {
    fn from(location: Location) -> Self {
        Self {
            location,
            connections: Vec::new(),
        }
    }
}

/// Campus map: locations and the paths between them
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CampusMap {
    #[serde(default)]
    pub locations: Vec<MapLocation>,

    #[serde(default)]
    pub paths: Vec<Edge>,
}

impl CampusMap {
    /// Parse a campus map from JSON text
    pub fn from_json_str(json: &str) -> ToolResult<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Read a campus map from a JSON file
    pub fn load<P: AsRef<Path>>(path: P) -> ToolResult<Self> {
        let file = File::open(path.as_ref())?;
        let map: CampusMap = serde_json::from_reader(BufReader::new(file))?;

        tracing::info!(
            path = %path.as_ref().display(),
            locations = map.locations.len(),
            paths = map.paths.len(),
            "campus map loaded"
        );

        Ok(map)
    }

    /// Snapshot a built graph back into map form
    pub fn from_graph(graph: &Graph) -> Self {
        Self {
            locations: graph.locations().iter().cloned().map(MapLocation::from).collect(),
            paths: graph.edges().to_vec(),
        }
    }

    /// Get a location by ID
    pub fn location(&self, id: &str) -> Option<&Location> {
        self.locations
            .iter()
            .map(|l| &l.location)
            .find(|l| l.id.as_str() == id)
    }

    /// Look up a location, failing with a format error if it is missing
    pub(crate) fn require(&self, id: &NodeId) -> ToolResult<&Location> {
        self.location(id.as_str())
            .ok_or_else(|| ToolError::InvalidFormat(format!("unknown location {}", id)))
    }

    /// Whether some path already joins two locations, in either direction
    pub fn has_path_between(&self, a: &NodeId, b: &NodeId) -> bool {
        self.paths.iter().any(|p| p.connects(a, b))
    }
}
