use super::defaults::{blank_as_default, blank_as_true, default_true};
use super::node_id::NodeId;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Kind of campus location
///
/// Unknown kinds found in map data are kept verbatim in `Other`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LocationKind {
    #[default]
    Building,
    Entrance,
    Waypoint,
    Parking,
    Landmark,
    #[serde(untagged)]
    Other(String),
}

impl fmt::Display for LocationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LocationKind::Building => f.write_str("building"),
            LocationKind::Entrance => f.write_str("entrance"),
            LocationKind::Waypoint => f.write_str("waypoint"),
            LocationKind::Parking => f.write_str("parking"),
            LocationKind::Landmark => f.write_str("landmark"),
            LocationKind::Other(kind) => f.write_str(kind),
        }
    }
}

/// Location (Node) on the campus map
///
/// Represents a graph node with:
/// - Unique identifier (NodeId)
/// - Display name and optional full name
/// - Normalized map coordinates (0.0..=1.0 on both axes)
/// - Kind and accessibility flags
///
/// Field names follow the campus map JSON format.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Location {
    /// Unique identifier
    pub id: NodeId,

    /// Short display name
    pub name: String,

    /// X coordinate (normalized)
    pub x: f64,

    /// Y coordinate (normalized)
    pub y: f64,

    /// Location kind
    #[serde(rename = "type", default, deserialize_with = "blank_as_default")]
    pub kind: LocationKind,

    /// Full name, empty when the map data has none
    #[serde(default, deserialize_with = "blank_as_default")]
    pub full_name: String,

    /// Wheelchair accessible
    #[serde(default = "default_true", deserialize_with = "blank_as_true")]
    pub is_accessible: bool,

    /// Intermediate routing point, not a destination
    #[serde(default, deserialize_with = "blank_as_default")]
    pub is_waypoint: bool,
}

impl Location {
    /// Create a new location at the given coordinates
    pub fn new(id: impl Into<NodeId>, name: impl Into<String>, x: f64, y: f64) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            x,
            y,
            kind: LocationKind::Building,
            full_name: String::new(),
            is_accessible: true,
            is_waypoint: false,
        }
    }

    /// Create a bare location with only an id, placed at the origin
    pub fn bare(id: impl Into<NodeId>) -> Self {
        let id = id.into();
        let name = id.to_string();
        Self::new(id, name, 0.0, 0.0)
    }

    /// Set the location kind
    pub fn with_kind(mut self, kind: LocationKind) -> Self {
        self.kind = kind;
        self
    }

    /// Mark as an intermediate routing point
    pub fn with_waypoint(mut self, is_waypoint: bool) -> Self {
        self.is_waypoint = is_waypoint;
        self
    }

    /// Set the full name
    pub fn with_full_name(mut self, full_name: impl Into<String>) -> Self {
        self.full_name = full_name.into();
        self
    }

    /// Set the accessibility flag
    pub fn with_accessible(mut self, is_accessible: bool) -> Self {
        self.is_accessible = is_accessible;
        self
    }

    /// Name used for display: the full name when present
    pub fn display_name(&self) -> &str {
        if self.full_name.is_empty() {
            &self.name
        } else {
            &self.full_name
        }
    }

    /// Euclidean distance to another location in normalized map units
    pub fn distance_to(&self, other: &Location) -> f64 {
        let dx = other.x - self.x;
        let dy = other.y - self.y;
        (dx * dx + dy * dy).sqrt()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_location_creation() {
        let loc = Location::new("LIB", "Library", 0.25, 0.5)
            .with_full_name("Pollak Library")
            .with_kind(LocationKind::Building);

        assert_eq!(loc.id, NodeId::from("LIB"));
        assert_eq!(loc.display_name(), "Pollak Library");
        assert!(loc.is_accessible);
        assert!(!loc.is_waypoint);
    }

    #[test]
    fn test_kind_and_waypoint_are_independent() {
        let loc = Location::bare("WP").with_kind(LocationKind::Waypoint);
        assert!(!loc.is_waypoint);

        let loc = Location::bare("LOT").with_kind(LocationKind::Parking).with_waypoint(true);
        assert_eq!(loc.kind, LocationKind::Parking);
        assert!(loc.is_waypoint);
    }

    #[test]
    fn test_blank_fields_use_defaults() {
        let loc: Location = serde_json::from_value(json!({
            "id": "A",
            "name": "A",
            "x": 0.0,
            "y": 0.0,
            "type": null,
            "full_name": null,
            "is_accessible": null,
            "is_waypoint": null
        }))
        .unwrap();

        assert_eq!(loc.kind, LocationKind::Building);
        assert_eq!(loc.full_name, "");
        assert!(loc.is_accessible);
        assert!(!loc.is_waypoint);
    }

    #[test]
    fn test_location_defaults_from_json() {
        let loc: Location = serde_json::from_value(json!({
            "id": "WP1",
            "name": "wp1",
            "x": 0.1,
            "y": 0.2,
            "type": "waypoint"
        }))
        .unwrap();

        assert_eq!(loc.kind, LocationKind::Waypoint);
        assert!(loc.is_accessible);
        assert_eq!(loc.full_name, "");
        assert_eq!(loc.display_name(), "wp1");
    }

    #[test]
    fn test_unknown_kind_is_preserved() {
        let loc: Location = serde_json::from_value(json!({
            "id": "FT",
            "name": "Fountain",
            "x": 0.0,
            "y": 0.0,
            "type": "fountain"
        }))
        .unwrap();

        assert_eq!(loc.kind, LocationKind::Other("fountain".to_string()));
        assert_eq!(loc.kind.to_string(), "fountain");
    }

    #[test]
    fn test_distance_to() {
        let a = Location::new("A", "A", 0.0, 0.0);
        let b = Location::new("B", "B", 0.3, 0.4);
        assert!((a.distance_to(&b) - 0.5).abs() < 1e-12);
    }
}
