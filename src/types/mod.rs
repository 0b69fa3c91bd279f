/// Core data types for campus routing
///
/// This module defines the fundamental types used throughout the system:
/// - NodeId: string key of a campus location
/// - Location: graph node with coordinates and accessibility
/// - Edge: weighted campus path between two locations
/// - Route: sequence of stops and legs forming a rendered path

mod defaults;
pub mod edge;
pub mod location;
pub mod node_id;
pub mod path;

pub use edge::Edge;
pub use location::{Location, LocationKind};
pub use node_id::NodeId;
pub use path::{Route, RouteError};
