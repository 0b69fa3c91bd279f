use super::{edge::Edge, location::Location, node_id::NodeId};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Error types for Route operations
#[derive(Error, Debug, PartialEq)]
pub enum RouteError {
    #[error("Route is empty")]
    EmptyRoute,

    #[error("Route stop {0} is not on the map")]
    UnknownStop(NodeId),

    #[error("Route stops and legs count mismatch: {stops} stops, {legs} legs")]
    CountMismatch { stops: usize, legs: usize },

    #[error("Route discontinuity at leg {pos}: leg connects {leg_start} to {leg_end}, but route has {route_at}")]
    Discontinuity {
        pos: usize,
        leg_start: NodeId,
        leg_end: NodeId,
        route_at: NodeId,
    },
}

/// Route represents a found path laid out for rendering
///
/// A route consists of an alternating sequence of stops and legs:
/// (s1) -[l1]-> (s2) -[l2]-> (s3) ... -[ln]-> (sn+1)
///
/// Invariants:
/// - stops.len() = legs.len() + 1
/// - legs[i] runs from stops[i] to stops[i+1] (legs are oriented in travel
///   direction, even when the underlying edge was declared the other way)
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Route {
    /// Locations visited, start first
    pub stops: Vec<Location>,

    /// Paths walked between consecutive stops
    pub legs: Vec<Edge>,
}

impl Route {
    /// Create a new route with a single stop (no legs)
    pub fn new(start: Location) -> Self {
        Self {
            stops: vec![start],
            legs: Vec::new(),
        }
    }

    /// Create a route from stops and legs
    ///
    /// # Errors
    /// Returns an error if the route is invalid (wrong counts or discontinuous)
    pub fn from_parts(stops: Vec<Location>, legs: Vec<Edge>) -> Result<Self, RouteError> {
        let route = Self { stops, legs };
        route.validate()?;
        Ok(route)
    }

    /// Validate the route invariants
    pub fn validate(&self) -> Result<(), RouteError> {
        if self.stops.is_empty() {
            return Err(RouteError::EmptyRoute);
        }

        if self.stops.len() != self.legs.len() + 1 {
            return Err(RouteError::CountMismatch {
                stops: self.stops.len(),
                legs: self.legs.len(),
            });
        }

        for (i, leg) in self.legs.iter().enumerate() {
            let from = &self.stops[i];
            let to = &self.stops[i + 1];

            if leg.start != from.id {
                return Err(RouteError::Discontinuity {
                    pos: i,
                    leg_start: leg.start.clone(),
                    leg_end: leg.end.clone(),
                    route_at: from.id.clone(),
                });
            }

            if leg.end != to.id {
                return Err(RouteError::Discontinuity {
                    pos: i,
                    leg_start: leg.start.clone(),
                    leg_end: leg.end.clone(),
                    route_at: to.id.clone(),
                });
            }
        }

        Ok(())
    }

    /// Get the first stop
    pub fn start(&self) -> Option<&Location> {
        self.stops.first()
    }

    /// Get the last stop
    pub fn end(&self) -> Option<&Location> {
        self.stops.last()
    }

    /// Number of legs
    pub fn len(&self) -> usize {
        self.legs.len()
    }

    /// Check if the route has no legs (start == goal)
    pub fn is_empty(&self) -> bool {
        self.legs.is_empty()
    }

    /// Total walked distance
    pub fn distance(&self) -> f64 {
        self.legs.iter().map(|l| l.weight).sum()
    }

    /// Get all stop IDs
    pub fn stop_ids(&self) -> Vec<NodeId> {
        self.stops.iter().map(|s| s.id.clone()).collect()
    }

    /// Polyline of stop coordinates, for drawing
    pub fn polyline(&self) -> Vec<(f64, f64)> {
        self.stops.iter().map(|s| (s.x, s.y)).collect()
    }

    /// Check if every leg is accessible
    pub fn is_accessible(&self) -> bool {
        self.legs.iter().all(|l| l.is_accessible)
    }

    /// Reverse the route
    pub fn reverse(&self) -> Self {
        let stops: Vec<Location> = self.stops.iter().rev().cloned().collect();
        let legs: Vec<Edge> = self.legs.iter().rev().map(|l| l.reverse()).collect();

        Self { stops, legs }
    }
}
