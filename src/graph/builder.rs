/// Graph construction
///
/// The builder collects locations and edges, then validates everything in
/// one pass when `build` is called.

use super::error::{GraphError, GraphResult};
use super::{Adjacency, Graph};
use crate::types::{Edge, Location, NodeId};
use std::collections::HashMap;

/// Builder for an immutable [`Graph`]
///
/// Edge declaration order is preserved: it is the order in which the
/// search strategies enumerate neighbors.
#[derive(Debug, Clone)]
pub struct GraphBuilder {
    locations: Vec<Location>,
    edges: Vec<Edge>,
    weighted: bool,
    directed: bool,
}

impl Default for GraphBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl GraphBuilder {
    /// Start a weighted, undirected graph
    ///
    /// Negative weights are rejected at `build` time.
    pub fn new() -> Self {
        Self {
            locations: Vec::new(),
            edges: Vec::new(),
            weighted: true,
            directed: false,
        }
    }

    /// Start an unweighted, undirected graph
    ///
    /// Weights are stored as given, negative ones included. BFS and DFS
    /// report a zero cost on such graphs; Dijkstra refuses negative weights
    /// at search time.
    pub fn unweighted() -> Self {
        Self {
            weighted: false,
            ..Self::new()
        }
    }

    /// Make edges one-way (start -> end only)
    pub fn directed(mut self) -> Self {
        self.directed = true;
        self
    }

    /// Add a location
    pub fn location(mut self, location: Location) -> Self {
        self.locations.push(location);
        self
    }

    /// Add a bare location identified only by its id
    pub fn node(self, id: impl Into<NodeId>) -> Self {
        self.location(Location::bare(id))
    }

    /// Add several bare locations
    pub fn nodes<I, S>(self, ids: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<NodeId>,
    {
        ids.into_iter().fold(self, |builder, id| builder.node(id))
    }

    /// Add a weighted edge
    pub fn edge(self, start: impl Into<NodeId>, end: impl Into<NodeId>, weight: f64) -> Self {
        self.with_edge(Edge::new(start, end, weight))
    }

    /// Add an edge with unit weight
    pub fn link(self, start: impl Into<NodeId>, end: impl Into<NodeId>) -> Self {
        self.edge(start, end, 1.0)
    }

    /// Add a fully specified edge
    pub fn with_edge(mut self, edge: Edge) -> Self {
        self.edges.push(edge);
        self
    }

    /// Add a location in place
    pub fn push_location(&mut self, location: Location) -> &mut Self {
        self.locations.push(location);
        self
    }

    /// Add an edge in place
    pub fn push_edge(&mut self, edge: Edge) -> &mut Self {
        self.edges.push(edge);
        self
    }

    /// Validate and freeze the graph
    ///
    /// # Errors
    /// * `GraphError::DuplicateNode` - a location id was added twice
    /// * `GraphError::DanglingEdge` - an edge references an unknown location
    /// * `GraphError::NonFiniteWeight` - a weight is NaN or infinite
    /// * `GraphError::NegativeWeight` - a weighted graph has a negative weight
    pub fn build(self) -> GraphResult<Graph> {
        let mut index: HashMap<NodeId, usize> = HashMap::with_capacity(self.locations.len());
        for (i, location) in self.locations.iter().enumerate() {
            if index.insert(location.id.clone(), i).is_some() {
                return Err(GraphError::DuplicateNode(location.id.clone()));
            }
        }

        let mut adjacency: Vec<Vec<Adjacency>> = vec![Vec::new(); self.locations.len()];

        for (edge_idx, edge) in self.edges.iter().enumerate() {
            let dangling = |missing: &NodeId| GraphError::DanglingEdge {
                start: edge.start.clone(),
                end: edge.end.clone(),
                missing: missing.clone(),
            };
            let start = *index.get(&edge.start).ok_or_else(|| dangling(&edge.start))?;
            let end = *index.get(&edge.end).ok_or_else(|| dangling(&edge.end))?;

            if !edge.weight.is_finite() {
                return Err(GraphError::NonFiniteWeight {
                    start: edge.start.clone(),
                    end: edge.end.clone(),
                    weight: edge.weight,
                });
            }

            if self.weighted && edge.weight < 0.0 {
                return Err(GraphError::NegativeWeight {
                    start: edge.start.clone(),
                    end: edge.end.clone(),
                    weight: edge.weight,
                });
            }

            adjacency[start].push(Adjacency {
                target: end,
                edge: edge_idx,
            });
            if !self.directed && start != end {
                adjacency[end].push(Adjacency {
                    target: start,
                    edge: edge_idx,
                });
            }
        }

        tracing::debug!(
            locations = self.locations.len(),
            edges = self.edges.len(),
            weighted = self.weighted,
            directed = self.directed,
            "graph built"
        );

        Ok(Graph {
            locations: self.locations,
            index,
            edges: self.edges,
            adjacency,
            weighted: self.weighted,
            directed: self.directed,
        })
    }
}
