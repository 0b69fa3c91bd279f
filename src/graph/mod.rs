/// Campus graph representation
///
/// This module provides the read-only graph the search strategies run on:
/// - Graph: locations, edges and index-based adjacency lists
/// - GraphBuilder: validated construction
/// - GraphError: construction failures
///
/// A built graph is never mutated, so it can be shared between threads and
/// queried concurrently without locking.

pub mod builder;
pub mod error;

pub use builder::GraphBuilder;
pub use error::{GraphError, GraphResult};

use crate::types::{Edge, Location, NodeId};
use std::collections::HashMap;

/// One adjacency list entry: neighbor index plus the edge leading there
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Adjacency {
    pub target: usize,
    pub edge: usize,
}

/// Immutable campus graph
///
/// Owns all locations and edges. Adjacency lists are kept per location in
/// edge declaration order; an undirected edge appears in the lists of both
/// of its endpoints.
#[derive(Debug, Clone)]
pub struct Graph {
    pub(crate) locations: Vec<Location>,
    pub(crate) index: HashMap<NodeId, usize>,
    pub(crate) edges: Vec<Edge>,
    pub(crate) adjacency: Vec<Vec<Adjacency>>,
    pub(crate) weighted: bool,
    pub(crate) directed: bool,
}

impl Graph {
    /// Start building a weighted, undirected graph
    pub fn builder() -> GraphBuilder {
        GraphBuilder::new()
    }

    /// Check if a location exists
    pub fn has_node(&self, id: &str) -> bool {
        self.index.contains_key(id)
    }

    /// Get a location by ID
    pub fn location(&self, id: &str) -> Option<&Location> {
        self.index.get(id).map(|&i| &self.locations[i])
    }

    /// All locations, in declaration order
    pub fn locations(&self) -> &[Location] {
        &self.locations
    }

    /// All edges, in declaration order
    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    /// Number of locations
    pub fn node_count(&self) -> usize {
        self.locations.len()
    }

    /// Number of edges (an undirected edge counts once)
    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    /// Whether weights carry meaning for this graph
    pub fn is_weighted(&self) -> bool {
        self.weighted
    }

    /// Whether edges are one-way
    pub fn is_directed(&self) -> bool {
        self.directed
    }

    /// Neighbors of a location with the weight of the connecting edge
    ///
    /// Neighbors are yielded in edge declaration order. An unknown location
    /// has no neighbors.
    pub fn neighbors<'a>(&'a self, id: &str) -> impl Iterator<Item = (&'a NodeId, f64)> + 'a {
        let adjacent: &[Adjacency] = match self.index.get(id) {
            Some(&i) => self.adjacency[i].as_slice(),
            None => &[],
        };
        adjacent
            .iter()
            .map(move |adj| (&self.locations[adj.target].id, self.edges[adj.edge].weight))
    }

    /// Edges incident to a location, in declaration order
    pub fn incident_edges<'a>(&'a self, id: &str) -> impl Iterator<Item = &'a Edge> + 'a {
        let adjacent: &[Adjacency] = match self.index.get(id) {
            Some(&i) => self.adjacency[i].as_slice(),
            None => &[],
        };
        adjacent.iter().map(move |adj| &self.edges[adj.edge])
    }

    /// Number of edges leaving a location
    pub fn degree(&self, id: &str) -> usize {
        self.index.get(id).map_or(0, |&i| self.adjacency[i].len())
    }

    /// Cheapest edge running from `from` to `to`, if any
    pub fn edge_between(&self, from: &str, to: &str) -> Option<&Edge> {
        let target = *self.index.get(to)?;
        let source = *self.index.get(from)?;
        self.adjacency[source]
            .iter()
            .filter(|adj| adj.target == target)
            .map(|adj| &self.edges[adj.edge])
            .min_by(|a, b| a.weight.total_cmp(&b.weight))
    }

    /// First edge with a negative weight, optionally restricted to
    /// accessible edges
    pub fn first_negative_edge(&self, accessible_only: bool) -> Option<&Edge> {
        self.edges
            .iter()
            .filter(|e| !accessible_only || e.is_accessible)
            .find(|e| e.weight < 0.0)
    }

    pub(crate) fn index_of(&self, id: &str) -> Option<usize> {
        self.index.get(id).copied()
    }

    pub(crate) fn id_at(&self, idx: usize) -> &NodeId {
        &self.locations[idx].id
    }

    pub(crate) fn adjacent(&self, idx: usize) -> &[Adjacency] {
        &self.adjacency[idx]
    }

    pub(crate) fn edge_at(&self, idx: usize) -> &Edge {
        &self.edges[idx]
    }
}
