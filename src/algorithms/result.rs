/// Search result formatting
///
/// Strategies record, for every reached location, the location it was
/// reached from and the edge used. This module walks that predecessor map
/// back from the goal and turns it into the canonical [`SearchResult`].

use super::SearchStrategy;
use crate::graph::Graph;
use crate::types::{Edge, NodeId, Route, RouteError};
use serde::Serialize;
use std::collections::HashMap;

/// Predecessor map: location index -> (previous location index, edge index)
pub(crate) type Predecessors = HashMap<usize, (usize, usize)>;

/// Result of a single route query
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SearchResult {
    /// Strategy that produced this result
    pub strategy: SearchStrategy,
    /// Path as a sequence of location IDs; empty if the goal is unreachable
    pub path: Vec<NodeId>,
    /// Edges traversed, oriented in travel direction
    pub edges: Vec<Edge>,
    /// Total cost/distance
    pub total_cost: f64,
    /// Number of locations expanded by the search
    pub nodes_visited: usize,
}

impl SearchResult {
    /// Whether a path was found
    pub fn is_reachable(&self) -> bool {
        !self.path.is_empty()
    }

    /// Number of edges on the path
    pub fn hop_count(&self) -> usize {
        self.path.len().saturating_sub(1)
    }

    /// Path IDs as string slices
    pub fn path_ids(&self) -> Vec<&str> {
        self.path.iter().map(NodeId::as_str).collect()
    }
}

/// Walk predecessors from `goal` back to `start`
///
/// Returns location indices and edge indices in start -> goal order, or
/// `None` if the goal was never reached.
pub(crate) fn reconstruct_path(
    start: usize,
    goal: usize,
    predecessors: &Predecessors,
) -> Option<(Vec<usize>, Vec<usize>)> {
    let mut nodes = vec![goal];
    let mut edges = Vec::new();
    let mut current = goal;

    while current != start {
        let &(prev, edge) = predecessors.get(&current)?;
        edges.push(edge);
        nodes.push(prev);
        current = prev;

        // A predecessor chain never revisits a location
        if nodes.len() > predecessors.len() + 1 {
            return None;
        }
    }

    nodes.reverse();
    edges.reverse();
    Some((nodes, edges))
}

/// Build the result of a finished search
///
/// With `count_weights` unset the reported cost is 0 whatever the path.
pub(crate) fn format_result(
    graph: &Graph,
    strategy: SearchStrategy,
    start: usize,
    goal: usize,
    predecessors: &Predecessors,
    count_weights: bool,
    nodes_visited: usize,
) -> SearchResult {
    let Some((nodes, edge_indices)) = reconstruct_path(start, goal, predecessors) else {
        return SearchResult {
            strategy,
            path: Vec::new(),
            edges: Vec::new(),
            total_cost: 0.0,
            nodes_visited,
        };
    };

    let edges: Vec<Edge> = nodes
        .windows(2)
        .zip(&edge_indices)
        .map(|(pair, &e)| {
            let edge = graph.edge_at(e);
            if edge.start == *graph.id_at(pair[0]) {
                edge.clone()
            } else {
                edge.reverse()
            }
        })
        .collect();

    let total_cost = if count_weights {
        edges.iter().fold(0.0, |acc, e| acc + e.weight)
    } else {
        0.0
    };

    SearchResult {
        strategy,
        path: nodes.into_iter().map(|i| graph.id_at(i).clone()).collect(),
        edges,
        total_cost,
        nodes_visited,
    }
}

/// Lay out a result for rendering
///
/// Returns `Ok(None)` when the result holds no path.
///
/// # Errors
/// Returns an error if the result's edges do not line up with its path,
/// which only happens for results not produced by this graph.
pub fn build_route(graph: &Graph, result: &SearchResult) -> Result<Option<Route>, RouteError> {
    if !result.is_reachable() {
        return Ok(None);
    }

    let mut stops = Vec::with_capacity(result.path.len());
    for id in &result.path {
        match graph.location(id.as_str()) {
            Some(location) => stops.push(location.clone()),
            None => return Err(RouteError::UnknownStop(id.clone())),
        }
    }

    Route::from_parts(stops, result.edges.clone()).map(Some)
}
