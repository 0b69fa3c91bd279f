/// Graph search algorithms
///
/// This module implements the route-finding strategies over a [`Graph`]:
/// - BFS: fewest hops
/// - DFS: some path, deterministic
/// - Dijkstra: minimum total weight
///
/// All strategies share one signature and return a [`SearchResult`]. An
/// unreachable goal is a normal outcome (empty path), not an error.

pub mod bfs;
pub mod dfs;
pub mod dijkstra;
pub mod parallel;
pub mod result;

pub use bfs::{bfs, hop_distances};
pub use dfs::dfs;
pub use dijkstra::{dijkstra, shortest_paths_from};
pub use parallel::{compare_strategies, find_paths_parallel, RouteQuery};
pub use result::{build_route, SearchResult};

use crate::graph::Graph;
use crate::types::{Edge, NodeId};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Algorithm errors
#[derive(Error, Debug, Clone, PartialEq)]
pub enum AlgorithmError {
    #[error("Unknown location: {0}")]
    UnknownNode(NodeId),

    #[error("Edge {start} -> {end} has negative weight {weight}")]
    NegativeWeight {
        start: NodeId,
        end: NodeId,
        weight: f64,
    },

    #[error("Search stopped after {0} expansions")]
    StepLimitExceeded(usize),
}

pub type AlgorithmResult<T> = Result<T, AlgorithmError>;

/// Search strategy selector
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SearchStrategy {
    /// Breadth-first search: fewest edges
    Bfs,
    /// Depth-first search: first path found in adjacency order
    Dfs,
    /// Dijkstra: lowest total weight
    #[default]
    Dijkstra,
}

impl SearchStrategy {
    /// Every strategy, in a fixed order
    pub const ALL: [SearchStrategy; 3] = [
        SearchStrategy::Bfs,
        SearchStrategy::Dfs,
        SearchStrategy::Dijkstra,
    ];

    /// Run this strategy
    ///
    /// # Arguments
    /// * `graph` - Campus graph
    /// * `start` - Start location ID
    /// * `goal` - Goal location ID
    /// * `options` - Edge filter and step limit
    ///
    /// # Returns
    /// * `Ok(SearchResult)` - Path found, or empty path if unreachable
    /// * `Err(AlgorithmError)` - Malformed query
    pub fn find_path(
        self,
        graph: &Graph,
        start: &str,
        goal: &str,
        options: &SearchOptions,
    ) -> AlgorithmResult<SearchResult> {
        let result = match self {
            SearchStrategy::Bfs => bfs(graph, start, goal, options),
            SearchStrategy::Dfs => dfs(graph, start, goal, options),
            SearchStrategy::Dijkstra => dijkstra(graph, start, goal, options),
        }?;

        tracing::debug!(
            strategy = %self,
            %start,
            %goal,
            reachable = result.is_reachable(),
            hops = result.hop_count(),
            cost = result.total_cost,
            visited = result.nodes_visited,
            "search finished"
        );

        Ok(result)
    }

    /// Lowercase name
    pub fn name(self) -> &'static str {
        match self {
            SearchStrategy::Bfs => "bfs",
            SearchStrategy::Dfs => "dfs",
            SearchStrategy::Dijkstra => "dijkstra",
        }
    }
}

impl fmt::Display for SearchStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for SearchStrategy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "bfs" => Ok(SearchStrategy::Bfs),
            "dfs" => Ok(SearchStrategy::Dfs),
            "dijkstra" => Ok(SearchStrategy::Dijkstra),
            other => Err(format!("unknown search strategy: {}", other)),
        }
    }
}

/// Search options
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchOptions {
    /// Only traverse edges flagged accessible
    pub accessible_only: bool,
    /// Maximum number of node expansions (None = unlimited)
    pub max_steps: Option<usize>,
}

impl SearchOptions {
    /// Restrict the search to accessible edges
    pub fn accessible(mut self) -> Self {
        self.accessible_only = true;
        self
    }

    /// Bound the number of node expansions
    pub fn with_max_steps(mut self, max_steps: usize) -> Self {
        self.max_steps = Some(max_steps);
        self
    }

    /// Whether an edge may be traversed
    pub fn allows(&self, edge: &Edge) -> bool {
        !self.accessible_only || edge.is_accessible
    }
}

/// Look up both endpoints of a query
pub(crate) fn resolve_endpoints(
    graph: &Graph,
    start: &str,
    goal: &str,
) -> AlgorithmResult<(usize, usize)> {
    let s = graph
        .index_of(start)
        .ok_or_else(|| AlgorithmError::UnknownNode(NodeId::from(start)))?;
    let g = graph
        .index_of(goal)
        .ok_or_else(|| AlgorithmError::UnknownNode(NodeId::from(goal)))?;
    Ok((s, g))
}

/// Expansion counter enforcing `SearchOptions::max_steps`
#[derive(Debug, Clone, Copy)]
pub(crate) struct StepBudget {
    limit: Option<usize>,
    used: usize,
}

impl StepBudget {
    pub(crate) fn new(limit: Option<usize>) -> Self {
        Self { limit, used: 0 }
    }

    /// Count one expansion
    pub(crate) fn tick(&mut self) -> AlgorithmResult<()> {
        if let Some(limit) = self.limit {
            if self.used >= limit {
                return Err(AlgorithmError::StepLimitExceeded(limit));
            }
        }
        self.used += 1;
        Ok(())
    }

    pub(crate) fn used(&self) -> usize {
        self.used
    }
}
