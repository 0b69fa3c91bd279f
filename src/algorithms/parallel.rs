/// Parallel route queries
///
/// A built graph is immutable and `Sync`, so independent queries can run
/// on rayon's thread pool without any locking.

use super::{AlgorithmResult, SearchOptions, SearchResult, SearchStrategy};
use crate::graph::Graph;
use crate::types::NodeId;
use rayon::prelude::*;
use serde::{Deserialize, Serialize};

/// One route query of a batch
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RouteQuery {
    pub start: NodeId,
    pub goal: NodeId,
    #[serde(default)]
    pub strategy: SearchStrategy,
}

impl RouteQuery {
    /// Create a new query
    pub fn new(start: impl Into<NodeId>, goal: impl Into<NodeId>, strategy: SearchStrategy) -> Self {
        Self {
            start: start.into(),
            goal: goal.into(),
            strategy,
        }
    }
}

/// Run a batch of queries in parallel
///
/// # Returns
/// * One result per query, in query order
pub fn find_paths_parallel(
    graph: &Graph,
    queries: &[RouteQuery],
    options: &SearchOptions,
) -> Vec<AlgorithmResult<SearchResult>> {
    queries
        .par_iter()
        .map(|q| q.strategy.find_path(graph, q.start.as_str(), q.goal.as_str(), options))
        .collect()
}

/// Run every strategy on the same query
///
/// # Returns
/// * Results in `SearchStrategy::ALL` order
pub fn compare_strategies(
    graph: &Graph,
    start: &str,
    goal: &str,
    options: &SearchOptions,
) -> Vec<AlgorithmResult<SearchResult>> {
    SearchStrategy::ALL[..]
        .par_iter()
        .map(|strategy| strategy.find_path(graph, start, goal, options))
        .collect()
}
