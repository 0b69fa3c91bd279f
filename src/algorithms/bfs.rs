/// Breadth-first search
///
/// Finds the path with the fewest edges, ignoring weights.

use super::result::{format_result, Predecessors};
use super::{resolve_endpoints, AlgorithmResult, SearchOptions, SearchResult, SearchStrategy, StepBudget};
use crate::graph::Graph;
use crate::types::NodeId;
use std::collections::VecDeque;

/// Find a fewest-hops path from `start` to `goal`
///
/// Locations are marked visited when first discovered, so each one enters
/// the queue at most once. Among equally short paths the one discovered
/// first wins: neighbors are enqueued in the graph's adjacency order.
///
/// # Returns
/// * `Ok(SearchResult)` - Path found, or an empty path if unreachable
/// * `Err(AlgorithmError::UnknownNode)` - Start or goal not in the graph
/// * `Err(AlgorithmError::StepLimitExceeded)` - `max_steps` reached
pub fn bfs(
    graph: &Graph,
    start: &str,
    goal: &str,
    options: &SearchOptions,
) -> AlgorithmResult<SearchResult> {
    let (start, goal) = resolve_endpoints(graph, start, goal)?;

    let mut queue = VecDeque::new();
    let mut visited = vec![false; graph.node_count()];
    let mut predecessors = Predecessors::new();
    let mut budget = StepBudget::new(options.max_steps);

    visited[start] = true;
    queue.push_back(start);

    while let Some(current) = queue.pop_front() {
        budget.tick()?;

        if current == goal {
            break;
        }

        for adj in graph.adjacent(current) {
            if visited[adj.target] || !options.allows(graph.edge_at(adj.edge)) {
                continue;
            }
            visited[adj.target] = true;
            predecessors.insert(adj.target, (current, adj.edge));
            queue.push_back(adj.target);
        }
    }

    Ok(format_result(
        graph,
        SearchStrategy::Bfs,
        start,
        goal,
        &predecessors,
        graph.is_weighted(),
        budget.used(),
    ))
}

/// Hop distance from `start` to every location it can reach
///
/// Unreachable locations are left out. Useful to check connectivity
/// before routing.
pub fn hop_distances(
    graph: &Graph,
    start: &str,
    options: &SearchOptions,
) -> AlgorithmResult<Vec<(NodeId, usize)>> {
    let (start, _) = resolve_endpoints(graph, start, start)?;

    let mut queue = VecDeque::new();
    let mut hops: Vec<Option<usize>> = vec![None; graph.node_count()];
    let mut reached = Vec::new();
    let mut budget = StepBudget::new(options.max_steps);

    hops[start] = Some(0);
    queue.push_back(start);

    while let Some(current) = queue.pop_front() {
        budget.tick()?;
        let current_hops = hops[current].unwrap_or_default();
        reached.push((graph.id_at(current).clone(), current_hops));

        for adj in graph.adjacent(current) {
            if hops[adj.target].is_some() || !options.allows(graph.edge_at(adj.edge)) {
                continue;
            }
            hops[adj.target] = Some(current_hops + 1);
            queue.push_back(adj.target);
        }
    }

    Ok(reached)
}
