/// Shortest path algorithms
///
/// Implements Dijkstra's algorithm for finding minimum-weight routes.

use super::result::{format_result, Predecessors};
use super::{
    resolve_endpoints, AlgorithmError, AlgorithmResult, SearchOptions, SearchResult,
    SearchStrategy, StepBudget,
};
use crate::graph::Graph;
use std::cmp::Ordering;
use std::collections::BinaryHeap;

/// Node in priority queue for Dijkstra's algorithm
#[derive(Debug, Clone, Copy)]
struct DijkstraNode {
    vertex: usize,
    cost: f64,
    /// Insertion counter; equal costs pop in insertion order
    seq: u64,
}

impl Ord for DijkstraNode {
    fn cmp(&self, other: &Self) -> Ordering {
        // Reverse ordering for min-heap
        other
            .cost
            .total_cmp(&self.cost)
            .then_with(|| other.seq.cmp(&self.seq))
    }
}

impl PartialOrd for DijkstraNode {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for DijkstraNode {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for DijkstraNode {}

/// Per-location search state
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum NodeState {
    Undiscovered,
    Frontier,
    Finalized,
}

/// Working state shared by the point-to-point and single-source searches
struct Search<'g> {
    graph: &'g Graph,
    options: &'g SearchOptions,
    heap: BinaryHeap<DijkstraNode>,
    distances: Vec<f64>,
    state: Vec<NodeState>,
    predecessors: Predecessors,
    budget: StepBudget,
    seq: u64,
}

impl<'g> Search<'g> {
    fn new(graph: &'g Graph, options: &'g SearchOptions, start: usize) -> AlgorithmResult<Self> {
        if let Some(edge) = graph.first_negative_edge(options.accessible_only) {
            return Err(AlgorithmError::NegativeWeight {
                start: edge.start.clone(),
                end: edge.end.clone(),
                weight: edge.weight,
            });
        }

        let n = graph.node_count();
        let mut search = Self {
            graph,
            options,
            heap: BinaryHeap::new(),
            distances: vec![f64::INFINITY; n],
            state: vec![NodeState::Undiscovered; n],
            predecessors: Predecessors::new(),
            budget: StepBudget::new(options.max_steps),
            seq: 0,
        };
        search.distances[start] = 0.0;
        search.push(start, 0.0);
        Ok(search)
    }

    fn push(&mut self, vertex: usize, cost: f64) {
        self.state[vertex] = NodeState::Frontier;
        self.heap.push(DijkstraNode {
            vertex,
            cost,
            seq: self.seq,
        });
        self.seq += 1;
    }

    /// Pop and finalize the next location
    ///
    /// Stale heap entries (superseded by a cheaper relaxation) are skipped.
    fn next(&mut self) -> AlgorithmResult<Option<(usize, f64)>> {
        while let Some(DijkstraNode { vertex, cost, .. }) = self.heap.pop() {
            if self.state[vertex] == NodeState::Finalized {
                continue;
            }
            self.budget.tick()?;
            self.state[vertex] = NodeState::Finalized;
            return Ok(Some((vertex, cost)));
        }
        Ok(None)
    }

    fn relax(&mut self, vertex: usize, cost: f64) {
        let graph = self.graph;
        for adj in graph.adjacent(vertex) {
            if self.state[adj.target] == NodeState::Finalized {
                continue;
            }

            let edge = graph.edge_at(adj.edge);
            if !self.options.allows(edge) {
                continue;
            }

            let new_cost = cost + edge.weight;

            // Strict comparison keeps the first-discovered predecessor on ties
            if new_cost < self.distances[adj.target] {
                self.distances[adj.target] = new_cost;
                self.predecessors.insert(adj.target, (vertex, adj.edge));
                self.push(adj.target, new_cost);
            }
        }
    }
}

/// Find the minimum-weight path from `start` to `goal`
///
/// # Arguments
/// * `graph` - Campus graph
/// * `start` - Start location ID
/// * `goal` - Goal location ID
/// * `options` - Edge filter and step limit
///
/// # Returns
/// * `Ok(SearchResult)` - Shortest path found, or an empty path if unreachable
/// * `Err(AlgorithmError::UnknownNode)` - Start or goal not in the graph
/// * `Err(AlgorithmError::NegativeWeight)` - A usable edge has a negative
///   weight; reported before any location is expanded
/// * `Err(AlgorithmError::StepLimitExceeded)` - `max_steps` reached
pub fn dijkstra(
    graph: &Graph,
    start: &str,
    goal: &str,
    options: &SearchOptions,
) -> AlgorithmResult<SearchResult> {
    let (start, goal) = resolve_endpoints(graph, start, goal)?;
    let mut search = Search::new(graph, options, start)?;

    while let Some((vertex, cost)) = search.next()? {
        // Found destination
        if vertex == goal {
            break;
        }
        search.relax(vertex, cost);
    }

    Ok(format_result(
        graph,
        SearchStrategy::Dijkstra,
        start,
        goal,
        &search.predecessors,
        true,
        search.budget.used(),
    ))
}

/// Find the shortest path to every location reachable from `start`
///
/// # Arguments
/// * `graph` - Campus graph
/// * `start` - Start location ID
/// * `options` - Edge filter and step limit
/// * `max_cost` - Stop expanding beyond this total cost (None = unbounded)
///
/// # Returns
/// * One result per reached location (start excluded), nearest first
pub fn shortest_paths_from(
    graph: &Graph,
    start: &str,
    options: &SearchOptions,
    max_cost: Option<f64>,
) -> AlgorithmResult<Vec<SearchResult>> {
    let (start, _) = resolve_endpoints(graph, start, start)?;
    let mut search = Search::new(graph, options, start)?;
    let mut finalized = Vec::new();

    while let Some((vertex, cost)) = search.next()? {
        if max_cost.is_some_and(|max| cost > max) {
            break;
        }
        if vertex != start {
            finalized.push(vertex);
        }
        search.relax(vertex, cost);
    }

    let visited = search.budget.used();
    Ok(finalized
        .into_iter()
        .map(|vertex| {
            format_result(
                graph,
                SearchStrategy::Dijkstra,
                start,
                vertex,
                &search.predecessors,
                true,
                visited,
            )
        })
        .collect())
}
