/// Depth-first search
///
/// Finds some path, not necessarily the shortest, using an explicit stack.

use super::result::{format_result, Predecessors};
use super::{resolve_endpoints, AlgorithmResult, SearchOptions, SearchResult, SearchStrategy, StepBudget};
use crate::graph::Graph;

/// Find a path from `start` to `goal` depth-first
///
/// Explores the first-declared neighbor of each location before its
/// siblings, exactly like a recursive walk would, but without recursion.
/// A location is marked visited when it is popped; entries for locations
/// already visited are skipped, which keeps cycles from looping.
///
/// The returned path is deterministic for a given graph: it is the branch of
/// the depth-first tree that leads to the goal.
pub fn dfs(
    graph: &Graph,
    start: &str,
    goal: &str,
    options: &SearchOptions,
) -> AlgorithmResult<SearchResult> {
    let (start, goal) = resolve_endpoints(graph, start, goal)?;

    // (location, how it was reached)
    let mut stack: Vec<(usize, Option<(usize, usize)>)> = vec![(start, None)];
    let mut visited = vec![false; graph.node_count()];
    let mut predecessors = Predecessors::new();
    let mut budget = StepBudget::new(options.max_steps);

    while let Some((current, reached_from)) = stack.pop() {
        if visited[current] {
            continue;
        }
        visited[current] = true;
        if let Some(pred) = reached_from {
            predecessors.insert(current, pred);
        }

        budget.tick()?;

        if current == goal {
            break;
        }

        // Reverse push so the first neighbor is popped first
        for adj in graph.adjacent(current).iter().rev() {
            if visited[adj.target] || !options.allows(graph.edge_at(adj.edge)) {
                continue;
            }
            stack.push((adj.target, Some((current, adj.edge))));
        }
    }

    Ok(format_result(
        graph,
        SearchStrategy::Dfs,
        start,
        goal,
        &predecessors,
        graph.is_weighted(),
        budget.used(),
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::GraphBuilder;
    use crate::types::{Edge, Location};

    //   A - B - D
    //   |   |
    //   C - E
    fn setup_test_graph() -> Graph {
        GraphBuilder::new()
            .nodes(["A", "B", "C", "D", "E"])
            .edge("A", "B", 1.0)
            .edge("A", "C", 1.0)
            .edge("B", "D", 1.0)
            .edge("B", "E", 1.0)
            .edge("C", "E", 1.0)
            .build()
            .unwrap()
    }

    #[test]
    fn test_dfs_follows_first_neighbor() {
        // A -> B first, then B's first unvisited neighbor D (dead end),
        // then E, then C through E
        let graph = setup_test_graph();
        let result = dfs(&graph, "A", "C", &SearchOptions::default()).unwrap();

        assert_eq!(result.path_ids(), vec!["A", "B", "E", "C"]);
        assert_eq!(result.total_cost, 3.0);
        assert_eq!(result.nodes_visited, 5);
    }

    #[test]
    fn test_dfs_is_not_shortest() {
        let graph = GraphBuilder::new()
            .nodes(["A", "B", "C"])
            .edge("A", "B", 1.0)
            .edge("B", "C", 1.0)
            .edge("A", "C", 1.0)
            .build()
            .unwrap();

        let result = dfs(&graph, "A", "C", &SearchOptions::default()).unwrap();
        assert_eq!(result.path_ids(), vec!["A", "B", "C"]);
    }

    #[test]
    fn test_dfs_terminates_on_cycle() {
        let graph = GraphBuilder::new()
            .nodes(["A", "B", "C", "Z"])
            .link("A", "B")
            .link("B", "C")
            .link("C", "A")
            .build()
            .unwrap();

        let result = dfs(&graph, "A", "Z", &SearchOptions::default()).unwrap();
        assert!(!result.is_reachable());
        assert_eq!(result.nodes_visited, 3);
    }

    #[test]
    fn test_dfs_start_is_goal() {
        let graph = setup_test_graph();
        let result = dfs(&graph, "D", "D", &SearchOptions::default()).unwrap();

        assert_eq!(result.path_ids(), vec!["D"]);
        assert_eq!(result.total_cost, 0.0);
    }

    #[test]
    fn test_dfs_long_chain_does_not_overflow() {
        let n = 100_000;
        let mut builder = GraphBuilder::new();
        for i in 0..n {
            builder.push_location(Location::bare(format!("n{}", i)));
        }
        for i in 1..n {
            builder.push_edge(Edge::new(format!("n{}", i - 1), format!("n{}", i), 1.0));
        }
        let graph = builder.build().unwrap();

        let goal = format!("n{}", n - 1);
        let result = dfs(&graph, "n0", &goal, &SearchOptions::default()).unwrap();
        assert_eq!(result.path.len(), n);
    }

    #[test]
    fn test_dfs_accessible_only() {
        let graph = GraphBuilder::new()
            .nodes(["A", "B"])
            .with_edge(Edge::new("A", "B", 1.0).with_accessible(false))
            .build()
            .unwrap();

        let result = dfs(&graph, "A", "B", &SearchOptions::default().accessible()).unwrap();
        assert!(!result.is_reachable());
    }
}
