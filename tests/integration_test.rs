/// End-to-end tests
///
/// Tests the complete workflow from a campus map file to a rendered route

use campus_route::algorithms::{find_paths_parallel, shortest_paths_from, RouteQuery};
use campus_route::tools::{recompute_distances, CampusMap, DEFAULT_SCALE_FACTOR};
use campus_route::{
    build_route, export_to_json, import_from_json, AlgorithmError, Config, ExportOptions,
    ImportOptions, SearchOptions, SearchStrategy,
};
use std::collections::HashMap;
use tempfile::TempDir;

const CAMPUS: &str = r#"{
    "locations": [
        {"id": "PARK", "name": "Parking A", "x": 0.10, "y": 0.10, "type": "parking"},
        {"id": "GATE", "name": "Main Gate", "x": 0.20, "y": 0.10, "type": "entrance"},
        {"id": "QUAD", "name": "Quad", "x": 0.40, "y": 0.10, "type": "waypoint", "is_waypoint": true},
        {"id": "LIB", "name": "Library", "full_name": "Pollak Library", "x": 0.40, "y": 0.30,
         "connections": ["QUAD"]},
        {"id": "ECS", "name": "Engineering", "x": 0.60, "y": 0.10},
        {"id": "GYM", "name": "Gym", "x": 0.60, "y": 0.30, "type": "building"},
        {"id": "POND", "name": "Pond", "x": 0.90, "y": 0.90, "type": "fountain"}
    ],
    "paths": [
        {"start_id": "PARK", "end_id": "GATE", "distance": 75.0},
        {"start_id": "GATE", "end_id": "QUAD", "distance": 150.0},
        {"start_id": "QUAD", "end_id": "ECS", "distance": 150.0},
        {"start_id": "ECS", "end_id": "GYM", "distance": 150.0, "path_type": "stairs",
         "is_accessible": false},
        {"start_id": "LIB", "end_id": "GYM", "distance": 150.0},
        {"start_id": "GATE", "end_id": "GYM", "distance": 500.0}
    ]
}"#;

fn write_campus(dir: &TempDir) -> std::path::PathBuf {
    let path = dir.path().join("campus.json");
    std::fs::write(&path, CAMPUS).unwrap();
    path
}

/// Test import, search and route rendering
#[test]
fn test_complete_route_workflow() {
    let dir = TempDir::new().unwrap();
    let (graph, stats) = import_from_json(write_campus(&dir), &ImportOptions::default()).unwrap();

    assert_eq!(graph.node_count(), 7);
    assert_eq!(stats.paths_imported, 6);
    assert_eq!(stats.connections_added, 1, "LIB-QUAD comes from connections");

    let options = SearchOptions::default();

    // Dijkstra: PARK-GATE-QUAD-ECS-GYM = 525 beats PARK-GATE-GYM = 575
    let result = SearchStrategy::Dijkstra
        .find_path(&graph, "PARK", "GYM", &options)
        .unwrap();
    assert_eq!(result.path_ids(), vec!["PARK", "GATE", "QUAD", "ECS", "GYM"]);
    assert_eq!(result.total_cost, 525.0);

    // BFS: fewest hops goes straight through the gate
    let result = SearchStrategy::Bfs.find_path(&graph, "PARK", "GYM", &options).unwrap();
    assert_eq!(result.path_ids(), vec!["PARK", "GATE", "GYM"]);
    assert_eq!(result.total_cost, 575.0);

    let route = build_route(&graph, &result).unwrap().unwrap();
    assert_eq!(route.stops.len(), 3);
    assert_eq!(route.stops[0].display_name(), "Parking A");
    assert_eq!(route.distance(), 575.0);
    assert!(route.is_accessible());
}

/// Test wheelchair-accessible routing avoids stairs
#[test]
fn test_accessible_route() {
    let dir = TempDir::new().unwrap();
    let (graph, _) = import_from_json(write_campus(&dir), &ImportOptions::default()).unwrap();

    let options = SearchOptions::default().accessible();
    let result = SearchStrategy::Dijkstra
        .find_path(&graph, "ECS", "GYM", &options)
        .unwrap();

    // LIB-QUAD connection: 0.2 map units = 150
    assert_eq!(result.path_ids(), vec!["ECS", "QUAD", "LIB", "GYM"]);
    assert_eq!(result.total_cost, 450.0);

    let route = build_route(&graph, &result).unwrap().unwrap();
    assert!(route.is_accessible());
    assert_eq!(route.stops[2].display_name(), "Pollak Library");
}

/// Test unreachable and unknown locations
#[test]
fn test_unreachable_and_unknown() {
    let dir = TempDir::new().unwrap();
    let (graph, _) = import_from_json(write_campus(&dir), &ImportOptions::default()).unwrap();
    let options = SearchOptions::default();

    for strategy in SearchStrategy::ALL {
        let result = strategy.find_path(&graph, "PARK", "POND", &options).unwrap();
        assert!(!result.is_reachable());
        assert!(build_route(&graph, &result).unwrap().is_none());

        let err = strategy.find_path(&graph, "PARK", "DORM", &options).unwrap_err();
        assert!(matches!(err, AlgorithmError::UnknownNode(_)));
    }
}

/// Test reachability listing from one location
#[test]
fn test_shortest_paths_from() {
    let dir = TempDir::new().unwrap();
    let (graph, _) = import_from_json(write_campus(&dir), &ImportOptions::default()).unwrap();

    let results = shortest_paths_from(&graph, "PARK", &SearchOptions::default(), Some(300.0)).unwrap();
    let reached: Vec<(&str, f64)> = results
        .iter()
        .map(|r| (r.path.last().unwrap().as_str(), r.total_cost))
        .collect();

    assert_eq!(reached, vec![("GATE", 75.0), ("QUAD", 225.0)]);
}

/// Test batch queries
#[test]
fn test_batch_queries() {
    let dir = TempDir::new().unwrap();
    let (graph, _) = import_from_json(write_campus(&dir), &ImportOptions::default()).unwrap();

    let queries = vec![
        RouteQuery::new("PARK", "LIB", SearchStrategy::Dijkstra),
        RouteQuery::new("PARK", "POND", SearchStrategy::Bfs),
        RouteQuery::new("LIB", "PARK", SearchStrategy::Dfs),
    ];
    let results = find_paths_parallel(&graph, &queries, &SearchOptions::default());

    assert_eq!(results.len(), 3);
    assert_eq!(results[0].as_ref().unwrap().total_cost, 375.0);
    assert!(!results[1].as_ref().unwrap().is_reachable());
    assert!(results[2].as_ref().unwrap().is_reachable());
}

/// Test recomputing distances and writing the map back out
#[test]
fn test_recompute_and_export() {
    let dir = TempDir::new().unwrap();
    let mut map = CampusMap::load(write_campus(&dir)).unwrap();

    recompute_distances(&mut map, DEFAULT_SCALE_FACTOR).unwrap();
    let out = dir.path().join("recomputed.json");
    export_to_json(&map, &out, &ExportOptions::default()).unwrap();

    let (graph, _) = import_from_json(&out, &ImportOptions::default()).unwrap();
    let edge = graph.edge_between("GATE", "GYM").unwrap();
    // sqrt(0.4² + 0.2²) * 750 = 335.4
    assert_eq!(edge.weight, 335.4);
    assert_eq!(graph.edge_between("PARK", "GATE").unwrap().weight, 75.0);
}

/// Test search settings taken from configuration
#[test]
fn test_config_driven_search() {
    let vars: HashMap<&str, &str> = [
        ("ROUTE_STRATEGY", "bfs"),
        ("ROUTE_ACCESSIBLE_ONLY", "true"),
        ("ROUTE_MAX_STEPS", "2"),
    ]
    .into_iter()
    .collect();
    let config = Config::from_lookup(|key| vars.get(key).map(|v| v.to_string())).unwrap();

    let dir = TempDir::new().unwrap();
    let (graph, _) = import_from_json(write_campus(&dir), &ImportOptions::default()).unwrap();

    let err = config
        .search
        .strategy
        .find_path(&graph, "PARK", "GYM", &config.search.options())
        .unwrap_err();
    assert_eq!(err, AlgorithmError::StepLimitExceeded(2));
}
