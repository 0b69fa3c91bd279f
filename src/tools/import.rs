/// Data import utilities
///
/// Supports importing campus maps from:
/// - Campus JSON files
/// - CSV files (locations and paths)

use super::campus::{CampusMap, MapLocation};
use super::distances::{scaled_distance, DEFAULT_SCALE_FACTOR};
use super::{ToolError, ToolResult};
use crate::graph::{Graph, GraphBuilder};
use crate::types::{Edge, Location, NodeId};
use serde::Serialize;
use std::collections::HashSet;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

/// Import options
#[derive(Debug, Clone)]
pub struct ImportOptions {
    /// Skip invalid rows instead of failing
    pub skip_errors: bool,
    /// Turn legacy `connections` lists into paths
    pub use_connections: bool,
    /// Reject negative distances and report path costs from BFS/DFS
    pub weighted: bool,
    /// Treat paths as one-way
    pub directed: bool,
    /// Scale factor for distances derived from `connections`
    pub scale_factor: f64,
}

impl Default for ImportOptions {
    fn default() -> Self {
        Self {
            skip_errors: false,
            use_connections: true,
            weighted: true,
            directed: false,
            scale_factor: DEFAULT_SCALE_FACTOR,
        }
    }
}

/// Import statistics
#[derive(Debug, Default, Clone, Serialize)]
pub struct ImportStats {
    pub locations_imported: usize,
    pub paths_imported: usize,
    pub connections_added: usize,
    pub locations_skipped: usize,
    pub paths_skipped: usize,
    pub errors: Vec<String>,
}

impl ImportStats {
    fn add_error(&mut self, error: String) {
        self.errors.push(error);
    }
}

/// Import a campus map from a JSON file and build its graph
///
/// JSON format:
/// ```json
/// {
///   "locations": [{"id": "LIB", "name": "Library", "x": 0.2, "y": 0.3, "type": "building"}],
///   "paths": [{"start_id": "LIB", "end_id": "QUAD", "distance": 150.0}]
/// }
/// ```
pub fn import_from_json<P: AsRef<Path>>(
    path: P,
    options: &ImportOptions,
) -> ToolResult<(Graph, ImportStats)> {
    let map = CampusMap::load(path)?;
    build_graph(&map, options)
}

/// Import a campus map from a locations CSV and a paths CSV
///
/// CSV format:
/// ```csv
/// id,name,x,y,type,full_name,is_accessible,is_waypoint
/// LIB,Library,0.2,0.3,building,Pollak Library,true,false
/// ```
/// ```csv
/// start_id,end_id,distance,path_type,is_accessible
/// LIB,QUAD,150.0,walkway,true
/// ```
///
/// Optional columns may be left out of the header entirely, and blank
/// cells in them fall back to the same defaults.
pub fn import_from_csv<P: AsRef<Path>, Q: AsRef<Path>>(
    locations_path: P,
    paths_path: Q,
    options: &ImportOptions,
) -> ToolResult<(Graph, ImportStats)> {
    let mut stats = ImportStats::default();

    let locations: Vec<Location> = read_csv_rows(locations_path.as_ref(), options, &mut stats)?;
    stats.locations_skipped = stats.errors.len();

    let paths: Vec<Edge> = read_csv_rows(paths_path.as_ref(), options, &mut stats)?;
    stats.paths_skipped = stats.errors.len() - stats.locations_skipped;

    let map = CampusMap {
        locations: locations.into_iter().map(MapLocation::from).collect(),
        paths,
    };

    build_graph_with_stats(&map, options, stats)
}

fn read_csv_rows<T: serde::de::DeserializeOwned>(
    path: &Path,
    options: &ImportOptions,
    stats: &mut ImportStats,
) -> ToolResult<Vec<T>> {
    let file = File::open(path)?;
    let mut csv_reader = csv::Reader::from_reader(BufReader::new(file));

    let mut rows = Vec::new();
    for (row_num, result) in csv_reader.deserialize().enumerate() {
        match result {
            Ok(row) => rows.push(row),
            Err(e) => {
                if options.skip_errors {
                    stats.add_error(format!(
                        "{} row {}: CSV parse error: {}",
                        path.display(),
                        row_num + 1,
                        e
                    ));
                } else {
                    return Err(ToolError::CsvError(e));
                }
            }
        }
    }

    Ok(rows)
}

/// Validate a campus map and build its graph
///
/// With `skip_errors`, duplicate locations and unusable paths are dropped
/// and recorded in the stats; otherwise the first problem fails the import.
pub fn build_graph(map: &CampusMap, options: &ImportOptions) -> ToolResult<(Graph, ImportStats)> {
    build_graph_with_stats(map, options, ImportStats::default())
}

fn build_graph_with_stats(
    map: &CampusMap,
    options: &ImportOptions,
    mut stats: ImportStats,
) -> ToolResult<(Graph, ImportStats)> {
    let mut builder = if options.weighted {
        GraphBuilder::new()
    } else {
        GraphBuilder::unweighted()
    };
    if options.directed {
        builder = builder.directed();
    }

    let mut known: HashSet<&NodeId> = HashSet::with_capacity(map.locations.len());
    for entry in &map.locations {
        let location = &entry.location;
        if !known.insert(&location.id) && options.skip_errors {
            stats.locations_skipped += 1;
            stats.add_error(format!("Duplicate location {}", location.id));
            continue;
        }
        builder.push_location(location.clone());
        stats.locations_imported += 1;
    }

    // Pairs joined by an accepted path, in either direction
    let mut linked: HashSet<(&NodeId, &NodeId)> = HashSet::with_capacity(map.paths.len());
    for (row, path) in map.paths.iter().enumerate() {
        if options.skip_errors {
            if let Some(problem) = path_problem(path, &known, options.weighted) {
                stats.paths_skipped += 1;
                stats.add_error(format!("Path {}: {}", row, problem));
                continue;
            }
        }
        builder.push_edge(path.clone());
        linked.insert(unordered(&path.start, &path.end));
        stats.paths_imported += 1;
    }

    if options.use_connections {
        let mut added: HashSet<(&NodeId, &NodeId)> = HashSet::new();
        for entry in &map.locations {
            let from = &entry.location;
            for to_id in &entry.connections {
                let Some(to) = map.location(to_id.as_str()) else {
                    if options.skip_errors {
                        stats.add_error(format!("Connection {} -> {}: unknown location", from.id, to_id));
                        continue;
                    }
                    return Err(ToolError::InvalidFormat(format!(
                        "connection {} -> {} references unknown location",
                        from.id, to_id
                    )));
                };

                let key = if options.directed || from.id <= to.id {
                    (&from.id, &to.id)
                } else {
                    (&to.id, &from.id)
                };
                if from.id == to.id
                    || linked.contains(&unordered(&from.id, &to.id))
                    || !added.insert(key)
                {
                    continue;
                }

                builder.push_edge(Edge::new(
                    from.id.clone(),
                    to.id.clone(),
                    scaled_distance(from, to, options.scale_factor),
                ));
                stats.connections_added += 1;
            }
        }
    }

    let graph = builder.build()?;

    tracing::info!(
        locations = stats.locations_imported,
        paths = stats.paths_imported,
        connections = stats.connections_added,
        skipped = stats.errors.len(),
        "campus graph built"
    );

    Ok((graph, stats))
}

fn unordered<'a>(a: &'a NodeId, b: &'a NodeId) -> (&'a NodeId, &'a NodeId) {
    if a <= b {
        (a, b)
    } else {
        (b, a)
    }
}

fn path_problem(path: &Edge, known: &HashSet<&NodeId>, weighted: bool) -> Option<String> {
    if !known.contains(&path.start) {
        return Some(format!("unknown start location {}", path.start));
    }
    if !known.contains(&path.end) {
        return Some(format!("unknown end location {}", path.end));
    }
    if !path.weight.is_finite() {
        return Some(format!("non-finite distance {}", path.weight));
    }
    if weighted && path.weight < 0.0 {
        return Some(format!("negative distance {}", path.weight));
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::GraphError;
    use crate::types::LocationKind;
    use std::io::Write;
    use tempfile::NamedTempFile;

    const CAMPUS: &str = r#"{
        "locations": [
            {"id": "LIB", "name": "Library", "x": 0.0, "y": 0.0, "connections": ["GYM"]},
            {"id": "QUAD", "name": "Quad", "x": 0.3, "y": 0.0, "type": "waypoint"},
            {"id": "GYM", "name": "Gym", "x": 0.3, "y": 0.4, "connections": ["LIB", "QUAD"]}
        ],
        "paths": [
            {"start_id": "LIB", "end_id": "QUAD", "distance": 225.0},
            {"start_id": "QUAD", "end_id": "GYM", "distance": 300.0, "path_type": "stairs",
             "is_accessible": false}
        ]
    }"#;

    fn write_temp(contents: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        file
    }

    #[test]
    fn test_import_json() {
        let file = write_temp(CAMPUS);
        let (graph, stats) = import_from_json(file.path(), &ImportOptions::default()).unwrap();

        assert_eq!(graph.node_count(), 3);
        assert_eq!(stats.locations_imported, 3);
        assert_eq!(stats.paths_imported, 2);
        // GYM -> LIB added once, GYM -> QUAD already a path
        assert_eq!(stats.connections_added, 1);
        assert_eq!(graph.edge_count(), 3);

        let edge = graph.edge_between("GYM", "LIB").unwrap();
        assert_eq!(edge.weight, 375.0);
        assert!(!graph.edge_between("QUAD", "GYM").unwrap().is_accessible);
    }

    #[test]
    fn test_import_without_connections() {
        let map = CampusMap::from_json_str(CAMPUS).unwrap();
        let options = ImportOptions {
            use_connections: false,
            ..Default::default()
        };

        let (graph, stats) = build_graph(&map, &options).unwrap();
        assert_eq!(stats.connections_added, 0);
        assert!(graph.edge_between("LIB", "GYM").is_none());
    }

    #[test]
    fn test_import_dangling_path_fails() {
        let mut map = CampusMap::from_json_str(CAMPUS).unwrap();
        map.paths.push(Edge::new("LIB", "DORM", 10.0));

        let err = build_graph(&map, &ImportOptions::default()).unwrap_err();
        assert!(matches!(
            err,
            ToolError::GraphError(GraphError::DanglingEdge { .. })
        ));
    }

    #[test]
    fn test_import_skip_errors() {
        let mut map = CampusMap::from_json_str(CAMPUS).unwrap();
        map.paths.push(Edge::new("LIB", "DORM", 10.0));
        map.paths.push(Edge::new("LIB", "GYM", -5.0));
        map.locations.push(MapLocation::from(Location::bare("LIB")));

        let options = ImportOptions {
            skip_errors: true,
            ..Default::default()
        };
        let (graph, stats) = build_graph(&map, &options).unwrap();

        assert_eq!(graph.node_count(), 3);
        assert_eq!(stats.locations_skipped, 1);
        assert_eq!(stats.paths_skipped, 2);
        assert_eq!(stats.errors.len(), 3);
        // LIB -> GYM falls back to the connection once its path is dropped
        assert_eq!(stats.connections_added, 1);
        assert_eq!(graph.edge_count(), 3);
        assert_eq!(graph.edge_between("LIB", "GYM").unwrap().weight, 375.0);
    }

    #[test]
    fn test_skipped_path_does_not_block_connection() {
        let map = CampusMap::from_json_str(
            r#"{
                "locations": [
                    {"id": "A", "name": "A", "x": 0.0, "y": 0.0, "connections": ["B"]},
                    {"id": "B", "name": "B", "x": 0.0, "y": 0.2}
                ],
                "paths": [{"start_id": "A", "end_id": "B", "distance": -5.0}]
            }"#,
        )
        .unwrap();
        let options = ImportOptions {
            skip_errors: true,
            ..Default::default()
        };

        let (graph, stats) = build_graph(&map, &options).unwrap();
        assert_eq!(stats.paths_skipped, 1);
        assert_eq!(stats.errors.len(), 1);
        assert_eq!(stats.connections_added, 1);
        assert_eq!(graph.edge_between("A", "B").unwrap().weight, 150.0);
    }

    #[test]
    fn test_import_unknown_connection() {
        let map = CampusMap::from_json_str(
            r#"{"locations": [{"id": "A", "name": "A", "x": 0, "y": 0, "connections": ["B"]}]}"#,
        )
        .unwrap();

        let err = build_graph(&map, &ImportOptions::default()).unwrap_err();
        assert!(matches!(err, ToolError::InvalidFormat(_)));
    }

    #[test]
    fn test_import_csv() {
        let locations = write_temp(
            "id,name,x,y,type,full_name\n\
             LIB,Library,0.0,0.0,building,Pollak Library\n\
             QUAD,Quad,0.3,0.0,waypoint,\n",
        );
        let paths = write_temp(
            "start_id,end_id,distance,path_type,is_accessible\n\
             LIB,QUAD,225.0,walkway,true\n",
        );

        let (graph, stats) =
            import_from_csv(locations.path(), paths.path(), &ImportOptions::default()).unwrap();

        assert_eq!(stats.locations_imported, 2);
        assert_eq!(stats.paths_imported, 1);
        assert_eq!(graph.location("LIB").unwrap().display_name(), "Pollak Library");
        assert_eq!(graph.location("QUAD").unwrap().display_name(), "Quad");
        assert_eq!(graph.edge_between("QUAD", "LIB").unwrap().weight, 225.0);
    }

    #[test]
    fn test_import_csv_blank_cells() {
        let locations = write_temp(
            "id,name,x,y,type,full_name,is_accessible,is_waypoint\n\
             A,A,0,0,building,,,\n\
             B,B,0.2,0,,,,\n",
        );
        let paths = write_temp(
            "start_id,end_id,distance,path_type,is_accessible\n\
             A,B,5.0,,\n",
        );

        let (graph, stats) =
            import_from_csv(locations.path(), paths.path(), &ImportOptions::default()).unwrap();
        assert!(stats.errors.is_empty());

        let a = graph.location("A").unwrap();
        assert_eq!(a.kind, LocationKind::Building);
        assert_eq!(a.full_name, "");
        assert!(a.is_accessible);
        assert!(!a.is_waypoint);
        assert_eq!(graph.location("B").unwrap().kind, LocationKind::Building);

        let edge = graph.edge_between("A", "B").unwrap();
        assert_eq!(edge.weight, 5.0);
        assert_eq!(edge.path_type, "walkway");
        assert!(edge.is_accessible);
    }

    #[test]
    fn test_import_csv_skip_bad_rows() {
        let locations = write_temp("id,name,x,y\nA,A,0.0,0.0\nB,B,oops,0.0\nC,C,1.0,1.0\n");
        let paths = write_temp("start_id,end_id,distance\nA,C,5.0\nA,C,far\n");

        let options = ImportOptions {
            skip_errors: true,
            ..Default::default()
        };
        let (graph, stats) = import_from_csv(locations.path(), paths.path(), &options).unwrap();

        assert_eq!(graph.node_count(), 2);
        assert_eq!(graph.edge_count(), 1);
        assert_eq!(stats.locations_skipped, 1);
        assert_eq!(stats.paths_skipped, 1);
    }
}
