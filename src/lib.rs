/// Campus Route Finder
///
/// A route search engine for campus maps: locations joined by walkable
/// paths, searched with BFS, DFS or Dijkstra.
///
/// # Architecture
///
/// ```text
/// ┌──────────────────────────────────────────────────┐
/// │           Campus Route Finder                    │
/// ├──────────────────────────────────────────────────┤
/// │  ┌────────────────────────────────┐              │
/// │  │   Map Import (JSON / CSV)      │              │
/// │  └────────────┬───────────────────┘              │
/// │               ↓                                   │
/// │  ┌────────────────────────────────┐              │
/// │  │   Graph (validated, immutable) │              │
/// │  └────────────┬───────────────────┘              │
/// │               ↓                                   │
/// │  ┌────────────────────────────────┐              │
/// │  │   Search (BFS / DFS / Dijkstra)│              │
/// │  └────────────┬───────────────────┘              │
/// │               ↓                                   │
/// │  ┌────────────────────────────────┐              │
/// │  │   Result Formatter             │              │
/// │  └────────────────────────────────┘              │
/// └──────────────────────────────────────────────────┘
/// ```
///
/// # Modules
///
/// - `types`: Core data types (NodeId, Location, Edge, Route)
/// - `graph`: Graph construction and neighbor queries
/// - `algorithms`: Search strategies and result formatting
/// - `tools`: Utilities (map import/export, distances)
/// - `config`: Environment configuration and logging setup

pub mod types;
pub mod graph;
pub mod algorithms;
pub mod tools;
pub mod config;

// Re-export commonly used types
pub use types::{Edge, Location, LocationKind, NodeId, Route, RouteError};

// Re-export graph types
pub use graph::{Graph, GraphBuilder, GraphError, GraphResult};

// Re-export algorithm types
pub use algorithms::{bfs, build_route, dfs, dijkstra, AlgorithmError, AlgorithmResult, SearchOptions, SearchResult, SearchStrategy};

// Re-export tool types
pub use tools::{CampusMap, ExportOptions, ImportOptions, ImportStats, ToolError, ToolResult, export_to_csv, export_to_json, import_from_csv, import_from_json};

// Re-export config types
pub use config::{Config, ConfigError, ConfigResult};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
