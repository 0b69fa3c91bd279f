/// Map data import and export tools
///
/// This module provides utilities for loading campus maps into a [`Graph`]
/// and writing them back out:
/// - Campus JSON files (`locations` + `paths`)
/// - CSV files (one for locations, one for paths)
/// - Distance recomputation from map coordinates
///
/// [`Graph`]: crate::graph::Graph

pub mod campus;
pub mod distances;
pub mod export;
pub mod import;

pub use campus::{CampusMap, MapLocation};
pub use distances::{recompute_distances, scaled_distance, DEFAULT_SCALE_FACTOR};
pub use export::{export_to_csv, export_to_json, ExportOptions};
pub use import::{build_graph, import_from_csv, import_from_json, ImportOptions, ImportStats};

use thiserror::Error;

/// Import/export errors
#[derive(Error, Debug)]
pub enum ToolError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),

    #[error("CSV error: {0}")]
    CsvError(#[from] csv::Error),

    #[error("Invalid graph: {0}")]
    GraphError(#[from] crate::graph::GraphError),

    #[error("Invalid data format: {0}")]
    InvalidFormat(String),
}

pub type ToolResult<T> = Result<T, ToolError>;
