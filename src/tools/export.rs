/// Data export utilities
///
/// Supports exporting campus maps to:
/// - Campus JSON files
/// - CSV files (locations and paths)

use super::campus::CampusMap;
use super::ToolResult;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

/// Export options
#[derive(Debug, Clone)]
pub struct ExportOptions {
    /// Pretty-print JSON output
    pub pretty_json: bool,
    /// Include header row in CSV
    pub csv_header: bool,
}

impl Default for ExportOptions {
    fn default() -> Self {
        Self {
            pretty_json: true,
            csv_header: true,
        }
    }
}

/// Export a campus map to a JSON file
///
/// The output can be read back with [`CampusMap::load`].
///
/// # Returns
/// * Number of locations and paths written
pub fn export_to_json<P: AsRef<Path>>(
    map: &CampusMap,
    path: P,
    options: &ExportOptions,
) -> ToolResult<(usize, usize)> {
    let mut writer = BufWriter::new(File::create(path.as_ref())?);

    if options.pretty_json {
        serde_json::to_writer_pretty(&mut writer, map)?;
    } else {
        serde_json::to_writer(&mut writer, map)?;
    }
    writer.write_all(b"\n")?;
    writer.flush()?;

    tracing::info!(
        path = %path.as_ref().display(),
        locations = map.locations.len(),
        paths = map.paths.len(),
        "campus map exported"
    );

    Ok((map.locations.len(), map.paths.len()))
}

/// Export a campus map to a locations CSV and a paths CSV
///
/// Legacy `connections` lists are not written; convert them to paths first
/// by importing with `use_connections`.
///
/// # Returns
/// * Number of locations and paths written
pub fn export_to_csv<P: AsRef<Path>, Q: AsRef<Path>>(
    map: &CampusMap,
    locations_path: P,
    paths_path: Q,
    options: &ExportOptions,
) -> ToolResult<(usize, usize)> {
    let mut writer = csv::WriterBuilder::new()
        .has_headers(options.csv_header)
        .from_path(locations_path.as_ref())?;
    for entry in &map.locations {
        writer.serialize(&entry.location)?;
    }
    writer.flush()?;

    let mut writer = csv::WriterBuilder::new()
        .has_headers(options.csv_header)
        .from_path(paths_path.as_ref())?;
    for path in &map.paths {
        writer.serialize(path)?;
    }
    writer.flush()?;

    tracing::info!(
        locations = map.locations.len(),
        paths = map.paths.len(),
        "campus map exported to CSV"
    );

    Ok((map.locations.len(), map.paths.len()))
}
