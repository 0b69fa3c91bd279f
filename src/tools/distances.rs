/// Distance recomputation
///
/// Campus coordinates are normalized to the map image; multiplying the
/// Euclidean distance by a scale factor turns it into walking distance.

use super::{CampusMap, ToolResult};
use crate::types::Location;

/// Default map-units-to-distance factor
pub const DEFAULT_SCALE_FACTOR: f64 = 750.0;

/// Scaled distance between two locations, rounded to one decimal
pub fn scaled_distance(a: &Location, b: &Location, scale_factor: f64) -> f64 {
    (a.distance_to(b) * scale_factor * 10.0).round() / 10.0
}

/// Replace every path distance with the scaled coordinate distance
///
/// # Returns
/// * Number of paths whose distance changed
///
/// # Errors
/// Fails without modifying the map if a path references an unknown location.
pub fn recompute_distances(map: &mut CampusMap, scale_factor: f64) -> ToolResult<usize> {
    let mut updated = Vec::with_capacity(map.paths.len());
    for path in &map.paths {
        let start = map.require(&path.start)?;
        let end = map.require(&path.end)?;
        updated.push(scaled_distance(start, end, scale_factor));
    }

    let mut changed = 0;
    for (path, distance) in map.paths.iter_mut().zip(updated) {
        if path.weight != distance {
            path.weight = distance;
            changed += 1;
        }
    }

    tracing::info!(paths = map.paths.len(), changed, scale_factor, "distances recomputed");
    Ok(changed)
}
