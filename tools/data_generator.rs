use anyhow::{Context, Result};
use campus_route::config::{init_logging, LoggingConfig};
use campus_route::tools::{export_to_csv, export_to_json, scaled_distance, CampusMap, ExportOptions, MapLocation};
use campus_route::types::{Edge, Location, LocationKind};
use clap::{Parser, ValueEnum};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::collections::HashSet;
use std::path::PathBuf;

#[derive(Debug, Clone, ValueEnum)]
enum MapType {
    Grid,
    Random,
}

#[derive(Debug, Clone, PartialEq, ValueEnum)]
enum Format {
    Json,
    Csv,
}

#[derive(Parser, Debug)]
#[command(name = "data_generator")]
#[command(about = "Generate synthetic campus maps for testing and benchmarking", long_about = None)]
struct Args {
    /// Layout of the generated campus
    #[arg(short, long, value_enum, default_value = "grid")]
    map_type: MapType,

    /// Number of locations (random maps)
    #[arg(short = 'n', long, default_value_t = 200)]
    locations: usize,

    /// Grid size (grid maps, creates size×size blocks)
    #[arg(short = 's', long)]
    size: Option<usize>,

    /// Paths per location (random maps, k nearest neighbors)
    #[arg(short = 'k', long, default_value_t = 3)]
    neighbors: usize,

    /// Share of paths marked as stairs (not accessible)
    #[arg(long, default_value_t = 0.1)]
    stairs_ratio: f64,

    /// Map units to distance factor
    #[arg(long, default_value_t = campus_route::tools::DEFAULT_SCALE_FACTOR)]
    scale: f64,

    /// Output directory
    #[arg(short, long)]
    output: PathBuf,

    /// Export formats
    #[arg(short, long, value_enum, value_delimiter = ',', default_value = "json")]
    formats: Vec<Format>,

    /// Random seed for reproducibility
    #[arg(long, default_value_t = 42)]
    seed: u64,
}

struct CampusGenerator {
    rng: StdRng,
    stairs_ratio: f64,
    scale: f64,
}

impl CampusGenerator {
    fn new(seed: u64, stairs_ratio: f64, scale: f64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
            stairs_ratio: stairs_ratio.clamp(0.0, 1.0),
            scale,
        }
    }

    fn random_kind(&mut self) -> LocationKind {
        match self.rng.gen_range(0..10) {
            0 => LocationKind::Parking,
            1 => LocationKind::Landmark,
            2 | 3 => LocationKind::Waypoint,
            _ => LocationKind::Building,
        }
    }

    fn path(&mut self, a: &Location, b: &Location) -> Edge {
        let edge = Edge::new(a.id.clone(), b.id.clone(), scaled_distance(a, b, self.scale));
        if self.rng.gen_bool(self.stairs_ratio) {
            edge.with_path_type("stairs").with_accessible(false)
        } else {
            edge
        }
    }

    fn location(&mut self, id: String, x: f64, y: f64) -> MapLocation {
        let kind = self.random_kind();
        let is_waypoint = kind == LocationKind::Waypoint;
        let location = Location::new(id.clone(), id, x, y)
            .with_kind(kind)
            .with_waypoint(is_waypoint);
        MapLocation::from(location)
    }

    /// Generate a size×size street grid
    fn generate_grid(&mut self, size: usize) -> CampusMap {
        tracing::info!(size, "generating grid campus");

        let mut locations = Vec::with_capacity(size * size);
        for r in 0..size {
            for c in 0..size {
                let x = (c as f64 + 0.5) / size as f64;
                let y = (r as f64 + 0.5) / size as f64;
                locations.push(self.location(format!("B{}-{}", r, c), x, y));
            }
        }

        let mut paths = Vec::with_capacity(2 * size * size);
        for r in 0..size {
            for c in 0..size {
                let here = r * size + c;
                if c + 1 < size {
                    let edge = self.path(&locations[here].location, &locations[here + 1].location);
                    paths.push(edge);
                }
                if r + 1 < size {
                    let edge = self.path(&locations[here].location, &locations[here + size].location);
                    paths.push(edge);
                }
            }
        }

        CampusMap { locations, paths }
    }

    /// Scatter locations and join each to its nearest neighbors
    fn generate_random(&mut self, n: usize, k: usize) -> CampusMap {
        tracing::info!(locations = n, neighbors = k, "generating random campus");

        let mut locations = Vec::with_capacity(n);
        for i in 0..n {
            let x = self.rng.gen_range(0.0..1.0);
            let y = self.rng.gen_range(0.0..1.0);
            locations.push(self.location(format!("L{}", i), x, y));
        }

        let mut seen = HashSet::new();
        let mut paths = Vec::with_capacity(n * k);
        for i in 0..n {
            let mut by_distance: Vec<(usize, f64)> = (0..n)
                .filter(|&j| j != i)
                .map(|j| (j, locations[i].location.distance_to(&locations[j].location)))
                .collect();
            by_distance.sort_by(|a, b| a.1.total_cmp(&b.1));

            for &(j, _) in by_distance.iter().take(k) {
                if seen.insert((i.min(j), i.max(j))) {
                    let edge = self.path(&locations[i].location, &locations[j].location);
                    paths.push(edge);
                }
            }
        }

        CampusMap { locations, paths }
    }
}

fn main() -> Result<()> {
    init_logging(&LoggingConfig::default())?;
    let args = Args::parse();

    // Create output directory
    std::fs::create_dir_all(&args.output)
        .context("Failed to create output directory")?;

    let mut generator = CampusGenerator::new(args.seed, args.stairs_ratio, args.scale);

    let map = match args.map_type {
        MapType::Grid => {
            let size = args.size.unwrap_or(
                (args.locations as f64).sqrt().ceil() as usize
            );
            generator.generate_grid(size)
        }
        MapType::Random => generator.generate_random(args.locations, args.neighbors),
    };

    let options = ExportOptions::default();
    for format in &args.formats {
        match format {
            Format::Json => {
                let path = args.output.join("campus.json");
                export_to_json(&map, &path, &options)
                    .with_context(|| format!("Failed to write {}", path.display()))?;
            }
            Format::Csv => {
                export_to_csv(
                    &map,
                    args.output.join("locations.csv"),
                    args.output.join("paths.csv"),
                    &options,
                )
                .context("Failed to write CSV files")?;
            }
        }
    }

    println!("Output directory: {}", args.output.display());
    println!("  - Locations: {}", map.locations.len());
    println!("  - Paths: {}", map.paths.len());
    let stairs = map.paths.iter().filter(|p| !p.is_accessible).count();
    println!("  - Stairs: {}", stairs);

    Ok(())
}
