use anyhow::{bail, Context, Result};
use campus_route::algorithms::{build_route, compare_strategies, shortest_paths_from, SearchOptions, SearchResult, SearchStrategy};
use campus_route::config::{init_logging, Config};
use campus_route::graph::Graph;
use campus_route::tools::{build_graph, export_to_json, recompute_distances, CampusMap, ExportOptions, ImportOptions, ImportStats};
use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;
use std::time::Instant;

#[derive(Debug, Clone, Copy, ValueEnum)]
enum StrategyArg {
    Bfs,
    Dfs,
    Dijkstra,
    /// Run every strategy and compare
    All,
}

#[derive(Parser, Debug)]
#[command(name = "campus_route")]
#[command(about = "Find routes between campus locations", long_about = None)]
struct Args {
    /// Campus map JSON file (defaults to CAMPUS_DATA)
    #[arg(short, long, global = true)]
    data: Option<PathBuf>,

    /// Ignore legacy `connections` lists
    #[arg(long, global = true)]
    no_connections: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Find a route between two locations
    Route {
        /// Start location ID
        from: String,

        /// Goal location ID
        to: String,

        /// Search strategy (defaults to ROUTE_STRATEGY)
        #[arg(short, long, value_enum)]
        strategy: Option<StrategyArg>,

        /// Only use accessible paths
        #[arg(short, long)]
        accessible: bool,

        /// Give up after this many node expansions
        #[arg(long)]
        max_steps: Option<usize>,

        /// Print the result as JSON
        #[arg(long)]
        json: bool,
    },

    /// List every location reachable from a start, nearest first
    Reach {
        /// Start location ID
        from: String,

        /// Only list locations within this distance
        #[arg(long)]
        max_cost: Option<f64>,

        /// Only use accessible paths
        #[arg(short, long)]
        accessible: bool,
    },

    /// Show map statistics
    Info {
        /// Also list every location
        #[arg(short, long)]
        list: bool,
    },

    /// Recompute path distances from coordinates and write a new map
    Distances {
        /// Output JSON file
        #[arg(short, long)]
        output: PathBuf,

        /// Map units to distance factor (defaults to DISTANCE_SCALE)
        #[arg(long)]
        scale: Option<f64>,
    },
}

fn main() -> Result<()> {
    let config = Config::from_env().context("Failed to load configuration")?;
    init_logging(&config.logging)?;

    let args = Args::parse();
    let data_path = args.data.clone().unwrap_or_else(|| config.data.campus_path.clone());

    let mut map = CampusMap::load(&data_path)
        .with_context(|| format!("Failed to load campus map {}", data_path.display()))?;

    let import_options = ImportOptions {
        use_connections: !args.no_connections,
        scale_factor: config.data.scale_factor,
        ..Default::default()
    };

    match args.command {
        Command::Route {
            from,
            to,
            strategy,
            accessible,
            max_steps,
            json,
        } => {
            let mut options = config.search.options();
            options.accessible_only |= accessible;
            if max_steps.is_some() {
                options.max_steps = max_steps;
            }

            let strategies = match strategy {
                Some(StrategyArg::Bfs) => vec![SearchStrategy::Bfs],
                Some(StrategyArg::Dfs) => vec![SearchStrategy::Dfs],
                Some(StrategyArg::Dijkstra) => vec![SearchStrategy::Dijkstra],
                Some(StrategyArg::All) => SearchStrategy::ALL.to_vec(),
                None => vec![config.search.strategy],
            };

            let (graph, _) = load_graph(&map, &import_options)?;
            run_route(&graph, &from, &to, &strategies, &options, json)?;
        }
        Command::Reach {
            from,
            max_cost,
            accessible,
        } => {
            let mut options = config.search.options();
            options.accessible_only |= accessible;

            let (graph, _) = load_graph(&map, &import_options)?;
            let results = shortest_paths_from(&graph, &from, &options, max_cost)?;
            println!("{} locations reachable from {}:", results.len(), from);
            for result in &results {
                let goal = result.path.last().map(|id| id.as_str()).unwrap_or_default();
                println!(
                    "  {:<12} {:>10.1}  ({} hops)",
                    goal,
                    result.total_cost,
                    result.hop_count()
                );
            }
        }
        Command::Info { list } => {
            let (graph, stats) = load_graph(&map, &import_options)?;
            println!("Campus map: {}", data_path.display());
            println!("  - Locations: {}", graph.node_count());
            println!("  - Paths: {}", graph.edge_count());
            println!("  - From connections: {}", stats.connections_added);
            let inaccessible = graph.edges().iter().filter(|e| !e.is_accessible).count();
            println!("  - Inaccessible paths: {}", inaccessible);

            if list {
                for location in graph.locations() {
                    println!(
                        "  {:<12} {:<10} {:<40} degree {}",
                        location.id.as_str(),
                        location.kind.to_string(),
                        location.display_name(),
                        graph.degree(location.id.as_str())
                    );
                }
            }
        }
        Command::Distances { output, scale } => {
            let scale = scale.unwrap_or(config.data.scale_factor);
            let changed = recompute_distances(&mut map, scale)?;
            export_to_json(&map, &output, &ExportOptions::default())?;
            println!("Updated {} of {} paths, written to {}", changed, map.paths.len(), output.display());
        }
    }

    Ok(())
}

fn load_graph(map: &CampusMap, options: &ImportOptions) -> Result<(Graph, ImportStats)> {
    let (graph, stats) = build_graph(map, options).context("Invalid campus map")?;
    tracing::debug!(?stats, "import stats");
    Ok((graph, stats))
}

fn run_route(
    graph: &Graph,
    from: &str,
    to: &str,
    strategies: &[SearchStrategy],
    options: &SearchOptions,
    json: bool,
) -> Result<()> {
    let start = Instant::now();
    let results: Vec<SearchResult> = if strategies.len() > 1 {
        compare_strategies(graph, from, to, options)
            .into_iter()
            .collect::<Result<_, _>>()?
    } else {
        strategies
            .iter()
            .map(|s| s.find_path(graph, from, to, options))
            .collect::<Result<_, _>>()?
    };
    let elapsed = start.elapsed();

    if json {
        println!("{}", serde_json::to_string_pretty(&results)?);
        return Ok(());
    }

    for result in &results {
        println!("[{}] {} -> {}", result.strategy, from, to);
        if !result.is_reachable() {
            println!("  No path found ({} nodes visited)", result.nodes_visited);
            continue;
        }

        let Some(route) = build_route(graph, result)? else {
            bail!("route for {} -> {} could not be assembled", from, to);
        };
        for (i, stop) in route.stops.iter().enumerate() {
            println!("  {:>3}. {} ({})", i + 1, stop.display_name(), stop.id);
        }
        println!(
            "  Hops: {}  Cost: {:.1}  Visited: {}  Accessible: {}",
            result.hop_count(),
            result.total_cost,
            result.nodes_visited,
            route.is_accessible()
        );
    }
    println!("Searched in {:?}", elapsed);

    Ok(())
}
