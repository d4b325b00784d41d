//! mumbai — TrackMate routing demo on a small Mumbai road network.
//!
//! Runs Dijkstra, traffic-aware A*, or both between two locations (by name,
//! id, or `lat,lon` snapped to the nearest one), prints the route, and
//! optionally exports it as JSON and CSV.
//!
//! ```text
//! mumbai --network enhanced --algorithm compare \
//!        --from "Colaba Causeway" --to "Powai Lake" --hour 8 \
//!        --output route_data.json --csv route.csv
//! ```
//!
//! Log verbosity follows `RUST_LOG` (default `info`); `RUST_LOG=tm_spatial=trace`
//! shows every relaxation.

mod locate;
mod network;

use std::fs;
use std::io::{self, Write};
use std::path::PathBuf;

use anyhow::{Context, Result, bail};
use clap::{Parser, ValueEnum};
use tracing::info;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

use tm_core::{HourOfDay, NetworkConfig};
use tm_output::{CsvWriter, JsonWriter, RouteReport, RouteWriter, console};
use tm_spatial::{AStarRouter, DijkstraRouter, Router};

use locate::resolve;
use network::{build_basic, build_enhanced};

// ── CLI ───────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, ValueEnum)]
enum NetworkKind {
    /// 7 locations, plain roads
    Basic,
    /// 10 locations with elevation, traffic levels and road types
    Enhanced,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum AlgorithmChoice {
    Dijkstra,
    Astar,
    /// Run both and compare
    Compare,
}

/// GPS routing over a sample Mumbai network
#[derive(Parser, Debug)]
#[command(author, version, about)]
struct Args {
    #[arg(long, value_enum, default_value = "enhanced")]
    network: NetworkKind,

    #[arg(long, value_enum, default_value = "astar")]
    algorithm: AlgorithmChoice,

    /// Start location: exact name, numeric id, or "lat,lon" snapped to the nearest location
    #[arg(long, default_value = "Bandra Station")]
    from: String,

    /// Destination: exact name, numeric id, or "lat,lon"
    #[arg(long, default_value = "Powai Lake")]
    to: String,

    /// Hour of day (0-23) for traffic weights; defaults to the local clock
    #[arg(long)]
    hour: Option<u8>,

    /// Write the route report(s) as JSON
    #[arg(long)]
    output: Option<PathBuf>,

    /// Write the route waypoints as CSV
    #[arg(long)]
    csv: Option<PathBuf>,

    /// NetworkConfig JSON, e.g. {"max_nodes": 100, "max_edges": 400}
    #[arg(long)]
    config: Option<PathBuf>,
}

// ── Helpers ───────────────────────────────────────────────────────────────────

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_target(false).with_writer(io::stderr))
        .init();
}

fn load_config(path: Option<&PathBuf>) -> Result<NetworkConfig> {
    let Some(path) = path else {
        return Ok(NetworkConfig::default());
    };
    let text = fs::read_to_string(path)
        .with_context(|| format!("reading config {}", path.display()))?;
    let config: NetworkConfig = serde_json::from_str(&text)
        .with_context(|| format!("parsing config {}", path.display()))?;
    config.validate()?;
    Ok(config)
}

// ── Main ──────────────────────────────────────────────────────────────────────

fn main() -> Result<()> {
    init_tracing();
    let args = Args::parse();

    let config = load_config(args.config.as_ref())?;
    let graph = match args.network {
        NetworkKind::Basic => build_basic(config)?,
        NetworkKind::Enhanced => build_enhanced(config)?,
    };
    info!(network = ?args.network, stats = %graph.stats(), "network loaded");

    let from = resolve(&graph, &args.from)?;
    let to = resolve(&graph, &args.to)?;
    if from == to {
        bail!("start and destination are the same location");
    }

    let hour = args.hour.map(HourOfDay::new).transpose()?.unwrap_or_else(HourOfDay::now);
    info!(
        from = %graph.location(from)?.name,
        to = %graph.location(to)?.name,
        %hour,
        period = %hour.period(),
        "routing"
    );

    let routers: Vec<Box<dyn Router>> = match args.algorithm {
        AlgorithmChoice::Dijkstra => vec![Box::new(DijkstraRouter::default())],
        AlgorithmChoice::Astar => vec![Box::new(AStarRouter::at(hour))],
        // Both priced at `hour`.
        AlgorithmChoice::Compare => {
            vec![Box::new(DijkstraRouter::at(hour)), Box::new(AStarRouter::at(hour))]
        }
    };

    let reports = routers
        .iter()
        .map(|r| -> Result<RouteReport> {
            let route = r.route(&graph, from, to)?;
            Ok(RouteReport::new(&graph, &route)?)
        })
        .collect::<Result<Vec<_>>>()?;

    let stdout = io::stdout();
    let mut out = stdout.lock();
    for report in &reports {
        console::render_route(&mut out, report)?;
        writeln!(out)?;
    }
    if let [dijkstra, astar] = reports.as_slice() {
        console::render_comparison(&mut out, dijkstra, astar)?;
    }

    if let Some(path) = &args.output {
        let mut json = JsonWriter::new(path)?;
        for report in &reports {
            json.write_report(report)?;
        }
        json.finish()?;
        info!(path = %path.display(), "route data saved");
    }
    if let Some(path) = &args.csv {
        let mut csv = CsvWriter::new(path)?;
        for report in &reports {
            csv.write_report(report)?;
        }
        csv.finish()?;
        info!(path = %path.display(), "waypoints saved");
    }

    Ok(())
}
