//! Human-readable route rendering.
//!
//! Renderers write to any `io::Write` so the binary can target stdout and
//! tests can target a `Vec<u8>`.

use std::io::{self, Write};

use crate::RouteReport;

/// A* is reported optimal when its cost is within this many km of Dijkstra's.
pub const COMPARE_TOLERANCE_KM: f64 = 0.01;

/// Numbered waypoints, one straight-line leg hint per hop, then the totals.
///
/// ```text
/// Route Details (A*):
///   1. Colaba Causeway (commercial)
///        ↳ 4.1 km N
///   2. Marine Drive (landmark)
///   ...
/// Total Distance: 31.84 km
/// Estimated Time: 42.5 minutes (at 45 km/h avg)
/// ```
pub fn render_route<W: Write>(out: &mut W, report: &RouteReport) -> io::Result<()> {
    let stats = report.statistics();
    writeln!(out, "Route Details ({}):", stats.algorithm_used)?;

    let legs = report.legs();
    for (i, w) in report.waypoints().iter().enumerate() {
        match &w.kind {
            Some(kind) => writeln!(out, "  {}. {} ({kind})", w.step, w.name)?,
            None => writeln!(out, "  {}. {}", w.step, w.name)?,
        }
        if let Some(leg) = legs.get(i) {
            writeln!(out, "       ↳ {:.1} km {}", leg.km, leg.heading)?;
        }
    }

    writeln!(out, "Total Distance: {:.2} km", stats.total_distance)?;
    writeln!(
        out,
        "Estimated Time: {:.1} minutes (at {:.0} km/h avg)",
        stats.estimated_time_minutes, stats.average_speed_kmh
    )?;
    writeln!(out, "Waypoints: {}, nodes explored: {}", stats.waypoint_count, stats.nodes_explored)
}

/// `true` when A* came within [`COMPARE_TOLERANCE_KM`] of Dijkstra.
pub fn is_optimal(dijkstra_km: f64, astar_km: f64) -> bool {
    astar_km <= dijkstra_km + COMPARE_TOLERANCE_KM
}

/// Side-by-side summary of a Dijkstra and an A* route for the same query,
/// both priced at the same hour.
pub fn render_comparison<W: Write>(
    out: &mut W,
    dijkstra: &RouteReport,
    astar: &RouteReport,
) -> io::Result<()> {
    let (d, a) = (dijkstra.statistics(), astar.statistics());
    writeln!(out, "Algorithm comparison:")?;
    writeln!(
        out,
        "  {:<9} {:>8.2} km  {:>3} waypoints  {:>3} explored",
        d.algorithm_used, d.total_distance, d.waypoint_count, d.nodes_explored
    )?;
    writeln!(
        out,
        "  {:<9} {:>8.2} km  {:>3} waypoints  {:>3} explored",
        a.algorithm_used, a.total_distance, a.waypoint_count, a.nodes_explored
    )?;
    let verdict = if is_optimal(d.total_distance, a.total_distance) {
        "optimal"
    } else {
        "sub-optimal"
    };
    writeln!(out, "  A* result: {verdict}")
}
