//! Unit tests for tm-output.

#[cfg(test)]
mod fixtures {
    use chrono::{DateTime, TimeZone, Utc};
    use tm_core::{GeoPoint, HourOfDay, NodeId};
    use tm_spatial::{AStarRouter, DijkstraRouter, Graph, NewLocation, Road, Route, Router};

    use crate::RouteReport;

    /// Gate (station, 10 m) ── Market (untagged) ── Summit (landmark, 30 m)
    pub fn network() -> (Graph, [NodeId; 3]) {
        let mut g = Graph::new();
        let gate = g
            .add_location_with(
                NewLocation::new("Gate", GeoPoint::new(19.00, 72.80))
                    .kind("station")
                    .district("Old Town")
                    .elevation(10.0)
                    .traffic_level(4),
            )
            .unwrap();
        let market = g.add_location("Market", GeoPoint::new(19.01, 72.80)).unwrap();
        let summit = g
            .add_location_with(
                NewLocation::new("Summit", GeoPoint::new(19.02, 72.81))
                    .kind("landmark")
                    .district("Hill")
                    .elevation(30.0)
                    .traffic_level(2),
            )
            .unwrap();
        g.add_road(gate, market, Road::new("main", 2, 50.0)).unwrap();
        g.add_road(market, summit, Road::new("local", 1, 30.0)).unwrap();
        (g, [gate, market, summit])
    }

    pub fn when() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 3, 14, 9, 26, 53).single().unwrap()
    }

    pub fn dijkstra_route(g: &Graph, from: NodeId, to: NodeId) -> Route {
        DijkstraRouter::default().route(g, from, to).unwrap()
    }

    pub fn astar_route(g: &Graph, from: NodeId, to: NodeId) -> Route {
        AStarRouter::at(HourOfDay::NOON).route(g, from, to).unwrap()
    }

    pub fn report(g: &Graph, route: &Route) -> RouteReport {
        RouteReport::at(g, route, when()).unwrap()
    }
}

// ── Report model ──────────────────────────────────────────────────────────────

#[cfg(test)]
mod report {
    use tm_core::{Compass, HourOfDay, NodeId};
    use tm_spatial::{Algorithm, DijkstraRouter, Route, Router, SpatialError};

    use super::fixtures::*;
    use crate::{OutputError, REPORT_VERSION, RouteReport};

    #[test]
    fn endpoints_and_steps() {
        let (g, [gate, market, summit]) = network();
        let r = report(&g, &dijkstra_route(&g, gate, summit));

        assert_eq!(r.route.start.name, "Gate");
        assert_eq!(r.route.start.kind.as_deref(), Some("station"));
        assert_eq!(r.route.end.name, "Summit");
        assert_eq!(r.route.end.elevation, 30.0);

        let ids: Vec<u32> = r.waypoints().iter().map(|w| w.id).collect();
        assert_eq!(ids, vec![gate.0, market.0, summit.0]);
        let steps: Vec<usize> = r.waypoints().iter().map(|w| w.step).collect();
        assert_eq!(steps, vec![1, 2, 3]);
        assert_eq!(r.waypoints()[0].traffic_level, 4);
        assert_eq!(r.waypoints()[1].kind, None);
    }

    #[test]
    fn statistics() {
        let (g, [gate, _, summit]) = network();
        let route = dijkstra_route(&g, gate, summit);
        let r = report(&g, &route);
        let s = r.statistics();

        assert_eq!(s.total_distance, route.total_cost);
        assert!((s.estimated_time_minutes - route.total_cost / 45.0 * 60.0).abs() < 1e-9);
        assert_eq!(s.waypoint_count, 3);
        assert_eq!(s.average_speed_kmh, 45.0);
        assert_eq!(s.algorithm_used, "dijkstra");
        assert_eq!(s.nodes_explored, route.explored);
        assert!(!s.traffic_considered);
        assert!(s.elevation_considered);
    }

    #[test]
    fn metadata() {
        let (g, [gate, _, summit]) = network();
        let r = report(&g, &astar_route(&g, gate, summit));
        assert_eq!(r.metadata.status, "success");
        assert_eq!(r.metadata.version, REPORT_VERSION);
        assert_eq!(r.metadata.algorithm, "A*");
        assert_eq!(r.metadata.features, vec!["traffic_aware", "elevation"]);
        assert_eq!(r.metadata.timestamp, "2025-03-14T09:26:53Z");
    }

    #[test]
    fn hour_pinned_dijkstra_is_traffic_aware() {
        let (g, [gate, _, summit]) = network();
        let route = DijkstraRouter::at(HourOfDay::NOON).route(&g, gate, summit).unwrap();
        let r = report(&g, &route);
        assert!(r.statistics().traffic_considered);
        assert_eq!(r.metadata.algorithm, "dijkstra");
        assert_eq!(r.metadata.features, vec!["traffic_aware", "elevation"]);
    }

    #[test]
    fn flat_dijkstra_route_has_no_features() {
        let (g, [_, market, _]) = network();
        let route = Route {
            nodes: vec![market],
            total_cost: 0.0,
            explored: 1,
            algorithm: Algorithm::Dijkstra,
            hour: None,
        };
        let r = report(&g, &route);
        assert!(r.metadata.features.is_empty());
        assert_eq!(r.route.start, r.route.end);
        assert!(r.legs().is_empty());
    }

    #[test]
    fn legs_follow_waypoints() {
        let (g, [gate, market, summit]) = network();
        let r = report(&g, &dijkstra_route(&g, gate, summit));
        let legs = r.legs();
        assert_eq!(legs.len(), 2);
        assert_eq!((legs[0].from, legs[0].to), (gate, market));
        assert_eq!(legs[0].heading, Compass::N);
        assert_eq!(legs[1].heading, Compass::NE);
        let total: f64 = legs.iter().map(|l| l.km).sum();
        assert!((total - r.statistics().total_distance).abs() < 1e-9);
    }

    #[test]
    fn empty_route_is_rejected() {
        let (g, _) = network();
        let route = Route {
            nodes: vec![],
            total_cost: 0.0,
            explored: 0,
            algorithm: Algorithm::AStar,
            hour: Some(HourOfDay::NOON),
        };
        assert!(matches!(RouteReport::at(&g, &route, when()), Err(OutputError::EmptyRoute)));
    }

    #[test]
    fn unknown_node_is_rejected() {
        let (g, [gate, ..]) = network();
        let route = Route {
            nodes: vec![gate, NodeId(42)],
            total_cost: 1.0,
            explored: 2,
            algorithm: Algorithm::Dijkstra,
            hour: None,
        };
        assert!(matches!(
            RouteReport::at(&g, &route, when()),
            Err(OutputError::Spatial(SpatialError::NodeNotFound(NodeId(42))))
        ));
    }
}

// ── JSON ──────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod json {
    use serde_json::Value;
    use tempfile::TempDir;

    use super::fixtures::*;
    use crate::{JsonWriter, RouteWriter, to_json_string};

    fn tmp() -> TempDir {
        tempfile::tempdir().expect("create temp dir")
    }

    #[test]
    fn field_names() {
        let (g, [gate, _, summit]) = network();
        let r = report(&g, &astar_route(&g, gate, summit));
        let v: Value = serde_json::from_str(&to_json_string(&r).unwrap()).unwrap();

        assert_eq!(v["route"]["start"]["name"], "Gate");
        assert_eq!(v["route"]["start"]["type"], "station");
        assert_eq!(v["route"]["end"]["district"], "Hill");
        assert_eq!(v["route"]["statistics"]["algorithm_used"], "A*");
        assert_eq!(v["route"]["statistics"]["waypoint_count"], 3);
        assert_eq!(v["route"]["path"][1]["type"], Value::Null);
        assert_eq!(v["route"]["path"][2]["step"], 3);
        assert_eq!(v["route"]["path"][2]["traffic_level"], 2);
        assert_eq!(v["metadata"]["version"], "2.0");
        assert_eq!(v["metadata"]["timestamp"], "2025-03-14T09:26:53Z");
    }

    #[test]
    fn single_report_is_an_object() {
        let (g, [gate, _, summit]) = network();
        let mut w = JsonWriter::from_writer(Vec::new());
        w.write_report(&report(&g, &dijkstra_route(&g, gate, summit))).unwrap();
        let bytes = w.into_inner().unwrap();
        let v: Value = serde_json::from_slice(&bytes).unwrap();
        assert!(v.is_object());
        assert_eq!(v["metadata"]["algorithm"], "dijkstra");
    }

    #[test]
    fn several_reports_are_an_array() {
        let (g, [gate, _, summit]) = network();
        let mut w = JsonWriter::from_writer(Vec::new());
        w.write_report(&report(&g, &dijkstra_route(&g, gate, summit))).unwrap();
        w.write_report(&report(&g, &astar_route(&g, gate, summit))).unwrap();
        let v: Value = serde_json::from_slice(&w.into_inner().unwrap()).unwrap();
        let items = v.as_array().unwrap();
        assert_eq!(items.len(), 2);
        assert_eq!(items[1]["metadata"]["algorithm"], "A*");
    }

    #[test]
    fn file_written_on_finish() {
        let dir = tmp();
        let path = dir.path().join("route_data.json");
        let (g, [gate, _, summit]) = network();

        let mut w = JsonWriter::new(&path).unwrap();
        w.write_report(&report(&g, &astar_route(&g, gate, summit))).unwrap();
        w.finish().unwrap();
        w.finish().unwrap(); // second call is a no-op

        let text = std::fs::read_to_string(&path).unwrap();
        let v: Value = serde_json::from_str(&text).unwrap();
        assert_eq!(v["route"]["end"]["name"], "Summit");
    }
}

// ── CSV ───────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod csv_tests {
    use tempfile::TempDir;

    use super::fixtures::*;
    use crate::csv::HEADER;
    use crate::{CsvWriter, RouteWriter};

    fn tmp() -> TempDir {
        tempfile::tempdir().expect("create temp dir")
    }

    #[test]
    fn csv_headers_correct() {
        let dir = tmp();
        let path = dir.path().join("route.csv");
        let mut w = CsvWriter::new(&path).unwrap();
        w.finish().unwrap();

        let mut rdr = csv::Reader::from_path(&path).unwrap();
        let headers: Vec<_> = rdr.headers().unwrap().iter().map(str::to_owned).collect();
        assert_eq!(headers, HEADER);
        assert_eq!(rdr.records().count(), 0);
    }

    #[test]
    fn one_row_per_waypoint() {
        let dir = tmp();
        let path = dir.path().join("route.csv");
        let (g, [gate, _, summit]) = network();

        let mut w = CsvWriter::new(&path).unwrap();
        w.write_report(&report(&g, &dijkstra_route(&g, gate, summit))).unwrap();
        w.finish().unwrap();

        let mut rdr = csv::Reader::from_path(&path).unwrap();
        let rows: Vec<_> = rdr.records().map(|r| r.unwrap()).collect();
        assert_eq!(rows.len(), 3);
        assert_eq!(&rows[0][0], "dijkstra");
        assert_eq!(&rows[0][1], "1");         // step
        assert_eq!(&rows[0][3], "Gate");
        assert_eq!(&rows[0][4], "station");
        assert_eq!(&rows[0][6], "19.000000"); // latitude
        assert_eq!(&rows[0][8], "10.0");      // elevation
        assert_eq!(&rows[1][4], "");          // untagged
        assert_eq!(&rows[1][5], "");
        assert_eq!(&rows[2][9], "2");         // traffic_level
    }

    #[test]
    fn compare_mode_shares_one_file() {
        let (g, [gate, _, summit]) = network();
        let mut w = CsvWriter::from_writer(Vec::new()).unwrap();
        w.write_report(&report(&g, &dijkstra_route(&g, gate, summit))).unwrap();
        w.write_report(&report(&g, &astar_route(&g, gate, summit))).unwrap();
        let bytes = w.into_inner().unwrap();

        let mut rdr = csv::Reader::from_reader(bytes.as_slice());
        let algos: Vec<String> = rdr.records().map(|r| r.unwrap()[0].to_owned()).collect();
        assert_eq!(algos, ["dijkstra", "dijkstra", "dijkstra", "A*", "A*", "A*"]);
    }

    #[test]
    fn csv_finish_idempotent() {
        let mut w = CsvWriter::from_writer(Vec::new()).unwrap();
        w.finish().unwrap();
        w.finish().unwrap();
    }
}

// ── Console ───────────────────────────────────────────────────────────────────

#[cfg(test)]
mod console {
    use tm_core::HourOfDay;
    use tm_spatial::{AStarRouter, DijkstraRouter, Router};

    use super::fixtures::*;
    use crate::console::{is_optimal, render_comparison, render_route};

    fn render(f: impl FnOnce(&mut Vec<u8>) -> std::io::Result<()>) -> String {
        let mut buf = Vec::new();
        f(&mut buf).unwrap();
        String::from_utf8(buf).unwrap()
    }

    #[test]
    fn route_lists_waypoints_and_totals() {
        let (g, [gate, _, summit]) = network();
        let r = report(&g, &dijkstra_route(&g, gate, summit));
        let text = render(|out| render_route(out, &r));

        assert!(text.starts_with("Route Details (dijkstra):"));
        assert!(text.contains("  1. Gate (station)\n"));
        assert!(text.contains("  2. Market\n"));
        assert!(text.contains("  3. Summit (landmark)\n"));
        assert_eq!(text.matches('↳').count(), 2);
        assert!(text.contains(&format!("Total Distance: {:.2} km", r.statistics().total_distance)));
        assert!(text.contains("(at 45 km/h avg)"));
    }

    fn compare_at(hour: u8) -> String {
        let (g, [gate, _, summit]) = network();
        let hour = HourOfDay::new(hour).unwrap();
        let d = DijkstraRouter::at(hour).route(&g, gate, summit).unwrap();
        let a = AStarRouter::at(hour).route(&g, gate, summit).unwrap();
        assert_eq!(d.nodes, a.nodes);
        assert!((d.total_cost - a.total_cost).abs() < 1e-9);
        let (d, a) = (report(&g, &d), report(&g, &a));
        render(|out| render_comparison(out, &d, &a))
    }

    #[test]
    fn same_path_is_optimal_at_rush_hour() {
        let text = compare_at(8);
        assert!(text.contains("  dijkstra "));
        assert!(text.contains("  A* "));
        assert!(text.ends_with("A* result: optimal\n"));
    }

    #[test]
    fn same_path_is_optimal_at_night() {
        assert!(compare_at(3).ends_with("A* result: optimal\n"));
    }

    #[test]
    fn longer_astar_route_is_sub_optimal() {
        let (g, [gate, _, summit]) = network();
        let d = report(&g, &DijkstraRouter::at(HourOfDay::NOON).route(&g, gate, summit).unwrap());
        let mut a = report(&g, &astar_route(&g, gate, summit));
        a.route.statistics.total_distance += 1.0;
        let text = render(|out| render_comparison(out, &d, &a));
        assert!(text.ends_with("A* result: sub-optimal\n"));
    }

    #[test]
    fn optimality_tolerance() {
        assert!(is_optimal(10.0, 10.0));
        assert!(is_optimal(10.0, 10.005));
        assert!(is_optimal(10.0, 7.5));
        assert!(!is_optimal(10.0, 10.02));
    }
}
