//! `tm-output` — route reports and their renderings.
//!
//! | Backend  | Type / function             | Shape                                  |
//! |----------|-----------------------------|----------------------------------------|
//! | JSON     | [`JsonWriter`]              | one object, or an array for several    |
//! | CSV      | [`CsvWriter`]               | one row per waypoint                   |
//! | Console  | [`console::render_route`]   | numbered waypoints, legs, totals       |
//!
//! The file backends implement [`RouteWriter`].
//!
//! # Usage
//!
//! ```rust,ignore
//! use tm_output::{JsonWriter, RouteReport, RouteWriter};
//!
//! let report = RouteReport::new(&graph, &route)?;
//! let mut json = JsonWriter::new(Path::new("route_data.json"))?;
//! json.write_report(&report)?;
//! json.finish()?;
//! ```

pub mod console;
pub mod csv;
pub mod error;
pub mod json;
pub mod report;
pub mod row;
pub mod writer;

#[cfg(test)]
mod tests;

pub use csv::CsvWriter;
pub use error::{OutputError, OutputResult};
pub use json::{JsonWriter, to_json_string};
pub use report::{Leg, Metadata, REPORT_VERSION, RouteReport, RouteSection, Statistics};
pub use row::{Endpoint, Waypoint};
pub use writer::RouteWriter;
