//! CSV output backend.
//!
//! One row per waypoint.  Reports written to the same writer share one
//! header and are told apart by the `algorithm` column, which is how compare
//! mode exports both routes into a single file.

use std::fs::File;
use std::io::Write;
use std::path::Path;

use csv::Writer;
use tracing::info;

use crate::writer::RouteWriter;
use crate::{OutputError, OutputResult, RouteReport};

pub const HEADER: [&str; 10] = [
    "algorithm",
    "step",
    "id",
    "name",
    "type",
    "district",
    "latitude",
    "longitude",
    "elevation",
    "traffic_level",
];

/// Writes route waypoints as CSV rows.
pub struct CsvWriter<W: Write = File> {
    rows:     Writer<W>,
    written:  usize,
    finished: bool,
}

impl CsvWriter<File> {
    /// Create (or truncate) the file at `path` and write the header row.
    pub fn new(path: &Path) -> OutputResult<Self> {
        Self::with_writer(Writer::from_path(path)?)
    }
}

impl<W: Write> CsvWriter<W> {
    pub fn from_writer(sink: W) -> OutputResult<Self> {
        Self::with_writer(Writer::from_writer(sink))
    }

    fn with_writer(mut rows: Writer<W>) -> OutputResult<Self> {
        rows.write_record(HEADER)?;
        Ok(Self { rows, written: 0, finished: false })
    }

    /// Flush and hand back the underlying sink.
    pub fn into_inner(mut self) -> OutputResult<W> {
        self.finish()?;
        self.rows.into_inner().map_err(|e| OutputError::Io(e.into_error()))
    }
}

impl<W: Write> RouteWriter for CsvWriter<W> {
    fn write_report(&mut self, report: &RouteReport) -> OutputResult<()> {
        let algorithm = report.metadata.algorithm;
        for w in report.waypoints() {
            self.rows.write_record(&[
                algorithm.to_owned(),
                w.step.to_string(),
                w.id.to_string(),
                w.name.clone(),
                w.kind.clone().unwrap_or_default(),
                w.district.clone().unwrap_or_default(),
                format!("{:.6}", w.latitude),
                format!("{:.6}", w.longitude),
                format!("{:.1}", w.elevation),
                w.traffic_level.to_string(),
            ])?;
        }
        self.written += 1;
        Ok(())
    }

    fn finish(&mut self) -> OutputResult<()> {
        if self.finished {
            return Ok(());
        }
        self.finished = true;
        self.rows.flush()?;
        info!(reports = self.written, "csv: routes written");
        Ok(())
    }
}
