//! JSON output backend.
//!
//! Reports are buffered until [`RouteWriter::finish`]: a single report is
//! written as one object, several as an array.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use tracing::info;

use crate::writer::RouteWriter;
use crate::{OutputResult, RouteReport};

/// Pretty-printed JSON for one report.
pub fn to_json_string(report: &RouteReport) -> OutputResult<String> {
    Ok(serde_json::to_string_pretty(report)?)
}

pub struct JsonWriter<W: Write = BufWriter<File>> {
    sink:     W,
    pending:  Vec<RouteReport>,
    finished: bool,
}

impl JsonWriter<BufWriter<File>> {
    /// Create (or truncate) the file at `path`.  Nothing is written until
    /// [`RouteWriter::finish`].
    pub fn new(path: &Path) -> OutputResult<Self> {
        Ok(Self::from_writer(BufWriter::new(File::create(path)?)))
    }
}

impl<W: Write> JsonWriter<W> {
    pub fn from_writer(sink: W) -> Self {
        Self { sink, pending: Vec::new(), finished: false }
    }

    /// Flush and hand back the underlying sink.
    pub fn into_inner(mut self) -> OutputResult<W> {
        self.finish()?;
        Ok(self.sink)
    }
}

impl<W: Write> RouteWriter for JsonWriter<W> {
    fn write_report(&mut self, report: &RouteReport) -> OutputResult<()> {
        self.pending.push(report.clone());
        Ok(())
    }

    fn finish(&mut self) -> OutputResult<()> {
        if self.finished {
            return Ok(());
        }
        self.finished = true;

        match self.pending.as_slice() {
            [one] => serde_json::to_writer_pretty(&mut self.sink, one)?,
            many => serde_json::to_writer_pretty(&mut self.sink, many)?,
        }
        writeln!(self.sink)?;
        self.sink.flush()?;
        info!(reports = self.pending.len(), "json: routes written");
        Ok(())
    }
}
