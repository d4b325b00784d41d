//! The `RouteWriter` trait implemented by the file backends.

use crate::{OutputResult, RouteReport};

/// Trait implemented by the JSON and CSV writers.
pub trait RouteWriter {
    /// Queue or write one report.
    fn write_report(&mut self, report: &RouteReport) -> OutputResult<()>;

    /// Flush everything to the underlying sink.
    ///
    /// Idempotent: safe to call more than once.
    fn finish(&mut self) -> OutputResult<()>;
}
