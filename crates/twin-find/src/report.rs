//! Reporting sink
//!
//! Result lines flow through this capability instead of a process-global
//! logger, so the matching core stays output-free and tests can capture
//! what a run reported.

/// Leveled text sink for run results
pub trait Report {
    /// Result line
    fn info(&mut self, message: &str);
    /// Notice that the run produced nothing
    fn warn(&mut self, message: &str);
}

/// Forward report lines to `tracing`
#[derive(Debug, Default)]
pub struct TracingReport;

impl Report for TracingReport {
    fn info(&mut self, message: &str) {
        tracing::info!("{message}");
    }

    fn warn(&mut self, message: &str) {
        tracing::warn!("{message}");
    }
}
