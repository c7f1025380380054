//! Run — one report from arguments to rendered text.

use std::path::PathBuf;
use tracing::info;

use crate::error::ReportResult;
use crate::reader::{read_logs, DiagnosticSink};
use crate::render::{render, OutputFormat};
use crate::report::registry;

/// Everything needed to produce one report.
#[derive(Debug, Clone)]
pub struct RunRequest {
    pub files: Vec<PathBuf>,
    pub report: String,
    pub date: Option<String>,
    pub format: OutputFormat,
}

/// Resolve the strategy, read the logs, aggregate and render.
///
/// The report name is checked before any file is touched, and nothing is
/// rendered unless every step succeeded.
pub fn run(request: &RunRequest, sink: &dyn DiagnosticSink) -> ReportResult<String> {
    let strategy = registry::lookup(&request.report)?;

    let records = read_logs(&request.files, request.date.as_deref(), sink)?;
    info!(
        "Loaded {} records from {} file(s)",
        records.len(),
        request.files.len()
    );

    let report = strategy.generate(&records)?;
    info!("Generated '{}' report with {} rows", strategy.name(), report.rows().len());

    render(&report, request.format)
}
