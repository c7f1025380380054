use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;
use tracing::{debug, info};

use super::date::DateFilter;
use super::record::LogRecord;
use super::sink::DiagnosticSink;
use crate::error::{ReportError, ReportResult};

/// Per-file counters, logged once the file is done.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct ReadStats {
    pub lines: usize,
    pub kept: usize,
    pub invalid: usize,
    pub filtered: usize,
}

/// Read every file in order and return the surviving records.
///
/// The date filter is parsed before any file is opened. Invalid JSON lines
/// are reported to `sink` and skipped; records off the filter date are
/// dropped silently. Everything else is fatal.
pub fn read_logs<P: AsRef<Path>>(
    paths: &[P],
    date_filter: Option<&str>,
    sink: &dyn DiagnosticSink,
) -> ReportResult<Vec<LogRecord>> {
    let filter = date_filter.map(DateFilter::parse).transpose()?;
    if let Some(f) = &filter {
        debug!("Filtering records to date {}", f.date());
    }

    let mut records = Vec::new();
    for path in paths {
        let path = path.as_ref();
        let stats = read_file(path, filter.as_ref(), sink, &mut records)?;
        info!(
            path = %path.display(),
            lines = stats.lines,
            kept = stats.kept,
            invalid = stats.invalid,
            filtered = stats.filtered,
            "Read log file"
        );
    }

    Ok(records)
}

/// Append the surviving records of a single file to `out`.
pub fn read_file(
    path: &Path,
    filter: Option<&DateFilter>,
    sink: &dyn DiagnosticSink,
    out: &mut Vec<LogRecord>,
) -> ReportResult<ReadStats> {
    let file = File::open(path).map_err(|e| ReportError::io(path, e))?;
    let reader = BufReader::new(file);
    let mut stats = ReadStats::default();

    for (idx, line) in reader.lines().enumerate() {
        let line = line.map_err(|e| ReportError::io(path, e))?;
        stats.lines += 1;

        let record = match LogRecord::from_line(&line) {
            Some(record) => record,
            None => {
                stats.invalid += 1;
                sink.invalid_line(path, idx + 1, line.trim());
                continue;
            }
        };

        if let Some(filter) = filter {
            if !filter.matches(record.timestamp()?)? {
                stats.filtered += 1;
                continue;
            }
        }

        stats.kept += 1;
        out.push(record);
    }

    Ok(stats)
}
