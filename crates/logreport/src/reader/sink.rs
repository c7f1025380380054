use std::path::Path;

/// Receives notices about lines the reader skipped.
pub trait DiagnosticSink {
    /// `raw` is the offending line with surrounding whitespace trimmed.
    fn invalid_line(&self, path: &Path, line_no: usize, raw: &str);
}

/// Formats the user-facing notice for a skipped line.
pub fn invalid_line_message(raw: &str) -> String {
    format!("Skipping invalid JSON line: {}", raw)
}

/// Prints skipped-line notices to standard output.
#[derive(Debug, Default, Clone, Copy)]
pub struct StdoutSink;

impl DiagnosticSink for StdoutSink {
    fn invalid_line(&self, path: &Path, line_no: usize, raw: &str) {
        tracing::debug!(path = %path.display(), line = line_no, "Invalid JSON line skipped");
        println!("{}", invalid_line_message(raw));
    }
}

/// Discards all notices.
#[derive(Debug, Default, Clone, Copy)]
pub struct NullSink;

impl DiagnosticSink for NullSink {
    fn invalid_line(&self, _path: &Path, _line_no: usize, _raw: &str) {}
}
