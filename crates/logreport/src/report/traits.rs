pub use super::model::{Cell, Report, ReportRow};
pub use crate::error::{ReportError, ReportResult};
pub use crate::reader::LogRecord;

pub trait ReportStrategy: Send + Sync {
    /// Name the strategy is registered under (e.g. `"average"`).
    fn name(&self) -> &'static str;

    fn headers(&self) -> &'static [&'static str];

    /// Aggregate records into a report. Must not perform I/O.
    fn generate(&self, records: &[LogRecord]) -> ReportResult<Report>;
}
