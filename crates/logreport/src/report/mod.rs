//! Report strategies — pure aggregations from log records to tables.

pub mod traits;
pub mod model;
pub mod average;
pub mod user_agent;
pub mod registry;

pub use traits::ReportStrategy;
pub use model::{Cell, Report, ReportRow};
pub use average::AverageReport;
pub use user_agent::UserAgentReport;
pub use registry::{lookup, ReportKind};
