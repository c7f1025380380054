//! Log reading and filtering module
//!
//! Turns newline-delimited JSON access logs into an ordered list of
//! [`LogRecord`]s.
//!
//! # Architecture
//!
//! - `record.rs`: the decoded record and its field accessors
//! - `date.rs`: `YYYY-MM-DD` filter and ISO-8601 timestamp dates
//! - `sink.rs`: where skipped-line notices go
//! - `read.rs`: file walking, decoding and filtering
//!
//! # Error Behaviour
//!
//! - Invalid JSON lines are reported to the sink and skipped
//! - Records off the filter date are dropped silently
//! - I/O failures, a malformed filter and unusable timestamps abort the read

pub mod record;
pub mod date;
pub mod sink;
pub mod read;

pub use record::{LogRecord, UNKNOWN_USER_AGENT};
pub use date::DateFilter;
pub use sink::{DiagnosticSink, NullSink, StdoutSink};
pub use read::{read_logs, ReadStats};
