use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ReportError {
    #[error("Failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid date filter '{0}' (expected YYYY-MM-DD)")]
    InvalidDateFilter(String),

    #[error("Missing field '{field}' in log record")]
    MissingField { field: &'static str },

    #[error("Field '{field}' has unexpected value: {value}")]
    InvalidField { field: &'static str, value: String },

    #[error("Invalid timestamp: {0}")]
    InvalidTimestamp(String),

    #[error("Invalid response_time: {0}")]
    InvalidResponseTime(String),

    #[error("Unknown report type: {name} (available: {})", available.join(", "))]
    UnknownReport {
        name: String,
        available: Vec<&'static str>,
    },

    #[error("Render failed: {0}")]
    Render(#[from] serde_json::Error),
}

pub type ReportResult<T> = Result<T, ReportError>;

impl ReportError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        ReportError::Io {
            path: path.into(),
            source,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unknown_report_lists_available() {
        let err = ReportError::UnknownReport {
            name: "median".to_string(),
            available: vec!["average", "user_agent"],
        };
        assert_eq!(
            err.to_string(),
            "Unknown report type: median (available: average, user_agent)"
        );
    }

    #[test]
    fn test_io_error_names_path() {
        let err = ReportError::io(
            "/var/log/missing.log",
            std::io::Error::new(std::io::ErrorKind::NotFound, "no such file"),
        );
        let msg = err.to_string();
        assert!(msg.contains("/var/log/missing.log"));
        assert!(msg.contains("no such file"));
    }
}
