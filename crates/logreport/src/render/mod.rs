//! Render — turns a finished report into printable text.

pub mod grid;

use std::fmt;
use std::str::FromStr;
use serde::{Deserialize, Serialize};

use crate::error::{ReportError, ReportResult};
use crate::report::Report;

pub use grid::render_grid;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Bordered text table
    #[default]
    Grid,
    /// `{"headers": [...], "rows": [[...]]}`
    Json,
}

impl OutputFormat {
    pub fn as_str(&self) -> &'static str {
        match self {
            OutputFormat::Grid => "grid",
            OutputFormat::Json => "json",
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for OutputFormat {
    type Err = ReportError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "grid" => Ok(OutputFormat::Grid),
            "json" => Ok(OutputFormat::Json),
            _ => Err(ReportError::InvalidField {
                field: "format",
                value: s.to_string(),
            }),
        }
    }
}

pub fn render(report: &Report, format: OutputFormat) -> ReportResult<String> {
    match format {
        OutputFormat::Grid => Ok(render_grid(report)),
        OutputFormat::Json => {
            let mut out = serde_json::to_string_pretty(report)?;
            out.push('\n');
            Ok(out)
        }
    }
}
