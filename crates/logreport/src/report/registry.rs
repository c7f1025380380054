use std::fmt;
use std::str::FromStr;

use super::average::AverageReport;
use super::traits::{ReportError, ReportResult, ReportStrategy};
use super::user_agent::UserAgentReport;

/// The closed set of report types.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ReportKind {
    /// Average response time per endpoint
    Average,
    /// Request count per User-Agent
    UserAgent,
}

impl ReportKind {
    pub const ALL: [ReportKind; 2] = [ReportKind::Average, ReportKind::UserAgent];

    pub fn as_str(&self) -> &'static str {
        match self {
            ReportKind::Average => "average",
            ReportKind::UserAgent => "user_agent",
        }
    }

    pub fn strategy(&self) -> &'static dyn ReportStrategy {
        match self {
            ReportKind::Average => &AverageReport,
            ReportKind::UserAgent => &UserAgentReport,
        }
    }
}

impl fmt::Display for ReportKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ReportKind {
    type Err = ReportError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ReportKind::ALL
            .into_iter()
            .find(|kind| kind.as_str() == s)
            .ok_or_else(|| ReportError::UnknownReport {
                name: s.to_string(),
                available: available(),
            })
    }
}

/// Registered report names, in display order.
pub fn available() -> Vec<&'static str> {
    ReportKind::ALL.iter().map(|k| k.as_str()).collect()
}

/// Resolve a report name to its strategy.
pub fn lookup(name: &str) -> ReportResult<&'static dyn ReportStrategy> {
    name.parse::<ReportKind>().map(|kind| kind.strategy())
}
