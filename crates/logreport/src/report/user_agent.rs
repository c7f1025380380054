use std::collections::BTreeMap;
use tracing::debug;

use super::traits::*;

const HEADERS: &[&str] = &["User-Agent", "Count"];

/// Request count per User-Agent, taken verbatim.
pub struct UserAgentReport;

impl ReportStrategy for UserAgentReport {
    fn name(&self) -> &'static str {
        "user_agent"
    }

    fn headers(&self) -> &'static [&'static str] {
        HEADERS
    }

    fn generate(&self, records: &[LogRecord]) -> ReportResult<Report> {
        let mut counts: BTreeMap<String, u64> = BTreeMap::new();
        for record in records {
            *counts.entry(record.user_agent().into_owned()).or_insert(0) += 1;
        }
        debug!("User-Agent report: {} distinct agents", counts.len());

        let mut report = Report::new(HEADERS);
        for (agent, count) in counts {
            report.push_row(vec![Cell::Text(agent), Cell::Count(count)]);
        }
        Ok(report)
    }
}
