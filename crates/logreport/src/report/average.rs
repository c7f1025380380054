use std::collections::BTreeMap;
use tracing::debug;

use super::traits::*;

const HEADERS: &[&str] = &["Endpoint", "Count", "Average Time"];

/// Running totals for one endpoint.
#[derive(Debug, Default, Clone, Copy, PartialEq)]
pub struct EndpointStat {
    pub count: u64,
    pub total_time: f64,
}

impl EndpointStat {
    pub fn add(&mut self, response_time: f64) {
        self.count += 1;
        self.total_time += response_time;
    }

    pub fn average(&self) -> f64 {
        if self.count == 0 {
            0.0
        } else {
            self.total_time / self.count as f64
        }
    }
}

/// Average response time per endpoint.
pub struct AverageReport;

impl ReportStrategy for AverageReport {
    fn name(&self) -> &'static str {
        "average"
    }

    fn headers(&self) -> &'static [&'static str] {
        HEADERS
    }

    fn generate(&self, records: &[LogRecord]) -> ReportResult<Report> {
        // BTreeMap keeps endpoints in ordinal order for free
        let mut stats: BTreeMap<&str, EndpointStat> = BTreeMap::new();

        for record in records {
            let endpoint = normalize_endpoint(record.url()?);
            let time = record.response_time()?;
            stats.entry(endpoint).or_default().add(time);
        }
        debug!("Average report: {} records over {} endpoints", records.len(), stats.len());

        let mut report = Report::new(HEADERS);
        for (endpoint, stat) in stats {
            report.push_row(vec![
                Cell::from(endpoint),
                Cell::Count(stat.count),
                Cell::Text(format_average(stat.average())),
            ]);
        }
        Ok(report)
    }
}

/// Strip the query string, then the fragment.
///
/// `/api/products?id=1#top` and `/api/products#top?x` both become `/api/products`.
pub fn normalize_endpoint(url: &str) -> &str {
    cut_before(cut_before(url, '?'), '#')
}

fn cut_before(s: &str, delim: char) -> &str {
    match s.find(delim) {
        Some(idx) => &s[..idx],
        None => s,
    }
}

/// Three decimal places, rounding the exact binary value half-to-even.
pub fn format_average(value: f64) -> String {
    format!("{:.3}", value)
}
