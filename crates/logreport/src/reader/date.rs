use chrono::{DateTime, NaiveDate, NaiveDateTime};

use crate::error::{ReportError, ReportResult};

const FILTER_FORMAT: &str = "%Y-%m-%d";

/// Naive datetime layouts tried after the offset-aware ones.
const NAIVE_DATETIME_FORMATS: &[&str] = &[
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M",
];

const OFFSET_DATETIME_FORMATS: &[&str] = &[
    "%Y-%m-%dT%H:%M:%S%.f%z",
    "%Y-%m-%d %H:%M:%S%.f%z",
    "%Y-%m-%d %H:%M:%S%.f%:z",
];

/// Calendar-date equality predicate over record timestamps.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateFilter {
    date: NaiveDate,
}

impl DateFilter {
    pub fn new(date: NaiveDate) -> Self {
        Self { date }
    }

    /// Parse a `YYYY-MM-DD` filter value.
    pub fn parse(value: &str) -> ReportResult<Self> {
        NaiveDate::parse_from_str(value, FILTER_FORMAT)
            .map(Self::new)
            .map_err(|_| ReportError::InvalidDateFilter(value.to_string()))
    }

    pub fn date(&self) -> NaiveDate {
        self.date
    }

    /// True when the timestamp falls on the filter date, as written.
    pub fn matches(&self, timestamp: &str) -> ReportResult<bool> {
        Ok(timestamp_date(timestamp)? == self.date)
    }
}

/// Calendar date of an ISO-8601 timestamp.
///
/// The offset, if any, is ignored: `2025-06-22T23:30:00-05:00` is on
/// 2025-06-22 even though it is 2025-06-23 in UTC.
pub fn timestamp_date(timestamp: &str) -> ReportResult<NaiveDate> {
    let ts = timestamp.trim();

    if let Ok(dt) = DateTime::parse_from_rfc3339(ts) {
        return Ok(dt.date_naive());
    }
    for fmt in OFFSET_DATETIME_FORMATS {
        if let Ok(dt) = DateTime::parse_from_str(ts, fmt) {
            return Ok(dt.date_naive());
        }
    }
    for fmt in NAIVE_DATETIME_FORMATS {
        if let Ok(dt) = NaiveDateTime::parse_from_str(ts, fmt) {
            return Ok(dt.date());
        }
    }
    NaiveDate::parse_from_str(ts, FILTER_FORMAT)
        .map_err(|_| ReportError::InvalidTimestamp(timestamp.to_string()))
}
