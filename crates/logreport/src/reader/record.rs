use std::borrow::Cow;
use serde_json::{Map, Value};

use crate::error::{ReportError, ReportResult};

pub const FIELD_URL: &str = "url";
pub const FIELD_RESPONSE_TIME: &str = "response_time";
pub const FIELD_USER_AGENT: &str = "http_user_agent";
pub const FIELD_TIMESTAMP: &str = "@timestamp";

/// Grouping key for records without a user agent.
pub const UNKNOWN_USER_AGENT: &str = "Unknown";

/// One decoded access-log line.
///
/// Keeps every key of the original JSON object; only the handful of fields
/// the reports need have typed accessors. Missing or mistyped fields are
/// reported lazily, when a report actually reads them.
#[derive(Debug, Clone, PartialEq)]
pub struct LogRecord {
    fields: Map<String, Value>,
}

impl LogRecord {
    pub fn new(fields: Map<String, Value>) -> Self {
        Self { fields }
    }

    /// Decode a single JSON line. Returns `None` unless the line is a JSON object.
    pub fn from_line(line: &str) -> Option<Self> {
        match serde_json::from_str::<Value>(line) {
            Ok(Value::Object(fields)) => Some(Self { fields }),
            _ => None,
        }
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.fields.get(key)
    }

    pub fn url(&self) -> ReportResult<&str> {
        self.required_str(FIELD_URL)
    }

    /// Response time in seconds. Accepts JSON numbers and numeric strings.
    pub fn response_time(&self) -> ReportResult<f64> {
        match self.fields.get(FIELD_RESPONSE_TIME) {
            None => Err(ReportError::MissingField {
                field: FIELD_RESPONSE_TIME,
            }),
            Some(Value::Number(n)) => n
                .as_f64()
                .ok_or_else(|| ReportError::InvalidResponseTime(n.to_string())),
            Some(Value::String(s)) => s
                .trim()
                .parse::<f64>()
                .map_err(|_| ReportError::InvalidResponseTime(s.clone())),
            Some(other) => Err(ReportError::InvalidResponseTime(other.to_string())),
        }
    }

    /// User agent verbatim, or [`UNKNOWN_USER_AGENT`] when absent.
    pub fn user_agent(&self) -> Cow<'_, str> {
        match self.fields.get(FIELD_USER_AGENT) {
            None | Some(Value::Null) => Cow::Borrowed(UNKNOWN_USER_AGENT),
            Some(Value::String(s)) => Cow::Borrowed(s.as_str()),
            Some(other) => Cow::Owned(other.to_string()),
        }
    }

    pub fn timestamp(&self) -> ReportResult<&str> {
        self.required_str(FIELD_TIMESTAMP)
    }

    fn required_str(&self, field: &'static str) -> ReportResult<&str> {
        match self.fields.get(field) {
            None => Err(ReportError::MissingField { field }),
            Some(Value::String(s)) => Ok(s.as_str()),
            Some(other) => Err(ReportError::InvalidField {
                field,
                value: other.to_string(),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn record(value: Value) -> LogRecord {
        match value {
            Value::Object(fields) => LogRecord::new(fields),
            _ => panic!("test record must be an object"),
        }
    }

    // ── Decoding ────────────────────────────────────────────────

    #[test]
    fn test_from_line_object() {
        let rec = LogRecord::from_line(r#"{"url": "/api/users", "status": 200}"#).unwrap();
        assert_eq!(rec.url().unwrap(), "/api/users");
        assert_eq!(rec.get("status"), Some(&json!(200)));
    }

    #[test]
    fn test_from_line_rejects_invalid_json() {
        assert!(LogRecord::from_line("invalid json").is_none());
        assert!(LogRecord::from_line("").is_none());
        assert!(LogRecord::from_line(r#"{"url": "/a""#).is_none());
    }

    #[test]
    fn test_from_line_rejects_non_objects() {
        assert!(LogRecord::from_line("[1, 2, 3]").is_none());
        assert!(LogRecord::from_line("\"text\"").is_none());
        assert!(LogRecord::from_line("42").is_none());
    }

    // ── response_time ───────────────────────────────────────────

    #[test]
    fn test_response_time_from_string() {
        let rec = record(json!({"response_time": "0.123"}));
        assert_eq!(rec.response_time().unwrap(), 0.123);
    }

    #[test]
    fn test_response_time_from_number() {
        let rec = record(json!({"response_time": 2}));
        assert_eq!(rec.response_time().unwrap(), 2.0);
        let rec = record(json!({"response_time": 0.5}));
        assert_eq!(rec.response_time().unwrap(), 0.5);
    }

    #[test]
    fn test_response_time_trims_whitespace() {
        let rec = record(json!({"response_time": " 1.25 "}));
        assert_eq!(rec.response_time().unwrap(), 1.25);
    }

    #[test]
    fn test_response_time_non_numeric() {
        let rec = record(json!({"response_time": "fast"}));
        assert!(matches!(
            rec.response_time(),
            Err(ReportError::InvalidResponseTime(v)) if v == "fast"
        ));
        let rec = record(json!({"response_time": true}));
        assert!(matches!(rec.response_time(), Err(ReportError::InvalidResponseTime(_))));
    }

    #[test]
    fn test_response_time_missing() {
        let rec = record(json!({"url": "/"}));
        assert!(matches!(
            rec.response_time(),
            Err(ReportError::MissingField { field: "response_time" })
        ));
    }

    // ── user agent ──────────────────────────────────────────────

    #[test]
    fn test_user_agent_verbatim() {
        let rec = record(json!({"http_user_agent": "Mozilla/5.0 (X11)"}));
        assert_eq!(rec.user_agent(), "Mozilla/5.0 (X11)");
    }

    #[test]
    fn test_user_agent_missing_is_unknown() {
        let rec = record(json!({"url": "/"}));
        assert_eq!(rec.user_agent(), UNKNOWN_USER_AGENT);
        let rec = record(json!({"http_user_agent": null}));
        assert_eq!(rec.user_agent(), UNKNOWN_USER_AGENT);
    }

    #[test]
    fn test_user_agent_non_string_uses_json_text() {
        let rec = record(json!({"http_user_agent": 7}));
        assert_eq!(rec.user_agent(), "7");
    }

    // ── url / timestamp ─────────────────────────────────────────

    #[test]
    fn test_url_missing() {
        let rec = record(json!({"response_time": "0.1"}));
        assert!(matches!(rec.url(), Err(ReportError::MissingField { field: "url" })));
    }

    #[test]
    fn test_url_wrong_type() {
        let rec = record(json!({"url": 12}));
        assert!(matches!(rec.url(), Err(ReportError::InvalidField { field: "url", .. })));
    }

    #[test]
    fn test_timestamp_accessor() {
        let rec = record(json!({"@timestamp": "2025-06-22T00:00:00+00:00"}));
        assert_eq!(rec.timestamp().unwrap(), "2025-06-22T00:00:00+00:00");
    }
}
