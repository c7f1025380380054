use std::fmt;
use serde::Serialize;

/// A single table cell.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum Cell {
    Text(String),
    Count(u64),
}

impl Cell {
    /// Counts are right-aligned when rendered as a table.
    pub fn is_numeric(&self) -> bool {
        matches!(self, Cell::Count(_))
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Cell::Text(s) => f.write_str(s),
            Cell::Count(n) => write!(f, "{}", n),
        }
    }
}

impl From<String> for Cell {
    fn from(s: String) -> Self {
        Cell::Text(s)
    }
}

impl From<&str> for Cell {
    fn from(s: &str) -> Self {
        Cell::Text(s.to_string())
    }
}

impl From<u64> for Cell {
    fn from(n: u64) -> Self {
        Cell::Count(n)
    }
}

pub type ReportRow = Vec<Cell>;

/// Rows plus header labels. Every row has exactly one cell per header.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Report {
    headers: Vec<String>,
    rows: Vec<ReportRow>,
}

impl Report {
    pub fn new(headers: &[&str]) -> Self {
        Self {
            headers: headers.iter().map(|h| h.to_string()).collect(),
            rows: Vec::new(),
        }
    }

    pub fn push_row(&mut self, row: ReportRow) {
        assert_eq!(
            row.len(),
            self.headers.len(),
            "report row arity must match header arity"
        );
        self.rows.push(row);
    }

    pub fn headers(&self) -> &[String] {
        &self.headers
    }

    pub fn rows(&self) -> &[ReportRow] {
        &self.rows
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn into_parts(self) -> (Vec<ReportRow>, Vec<String>) {
        (self.rows, self.headers)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_push_row_keeps_order() {
        let mut report = Report::new(&["User-Agent", "Count"]);
        report.push_row(vec!["Chrome".into(), 2u64.into()]);
        report.push_row(vec!["Safari".into(), 1u64.into()]);

        let (rows, headers) = report.into_parts();
        assert_eq!(headers, vec!["User-Agent", "Count"]);
        assert_eq!(rows[0], vec![Cell::Text("Chrome".into()), Cell::Count(2)]);
        assert_eq!(rows[1][0].to_string(), "Safari");
    }

    #[test]
    #[should_panic(expected = "arity")]
    fn test_push_row_rejects_wrong_arity() {
        let mut report = Report::new(&["Endpoint", "Count", "Average Time"]);
        report.push_row(vec!["/api".into(), 1u64.into()]);
    }

    #[test]
    fn test_cell_serializes_untagged() {
        let row: ReportRow = vec!["/api/users".into(), 2u64.into(), "0.289".into()];
        assert_eq!(
            serde_json::to_string(&row).unwrap(),
            r#"["/api/users",2,"0.289"]"#
        );
    }
}
