use crate::report::{Cell, Report};

/// Headers get at least this much room beyond their own text.
const HEADER_PADDING: usize = 2;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Align {
    Left,
    Right,
}

/// Render a report as a bordered grid:
///
/// ```text
/// +------------+---------+----------------+
/// | Endpoint   |   Count | Average Time   |
/// +============+=========+================+
/// | /api/users |       2 | 0.289          |
/// +------------+---------+----------------+
/// ```
pub fn render_grid(report: &Report) -> String {
    let headers = report.headers();
    let rows = report.rows();

    let widths: Vec<usize> = (0..headers.len())
        .map(|col| {
            rows.iter()
                .map(|row| display_width(&row[col].to_string()))
                .chain(std::iter::once(display_width(&headers[col]) + HEADER_PADDING))
                .max()
                .unwrap_or(0)
        })
        .collect();

    // A column is numeric when every cell in it is a count
    let aligns: Vec<Align> = (0..headers.len())
        .map(|col| {
            if !rows.is_empty() && rows.iter().all(|row| row[col].is_numeric()) {
                Align::Right
            } else {
                Align::Left
            }
        })
        .collect();

    let mut out = String::new();
    out.push_str(&rule(&widths, '-'));
    out.push_str(&line(headers.iter().map(String::as_str), &widths, &aligns));

    if rows.is_empty() {
        out.push_str(&rule(&widths, '-'));
        return out;
    }

    out.push_str(&rule(&widths, '='));
    for row in rows {
        let cells: Vec<String> = row.iter().map(Cell::to_string).collect();
        out.push_str(&line(cells.iter().map(String::as_str), &widths, &aligns));
        out.push_str(&rule(&widths, '-'));
    }
    out
}

fn rule(widths: &[usize], fill: char) -> String {
    let mut s = String::from("+");
    for w in widths {
        s.extend(std::iter::repeat(fill).take(w + 2));
        s.push('+');
    }
    s.push('\n');
    s
}

fn line<'a>(cells: impl Iterator<Item = &'a str>, widths: &[usize], aligns: &[Align]) -> String {
    let mut s = String::from("|");
    for ((cell, width), align) in cells.zip(widths).zip(aligns) {
        let pad = width.saturating_sub(display_width(cell));
        s.push(' ');
        match align {
            Align::Left => {
                s.push_str(cell);
                s.push_str(&" ".repeat(pad));
            }
            Align::Right => {
                s.push_str(&" ".repeat(pad));
                s.push_str(cell);
            }
        }
        s.push_str(" |");
    }
    s.push('\n');
    s
}

fn display_width(s: &str) -> usize {
    s.chars().count()
}
