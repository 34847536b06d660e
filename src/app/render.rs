//! Plain-text table rendering for the console.

use std::fmt::Write;

use crate::types::{DataSet, ListingField, Value};

use super::pagination::paginate;

/// Longest displayed value for the free-text locality and contact columns.
pub const TRUNCATE_AT: usize = 20;

/// Cut `s` to `max` characters, marking the cut with `...`.
pub fn truncate(s: &str, max: usize) -> String {
    if s.chars().count() <= max {
        s.to_string()
    } else {
        let mut out: String = s.chars().take(max).collect();
        out.push_str("...");
        out
    }
}

fn cell(field: ListingField, value: &Value) -> String {
    let text = value.to_string();
    match field {
        ListingField::AreaLocality | ListingField::PointOfContact => truncate(&text, TRUNCATE_AT),
        _ => text,
    }
}

/// Render a header row plus `rows` as a fixed-width table.
pub fn render_rows(headers: &[String], rows: &[Vec<String>]) -> String {
    let mut widths: Vec<usize> = headers.iter().map(|h| h.chars().count()).collect();
    for row in rows {
        for (w, c) in widths.iter_mut().zip(row) {
            *w = (*w).max(c.chars().count());
        }
    }

    let mut out = String::new();
    let line = |out: &mut String, cells: &[String]| {
        out.push('|');
        for (c, w) in cells.iter().zip(widths.iter().copied()) {
            let _ = write!(out, " {c:<w$} |");
        }
        out.push('\n');
    };

    line(&mut out, headers);
    out.push('|');
    for w in &widths {
        out.push_str(&"-".repeat(w + 2));
        out.push('|');
    }
    out.push('\n');
    for row in rows {
        line(&mut out, row);
    }
    out
}

/// Render every row of `ds`.
pub fn render_table(ds: &DataSet) -> String {
    let headers: Vec<String> = ds.schema.column_names().map(str::to_string).collect();
    let rows: Vec<Vec<String>> = ds
        .rows
        .iter()
        .map(|row| {
            ds.schema
                .fields
                .iter()
                .zip(row)
                .map(|(f, v)| cell(*f, v))
                .collect()
        })
        .collect();
    render_rows(&headers, &rows)
}

/// Render page `number` (1-based) of `ds`, followed by a `Page X of Y` footer.
pub fn render_page(ds: &DataSet, page_size: usize, number: usize) -> String {
    let page = paginate(&ds.rows, page_size, number);
    let slice = DataSet::new(ds.schema.clone(), page.items.to_vec());
    let mut out = render_table(&slice);
    let _ = writeln!(out, "Page {} of {}", page.number, page.total_pages);
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Schema;

    #[test]
    fn truncate_marks_long_values() {
        assert_eq!(truncate("short", 20), "short");
        assert_eq!(
            truncate("Bandel, Hooghly District, West Bengal", 20),
            "Bandel, Hooghly Dist..."
        );
    }

    #[test]
    fn table_pads_columns_and_truncates_locality() {
        let ds = DataSet::new(
            Schema::new(vec![ListingField::City, ListingField::AreaLocality]),
            vec![vec![
                Value::Utf8("Pune".to_string()),
                Value::Utf8("A very long locality name indeed".to_string()),
            ]],
        );
        let text = render_table(&ds);
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 3);
        assert!(lines[0].starts_with("| City | Area_Locality"));
        assert!(lines[2].contains("A very long locality..."));
        assert_eq!(lines[0].chars().count(), lines[2].chars().count());
    }

    #[test]
    fn page_footer_reports_position() {
        let ds = DataSet::new(
            Schema::new(vec![ListingField::Bhk]),
            (1..=5).map(|i| vec![Value::Int64(i)]).collect(),
        );
        let text = render_page(&ds, 2, 3);
        assert!(text.ends_with("Page 3 of 3\n"));
        assert!(text.contains("| 5   |"));
        assert!(!text.contains("| 4   |"));
    }
}
