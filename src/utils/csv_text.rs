//! Tolerant parsing of server-generated CSV reports.
//!
//! Malformed or truncated input never fails: short rows are padded,
//! surplus cells are dropped, unterminated quotes run to end of line.

use crate::report::ReportTable;
use csv::{ReaderBuilder, StringRecord};

/// Tokenize a single CSV line. Supports `"`-quoted fields with `""` escapes
/// and commas inside quotes.
pub fn parse_csv_line(line: &str) -> Vec<String> {
    let mut reader = ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_reader(line.as_bytes());

    let mut record = StringRecord::new();
    match reader.read_record(&mut record) {
        Ok(true) => record.iter().map(str::to_string).collect(),
        _ => Vec::new(),
    }
}

/// Split a CSV payload into headers and rows.
pub fn parse_csv_text(text: &str) -> ReportTable {
    let mut lines = text
        .split('\n')
        .map(|l| l.strip_suffix('\r').unwrap_or(l))
        .filter(|l| !l.trim().is_empty());

    let headers = match lines.next() {
        Some(first) => parse_csv_line(first.trim_start_matches('\u{feff}')),
        None => return ReportTable::default(),
    };

    let rows = lines
        .map(|line| {
            let mut cells = parse_csv_line(line);
            cells.resize(headers.len(), String::new());
            cells
        })
        .collect();

    ReportTable::new(headers, rows)
}
