//! Attendance report loaded from the server's CSV payload.

pub mod source;

use crate::export::TabularData;
use crate::utils::date::{
    fmt_date_only, fmt_date_time, is_plain_date, is_timestamp, parse_api_date_str,
};
use crate::utils::zone::DisplayZone;

/// How timestamp cells are rendered outside the raw table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CellStyle {
    /// `Jan 5, 2026, 9:05 AM` (terminal, PDF)
    Human,
    /// `2026-01-05 09:05` in the display zone (CSV, JSON, XLSX)
    Iso,
}

/// Header list plus rows aligned to it. Cells are kept as raw strings.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReportTable {
    pub headers: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

impl ReportTable {
    pub fn new(headers: Vec<String>, rows: Vec<Vec<String>>) -> Self {
        Self { headers, rows }
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn column_index(&self, name: &str) -> Option<usize> {
        // duplicate headers: the last one wins, like an object keyed by header
        self.headers
            .iter()
            .rposition(|h| h.trim().eq_ignore_ascii_case(name.trim()))
    }

    /// Cell of `row` under header `name`.
    pub fn get<'a>(&self, row: &'a [String], name: &str) -> Option<&'a str> {
        self.column_index(name)
            .and_then(|i| row.get(i))
            .map(String::as_str)
    }

    /// Rows containing `query` (case-insensitive) in any cell.
    pub fn search(&self, query: &str) -> ReportTable {
        let needle = query.trim().to_lowercase();
        if needle.is_empty() {
            return self.clone();
        }
        self.retain(|row| row.iter().any(|c| c.to_lowercase().contains(&needle)))
    }

    /// Rows whose `column` equals `value` (case-insensitive, trimmed).
    /// An unknown column yields an empty table.
    pub fn filter_eq(&self, column: &str, value: &str) -> ReportTable {
        let Some(idx) = self.column_index(column) else {
            return ReportTable::new(self.headers.clone(), Vec::new());
        };
        let wanted = value.trim();
        self.retain(|row| {
            row.get(idx)
                .is_some_and(|c| c.trim().eq_ignore_ascii_case(wanted))
        })
    }

    pub fn limit(&self, n: usize) -> ReportTable {
        ReportTable::new(
            self.headers.clone(),
            self.rows.iter().take(n).cloned().collect(),
        )
    }

    fn retain<F: Fn(&[String]) -> bool>(&self, keep: F) -> ReportTable {
        ReportTable::new(
            self.headers.clone(),
            self.rows.iter().filter(|r| keep(r)).cloned().collect(),
        )
    }

    /// Rows with timestamp cells rendered in the display zone.
    pub fn display_rows(&self, zone: &DisplayZone, style: CellStyle) -> Vec<Vec<String>> {
        self.rows
            .iter()
            .map(|row| row.iter().map(|c| display_cell(c, zone, style)).collect())
            .collect()
    }

    pub fn to_tabular(&self, title: &str, zone: &DisplayZone, style: CellStyle) -> TabularData {
        TabularData::new(
            title,
            self.headers.clone(),
            self.display_rows(zone, style),
        )
    }
}

fn display_cell(raw: &str, zone: &DisplayZone, style: CellStyle) -> String {
    match style {
        CellStyle::Human if is_timestamp(raw) => fmt_date_time(raw, zone),
        CellStyle::Human if is_plain_date(raw) => fmt_date_only(raw, zone),
        CellStyle::Iso if is_timestamp(raw) => match parse_api_date_str(raw) {
            Some(instant) => zone
                .naive_local(&instant)
                .format("%Y-%m-%d %H:%M")
                .to_string(),
            None => raw.to_string(),
        },
        _ => raw.to_string(),
    }
}
