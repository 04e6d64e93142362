//! Table rendering utilities for CLI outputs.

use unicode_width::UnicodeWidthStr;

pub struct Column {
    pub header: String,
    pub width: usize,
}

impl Column {
    pub fn new(header: &str) -> Self {
        Self {
            header: header.to_string(),
            width: UnicodeWidthStr::width(header),
        }
    }
}

pub struct Table {
    pub columns: Vec<Column>,
    pub rows: Vec<Vec<String>>,
    /// Optional per-row decoration applied after padding (e.g. colours).
    painters: Vec<Option<fn(&str) -> String>>,
}

impl Table {
    pub fn new(columns: Vec<Column>) -> Self {
        Self {
            columns,
            rows: Vec::new(),
            painters: Vec::new(),
        }
    }

    pub fn with_headers<S: AsRef<str>>(headers: &[S]) -> Self {
        Self::new(headers.iter().map(|h| Column::new(h.as_ref())).collect())
    }

    /// Add a row; columns grow to fit it.
    pub fn add_row(&mut self, row: Vec<String>) {
        self.add_painted_row(row, None);
    }

    pub fn add_painted_row(&mut self, row: Vec<String>, painter: Option<fn(&str) -> String>) {
        for (col, cell) in self.columns.iter_mut().zip(&row) {
            col.width = col.width.max(UnicodeWidthStr::width(cell.as_str()));
        }
        self.rows.push(row);
        self.painters.push(painter);
    }

    pub fn render(&self) -> String {
        let mut out = String::new();

        // Header
        for col in &self.columns {
            out.push_str(&pad(&col.header, col.width));
            out.push(' ');
        }
        out.push('\n');

        for col in &self.columns {
            out.push_str(&"-".repeat(col.width));
            out.push(' ');
        }
        out.push('\n');

        // Rows
        for (row, painter) in self.rows.iter().zip(&self.painters) {
            let mut line = String::new();
            for (i, col) in self.columns.iter().enumerate() {
                let cell = row.get(i).map(String::as_str).unwrap_or("");
                line.push_str(&pad(cell, col.width));
                line.push(' ');
            }
            match painter {
                Some(paint) => out.push_str(&paint(line.trim_end())),
                None => out.push_str(line.trim_end()),
            }
            out.push('\n');
        }

        out
    }
}

/// Left-align `s` in `width` terminal cells.
fn pad(s: &str, width: usize) -> String {
    let w = UnicodeWidthStr::width(s);
    format!("{s}{}", " ".repeat(width.saturating_sub(w)))
}
