// src/export/model.rs

use crate::core::calculator::badges::Severity;
use serde_json::{Map, Value};

/// Any table handed to an export sink: the presence matrix or a report.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TabularData {
    pub title: String,
    pub headers: Vec<String>,
    pub rows: Vec<Vec<String>>,
    /// Per-row tint for sinks that can colour rows (PDF, XLSX). Empty or
    /// shorter than `rows` means untinted.
    pub severities: Vec<Severity>,
}

impl TabularData {
    pub fn new(title: &str, headers: Vec<String>, rows: Vec<Vec<String>>) -> Self {
        Self {
            title: title.to_string(),
            headers,
            rows,
            severities: Vec::new(),
        }
    }

    pub fn with_severities(mut self, severities: Vec<Severity>) -> Self {
        self.severities = severities;
        self
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn severity_of(&self, row: usize) -> Option<Severity> {
        self.severities.get(row).copied()
    }

    pub(crate) fn header_refs(&self) -> Vec<&str> {
        self.headers.iter().map(String::as_str).collect()
    }

    /// Rows as `header → value` objects, header order preserved.
    pub(crate) fn to_json_objects(&self) -> Vec<Value> {
        self.rows
            .iter()
            .map(|row| {
                let obj: Map<String, Value> = self
                    .headers
                    .iter()
                    .enumerate()
                    .map(|(i, h)| {
                        (
                            h.clone(),
                            Value::String(row.get(i).cloned().unwrap_or_default()),
                        )
                    })
                    .collect();
                Value::Object(obj)
            })
            .collect()
    }
}
