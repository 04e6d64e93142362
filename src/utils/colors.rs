//! Colour helpers for terminal output.

use crate::core::calculator::badges::Severity;
use ansi_term::Colour::{Green, Red, Yellow};
use ansi_term::Style;
use std::env;

/// Colours are disabled when `NO_COLOR` is set.
pub fn enabled() -> bool {
    env::var_os("NO_COLOR").is_none()
}

pub fn paint_severity(severity: Severity, text: &str) -> String {
    if !enabled() {
        return text.to_string();
    }
    match severity {
        Severity::Bad => Red.bold().paint(text).to_string(),
        Severity::Warn => Yellow.paint(text).to_string(),
        Severity::Ok => Green.paint(text).to_string(),
        Severity::Empty => Style::new().dimmed().paint(text).to_string(),
    }
}

pub fn dim(text: &str) -> String {
    if enabled() {
        Style::new().dimmed().paint(text).to_string()
    } else {
        text.to_string()
    }
}

/// Empty or placeholder values are dimmed, the rest left alone.
pub fn colorize_optional(value: &str) -> String {
    let v = value.trim();
    if v.is_empty() || v == "--:--" || v == "-" || v == "00:00" {
        dim(value)
    } else {
        value.to_string()
    }
}

// Row painters for `Table::add_painted_row`.
pub fn paint_bad(s: &str) -> String {
    paint_severity(Severity::Bad, s)
}
pub fn paint_warn(s: &str) -> String {
    paint_severity(Severity::Warn, s)
}
pub fn paint_ok(s: &str) -> String {
    paint_severity(Severity::Ok, s)
}
pub fn paint_empty(s: &str) -> String {
    paint_severity(Severity::Empty, s)
}

pub fn row_painter(severity: Severity) -> fn(&str) -> String {
    match severity {
        Severity::Bad => paint_bad,
        Severity::Warn => paint_warn,
        Severity::Ok => paint_ok,
        Severity::Empty => paint_empty,
    }
}
