//! User-facing status lines. Diagnostics go through `tracing` instead.

use crate::utils::colors;
use ansi_term::Colour::{Blue, Green, Red, Yellow};
use ansi_term::Style;
use std::fmt;

const ICON_INFO: &str = "ℹ️";
const ICON_OK: &str = "✅";
const ICON_WARN: &str = "⚠️";
const ICON_ERR: &str = "❌";
const ICON_HINT: &str = "👉";

fn icon(style: Style, icon: &str) -> String {
    if colors::enabled() {
        style.paint(icon).to_string()
    } else {
        icon.to_string()
    }
}

pub fn info<T: fmt::Display>(msg: T) {
    println!("{} {}", icon(Blue.bold(), ICON_INFO), msg);
}

pub fn success<T: fmt::Display>(msg: T) {
    println!("{} {}", icon(Green.bold(), ICON_OK), msg);
}

/// Warnings go to stderr so piped table output stays clean.
pub fn warning<T: fmt::Display>(msg: T) {
    eprintln!("{} {}", icon(Yellow.bold(), ICON_WARN), msg);
}

pub fn error<T: fmt::Display>(msg: T) {
    eprintln!("{} {}", icon(Red.bold(), ICON_ERR), msg);
}

pub fn hint<T: fmt::Display>(msg: T) {
    eprintln!("{} {}", ICON_HINT, msg);
}

/// Section header above a table.
pub fn header<T: fmt::Display>(msg: T) {
    let line = format!("── {msg} ──");
    if colors::enabled() {
        println!("{}\n", Blue.bold().paint(line));
    } else {
        println!("{line}\n");
    }
}
