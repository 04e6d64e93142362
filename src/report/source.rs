//! Where a report table comes from: a CSV file on disk or the API.

use super::ReportTable;
use crate::api::ApiClient;
use crate::errors::{AppError, AppResult};
use crate::utils::csv_text::parse_csv_text;
use crate::utils::path::expand_tilde;
use chrono::NaiveDate;
use std::fs;
use tracing::debug;

pub fn load_file(path: &str) -> AppResult<ReportTable> {
    let p = expand_tilde(path);
    let text = fs::read_to_string(&p)
        .map_err(|e| AppError::InvalidInput(format!("{}: {e}", p.display())))?;
    let table = parse_csv_text(&text);
    debug!(
        "loaded report from {}: {} columns, {} rows",
        p.display(),
        table.headers.len(),
        table.rows.len()
    );
    Ok(table)
}

pub fn fetch(client: &ApiClient, from: &NaiveDate, to: &NaiveDate) -> AppResult<ReportTable> {
    let text = client.report_csv(from, to)?;
    Ok(parse_csv_text(&text))
}
