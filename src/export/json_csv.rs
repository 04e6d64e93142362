// src/export/json_csv.rs

use crate::errors::{AppError, AppResult};
use crate::export::{TabularData, notify_export_success};
use crate::ui::messages::info;
use std::fs;
use std::path::Path;

/// Array of `header → value` objects, pretty-printed.
pub(crate) fn export_json(data: &TabularData, path: &Path) -> AppResult<()> {
    info(format!("Exporting to JSON: {}", path.display()));

    let body = serde_json::to_string_pretty(&data.to_json_objects())
        .map_err(|e| AppError::Export(format!("JSON: {e}")))?;
    fs::write(path, body)?;

    notify_export_success("JSON", path);
    Ok(())
}

/// Header row first, RFC 4180 quoting.
pub(crate) fn export_csv(data: &TabularData, path: &Path) -> AppResult<()> {
    info(format!("Exporting to CSV: {}", path.display()));

    let csv_err = |e: csv::Error| AppError::Export(format!("CSV: {e}"));
    let mut wtr = csv::WriterBuilder::new()
        .flexible(true)
        .from_path(path)
        .map_err(csv_err)?;

    wtr.write_record(&data.headers).map_err(csv_err)?;
    for row in &data.rows {
        wtr.write_record(row).map_err(csv_err)?;
    }
    wtr.flush()?;

    notify_export_success("CSV", path);
    Ok(())
}
