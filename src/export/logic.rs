// src/export/logic.rs

use crate::errors::{AppError, AppResult};
use crate::export::fs_utils::ensure_writable;
use crate::export::json_csv::{export_csv, export_json};
use crate::export::pdf_export::export_pdf;
use crate::export::xlsx::export_xlsx;
use crate::export::{ExportFormat, TabularData};
use crate::ui::messages::warning;
use std::path::Path;
use tracing::debug;

pub struct ExportLogic;

impl ExportLogic {
    /// Write `data` to the absolute path `file`. An existing file is only
    /// replaced with `force` or after an interactive yes; an empty table
    /// writes nothing.
    pub fn export(
        data: &TabularData,
        format: ExportFormat,
        file: &str,
        force: bool,
    ) -> AppResult<()> {
        let path = Path::new(file);
        if !path.is_absolute() {
            return Err(AppError::Export(format!(
                "Output file path must be absolute: {file}"
            )));
        }

        if data.is_empty() {
            warning("No rows to export for the selected range.");
            return Ok(());
        }

        ensure_writable(path, force)?;
        debug!(format = format.as_str(), rows = data.rows.len(), title = %data.title, "export");

        let sink: fn(&TabularData, &Path) -> AppResult<()> = match format {
            ExportFormat::Csv => export_csv,
            ExportFormat::Json => export_json,
            ExportFormat::Xlsx => export_xlsx,
            ExportFormat::Pdf => export_pdf,
        };
        sink(data, path)
    }
}
