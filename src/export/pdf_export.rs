// src/export/pdf_export.rs

use crate::errors::AppResult;
use crate::export::pdf::{PageSize, PdfTable};
use crate::export::{TabularData, notify_export_success};
use crate::ui::messages::info;
use std::fs;
use std::path::Path;

/// Columns beyond which the page is switched to landscape.
const LANDSCAPE_AFTER_COLUMNS: usize = 8;

pub(crate) fn page_size_for(columns: usize) -> PageSize {
    if columns > LANDSCAPE_AFTER_COLUMNS {
        PageSize::A4_LANDSCAPE
    } else {
        PageSize::A4_PORTRAIT
    }
}

pub(crate) fn export_pdf(data: &TabularData, path: &Path) -> AppResult<()> {
    info(format!("Exporting to PDF: {}", path.display()));

    let mut doc = PdfTable::new(page_size_for(data.headers.len()));
    doc.render(data);
    fs::write(path, doc.finish())?;

    notify_export_success("PDF", path);
    Ok(())
}
