// src/export/xlsx.rs

use crate::core::calculator::badges::Severity;
use crate::errors::{AppError, AppResult};
use crate::export::excel_date::parse_to_excel_date;
use crate::export::{TabularData, notify_export_success};
use crate::ui::messages::info;
use rust_xlsxwriter::{
    Color, Format, FormatAlign, FormatBorder, FormatPattern, Workbook, Worksheet, XlsxError,
};
use std::path::Path;
use unicode_width::UnicodeWidthStr;

const MAX_COLUMN_WIDTH: usize = 60;

/// Background per row kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Band {
    Even,
    Odd,
    Warn,
    Bad,
}

impl Band {
    fn of(severity: Option<Severity>, idx: usize) -> Self {
        match severity {
            Some(Severity::Bad) => Band::Bad,
            Some(Severity::Warn) => Band::Warn,
            _ if idx % 2 == 0 => Band::Even,
            _ => Band::Odd,
        }
    }

    fn color(self) -> Color {
        match self {
            Band::Even => Color::RGB(0xEAF3FB),
            Band::Odd => Color::White,
            Band::Warn => Color::RGB(0xFFF2CC),
            Band::Bad => Color::RGB(0xFCDADA),
        }
    }
}

fn cell_format(band: Band) -> Format {
    Format::new()
        .set_background_color(band.color())
        .set_pattern(FormatPattern::Solid)
        .set_border(FormatBorder::Thin)
        .set_border_color(Color::RGB(0xBFBFBF))
}

pub(crate) fn export_xlsx(data: &TabularData, path: &Path) -> AppResult<()> {
    info(format!("Exporting to XLSX: {}", path.display()));

    let mut workbook = Workbook::new();
    let sheet = workbook.add_worksheet();
    sheet.set_name(sheet_name(&data.title)).map_err(xlsx_err)?;

    fill_sheet(sheet, data).map_err(xlsx_err)?;

    workbook.save(path).map_err(xlsx_err)?;
    notify_export_success("XLSX", path);
    Ok(())
}

fn fill_sheet(sheet: &mut Worksheet, data: &TabularData) -> Result<(), XlsxError> {
    let header = Format::new()
        .set_bold()
        .set_font_color(Color::White)
        .set_background_color(Color::RGB(0x2F75B5))
        .set_pattern(FormatPattern::Solid)
        .set_border(FormatBorder::Thin);

    let mut widths: Vec<usize> = data.headers.iter().map(|h| h.width()).collect();

    for (col, h) in data.headers.iter().enumerate() {
        sheet.write_with_format(0, col as u16, h.as_str(), &header)?;
    }

    for (idx, row) in data.rows.iter().enumerate() {
        let base = cell_format(Band::of(data.severity_of(idx), idx));
        let r = idx as u32 + 1;

        for (col, value) in row.iter().enumerate().take(widths.len()) {
            write_cell(sheet, r, col as u16, value, &base)?;
            widths[col] = widths[col].max(value.width());
        }
    }

    sheet.set_freeze_panes(1, 0)?;
    if !data.rows.is_empty() && !widths.is_empty() {
        sheet.autofilter(0, 0, data.rows.len() as u32, widths.len() as u16 - 1)?;
    }
    for (col, w) in widths.iter().enumerate() {
        sheet.set_column_width(col as u16, (*w).min(MAX_COLUMN_WIDTH) as f64 + 2.0)?;
    }
    Ok(())
}

/// Dates and times go in as Excel serials, plain numbers as numbers,
/// everything else as text.
fn write_cell(
    sheet: &mut Worksheet,
    row: u32,
    col: u16,
    value: &str,
    base: &Format,
) -> Result<(), XlsxError> {
    if let Some((num_format, serial)) = parse_to_excel_date(value) {
        let fmt = base.clone().set_num_format(num_format);
        sheet.write_with_format(row, col, serial, &fmt)?;
    } else if let Ok(n) = value.parse::<f64>() {
        let fmt = base.clone().set_align(FormatAlign::Right);
        sheet.write_with_format(row, col, n, &fmt)?;
    } else {
        sheet.write_with_format(row, col, value, base)?;
    }
    Ok(())
}

fn xlsx_err(e: XlsxError) -> AppError {
    AppError::Export(format!("XLSX: {e}"))
}

/// Worksheet names are limited to 31 chars and a few forbidden symbols.
fn sheet_name(title: &str) -> String {
    let cleaned: String = title
        .chars()
        .filter(|c| !matches!(c, '[' | ']' | ':' | '*' | '?' | '/' | '\\'))
        .take(31)
        .collect();
    match cleaned.trim() {
        "" => "Sheet1".to_string(),
        name => name.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sheet_names_are_sanitized() {
        assert_eq!(sheet_name("Presence 2025/01/05"), "Presence 20250105");
        assert_eq!(sheet_name("[]"), "Sheet1");
        assert_eq!(sheet_name(&"x".repeat(40)).len(), 31);
    }

    #[test]
    fn severity_picks_band() {
        assert_eq!(Band::of(Some(Severity::Bad), 1), Band::Bad);
        assert_eq!(Band::of(Some(Severity::Empty), 1), Band::Odd);
        assert_eq!(Band::of(None, 0), Band::Even);
    }
}
