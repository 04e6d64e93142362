use crate::api::client_from_config;
use crate::cli::parser::Commands;
use crate::cli::{Session, resolve_range};
use crate::errors::{AppError, AppResult};
use crate::export::fs_utils::save_bytes;
use crate::export::{ExportFormat, ExportLogic};
use crate::report::{CellStyle, ReportTable, source};
use crate::ui::messages::{header, info, success};
use crate::utils::formatting::truncate;
use crate::utils::path::resolve_output;
use crate::utils::period::describe_period;
use crate::utils::table::Table;

/// `report`: the server's CSV attendance report, searchable and exportable.
pub fn handle(cmd: &Commands, session: &Session) -> AppResult<()> {
    if let Commands::Report {
        input,
        from,
        to,
        period,
        search,
        filter,
        limit,
        export,
        file,
        force,
        download,
        server_format,
    } = cmd
    {
        let range = resolve_range(
            from.as_deref(),
            to.as_deref(),
            period.as_deref(),
            &session.zone,
        )?;
        let (lo, hi) = range.bounds();

        if let Some(target) = download {
            let client = client_from_config(&session.cfg)?;
            let bytes = client.report_file(&lo, &hi, server_format.as_str())?;
            let out = resolve_output(target)?;
            save_bytes(&out, &bytes, *force)?;
            success(format!(
                "{} report saved to {out} ({} bytes)",
                server_format.as_str(),
                bytes.len()
            ));
            return Ok(());
        }

        let (table, title) = match input {
            Some(path) => (source::load_file(path)?, format!("Attendance report ({path})")),
            None => {
                let client = client_from_config(&session.cfg)?;
                (
                    source::fetch(&client, &lo, &hi)?,
                    format!("Attendance report {}", describe_period(&lo, &hi)),
                )
            }
        };

        let table = narrow(&table, search.as_deref(), filter, *limit)?;

        if let Some(format) = export {
            let f = file
                .as_deref()
                .ok_or_else(|| AppError::InvalidInput("--export needs --file".to_string()))?;
            let style = match format {
                ExportFormat::Pdf => CellStyle::Human,
                _ => CellStyle::Iso,
            };
            let data = table.to_tabular(&title, &session.zone, style);
            ExportLogic::export(&data, *format, &resolve_output(f)?, *force)?;
            return Ok(());
        }

        if table.is_empty() {
            info("No report rows match.");
            return Ok(());
        }

        header(format!("{title} ({} rows)", table.rows.len()));
        print!("{}", render(&table, session));
    }
    Ok(())
}

/// Apply `--search`, every `--filter COL=VAL`, then `--limit`, in that order.
pub fn narrow(
    table: &ReportTable,
    search: Option<&str>,
    filters: &[String],
    limit: Option<usize>,
) -> AppResult<ReportTable> {
    let mut out = match search {
        Some(q) => table.search(q),
        None => table.clone(),
    };

    for f in filters {
        let (col, val) = f.split_once('=').ok_or_else(|| {
            AppError::InvalidInput(format!("filter '{f}' must look like COLUMN=VALUE"))
        })?;
        out = out.filter_eq(col, val);
    }

    if let Some(n) = limit {
        out = out.limit(n);
    }
    Ok(out)
}

fn render(table: &ReportTable, session: &Session) -> String {
    let mut t = Table::with_headers(&table.headers);
    for row in table.display_rows(&session.zone, CellStyle::Human) {
        t.add_row(row.iter().map(|c| truncate(c, 48)).collect());
    }
    t.render()
}
