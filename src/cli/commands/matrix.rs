use crate::api::client_from_config;
use crate::cli::parser::Commands;
use crate::cli::{Session, resolve_range, warn_if_truncated};
use crate::core::calculator::range::DateRange;
use crate::core::logic::Core;
use crate::core::matrix::PresenceMatrix;
use crate::core::policy::AttendancePolicy;
use crate::errors::{AppError, AppResult};
use crate::export::{ExportLogic, TabularData};
use crate::models::activity::ActivityRecord;
use crate::models::employee::Employee;
use crate::models::input::{load_activity, load_employees};
use crate::ui::messages::{header, info, warning};
use crate::utils::colors::{colorize_optional, row_painter};
use crate::utils::date::{fmt_day, fmt_instant};
use crate::utils::formatting::{mins2readable, wrap_note};
use crate::utils::path::resolve_output;
use crate::utils::period::describe_period;
use crate::utils::table::Table;
use crate::utils::zone::DisplayZone;

/// `matrix`: employees × days, from the API or an offline JSON dump.
pub fn handle(cmd: &Commands, session: &Session) -> AppResult<()> {
    if let Commands::Matrix {
        from,
        to,
        period,
        input,
        employees,
        pin,
        detail,
        export,
        file,
        force,
    } = cmd
    {
        let range = resolve_range(
            from.as_deref(),
            to.as_deref(),
            period.as_deref(),
            &session.zone,
        )?;
        warn_if_truncated(&range);
        let policy = AttendancePolicy::from_config(&session.cfg)?;

        let (records, directory) = load(session, &range, input.as_deref(), employees.as_deref())?;

        let pinned = if pin.is_empty() {
            session.cfg.pinned_employees.clone()
        } else {
            pin.clone()
        };

        let matrix = Core::build_matrix(
            &records,
            &directory,
            &range,
            &policy,
            &session.zone,
            &pinned,
        );

        let (lo, hi) = range.bounds();
        let title = format!("Presence {}", describe_period(&lo, &hi));

        if let Some(format) = export {
            let data: TabularData = matrix.to_tabular(&title, &session.zone);
            let f = file
                .as_deref()
                .ok_or_else(|| AppError::InvalidInput("--export needs --file".to_string()))?;
            ExportLogic::export(&data, *format, &resolve_output(f)?, *force)?;
            return Ok(());
        }

        if matrix.rows.is_empty() {
            info(format!("No activity {}.", describe_period(&lo, &hi)));
            report_discards(&matrix);
            return Ok(());
        }

        header(format!("{title} ({})", session.zone));
        print!("{}", render(&matrix, &session.zone));
        report_discards(&matrix);

        if *detail {
            print!("\n{}", render_detail(&matrix, &session.zone));
        }
    }
    Ok(())
}

fn load(
    session: &Session,
    range: &DateRange,
    input: Option<&str>,
    employees: Option<&str>,
) -> AppResult<(Vec<ActivityRecord>, Vec<Employee>)> {
    if let Some(path) = input {
        let records = load_activity(path)?;
        let directory = match employees {
            Some(p) => load_employees(p)?,
            None => Vec::new(),
        };
        return Ok((records, directory));
    }

    let (lo, hi) = range.bounds();
    let client = client_from_config(&session.cfg)?;
    let directory = client.employees()?;
    let records = client.activity(&lo, &hi)?;
    Ok((records, directory))
}

fn report_discards(matrix: &PresenceMatrix) {
    let d = matrix.discarded;
    if d.total() > 0 {
        warning(format!(
            "{} record(s) skipped: {} without employee, {} without date, {} outside the range",
            d.total(),
            d.no_employee,
            d.no_day,
            d.out_of_range
        ));
    }
}

pub fn render(matrix: &PresenceMatrix, zone: &DisplayZone) -> String {
    let mut table = Table::with_headers(&matrix.headers());

    for row in &matrix.rows {
        let name = if row.pinned {
            format!("📌 {}", row.employee.name)
        } else {
            row.employee.name.clone()
        };
        let mut cells = vec![
            row.employee.id.to_string(),
            name,
            row.employee.department.clone(),
        ];
        cells.extend(row.cells.iter().map(|c| {
            c.as_ref()
                .map(|c| c.text(zone))
                .unwrap_or_else(|| "·".to_string())
        }));
        cells.push(mins2readable(row.total_minutes, false, true));
        cells.push(row.sparkline.clone());
        table.add_painted_row(cells, Some(row_painter(row.worst)));
    }

    table.render()
}

/// One block per non-empty cell: punches, note and position of the
/// latest record.
pub fn render_detail(matrix: &PresenceMatrix, zone: &DisplayZone) -> String {
    let mut out = String::new();

    for row in &matrix.rows {
        for mc in row.cells.iter().flatten() {
            let cell = &mc.cell;
            out.push_str(&format!(
                "{} · {} ({} record(s))\n",
                row.employee.name,
                fmt_day(&cell.day),
                cell.records
            ));
            let when = |t: Option<chrono::DateTime<chrono::Utc>>| {
                colorize_optional(&t.map(|i| fmt_instant(&i, zone)).unwrap_or_else(|| "-".into()))
            };
            out.push_str(&format!("  in     : {}\n", when(cell.in_at)));
            out.push_str(&format!("  out    : {}\n", when(cell.out_at)));
            out.push_str(&format!(
                "  worked : {}  [{}]\n",
                mins2readable(mc.summary.worked_minutes, false, false),
                mc.summary.severity.label()
            ));
            if let Some(note) = &cell.row.note {
                for line in wrap_note(note, 70).lines() {
                    out.push_str(&format!("  note   : {line}\n"));
                }
            }
            if let Some(place) = &cell.row.location_name {
                out.push_str(&format!("  place  : {place}\n"));
            }
            if let Some(link) = cell.row.map_link() {
                out.push_str(&format!("  map    : {link}\n"));
            }
            out.push('\n');
        }
    }

    out
}
