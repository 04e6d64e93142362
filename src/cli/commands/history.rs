use crate::api::client_from_config;
use crate::cli::parser::Commands;
use crate::cli::{Session, resolve_range};
use crate::core::calculator::badges::{cell_badges, severity};
use crate::core::calculator::worked::worked_minutes;
use crate::core::matrix::NO_TIME;
use crate::core::policy::AttendancePolicy;
use crate::errors::AppResult;
use crate::models::activity::ActivityRecord;
use crate::ui::messages::{header, info};
use crate::utils::colors::row_painter;
use crate::utils::date::{PLACEHOLDER, fmt_day, fmt_hhmm};
use crate::utils::formatting::{mins2readable, truncate};
use crate::utils::period::describe_period;
use crate::utils::table::Table;

/// `history`: the caller's own punches, one line per record.
pub fn handle(cmd: &Commands, session: &Session) -> AppResult<()> {
    if let Commands::History { period } = cmd {
        let range = resolve_range(None, None, period.as_deref(), &session.zone)?;
        let (from, to) = range.bounds();
        let policy = AttendancePolicy::from_config(&session.cfg)?;

        let client = client_from_config(&session.cfg)?;
        let mut records = client.my_history(&from, &to)?;

        if records.is_empty() {
            info(format!("No records {}.", describe_period(&from, &to)));
            return Ok(());
        }

        let zone = session.zone;
        records.sort_by_key(|r| (r.day_key(&zone), r.check_in_at));

        header(format!("My attendance {}", describe_period(&from, &to)));
        print!("{}", render(&records, &policy, session));
    }
    Ok(())
}

fn render(records: &[ActivityRecord], policy: &AttendancePolicy, session: &Session) -> String {
    let zone = &session.zone;
    let mut table = Table::with_headers(&["Date", "In", "Out", "Worked", "Flags", "Note"]);
    let mut total = 0;

    for rec in records {
        let badges = cell_badges(rec.check_in_at, rec.check_out_at, policy, zone);
        let worked = worked_minutes(
            rec.check_in_at,
            rec.check_out_at,
            policy.lunch_break_minutes,
            policy.lunch_threshold_minutes,
        );
        total += worked;

        let hhmm = |t: Option<chrono::DateTime<chrono::Utc>>| {
            t.map(|i| fmt_hhmm(&i, zone))
                .unwrap_or_else(|| NO_TIME.to_string())
        };

        let row = vec![
            rec.day_key(zone)
                .map(|d| fmt_day(&d))
                .unwrap_or_else(|| PLACEHOLDER.to_string()),
            hhmm(rec.check_in_at),
            hhmm(rec.check_out_at),
            mins2readable(worked, false, true),
            badges
                .iter()
                .map(|b| b.label())
                .collect::<Vec<_>>()
                .join(" "),
            rec.note
                .as_deref()
                .map(|n| truncate(n, 40))
                .unwrap_or_default(),
        ];
        let sev = severity(&badges, rec.has_punch());
        table.add_painted_row(row, Some(row_painter(sev)));
    }

    let mut out = table.render();
    out.push_str(&format!(
        "\nTotal worked: {} over {} record(s)\n",
        mins2readable(total, false, false),
        records.len()
    ));
    out
}
