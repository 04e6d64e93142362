use crate::api::client_from_config;
use crate::api::endpoints::{LeaveRequest, describe_response};
use crate::cli::Session;
use crate::cli::parser::{Commands, LeaveAction};
use crate::errors::{AppError, AppResult};
use crate::ui::messages::{header, info, success};
use crate::utils::date::{PLACEHOLDER, parse_day};
use crate::utils::table::Table;

pub fn handle(cmd: &Commands, session: &Session) -> AppResult<()> {
    if let Commands::Leave { action } = cmd {
        match action {
            LeaveAction::Types => types(session)?,
            LeaveAction::Apply {
                leave_type,
                from,
                to,
                reason,
            } => {
                let from_d = parse_day(from).ok_or_else(|| AppError::InvalidDate(from.clone()))?;
                let to_d = parse_day(to).ok_or_else(|| AppError::InvalidDate(to.clone()))?;
                if to_d < from_d {
                    return Err(AppError::InvalidPeriod(format!(
                        "{from} → {to}: end is before start"
                    )));
                }

                let request = LeaveRequest {
                    leave_type_id: *leave_type,
                    from: from_d,
                    to: to_d,
                    reason: reason.clone().filter(|r| !r.trim().is_empty()),
                };
                let client = client_from_config(&session.cfg)?;
                let response = client.apply_leave(&request)?;
                success(format!("Leave requested from {from_d} to {to_d}"));
                info(describe_response(&response));
            }
        }
    }
    Ok(())
}

fn types(session: &Session) -> AppResult<()> {
    let client = client_from_config(&session.cfg)?;
    let list = client.leave_types()?;
    if list.is_empty() {
        info("No leave types defined.");
        return Ok(());
    }

    let mut table = Table::with_headers(&["ID", "Name", "Days", "Paid"]);
    for t in &list {
        table.add_row(vec![
            t.id.map(|i| i.to_string())
                .unwrap_or_else(|| PLACEHOLDER.to_string()),
            t.name.clone(),
            t.days_allowed
                .map(|d| format!("{d}"))
                .unwrap_or_else(|| PLACEHOLDER.to_string()),
            match t.paid {
                Some(true) => "yes".to_string(),
                Some(false) => "no".to_string(),
                None => PLACEHOLDER.to_string(),
            },
        ]);
    }
    header("Leave types");
    print!("{}", table.render());
    Ok(())
}
