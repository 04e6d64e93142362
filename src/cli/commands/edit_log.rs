use crate::api::client_from_config;
use crate::api::endpoints::{LogEdit, describe_response};
use crate::cli::Session;
use crate::cli::parser::Commands;
use crate::errors::{AppError, AppResult};
use crate::ui::messages::{info, success};
use crate::utils::date::parse_api_date_str;
use crate::utils::zone::DisplayZone;
use chrono::{NaiveDateTime, SecondsFormat};

/// `edit-log`: correct the punches or note of one log.
pub fn handle(cmd: &Commands, session: &Session) -> AppResult<()> {
    if let Commands::EditLog {
        id,
        check_in,
        check_out,
        note,
    } = cmd
    {
        let edit = LogEdit {
            check_in_at: check_in
                .as_deref()
                .map(|s| to_wire(s, &session.zone))
                .transpose()?,
            check_out_at: check_out
                .as_deref()
                .map(|s| to_wire(s, &session.zone))
                .transpose()?,
            note: note.clone(),
        };

        if edit.is_empty() {
            return Err(AppError::InvalidInput(
                "nothing to change: pass --in, --out or --note".to_string(),
            ));
        }

        let client = client_from_config(&session.cfg)?;
        let response = client.edit_log(*id, &edit)?;
        success(format!("Log #{id} updated"));
        info(describe_response(&response));
    }
    Ok(())
}

/// `YYYY-MM-DD HH:MM` is wall-clock time in the display zone; anything with
/// an explicit offset is taken as-is. Sent as UTC RFC 3339.
pub fn to_wire(input: &str, zone: &DisplayZone) -> AppResult<String> {
    let s = input.trim();
    let instant = match NaiveDateTime::parse_from_str(s, "%Y-%m-%d %H:%M") {
        Ok(local) => zone.to_utc(&local),
        Err(_) => parse_api_date_str(s),
    }
    .ok_or_else(|| AppError::InvalidDate(input.to_string()))?;
    Ok(instant.to_rfc3339_opts(SecondsFormat::Secs, true))
}
