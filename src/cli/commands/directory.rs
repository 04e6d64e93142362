//! Read-only lists: employees and holidays.

use crate::api::client_from_config;
use crate::cli::Session;
use crate::cli::parser::Commands;
use crate::errors::AppResult;
use crate::ui::messages::{header, info};
use crate::utils::date::{PLACEHOLDER, fmt_day};
use crate::utils::table::Table;

pub fn employees(cmd: &Commands, session: &Session) -> AppResult<()> {
    if let Commands::Employees { search } = cmd {
        let client = client_from_config(&session.cfg)?;
        let mut list = client.employees()?;

        if let Some(q) = search {
            list.retain(|e| e.matches(q));
        }
        if list.is_empty() {
            info("No employees found.");
            return Ok(());
        }
        list.sort_by(|a, b| a.name.to_lowercase().cmp(&b.name.to_lowercase()));

        let mut table = Table::with_headers(&["ID", "Name", "Department"]);
        for e in &list {
            table.add_row(vec![e.id.to_string(), e.name.clone(), e.department.clone()]);
        }
        header(format!("Employees ({})", list.len()));
        print!("{}", table.render());
    }
    Ok(())
}

pub fn holidays(session: &Session) -> AppResult<()> {
    let client = client_from_config(&session.cfg)?;
    let mut list = client.holidays()?;
    if list.is_empty() {
        info("No holidays published.");
        return Ok(());
    }
    list.sort_by_key(|h| h.date);

    let mut table = Table::with_headers(&["Date", "Name"]);
    for h in &list {
        table.add_row(vec![
            h.date
                .map(|d| fmt_day(&d))
                .unwrap_or_else(|| PLACEHOLDER.to_string()),
            h.name.clone(),
        ]);
    }
    header("Holidays");
    print!("{}", table.render());
    Ok(())
}
