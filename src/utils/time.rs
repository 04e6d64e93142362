//! Time utilities: parsing HH:MM and minute-of-day conversions.

use crate::errors::{AppError, AppResult};
use chrono::{NaiveTime, Timelike};

pub fn parse_time(t: &str) -> Option<NaiveTime> {
    NaiveTime::parse_from_str(t.trim(), "%H:%M").ok()
}

/// `"08:30"` → 510.
pub fn parse_minute_of_day(t: &str) -> AppResult<u32> {
    let time = parse_time(t).ok_or_else(|| AppError::InvalidTime(t.to_string()))?;
    Ok(time.hour() * 60 + time.minute())
}

pub fn format_minute_of_day(m: u32) -> String {
    format!("{:02}:{:02}", (m / 60) % 24, m % 60)
}
