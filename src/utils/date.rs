//! Timestamp normalization and display formatting.

use crate::utils::zone::DisplayZone;
use chrono::{DateTime, FixedOffset, NaiveDate, NaiveDateTime, TimeZone, Utc};
use regex::Regex;
use serde_json::Value;
use std::sync::LazyLock;

/// Placeholder rendered for missing or unparsable values.
pub const PLACEHOLDER: &str = "-";

static DATE_TIME_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"^(\d{4}-\d{2}-\d{2})[Tt ](\d{2}:\d{2}(?::\d{2}(?:\.\d+)?)?)\s*(Z|z|[+-]\d{2}(?::?\d{2})?)?$",
    )
    .expect("valid regex")
});

static DATE_ONLY_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\d{4}-\d{2}-\d{2}$").expect("valid regex"));

/// Parse a `YYYY-MM-DD` calendar date.
pub fn parse_day(s: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(s.trim(), "%Y-%m-%d").ok()
}

/// Normalize a JSON timestamp: epoch milliseconds or any supported string.
pub fn parse_api_date(v: &Value) -> Option<DateTime<Utc>> {
    match v {
        Value::Number(n) => {
            let millis = n.as_i64().or_else(|| {
                n.as_f64()
                    .filter(|f| f.is_finite())
                    .map(|f| f.round() as i64)
            })?;
            DateTime::from_timestamp_millis(millis)
        }
        Value::String(s) => parse_api_date_str(s),
        _ => None,
    }
}

/// Normalize a server timestamp string into a UTC instant.
///
/// - explicit `Z` or `±HH:MM` offsets are honoured;
/// - bare `YYYY-MM-DDTHH:mm[:ss[.fff]]` (or with a space) is taken as UTC;
/// - plain `YYYY-MM-DD` is UTC midnight;
/// - RFC 2822 strings are accepted as a last resort.
pub fn parse_api_date_str(s: &str) -> Option<DateTime<Utc>> {
    let s = s.trim();
    if s.is_empty() {
        return None;
    }

    if let Some(caps) = DATE_TIME_RE.captures(s) {
        let naive = parse_naive(&caps[1], &caps[2])?;
        return match caps.get(3).map(|m| m.as_str()) {
            None | Some("Z") | Some("z") => Some(naive.and_utc()),
            Some(offset) => {
                let offset = parse_offset(offset)?;
                offset
                    .from_local_datetime(&naive)
                    .single()
                    .map(|dt| dt.with_timezone(&Utc))
            }
        };
    }

    if DATE_ONLY_RE.is_match(s) {
        return parse_day(s)
            .and_then(|d| d.and_hms_opt(0, 0, 0))
            .map(|dt| dt.and_utc());
    }

    DateTime::parse_from_rfc2822(s)
        .or_else(|_| DateTime::parse_from_rfc3339(s))
        .ok()
        .map(|dt| dt.with_timezone(&Utc))
}

fn parse_naive(date: &str, time: &str) -> Option<NaiveDateTime> {
    let joined = format!("{date}T{time}");
    ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%dT%H:%M"]
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(&joined, fmt).ok())
}

fn parse_offset(raw: &str) -> Option<FixedOffset> {
    let sign = if raw.starts_with('-') { -1 } else { 1 };
    let digits: String = raw[1..].chars().filter(|c| c.is_ascii_digit()).collect();
    let hours: i32 = digits.get(0..2)?.parse().ok()?;
    let minutes: i32 = match digits.get(2..4) {
        Some(m) => m.parse().ok()?,
        None => 0,
    };
    FixedOffset::east_opt(sign * (hours * 3600 + minutes * 60))
}

/// Medium date + short time, e.g. `Jan 5, 2026, 9:05 AM`.
pub fn fmt_instant(instant: &DateTime<Utc>, zone: &DisplayZone) -> String {
    zone.naive_local(instant)
        .format("%b %-d, %Y, %-I:%M %p")
        .to_string()
}

/// 24h clock, e.g. `09:05`; used in dense tables.
pub fn fmt_hhmm(instant: &DateTime<Utc>, zone: &DisplayZone) -> String {
    zone.naive_local(instant).format("%H:%M").to_string()
}

pub fn fmt_day(day: &NaiveDate) -> String {
    day.format("%b %-d, %Y").to_string()
}

/// Render a raw server timestamp in the display zone, or `-`.
pub fn fmt_date_time(raw: &str, zone: &DisplayZone) -> String {
    match parse_api_date_str(raw) {
        Some(instant) => fmt_instant(&instant, zone),
        None => PLACEHOLDER.to_string(),
    }
}

/// Render the date part only. Plain calendar dates are shown as-is so they
/// never shift across a day boundary.
pub fn fmt_date_only(raw: &str, zone: &DisplayZone) -> String {
    if let Some(day) = DATE_ONLY_RE
        .is_match(raw.trim())
        .then(|| parse_day(raw))
        .flatten()
    {
        return fmt_day(&day);
    }
    match parse_api_date_str(raw) {
        Some(instant) => fmt_day(&zone.date_of(&instant)),
        None => PLACEHOLDER.to_string(),
    }
}

/// True when `raw` is a plain `YYYY-MM-DD` date.
pub fn is_plain_date(raw: &str) -> bool {
    DATE_ONLY_RE.is_match(raw.trim())
}

/// True when `raw` carries a time component the parser understands.
pub fn is_timestamp(raw: &str) -> bool {
    DATE_TIME_RE.is_match(raw.trim())
}

pub fn month_name(month: u32) -> &'static str {
    match month {
        1 => "January",
        2 => "February",
        3 => "March",
        4 => "April",
        5 => "May",
        6 => "June",
        7 => "July",
        8 => "August",
        9 => "September",
        10 => "October",
        11 => "November",
        12 => "December",
        _ => "",
    }
}
