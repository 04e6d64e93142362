// src/export/excel_date.rs

use chrono::{NaiveDate, NaiveDateTime, NaiveTime, Timelike};

const DATETIME_SHAPES: [&str; 4] = [
    "%Y-%m-%dT%H:%M:%S",
    "%Y-%m-%d %H:%M:%S",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M",
];
const TIME_SHAPES: [&str; 2] = ["%H:%M:%S", "%H:%M"];

/// Excel number format and serial value for cells that hold a local
/// date-time, a date or a time of day. Anything else is left as text.
pub(crate) fn parse_to_excel_date(s: &str) -> Option<(&'static str, f64)> {
    if let Some(dt) = DATETIME_SHAPES
        .iter()
        .find_map(|f| NaiveDateTime::parse_from_str(s, f).ok())
    {
        return Some(("yyyy-mm-dd hh:mm", serial(dt)?));
    }
    if let Ok(d) = NaiveDate::parse_from_str(s, "%Y-%m-%d") {
        return Some(("yyyy-mm-dd", serial(d.and_time(NaiveTime::MIN))?));
    }
    TIME_SHAPES
        .iter()
        .find_map(|f| NaiveTime::parse_from_str(s, f).ok())
        .map(|t| ("hh:mm", f64::from(t.num_seconds_from_midnight()) / 86_400.0))
}

/// Days since 1899-12-30, fractional part for the time of day.
fn serial(dt: NaiveDateTime) -> Option<f64> {
    let epoch = NaiveDate::from_ymd_opt(1899, 12, 30)?.and_time(NaiveTime::MIN);
    Some((dt - epoch).num_seconds() as f64 / 86_400.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn recognises_dates_and_times() {
        assert_eq!(parse_to_excel_date("2026-01-05"), Some(("yyyy-mm-dd", 46027.0)));
        assert_eq!(parse_to_excel_date("12:00"), Some(("hh:mm", 0.5)));
        let (fmt, v) = parse_to_excel_date("2026-01-05 06:00").unwrap();
        assert_eq!(fmt, "yyyy-mm-dd hh:mm");
        assert!((v - 46027.25).abs() < 1e-9);
        assert_eq!(parse_to_excel_date("09:20 - 18:00 LATE"), None);
    }
}
