//! `--period` parsing (year / month / day / interval).

use crate::errors::{AppError, AppResult};
use chrono::{Datelike, Months, NaiveDate};

/// Inclusive bounds of a period expression: `2026`, `2026-01`,
/// `2026-01-05`, or two of the same shape joined by `:`
/// (`2026-01:2026-03`).
pub fn parse_period(p: &str) -> AppResult<(NaiveDate, NaiveDate)> {
    let p = p.trim();
    let Some((a, b)) = p.split_once(':') else {
        return bounds_of(p);
    };

    let (a, b) = (a.trim(), b.trim());
    if a.len() != b.len() {
        return Err(AppError::InvalidPeriod(format!(
            "{p}: both ends need the same shape"
        )));
    }
    let (from, _) = bounds_of(a)?;
    let (_, to) = bounds_of(b)?;
    if to < from {
        return Err(AppError::InvalidPeriod(format!("{p}: end is before start")));
    }
    Ok((from, to))
}

fn bounds_of(p: &str) -> AppResult<(NaiveDate, NaiveDate)> {
    let bad = || AppError::InvalidPeriod(p.to_string());
    let day = |s: &str| NaiveDate::parse_from_str(s, "%Y-%m-%d").map_err(|_| bad());

    match p.len() {
        4 if p.bytes().all(|b| b.is_ascii_digit()) => {
            Ok((day(&format!("{p}-01-01"))?, day(&format!("{p}-12-31"))?))
        }
        7 => Ok(month_bounds(day(&format!("{p}-01"))?)),
        10 => day(p).map(|d| (d, d)),
        _ => Err(bad()),
    }
}

/// First and last day of the month containing `day`.
pub fn month_bounds(day: NaiveDate) -> (NaiveDate, NaiveDate) {
    let first = day.with_day(1).unwrap_or(day);
    let last = first
        .checked_add_months(Months::new(1))
        .and_then(|next| next.pred_opt())
        .unwrap_or(day);
    (first, last)
}

/// Human title for a period, used in export titles.
pub fn describe_period(from: &NaiveDate, to: &NaiveDate) -> String {
    if from == to {
        return format!("on {}", from.format("%Y-%m-%d"));
    }
    let (m_first, m_last) = month_bounds(*from);
    if *from == m_first && *to == m_last {
        return format!(
            "for {} {}",
            crate::utils::date::month_name(from.month()),
            from.year()
        );
    }
    format!(
        "from {} to {}",
        from.format("%Y-%m-%d"),
        to.format("%Y-%m-%d")
    )
}
