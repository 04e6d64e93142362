pub mod commands;
pub mod parser;

use crate::config::Config;
use crate::core::calculator::range::{DateRange, MAX_RANGE_DAYS};
use crate::errors::{AppError, AppResult};
use crate::ui::messages::warning;
use crate::utils::date::parse_day;
use crate::utils::period::{month_bounds, parse_period};
use crate::utils::zone::DisplayZone;
use std::path::PathBuf;

/// Everything a command handler needs, resolved once in `run()`.
pub struct Session {
    pub cfg: Config,
    pub cfg_path: PathBuf,
    pub zone: DisplayZone,
}

impl Session {
    /// `--tz` must name a real zone; a bad `display_timezone` in the
    /// config only falls through to the next tier.
    pub fn new(cfg: Config, cfg_path: PathBuf, tz_flag: Option<&str>) -> AppResult<Self> {
        let zone = match tz_flag {
            Some(name) => DisplayZone::named(name)?,
            None => DisplayZone::from_preference(cfg.display_timezone.as_deref()),
        };
        Ok(Self {
            cfg,
            cfg_path,
            zone,
        })
    }
}

/// Range from `--from/--to` or `--period`; the current month when neither
/// is given. A lone `--from` runs to today, a lone `--to` starts on the
/// first of its month.
pub fn resolve_range(
    from: Option<&str>,
    to: Option<&str>,
    period: Option<&str>,
    zone: &DisplayZone,
) -> AppResult<DateRange> {
    if let Some(p) = period {
        let (a, b) = parse_period(p)?;
        return Ok(DateRange::new(a, b));
    }

    let day = |s: &str| parse_day(s).ok_or_else(|| AppError::InvalidDate(s.to_string()));

    let range = match (from, to) {
        (Some(f), Some(t)) => DateRange::new(day(f)?, day(t)?),
        (Some(f), None) => DateRange::new(day(f)?, zone.today()),
        (None, Some(t)) => {
            let end = day(t)?;
            DateRange::new(month_bounds(end).0, end)
        }
        (None, None) => {
            let (a, b) = month_bounds(zone.today());
            DateRange::new(a, b)
        }
    };
    Ok(range)
}

/// Warn when a range will be cut to the first [`MAX_RANGE_DAYS`] days.
pub fn warn_if_truncated(range: &DateRange) {
    let (lo, hi) = range.bounds();
    let span = (hi - lo).num_days() + 1;
    if span > MAX_RANGE_DAYS as i64 {
        warning(format!(
            "Range spans {span} days; only the first {MAX_RANGE_DAYS} are shown."
        ));
    }
}
