//! Calendar range expansion.

use crate::utils::date::parse_day;
use chrono::{Days, NaiveDate};

/// Hard cap on expanded days, protects against malformed ranges.
pub const MAX_RANGE_DAYS: usize = 92;

/// Inclusive pair of calendar dates, in the order the caller gave them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateRange {
    pub from: NaiveDate,
    pub to: NaiveDate,
}

impl DateRange {
    pub fn new(from: NaiveDate, to: NaiveDate) -> Self {
        Self { from, to }
    }

    pub fn parse(from: &str, to: &str) -> Option<Self> {
        Some(Self::new(parse_day(from)?, parse_day(to)?))
    }

    /// Lower and upper bound regardless of direction.
    pub fn bounds(&self) -> (NaiveDate, NaiveDate) {
        if self.from <= self.to {
            (self.from, self.to)
        } else {
            (self.to, self.from)
        }
    }

    /// Days from `from` towards `to`, both included, at most [`MAX_RANGE_DAYS`].
    pub fn days(&self) -> Vec<NaiveDate> {
        let descending = self.from > self.to;
        let mut out = Vec::new();
        let mut d = self.from;

        while out.len() < MAX_RANGE_DAYS {
            out.push(d);
            if d == self.to {
                break;
            }
            let next = if descending {
                d.checked_sub_days(Days::new(1))
            } else {
                d.checked_add_days(Days::new(1))
            };
            match next {
                Some(n) => d = n,
                None => break,
            }
        }

        out
    }
}

/// Expand two `YYYY-MM-DD` strings into the days between them, inclusive.
/// Unparsable input yields an empty sequence.
pub fn each_day_inclusive(from: &str, to: &str) -> Vec<NaiveDate> {
    DateRange::parse(from, to)
        .map(|r| r.days())
        .unwrap_or_default()
}
