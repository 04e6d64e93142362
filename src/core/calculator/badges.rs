//! Anomaly badges attached to a day cell.

use crate::core::policy::AttendancePolicy;
use crate::utils::zone::DisplayZone;
use chrono::{DateTime, Utc};
use serde::Serialize;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Badge {
    MissingOut,
    MissingIn,
    Late,
    Early,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tone {
    Bad,
    Warn,
}

/// Summary ranking of a cell, lowest to highest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub enum Severity {
    /// No punches that day.
    Empty,
    /// At least one punch, nothing flagged.
    Ok,
    Warn,
    Bad,
}

impl Badge {
    pub fn label(&self) -> &'static str {
        match self {
            Badge::MissingOut => "MISSING OUT",
            Badge::MissingIn => "MISSING IN",
            Badge::Late => "LATE",
            Badge::Early => "EARLY",
        }
    }

    pub fn tone(&self) -> Tone {
        match self {
            Badge::Late | Badge::Early => Tone::Bad,
            Badge::MissingIn | Badge::MissingOut => Tone::Warn,
        }
    }
}

impl fmt::Display for Badge {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl Severity {
    pub fn label(&self) -> &'static str {
        match self {
            Severity::Empty => "empty",
            Severity::Ok => "ok",
            Severity::Warn => "warn",
            Severity::Bad => "bad",
        }
    }
}

/// Independent flags for one employee-day. Wall-clock comparisons use the
/// display zone.
pub fn cell_badges(
    in_at: Option<DateTime<Utc>>,
    out_at: Option<DateTime<Utc>>,
    policy: &AttendancePolicy,
    zone: &DisplayZone,
) -> Vec<Badge> {
    let mut badges = Vec::new();

    if in_at.is_some() && out_at.is_none() {
        badges.push(Badge::MissingOut);
    }
    if out_at.is_some() && in_at.is_none() {
        badges.push(Badge::MissingIn);
    }

    if let Some(i) = in_at {
        let late_limit = policy.expected_in_minute as i64 + policy.late_after_minutes as i64;
        if zone.minute_of_day(&i) as i64 > late_limit {
            badges.push(Badge::Late);
        }
    }

    if let Some(o) = out_at {
        let early_limit = policy.expected_out_minute as i64 - policy.early_before_minutes as i64;
        if (zone.minute_of_day(&o) as i64) < early_limit {
            badges.push(Badge::Early);
        }
    }

    badges
}

/// Rank a cell: any bad badge > any warn badge > punched > empty.
pub fn severity(badges: &[Badge], has_punch: bool) -> Severity {
    if badges.iter().any(|b| b.tone() == Tone::Bad) {
        Severity::Bad
    } else if badges.iter().any(|b| b.tone() == Tone::Warn) {
        Severity::Warn
    } else if has_punch {
        Severity::Ok
    } else {
        Severity::Empty
    }
}
