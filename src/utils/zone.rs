//! Display timezone handling.
//!
//! The zone is resolved once per invocation and passed explicitly to every
//! function that needs calendar or wall-clock values.

use crate::errors::{AppError, AppResult};
use chrono::{DateTime, Local, NaiveDate, NaiveDateTime, TimeZone, Timelike, Utc};
use chrono_tz::Tz;
use std::fmt;
use tracing::warn;

/// Zone baked in at compile time (`RATTENDANCE_DEFAULT_TZ=Europe/Rome cargo build`).
pub const BUILD_DEFAULT_TZ: Option<&str> = option_env!("RATTENDANCE_DEFAULT_TZ");

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DisplayZone {
    Named(Tz),
    /// The machine's local timezone.
    Local,
}

impl DisplayZone {
    /// Resolve the display zone: user preference, then build default, then local.
    /// Unknown names fall through to the next tier.
    pub fn resolve(preference: Option<&str>, build_default: Option<&str>) -> Self {
        for candidate in [preference, build_default].into_iter().flatten() {
            let name = candidate.trim();
            if name.is_empty() {
                continue;
            }
            match name.parse::<Tz>() {
                Ok(tz) => return DisplayZone::Named(tz),
                Err(_) => warn!("ignoring unknown timezone '{}'", name),
            }
        }
        DisplayZone::Local
    }

    /// Strict lookup for an explicitly requested zone.
    pub fn named(name: &str) -> AppResult<Self> {
        name.trim()
            .parse::<Tz>()
            .map(DisplayZone::Named)
            .map_err(|_| AppError::InvalidTimezone(name.to_string()))
    }

    /// Resolve with the compile-time default as second tier.
    pub fn from_preference(preference: Option<&str>) -> Self {
        Self::resolve(preference, BUILD_DEFAULT_TZ)
    }

    pub fn naive_local(&self, instant: &DateTime<Utc>) -> NaiveDateTime {
        match self {
            DisplayZone::Named(tz) => instant.with_timezone(tz).naive_local(),
            DisplayZone::Local => instant.with_timezone(&Local).naive_local(),
        }
    }

    /// Calendar day of `instant` as seen in this zone.
    pub fn date_of(&self, instant: &DateTime<Utc>) -> NaiveDate {
        self.naive_local(instant).date()
    }

    /// Minutes since local midnight, 0..1440.
    pub fn minute_of_day(&self, instant: &DateTime<Utc>) -> u32 {
        let t = self.naive_local(instant).time();
        t.hour() * 60 + t.minute()
    }

    pub fn today(&self) -> NaiveDate {
        self.date_of(&Utc::now())
    }

    /// Wall-clock time in this zone to an instant. Ambiguous times (DST
    /// fall-back) take the earlier instant; skipped times yield `None`.
    pub fn to_utc(&self, local: &NaiveDateTime) -> Option<DateTime<Utc>> {
        match self {
            DisplayZone::Named(tz) => tz
                .from_local_datetime(local)
                .earliest()
                .map(|t| t.with_timezone(&Utc)),
            DisplayZone::Local => Local
                .from_local_datetime(local)
                .earliest()
                .map(|t| t.with_timezone(&Utc)),
        }
    }
}

impl fmt::Display for DisplayZone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DisplayZone::Named(tz) => write!(f, "{}", tz.name()),
            DisplayZone::Local => write!(f, "local"),
        }
    }
}
