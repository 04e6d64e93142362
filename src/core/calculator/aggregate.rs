//! Record-to-cell aggregation: one cell per employee and calendar day.

use crate::core::calculator::badges::{Badge, Severity, cell_badges, severity};
use crate::core::calculator::worked::worked_minutes;
use crate::core::policy::AttendancePolicy;
use crate::models::activity::ActivityRecord;
use crate::utils::zone::DisplayZone;
use chrono::{DateTime, NaiveDate, Utc};
use std::collections::{BTreeMap, BTreeSet, HashSet};
use tracing::debug;

/// First-in / last-out summary of one employee on one day.
#[derive(Debug, Clone, PartialEq)]
pub struct DayCell {
    pub employee_id: i64,
    pub day: NaiveDate,
    pub in_at: Option<DateTime<Utc>>,
    pub out_at: Option<DateTime<Utc>>,
    /// Timestamp of `row`.
    pub last_event_at: Option<DateTime<Utc>>,
    /// Most recent raw record merged into the cell.
    pub row: ActivityRecord,
    pub records: usize,
}

/// Derived figures for a cell under a policy.
#[derive(Debug, Clone, PartialEq)]
pub struct CellSummary {
    pub worked_minutes: i64,
    pub badges: Vec<Badge>,
    pub severity: Severity,
}

impl DayCell {
    fn open(employee_id: i64, day: NaiveDate, rec: &ActivityRecord) -> Self {
        Self {
            employee_id,
            day,
            in_at: rec.check_in_at,
            out_at: rec.check_out_at,
            last_event_at: rec.event_at(),
            row: rec.clone(),
            records: 1,
        }
    }

    fn merge(&mut self, rec: &ActivityRecord) {
        self.in_at = min_opt(self.in_at, rec.check_in_at);
        self.out_at = max_opt(self.out_at, rec.check_out_at);
        self.records += 1;

        if let Some(at) = rec.event_at()
            && self.last_event_at.is_none_or(|last| at > last)
        {
            self.last_event_at = Some(at);
            self.row = rec.clone();
        }
    }

    pub fn has_punch(&self) -> bool {
        self.in_at.is_some() || self.out_at.is_some()
    }

    pub fn summarize(&self, policy: &AttendancePolicy, zone: &DisplayZone) -> CellSummary {
        let badges = cell_badges(self.in_at, self.out_at, policy, zone);
        CellSummary {
            worked_minutes: worked_minutes(
                self.in_at,
                self.out_at,
                policy.lunch_break_minutes,
                policy.lunch_threshold_minutes,
            ),
            severity: severity(&badges, self.has_punch()),
            badges,
        }
    }
}

fn min_opt(a: Option<DateTime<Utc>>, b: Option<DateTime<Utc>>) -> Option<DateTime<Utc>> {
    match (a, b) {
        (Some(x), Some(y)) => Some(x.min(y)),
        (x, y) => x.or(y),
    }
}

fn max_opt(a: Option<DateTime<Utc>>, b: Option<DateTime<Utc>>) -> Option<DateTime<Utc>> {
    match (a, b) {
        (Some(x), Some(y)) => Some(x.max(y)),
        (x, y) => x.or(y),
    }
}

/// How many records were dropped, by reason.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DiscardCounts {
    pub no_employee: usize,
    pub no_day: usize,
    pub out_of_range: usize,
}

impl DiscardCounts {
    pub fn total(&self) -> usize {
        self.no_employee + self.no_day + self.out_of_range
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct AggregationResult {
    /// Expanded range, in range order.
    pub days: Vec<NaiveDate>,
    pub cells: BTreeMap<(i64, NaiveDate), DayCell>,
    /// Employees with at least one cell, ascending.
    pub employee_ids: Vec<i64>,
    pub discarded: DiscardCounts,
}

impl AggregationResult {
    pub fn cell(&self, employee_id: i64, day: NaiveDate) -> Option<&DayCell> {
        self.cells.get(&(employee_id, day))
    }

    pub fn cells_of(&self, employee_id: i64) -> impl Iterator<Item = &DayCell> {
        self.cells
            .range((employee_id, NaiveDate::MIN)..=(employee_id, NaiveDate::MAX))
            .map(|(_, c)| c)
    }
}

/// Group records into day cells.
///
/// Records without an employee id, without a resolvable day, or outside
/// `days` are dropped and only counted in [`DiscardCounts`].
pub fn aggregate(
    records: &[ActivityRecord],
    days: &[NaiveDate],
    zone: &DisplayZone,
) -> AggregationResult {
    let in_range: HashSet<NaiveDate> = days.iter().copied().collect();
    let mut cells: BTreeMap<(i64, NaiveDate), DayCell> = BTreeMap::new();
    let mut discarded = DiscardCounts::default();

    for rec in records {
        let Some(emp) = rec.employee_id else {
            discarded.no_employee += 1;
            continue;
        };
        let Some(day) = rec.day_key(zone) else {
            discarded.no_day += 1;
            continue;
        };
        if !in_range.contains(&day) {
            discarded.out_of_range += 1;
            continue;
        }

        cells
            .entry((emp, day))
            .and_modify(|cell| cell.merge(rec))
            .or_insert_with(|| DayCell::open(emp, day, rec));
    }

    if discarded.total() > 0 {
        debug!(
            no_employee = discarded.no_employee,
            no_day = discarded.no_day,
            out_of_range = discarded.out_of_range,
            "records discarded during aggregation"
        );
    }

    let employee_ids: BTreeSet<i64> = cells.keys().map(|(e, _)| *e).collect();

    AggregationResult {
        days: days.to_vec(),
        cells,
        employee_ids: employee_ids.into_iter().collect(),
        discarded,
    }
}
