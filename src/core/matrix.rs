//! Employee × day presence matrix, the dashboard view of the aggregation.

use crate::core::calculator::aggregate::{AggregationResult, CellSummary, DayCell, DiscardCounts};
use crate::core::calculator::badges::Severity;
use crate::core::calculator::trend::{sparkline, trend_series};
use crate::core::policy::AttendancePolicy;
use crate::export::TabularData;
use crate::models::employee::Employee;
use crate::utils::date::fmt_hhmm;
use crate::utils::formatting::mins2readable;
use crate::utils::zone::DisplayZone;
use chrono::NaiveDate;
use std::collections::HashMap;

pub const NO_TIME: &str = "--:--";

#[derive(Debug, Clone, PartialEq)]
pub struct MatrixCell {
    pub cell: DayCell,
    pub summary: CellSummary,
}

impl MatrixCell {
    /// `09:00 - 17:30 LATE`
    pub fn text(&self, zone: &DisplayZone) -> String {
        let fmt = |t: Option<chrono::DateTime<chrono::Utc>>| {
            t.map(|i| fmt_hhmm(&i, zone))
                .unwrap_or_else(|| NO_TIME.to_string())
        };
        let mut out = format!("{} - {}", fmt(self.cell.in_at), fmt(self.cell.out_at));
        for b in &self.summary.badges {
            out.push(' ');
            out.push_str(b.label());
        }
        out
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct MatrixRow {
    pub employee: Employee,
    pub pinned: bool,
    /// One entry per day of the range.
    pub cells: Vec<Option<MatrixCell>>,
    pub total_minutes: i64,
    pub worst: Severity,
    pub series: Vec<i64>,
    pub sparkline: String,
}

impl MatrixRow {
    pub fn present_days(&self) -> usize {
        self.cells.iter().flatten().filter(|c| c.cell.has_punch()).count()
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct PresenceMatrix {
    pub days: Vec<NaiveDate>,
    pub rows: Vec<MatrixRow>,
    pub discarded: DiscardCounts,
}

impl PresenceMatrix {
    /// Build rows for every directory employee plus ids only seen in
    /// activity. Pinned employees come first, in pin order; the rest by name.
    pub fn build(
        result: &AggregationResult,
        employees: &[Employee],
        policy: &AttendancePolicy,
        zone: &DisplayZone,
        pinned: &[i64],
    ) -> Self {
        let mut directory: HashMap<i64, Employee> =
            employees.iter().map(|e| (e.id, e.clone())).collect();
        for id in &result.employee_ids {
            directory
                .entry(*id)
                .or_insert_with(|| Employee::unknown(*id));
        }

        let mut rows: Vec<MatrixRow> = directory
            .into_values()
            .map(|employee| build_row(result, employee, policy, zone, pinned))
            .collect();

        rows.sort_by(|a, b| {
            let pa = pinned.iter().position(|p| *p == a.employee.id);
            let pb = pinned.iter().position(|p| *p == b.employee.id);
            match (pa, pb) {
                (Some(x), Some(y)) => x.cmp(&y),
                (Some(_), None) => std::cmp::Ordering::Less,
                (None, Some(_)) => std::cmp::Ordering::Greater,
                (None, None) => a
                    .employee
                    .name
                    .to_lowercase()
                    .cmp(&b.employee.name.to_lowercase())
                    .then(a.employee.id.cmp(&b.employee.id)),
            }
        });

        Self {
            days: result.days.clone(),
            rows,
            discarded: result.discarded,
        }
    }

    pub fn headers(&self) -> Vec<String> {
        let mut headers = vec![
            "ID".to_string(),
            "Employee".to_string(),
            "Department".to_string(),
        ];
        headers.extend(self.days.iter().map(|d| d.format("%m-%d").to_string()));
        headers.extend(["Total".to_string(), "Trend".to_string()]);
        headers
    }

    pub fn to_tabular(&self, title: &str, zone: &DisplayZone) -> TabularData {
        let rows = self
            .rows
            .iter()
            .map(|row| {
                let mut out = vec![
                    row.employee.id.to_string(),
                    row.employee.name.clone(),
                    row.employee.department.clone(),
                ];
                out.extend(
                    row.cells
                        .iter()
                        .map(|c| c.as_ref().map(|c| c.text(zone)).unwrap_or_default()),
                );
                out.push(mins2readable(row.total_minutes, false, true));
                out.push(row.sparkline.clone());
                out
            })
            .collect();

        TabularData::new(title, self.headers(), rows)
            .with_severities(self.rows.iter().map(|r| r.worst).collect())
    }
}

fn build_row(
    result: &AggregationResult,
    employee: Employee,
    policy: &AttendancePolicy,
    zone: &DisplayZone,
    pinned: &[i64],
) -> MatrixRow {
    let cells: Vec<Option<MatrixCell>> = result
        .days
        .iter()
        .map(|day| {
            result.cell(employee.id, *day).map(|cell| MatrixCell {
                summary: cell.summarize(policy, zone),
                cell: cell.clone(),
            })
        })
        .collect();

    let total_minutes = cells
        .iter()
        .flatten()
        .map(|c| c.summary.worked_minutes)
        .sum();

    let worst = cells
        .iter()
        .flatten()
        .map(|c| c.summary.severity)
        .max()
        .unwrap_or(Severity::Empty);

    let series = trend_series(result, employee.id, policy, zone);
    let sparkline = sparkline(&series, policy.work_day_minutes);

    MatrixRow {
        pinned: pinned.contains(&employee.id),
        employee,
        cells,
        total_minutes,
        worst,
        series,
        sparkline,
    }
}
