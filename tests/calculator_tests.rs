use chrono::{DateTime, NaiveDate, Utc};
use rattendance::core::calculator::aggregate::aggregate;
use rattendance::core::calculator::badges::{Badge, Severity, cell_badges, severity};
use rattendance::core::calculator::range::{DateRange, MAX_RANGE_DAYS, each_day_inclusive};
use rattendance::core::calculator::trend::{scale_to_surface, sparkline};
use rattendance::core::calculator::worked::worked_minutes;
use rattendance::core::logic::Core;
use rattendance::core::policy::AttendancePolicy;
use rattendance::models::activity::{ActivityRecord, DayMarker};
use rattendance::models::employee::Employee;
use rattendance::utils::zone::DisplayZone;
use serde_json::json;

fn at(s: &str) -> Option<DateTime<Utc>> {
    Some(DateTime::parse_from_rfc3339(s).expect("rfc3339").with_timezone(&Utc))
}

fn day(s: &str) -> NaiveDate {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").expect("date")
}

fn utc() -> DisplayZone {
    DisplayZone::resolve(Some("UTC"), None)
}

fn early_bird_policy() -> AttendancePolicy {
    AttendancePolicy {
        expected_in_minute: 8 * 60,
        expected_out_minute: 17 * 60,
        ..AttendancePolicy::default()
    }
}

// ---------------------------
// Range expansion
// ---------------------------

#[test]
fn range_crosses_month_end() {
    let days = each_day_inclusive("2026-01-30", "2026-02-02");
    assert_eq!(
        days,
        vec![
            day("2026-01-30"),
            day("2026-01-31"),
            day("2026-02-01"),
            day("2026-02-02")
        ]
    );
}

#[test]
fn range_single_day_and_reversed() {
    assert_eq!(each_day_inclusive("2026-03-01", "2026-03-01"), vec![day("2026-03-01")]);

    let reversed = each_day_inclusive("2026-02-02", "2026-01-31");
    assert_eq!(
        reversed,
        vec![day("2026-02-02"), day("2026-02-01"), day("2026-01-31")]
    );
}

#[test]
fn range_is_capped_and_rejects_garbage() {
    assert_eq!(each_day_inclusive("2026-01-01", "2026-12-31").len(), MAX_RANGE_DAYS);
    assert!(each_day_inclusive("2026-13-01", "2026-12-31").is_empty());
    assert!(each_day_inclusive("", "2026-12-31").is_empty());

    let r = DateRange::new(day("2026-05-10"), day("2026-05-01"));
    assert_eq!(r.bounds(), (day("2026-05-01"), day("2026-05-10")));
}

// ---------------------------
// Worked minutes
// ---------------------------

#[test]
fn worked_deducts_lunch_from_long_shifts_only() {
    let full = worked_minutes(at("2026-01-05T09:00:00Z"), at("2026-01-05T18:00:00Z"), 60, 360);
    assert_eq!(full, 480);

    let short = worked_minutes(at("2026-01-05T09:00:00Z"), at("2026-01-05T13:00:00Z"), 60, 360);
    assert_eq!(short, 240);

    let threshold = worked_minutes(at("2026-01-05T09:00:00Z"), at("2026-01-05T15:00:00Z"), 60, 360);
    assert_eq!(threshold, 300);
}

#[test]
fn worked_is_zero_for_missing_or_inverted_punches() {
    assert_eq!(worked_minutes(at("2026-01-05T09:00:00Z"), None, 60, 360), 0);
    assert_eq!(worked_minutes(None, at("2026-01-05T09:00:00Z"), 60, 360), 0);
    assert_eq!(
        worked_minutes(at("2026-01-05T18:00:00Z"), at("2026-01-05T09:00:00Z"), 60, 360),
        0
    );
}

#[test]
fn worked_rounds_seconds() {
    let m = worked_minutes(at("2026-01-05T09:00:00Z"), at("2026-01-05T09:30:40Z"), 60, 360);
    assert_eq!(m, 31);
}

// ---------------------------
// Badges
// ---------------------------

#[test]
fn late_only_beyond_tolerance() {
    let policy = early_bird_policy();
    let zone = utc();
    let out = at("2026-01-05T17:30:00Z");

    let on_limit = cell_badges(at("2026-01-05T08:15:00Z"), out, &policy, &zone);
    assert!(!on_limit.contains(&Badge::Late));

    let one_past = cell_badges(at("2026-01-05T08:16:00Z"), out, &policy, &zone);
    assert!(one_past.contains(&Badge::Late));

    let later = cell_badges(at("2026-01-05T08:20:00Z"), out, &policy, &zone);
    assert_eq!(later, vec![Badge::Late]);
}

#[test]
fn early_only_before_tolerance() {
    let policy = early_bird_policy();
    let zone = utc();
    let start = at("2026-01-05T08:00:00Z");

    assert!(cell_badges(start, at("2026-01-05T16:45:00Z"), &policy, &zone).is_empty());
    assert_eq!(
        cell_badges(start, at("2026-01-05T16:44:00Z"), &policy, &zone),
        vec![Badge::Early]
    );
}

#[test]
fn missing_punches_and_severity() {
    let policy = early_bird_policy();
    let zone = utc();

    let only_in = cell_badges(at("2026-01-05T08:00:00Z"), None, &policy, &zone);
    assert_eq!(only_in, vec![Badge::MissingOut]);
    assert_eq!(severity(&only_in, true), Severity::Warn);

    let only_out = cell_badges(None, at("2026-01-05T17:00:00Z"), &policy, &zone);
    assert_eq!(only_out, vec![Badge::MissingIn]);

    let late_no_out = cell_badges(at("2026-01-05T09:00:00Z"), None, &policy, &zone);
    assert_eq!(late_no_out, vec![Badge::MissingOut, Badge::Late]);
    assert_eq!(severity(&late_no_out, true), Severity::Bad);

    assert_eq!(severity(&[], true), Severity::Ok);
    assert_eq!(severity(&[], false), Severity::Empty);
}

#[test]
fn badges_use_display_zone_wall_clock() {
    let policy = early_bird_policy();
    // 07:30 UTC is 08:30 in Rome (winter): late there, on time in UTC.
    let rome = DisplayZone::resolve(Some("Europe/Rome"), None);
    let in_at = at("2026-01-05T07:30:00Z");
    let out_at = at("2026-01-05T16:30:00Z");

    assert!(cell_badges(in_at, out_at, &policy, &rome).contains(&Badge::Late));
    assert!(!cell_badges(in_at, out_at, &policy, &utc()).contains(&Badge::Late));
}

// ---------------------------
// Aggregation
// ---------------------------

fn rec(v: serde_json::Value) -> ActivityRecord {
    ActivityRecord::from_json(&v)
}

#[test]
fn aggregate_merges_first_in_last_out() {
    let records = vec![
        rec(json!({"id": 1, "employeeId": 7, "checkInAt": "2026-01-05T09:00:00Z", "checkOutAt": "2026-01-05T12:00:00Z", "note": "morning"})),
        rec(json!({"id": 2, "employeeId": 7, "checkInAt": "2026-01-05T13:00:00Z", "checkOutAt": "2026-01-05T18:00:00Z", "note": "afternoon"})),
    ];
    let days = each_day_inclusive("2026-01-05", "2026-01-06");
    let result = aggregate(&records, &days, &utc());

    let cell = result.cell(7, day("2026-01-05")).expect("cell");
    assert_eq!(cell.in_at, at("2026-01-05T09:00:00Z"));
    assert_eq!(cell.out_at, at("2026-01-05T18:00:00Z"));
    assert_eq!(cell.records, 2);
    assert_eq!(cell.row.note.as_deref(), Some("afternoon"));
    assert!(result.cell(7, day("2026-01-06")).is_none());
    assert_eq!(result.cells_of(7).count(), 1);
    assert_eq!(result.employee_ids, vec![7]);
}

#[test]
fn aggregate_counts_discarded_records() {
    let records = vec![
        rec(json!({"checkInAt": "2026-01-05T09:00:00Z"})),
        rec(json!({"employeeId": 7, "checkInAt": "2026-02-01T09:00:00Z"})),
        rec(json!({"employeeId": 7, "note": "nothing else"})),
        rec(json!({"employeeId": 8, "date": "2026-01-06"})),
    ];
    let days = each_day_inclusive("2026-01-05", "2026-01-06");
    let result = aggregate(&records, &days, &utc());

    assert_eq!(result.discarded.no_employee, 1);
    assert_eq!(result.discarded.out_of_range, 1);
    assert_eq!(result.discarded.no_day, 1);
    assert_eq!(result.discarded.total(), 3);

    let marker_only = result.cell(8, day("2026-01-06")).expect("cell from day marker");
    assert!(!marker_only.has_punch());
}

#[test]
fn unreadable_day_marker_discards_the_record() {
    let records = vec![rec(json!({
        "employeeId": 7,
        "day": "garbage",
        "checkInAt": "2026-01-05T09:00:00Z"
    }))];
    let days = each_day_inclusive("2026-01-05", "2026-01-06");
    let result = aggregate(&records, &days, &utc());

    assert_eq!(records[0].day, Some(DayMarker::Invalid));
    assert_eq!(result.cells.len(), 0);
    assert_eq!(result.discarded.no_day, 1);
    assert!(result.cell(7, day("2026-01-05")).is_none());
}

#[test]
fn aggregate_keys_days_in_display_zone() {
    let records = vec![rec(json!({"employeeId": 3, "checkInAt": "2026-01-05T23:30:00Z"}))];
    let days = each_day_inclusive("2026-01-05", "2026-01-06");

    let rome = DisplayZone::resolve(Some("Europe/Rome"), None);
    assert!(aggregate(&records, &days, &rome).cell(3, day("2026-01-06")).is_some());
    assert!(aggregate(&records, &days, &utc()).cell(3, day("2026-01-05")).is_some());
}

#[test]
fn explicit_plain_day_is_not_shifted() {
    let records = vec![rec(json!({
        "employeeId": 3,
        "workDate": "2026-01-05",
        "checkInAt": "2026-01-05T23:30:00Z"
    }))];
    let days = each_day_inclusive("2026-01-05", "2026-01-06");
    let tokyo = DisplayZone::resolve(Some("Asia/Tokyo"), None);
    assert!(aggregate(&records, &days, &tokyo).cell(3, day("2026-01-05")).is_some());
}

// ---------------------------
// Trend
// ---------------------------

#[test]
fn scale_is_clamped_and_monotonic() {
    assert_eq!(scale_to_surface(-10, 480, 100.0), 0.0);
    assert_eq!(scale_to_surface(480, 480, 100.0), 100.0);
    assert_eq!(scale_to_surface(900, 480, 100.0), 100.0);
    assert_eq!(scale_to_surface(10, 0, 100.0), 0.0);

    let mut prev = 0.0;
    for v in (0..=600).step_by(20) {
        let y = scale_to_surface(v, 480, 40.0);
        assert!(y >= prev);
        prev = y;
    }
}

#[test]
fn sparkline_glyphs() {
    assert_eq!(sparkline(&[0, 480, 240, 60, 1000], 480), "·█▅▂█");
    assert_eq!(sparkline(&[], 480), "");
}

// ---------------------------
// Matrix
// ---------------------------

#[test]
fn matrix_orders_pinned_first_and_fills_unknowns() {
    let records = vec![
        rec(json!({"employeeId": 7, "checkInAt": "2026-01-05T09:00:00Z", "checkOutAt": "2026-01-05T18:00:00Z"})),
        rec(json!({"employeeId": 99, "checkInAt": "2026-01-05T09:30:00Z"})),
    ];
    let employees = vec![
        Employee::from_json(&json!({"id": 7, "name": "Zed"})).expect("emp"),
        Employee::from_json(&json!({"id": 8, "name": "Anna"})).expect("emp"),
    ];
    let range = DateRange::new(day("2026-01-05"), day("2026-01-06"));
    let zone = utc();

    let matrix = Core::build_matrix(
        &records,
        &employees,
        &range,
        &AttendancePolicy::default(),
        &zone,
        &[7],
    );

    let names: Vec<&str> = matrix.rows.iter().map(|r| r.employee.name.as_str()).collect();
    assert_eq!(names, vec!["Zed", "Anna", "Unknown #99"]);

    let zed = &matrix.rows[0];
    assert!(zed.pinned);
    assert_eq!(zed.total_minutes, 480);
    assert_eq!(zed.present_days(), 1);
    assert_eq!(zed.worst, Severity::Ok);
    assert_eq!(zed.series, vec![480, 0]);
    assert_eq!(zed.sparkline, "█·");
    let first = zed.cells[0].as_ref().expect("cell");
    assert_eq!(first.text(&zone), "09:00 - 18:00");

    let unknown = &matrix.rows[2];
    assert_eq!(unknown.worst, Severity::Bad);
    let cell = unknown.cells[0].as_ref().expect("cell");
    assert_eq!(cell.text(&zone), "09:30 - --:-- MISSING OUT LATE");

    let anna = &matrix.rows[1];
    assert!(anna.cells.iter().all(Option::is_none));
    assert_eq!(anna.worst, Severity::Empty);

    let headers = matrix.headers();
    assert_eq!(headers[3], "01-05");
    assert_eq!(headers.last().map(String::as_str), Some("Trend"));

    let data = matrix.to_tabular("Presence", &zone);
    assert_eq!(data.rows.len(), 3);
    assert_eq!(data.severity_of(0), Some(Severity::Ok));
    assert_eq!(data.severity_of(2), Some(Severity::Bad));
    assert_eq!(data.rows[1][3], "");
}
