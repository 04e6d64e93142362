use chrono::{DateTime, Utc};

/// Worked minutes between two punches, with the unpaid lunch break
/// deducted from shifts of at least `lunch_threshold_minutes`.
///
/// Never negative; 0 when a punch is missing or `out <= in`.
pub fn worked_minutes(
    in_at: Option<DateTime<Utc>>,
    out_at: Option<DateTime<Utc>>,
    lunch_break_minutes: i64,
    lunch_threshold_minutes: i64,
) -> i64 {
    let (Some(start), Some(end)) = (in_at, out_at) else {
        return 0;
    };
    if end <= start {
        return 0;
    }

    let total = ((end - start).num_seconds() as f64 / 60.0).round() as i64;

    if total >= lunch_threshold_minutes {
        (total - lunch_break_minutes.max(0)).max(0)
    } else {
        total
    }
}
