//! Per-employee worked-minutes series and their sparkline rendering.

use crate::core::calculator::aggregate::AggregationResult;
use crate::core::policy::AttendancePolicy;
use crate::utils::zone::DisplayZone;

const BLOCKS: [char; 8] = ['▁', '▂', '▃', '▄', '▅', '▆', '▇', '█'];
const ZERO: char = '·';

/// Worked minutes per day of the range, 0 where the employee has no cell.
pub fn trend_series(
    result: &AggregationResult,
    employee_id: i64,
    policy: &AttendancePolicy,
    zone: &DisplayZone,
) -> Vec<i64> {
    result
        .days
        .iter()
        .map(|day| {
            result
                .cell(employee_id, *day)
                .map(|c| c.summarize(policy, zone).worked_minutes)
                .unwrap_or(0)
        })
        .collect()
}

/// Map `value` (clamped into `[0, max]`) onto `[0, height]`.
/// Monotonic non-decreasing in `value`.
pub fn scale_to_surface(value: i64, max: i64, height: f64) -> f64 {
    if max <= 0 || height <= 0.0 {
        return 0.0;
    }
    let v = value.clamp(0, max) as f64;
    v / max as f64 * height
}

/// One glyph per value, scaled against a full work day.
pub fn sparkline(values: &[i64], work_day_minutes: i64) -> String {
    let top = (BLOCKS.len() - 1) as f64;
    values
        .iter()
        .map(|v| {
            if *v <= 0 {
                return ZERO;
            }
            let level = scale_to_surface(*v, work_day_minutes, top).round() as usize;
            BLOCKS[level.min(BLOCKS.len() - 1)]
        })
        .collect()
}
