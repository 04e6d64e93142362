use crate::config::Config;
use crate::errors::AppResult;
use crate::utils::time::parse_minute_of_day;

/// Working-day rules used to derive worked time and badges.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AttendancePolicy {
    /// Expected check-in, minutes after midnight.
    pub expected_in_minute: u32,
    /// Expected check-out, minutes after midnight.
    pub expected_out_minute: u32,
    pub late_after_minutes: u32,
    pub early_before_minutes: u32,
    pub lunch_break_minutes: i64,
    pub lunch_threshold_minutes: i64,
    /// Upper bound of the trend sparkline.
    pub work_day_minutes: i64,
}

impl Default for AttendancePolicy {
    fn default() -> Self {
        Self {
            expected_in_minute: 9 * 60,
            expected_out_minute: 18 * 60,
            late_after_minutes: 15,
            early_before_minutes: 15,
            lunch_break_minutes: 60,
            lunch_threshold_minutes: 360,
            work_day_minutes: 480,
        }
    }
}

impl AttendancePolicy {
    pub fn from_config(cfg: &Config) -> AppResult<Self> {
        Ok(Self {
            expected_in_minute: parse_minute_of_day(&cfg.expected_in)?,
            expected_out_minute: parse_minute_of_day(&cfg.expected_out)?,
            late_after_minutes: cfg.late_after_minutes,
            early_before_minutes: cfg.early_before_minutes,
            lunch_break_minutes: cfg.lunch_break_minutes,
            lunch_threshold_minutes: cfg.lunch_threshold_minutes,
            work_day_minutes: cfg.work_day_minutes,
        })
    }
}
