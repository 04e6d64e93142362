use crate::core::calculator::aggregate::{AggregationResult, aggregate};
use crate::core::calculator::range::DateRange;
use crate::core::matrix::PresenceMatrix;
use crate::core::policy::AttendancePolicy;
use crate::models::activity::ActivityRecord;
use crate::models::employee::Employee;
use crate::utils::zone::DisplayZone;

pub struct Core;

impl Core {
    /// `(records, range, zone) → AggregationResult`, no hidden state.
    pub fn aggregate(
        records: &[ActivityRecord],
        range: &DateRange,
        zone: &DisplayZone,
    ) -> AggregationResult {
        aggregate(records, &range.days(), zone)
    }

    pub fn build_matrix(
        records: &[ActivityRecord],
        employees: &[Employee],
        range: &DateRange,
        policy: &AttendancePolicy,
        zone: &DisplayZone,
        pinned: &[i64],
    ) -> PresenceMatrix {
        let result = Self::aggregate(records, range, zone);
        PresenceMatrix::build(&result, employees, policy, zone, pinned)
    }
}
