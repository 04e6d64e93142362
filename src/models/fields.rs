//! Candidate field names for each logical attribute, in priority order.
//!
//! Producers disagree on naming (camelCase, snake_case, synonyms), so every
//! JSON object is resolved once against these lists when it is ingested.

use serde_json::Value;

pub const RECORD_ID: &[&str] = &[
    "id",
    "_id",
    "logId",
    "log_id",
    "attendanceId",
    "attendance_id",
];

pub const EMPLOYEE_ID: &[&str] = &[
    "employeeId",
    "employee_id",
    "userId",
    "user_id",
    "empId",
    "emp_id",
];

/// Nested objects that may carry the employee id as `id`.
pub const EMPLOYEE_NESTED: &[&str] = &["employee", "user"];

pub const CHECK_IN: &[&str] = &[
    "checkInAt",
    "check_in_at",
    "inAt",
    "in_at",
    "clockInAt",
    "clock_in_at",
    "startAt",
    "start_at",
    "timeIn",
    "time_in",
];

pub const CHECK_OUT: &[&str] = &[
    "checkOutAt",
    "check_out_at",
    "outAt",
    "out_at",
    "clockOutAt",
    "clock_out_at",
    "endAt",
    "end_at",
    "timeOut",
    "time_out",
];

pub const DAY: &[&str] = &[
    "day",
    "date",
    "workDate",
    "work_date",
    "attendanceDate",
    "attendance_date",
];

pub const NOTE: &[&str] = &["note", "notes", "remark", "remarks"];

pub const LOCATION_NAME: &[&str] = &["locationName", "location_name", "location", "address"];

pub const LATITUDE: &[&str] = &["latitude", "lat"];

pub const LONGITUDE: &[&str] = &["longitude", "lng", "lon"];

pub const EVENT_TIMESTAMP: &[&str] = &["updatedAt", "updated_at", "createdAt", "created_at"];

pub const PERSON_ID: &[&str] = &["id", "employeeId", "employee_id", "_id"];

pub const PERSON_NAME: &[&str] = &["name", "fullName", "full_name", "displayName"];

pub const FIRST_NAME: &[&str] = &["firstName", "first_name"];

pub const LAST_NAME: &[&str] = &["lastName", "last_name"];

pub const DEPARTMENT: &[&str] = &["department", "departmentName", "department_name", "dept"];

pub const TOKEN: &[&str] = &["token", "accessToken", "access_token", "jwt"];

/// First candidate whose value is present and not null/empty.
pub fn first_present<'a>(obj: &'a Value, candidates: &[&str]) -> Option<&'a Value> {
    candidates
        .iter()
        .filter_map(|key| obj.get(*key))
        .find(|v| match v {
            Value::Null => false,
            Value::String(s) => !s.trim().is_empty(),
            _ => true,
        })
}

/// String view of the first present candidate (numbers are stringified).
pub fn string_field(obj: &Value, candidates: &[&str]) -> Option<String> {
    match first_present(obj, candidates)? {
        Value::String(s) => Some(s.trim().to_string()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        _ => None,
    }
}

/// Finite number from a JSON number or numeric string.
pub fn number_field(obj: &Value, candidates: &[&str]) -> Option<f64> {
    as_finite(first_present(obj, candidates)?)
}

/// Integral identifier from a JSON number or numeric string.
pub fn id_field(obj: &Value, candidates: &[&str]) -> Option<i64> {
    as_id(first_present(obj, candidates)?)
}

pub fn as_finite(v: &Value) -> Option<f64> {
    let n = match v {
        Value::Number(n) => n.as_f64()?,
        Value::String(s) => s.trim().parse::<f64>().ok()?,
        _ => return None,
    };
    n.is_finite().then_some(n)
}

pub fn as_id(v: &Value) -> Option<i64> {
    if let Value::Number(n) = v
        && let Some(i) = n.as_i64()
    {
        return Some(i);
    }
    let f = as_finite(v)?;
    (f.fract() == 0.0 && f.abs() < i64::MAX as f64).then_some(f as i64)
}
