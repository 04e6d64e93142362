//! Typed wrappers over the attendance API routes.

use crate::api::client::{ApiClient, extract_list};
use crate::api::error::ApiError;
use crate::models::activity::ActivityRecord;
use crate::models::employee::Employee;
use crate::models::fields;
use crate::models::listing::{Holiday, LeaveType};
use crate::models::location::LocationProvider;
use chrono::NaiveDate;
use serde::Serialize;
use serde_json::{Value, json};
use tracing::info;

#[derive(Debug, Serialize)]
struct Credentials<'a> {
    email: &'a str,
    password: &'a str,
}

/// Body of a clock-in/out request.
#[derive(Debug, Clone, Default, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PunchRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub latitude: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub longitude: Option<f64>,
}

impl PunchRequest {
    pub fn new(note: Option<String>, location: &dyn LocationProvider) -> Self {
        let fix = location.current_fix();
        Self {
            note: note.filter(|n| !n.trim().is_empty()),
            location_name: fix.as_ref().and_then(|f| f.place.clone()),
            latitude: fix.as_ref().map(|f| f.latitude),
            longitude: fix.as_ref().map(|f| f.longitude),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Punch {
    In,
    Out,
}

impl Punch {
    fn path(&self) -> &'static str {
        match self {
            Punch::In => "attendance/clock-in",
            Punch::Out => "attendance/clock-out",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Punch::In => "Clock-in",
            Punch::Out => "Clock-out",
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct LogEdit {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub check_in_at: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub check_out_at: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
}

impl LogEdit {
    pub fn is_empty(&self) -> bool {
        self.check_in_at.is_none() && self.check_out_at.is_none() && self.note.is_none()
    }
}

#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct LeaveRequest {
    pub leave_type_id: i64,
    pub from: NaiveDate,
    pub to: NaiveDate,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
}

fn range_query(from: &NaiveDate, to: &NaiveDate) -> Vec<(&'static str, String)> {
    vec![
        ("from", from.format("%Y-%m-%d").to_string()),
        ("to", to.format("%Y-%m-%d").to_string()),
    ]
}

/// Token from a login response: top level or under `data`.
pub fn token_from_login(body: &Value) -> Option<String> {
    fields::string_field(body, fields::TOKEN).or_else(|| {
        body.get("data")
            .and_then(|d| fields::string_field(d, fields::TOKEN))
    })
}

impl ApiClient {
    pub fn login(&self, email: &str, password: &str) -> Result<String, ApiError> {
        let body: Value = self.post_json("auth/login", &Credentials { email, password })?;
        let token = token_from_login(&body)
            .ok_or_else(|| ApiError::Decode("login response carries no token".into()))?;
        info!("login succeeded for {}", email);
        Ok(token)
    }

    pub fn employees(&self) -> Result<Vec<Employee>, ApiError> {
        let body: Value = self.get_json("employees", &[])?;
        Ok(Employee::from_json_list(&extract_list(body)))
    }

    /// All employees' activity in the range (admin view).
    pub fn activity(&self, from: &NaiveDate, to: &NaiveDate) -> Result<Vec<ActivityRecord>, ApiError> {
        let body: Value = self.get_json("attendance/logs", &range_query(from, to))?;
        Ok(ActivityRecord::from_json_list(&extract_list(body)))
    }

    /// The caller's own records in the range.
    pub fn my_history(
        &self,
        from: &NaiveDate,
        to: &NaiveDate,
    ) -> Result<Vec<ActivityRecord>, ApiError> {
        let body: Value = self.get_json("attendance/me", &range_query(from, to))?;
        Ok(ActivityRecord::from_json_list(&extract_list(body)))
    }

    pub fn punch(&self, kind: Punch, request: &PunchRequest) -> Result<Value, ApiError> {
        self.post_json(kind.path(), request)
    }

    pub fn edit_log(&self, id: i64, edit: &LogEdit) -> Result<Value, ApiError> {
        self.put_json(&format!("attendance/logs/{id}"), edit)
    }

    pub fn holidays(&self) -> Result<Vec<Holiday>, ApiError> {
        let body: Value = self.get_json("holidays", &[])?;
        Ok(extract_list(body).iter().map(Holiday::from_json).collect())
    }

    pub fn leave_types(&self) -> Result<Vec<LeaveType>, ApiError> {
        let body: Value = self.get_json("leave-types", &[])?;
        Ok(extract_list(body).iter().map(LeaveType::from_json).collect())
    }

    pub fn apply_leave(&self, request: &LeaveRequest) -> Result<Value, ApiError> {
        self.post_json("leaves", request)
    }

    pub fn report_csv(&self, from: &NaiveDate, to: &NaiveDate) -> Result<String, ApiError> {
        let mut query = range_query(from, to);
        query.push(("format", "csv".to_string()));
        self.get_text("reports/attendance", &query)
    }

    /// Server-rendered report file (`xlsx`, `pdf`, ...), returned as bytes.
    pub fn report_file(
        &self,
        from: &NaiveDate,
        to: &NaiveDate,
        format: &str,
    ) -> Result<Vec<u8>, ApiError> {
        let mut query = range_query(from, to);
        query.push(("format", format.to_string()));
        self.get_bytes("reports/attendance", &query)
    }
}

/// Short confirmation text from a mutation response.
pub fn describe_response(body: &Value) -> String {
    fields::string_field(body, &["message", "status"])
        .or_else(|| {
            body.get("data")
                .and_then(|d| fields::string_field(d, &["message", "status"]))
        })
        .unwrap_or_else(|| match body {
            Value::Null => "ok".to_string(),
            other => json!(other).to_string(),
        })
}
