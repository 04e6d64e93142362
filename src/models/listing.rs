//! Read-only reference lists: holidays and leave types.

use super::fields;
use crate::utils::date::parse_api_date;
use chrono::NaiveDate;
use serde::Serialize;
use serde_json::Value;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Holiday {
    pub id: Option<i64>,
    pub name: String,
    pub date: Option<NaiveDate>,
}

impl Holiday {
    pub fn from_json(raw: &Value) -> Self {
        let date = match fields::first_present(raw, &["date", "day", "holidayDate", "holiday_date"])
        {
            Some(Value::String(s)) if s.trim().len() == 10 => {
                crate::utils::date::parse_day(s)
            }
            Some(v) => parse_api_date(v).map(|i| i.date_naive()),
            None => None,
        };

        Self {
            id: fields::id_field(raw, fields::PERSON_ID),
            name: fields::string_field(raw, &["name", "title", "description"])
                .unwrap_or_else(|| "Unnamed holiday".to_string()),
            date,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LeaveType {
    pub id: Option<i64>,
    pub name: String,
    /// Yearly allowance in days, when the server publishes one.
    pub days_allowed: Option<f64>,
    pub paid: Option<bool>,
}

impl LeaveType {
    pub fn from_json(raw: &Value) -> Self {
        Self {
            id: fields::id_field(raw, fields::PERSON_ID),
            name: fields::string_field(raw, &["name", "title", "code"])
                .unwrap_or_else(|| "Unnamed".to_string()),
            days_allowed: fields::number_field(
                raw,
                &["daysAllowed", "days_allowed", "maxDays", "max_days", "quota"],
            ),
            paid: fields::first_present(raw, &["paid", "isPaid", "is_paid"])
                .and_then(Value::as_bool),
        }
    }
}
