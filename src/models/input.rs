//! Offline JSON input: activity and employee dumps saved from the API.

use crate::api::client::extract_list;
use crate::errors::{AppError, AppResult};
use crate::models::activity::ActivityRecord;
use crate::models::employee::Employee;
use crate::utils::path::expand_tilde;
use serde_json::Value;
use std::fs;

fn read_list(path: &str) -> AppResult<Vec<Value>> {
    let p = expand_tilde(path);
    let text = fs::read_to_string(&p)
        .map_err(|e| AppError::InvalidInput(format!("{}: {e}", p.display())))?;
    let value: Value = serde_json::from_str(&text)
        .map_err(|e| AppError::InvalidInput(format!("{}: {e}", p.display())))?;
    Ok(extract_list(value))
}

/// Array of activity objects, bare or wrapped (`{"data": [...]}`).
pub fn load_activity(path: &str) -> AppResult<Vec<ActivityRecord>> {
    Ok(ActivityRecord::from_json_list(&read_list(path)?))
}

pub fn load_employees(path: &str) -> AppResult<Vec<Employee>> {
    Ok(Employee::from_json_list(&read_list(path)?))
}
