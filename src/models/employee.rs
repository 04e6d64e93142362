use super::fields;
use serde::Serialize;
use serde_json::Value;

pub const UNKNOWN_NAME: &str = "Unknown";
pub const NO_DEPARTMENT: &str = "-";

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Employee {
    pub id: i64,
    pub name: String,
    pub department: String,
}

impl Employee {
    /// Resolve an employee object; `None` when no numeric id is present.
    pub fn from_json(raw: &Value) -> Option<Self> {
        let id = fields::id_field(raw, fields::PERSON_ID)?;
        Some(Self {
            id,
            name: display_name(raw),
            department: department(raw),
        })
    }

    pub fn from_json_list(items: &[Value]) -> Vec<Self> {
        items.iter().filter_map(Self::from_json).collect()
    }

    /// Placeholder for ids seen in activity but missing from the directory.
    pub fn unknown(id: i64) -> Self {
        Self {
            id,
            name: format!("{UNKNOWN_NAME} #{id}"),
            department: NO_DEPARTMENT.to_string(),
        }
    }

    pub fn matches(&self, query: &str) -> bool {
        let q = query.trim().to_lowercase();
        q.is_empty()
            || self.name.to_lowercase().contains(&q)
            || self.department.to_lowercase().contains(&q)
            || self.id.to_string() == q
    }
}

fn display_name(raw: &Value) -> String {
    if let Some(name) = fields::string_field(raw, fields::PERSON_NAME) {
        return name;
    }

    let parts: Vec<String> = [fields::FIRST_NAME, fields::LAST_NAME]
        .iter()
        .filter_map(|c| fields::string_field(raw, c))
        .collect();

    if parts.is_empty() {
        UNKNOWN_NAME.to_string()
    } else {
        parts.join(" ")
    }
}

fn department(raw: &Value) -> String {
    match fields::first_present(raw, fields::DEPARTMENT) {
        Some(obj @ Value::Object(_)) => fields::string_field(obj, &["name", "title", "code"]),
        Some(_) => fields::string_field(raw, fields::DEPARTMENT),
        None => None,
    }
    .unwrap_or_else(|| NO_DEPARTMENT.to_string())
}
