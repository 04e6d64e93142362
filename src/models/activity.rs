use super::fields;
use crate::utils::date::{parse_api_date, parse_day};
use crate::utils::zone::DisplayZone;
use chrono::{DateTime, NaiveDate, Utc};
use serde_json::Value;

/// Explicit day marker carried by a record.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DayMarker {
    /// Plain `YYYY-MM-DD`, already a calendar day.
    Date(NaiveDate),
    /// A timestamp; its day depends on the display zone.
    Instant(DateTime<Utc>),
    /// Present but unreadable. The record has no day and is discarded.
    Invalid,
}

/// One punch/session event, resolved from whatever field names the
/// producer used.
#[derive(Debug, Clone, PartialEq)]
pub struct ActivityRecord {
    pub id: Option<i64>,
    pub employee_id: Option<i64>,
    pub check_in_at: Option<DateTime<Utc>>,
    pub check_out_at: Option<DateTime<Utc>>,
    pub day: Option<DayMarker>,
    pub note: Option<String>,
    pub location_name: Option<String>,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
    pub updated_at: Option<DateTime<Utc>>,
    /// The untouched JSON object, for drill-down.
    pub raw: Value,
}

impl ActivityRecord {
    pub fn from_json(raw: &Value) -> Self {
        let employee_id = fields::id_field(raw, fields::EMPLOYEE_ID).or_else(|| {
            fields::EMPLOYEE_NESTED
                .iter()
                .filter_map(|key| raw.get(*key))
                .find_map(|nested| fields::id_field(nested, &["id"]))
        });

        Self {
            id: fields::id_field(raw, fields::RECORD_ID),
            employee_id,
            check_in_at: fields::first_present(raw, fields::CHECK_IN).and_then(parse_api_date),
            check_out_at: fields::first_present(raw, fields::CHECK_OUT).and_then(parse_api_date),
            day: fields::first_present(raw, fields::DAY).map(parse_day_marker),
            note: fields::string_field(raw, fields::NOTE),
            location_name: location_name(raw),
            latitude: fields::number_field(raw, fields::LATITUDE),
            longitude: fields::number_field(raw, fields::LONGITUDE),
            updated_at: fields::first_present(raw, fields::EVENT_TIMESTAMP)
                .and_then(parse_api_date),
            raw: raw.clone(),
        }
    }

    /// Resolve a JSON array (or wrapped list) into records.
    pub fn from_json_list(items: &[Value]) -> Vec<Self> {
        items.iter().map(Self::from_json).collect()
    }

    /// Calendar day this record belongs to in `zone`: the explicit marker,
    /// else the check-in day, else the check-out day. An unreadable marker
    /// never falls back to the punches.
    pub fn day_key(&self, zone: &DisplayZone) -> Option<NaiveDate> {
        match self.day {
            Some(DayMarker::Date(d)) => Some(d),
            Some(DayMarker::Instant(i)) => Some(zone.date_of(&i)),
            Some(DayMarker::Invalid) => None,
            None => self
                .check_in_at
                .or(self.check_out_at)
                .map(|i| zone.date_of(&i)),
        }
    }

    /// Latest timestamp known for this record.
    pub fn event_at(&self) -> Option<DateTime<Utc>> {
        [self.check_out_at, self.check_in_at, self.updated_at]
            .into_iter()
            .flatten()
            .max()
    }

    pub fn has_punch(&self) -> bool {
        self.check_in_at.is_some() || self.check_out_at.is_some()
    }

    /// Map link for records that carry coordinates.
    pub fn map_link(&self) -> Option<String> {
        match (self.latitude, self.longitude) {
            (Some(lat), Some(lng)) => Some(format!(
                "https://www.openstreetmap.org/?mlat={lat:.6}&mlon={lng:.6}#map=17/{lat:.6}/{lng:.6}"
            )),
            _ => None,
        }
    }
}

fn parse_day_marker(v: &Value) -> DayMarker {
    if let Value::String(s) = v {
        let s = s.trim();
        if s.len() == 10
            && let Some(d) = parse_day(s)
        {
            return DayMarker::Date(d);
        }
    }
    parse_api_date(v).map_or(DayMarker::Invalid, DayMarker::Instant)
}

/// `location` may also be an object `{ name, latitude, longitude }`.
fn location_name(raw: &Value) -> Option<String> {
    if let Some(obj @ Value::Object(_)) = raw.get("location") {
        return fields::string_field(obj, &["name", "label", "address"]);
    }
    fields::string_field(raw, fields::LOCATION_NAME)
}
