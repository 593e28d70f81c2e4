//! REST resource DTOs for the client/backend boundary.
//!
//! DESIGN
//! ======
//! These types mirror the backend's JSON shapes. The backend is loose about
//! optional fields and id encoding, so nested arrays default to empty and ids
//! accept either JSON strings or integers.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize};

/// A volunteer's self-reported status for one event.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum AvailabilityStatus {
    Available,
    Unavailable,
}

impl AvailabilityStatus {
    pub const ALL: [Self; 2] = [Self::Available, Self::Unavailable];

    /// Inverse of [`Self::as_str`].
    pub fn from_wire(raw: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|s| s.as_str() == raw)
    }

    /// Wire spelling (`AVAILABLE` / `UNAVAILABLE`).
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Available => "AVAILABLE",
            Self::Unavailable => "UNAVAILABLE",
        }
    }

    /// Menu label.
    pub fn label(self) -> &'static str {
        match self {
            Self::Available => "Available",
            Self::Unavailable => "Unavailable",
        }
    }
}

/// Lifecycle status of an event.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EventStatus {
    #[default]
    Upcoming,
    Ongoing,
    Completed,
}

/// An event as returned by `/events` and `/events/{id}`.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Event {
    #[serde(deserialize_with = "deserialize_id")]
    pub event_id: String,
    #[serde(default, deserialize_with = "deserialize_opt_id")]
    pub admin_id: Option<String>,
    #[serde(default)]
    pub event_name: String,
    /// Some backend revisions send `name` instead of `event_name`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default)]
    pub date: String,
    #[serde(default)]
    pub start_time: Option<String>,
    #[serde(default)]
    pub end_time: Option<String>,
    #[serde(default)]
    pub location: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub status: Option<EventStatus>,
    #[serde(default)]
    pub created_at: Option<String>,
}

impl Event {
    /// Display name, preferring `name` over `event_name`.
    pub fn title(&self) -> &str {
        self.name
            .as_deref()
            .filter(|n| !n.is_empty())
            .or_else(|| Some(self.event_name.as_str()).filter(|n| !n.is_empty()))
            .unwrap_or("Unnamed Event")
    }
}

/// Event fields embedded in assignments and availability entries.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct EventSummary {
    #[serde(deserialize_with = "deserialize_id")]
    pub event_id: String,
    #[serde(default)]
    pub event_name: String,
    #[serde(default)]
    pub date: String,
    #[serde(default)]
    pub location: String,
}

/// A volunteer-to-event link created by an admin.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Assignment {
    #[serde(deserialize_with = "deserialize_id")]
    pub assignment_id: String,
    #[serde(default)]
    pub event: Option<EventSummary>,
}

/// An availability record, either flat (`/availability`) or nested on a user.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Availability {
    #[serde(default, deserialize_with = "deserialize_opt_id")]
    pub availability_id: Option<String>,
    #[serde(default, deserialize_with = "deserialize_opt_id")]
    pub user_id: Option<String>,
    #[serde(default, deserialize_with = "deserialize_opt_id")]
    pub event_id: Option<String>,
    #[serde(default)]
    pub event: Option<EventSummary>,
    pub availability: AvailabilityStatus,
    #[serde(default)]
    pub station_assignment: Option<String>,
}

impl Availability {
    /// Event this record refers to, from either the flat id or the embedded event.
    pub fn event_ref(&self) -> Option<&str> {
        self.event_id
            .as_deref()
            .or_else(|| self.event.as_ref().map(|e| e.event_id.as_str()))
    }
}

/// A user record from `/users` or `/users/email/{email}`.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Volunteer {
    #[serde(deserialize_with = "deserialize_id")]
    pub user_id: String,
    #[serde(default)]
    pub first_name: String,
    #[serde(default)]
    pub last_name: String,
    #[serde(default)]
    pub full_name: Option<String>,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub contact_number: Option<String>,
    #[serde(default)]
    pub committee: Option<String>,
    #[serde(default)]
    pub motivation: Option<String>,
    #[serde(default)]
    pub is_admin: Option<bool>,
    #[serde(default)]
    pub assignments: Vec<Assignment>,
    #[serde(default)]
    pub availability: Vec<Availability>,
}

impl Volunteer {
    /// `full_name` when present, otherwise `"first last"`.
    pub fn display_name(&self) -> String {
        match self.full_name.as_deref().map(str::trim) {
            Some(full) if !full.is_empty() => full.to_owned(),
            _ => format!("{} {}", self.first_name, self.last_name).trim().to_owned(),
        }
    }
}

/// A row from `/admin`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct AdminRecord {
    #[serde(deserialize_with = "deserialize_id")]
    pub admin_id: String,
    #[serde(deserialize_with = "deserialize_id")]
    pub user_id: String,
}

/// Body for `POST /events`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct NewEvent {
    pub admin_id: String,
    pub event_name: String,
    pub date: String,
    pub start_time: String,
    pub end_time: String,
    pub location: String,
    pub description: String,
}

/// Body for `PUT /events/{id}`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct EventUpdate {
    pub event_name: String,
    pub description: String,
    pub location: String,
    pub date: String,
}

/// Body for `POST /assignments`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct NewAssignment {
    pub event_id: String,
    pub user_id: String,
}

/// Body for `POST /availability/` and `PUT /availability/{user}/{event}`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct AvailabilityPayload {
    pub event_id: String,
    pub user_id: String,
    pub station_assignment: String,
    pub availability: AvailabilityStatus,
}

fn deserialize_id<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    id_from_value(value).ok_or_else(|| D::Error::custom("expected string or integer id"))
}

fn deserialize_opt_id<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    if value.is_null() {
        return Ok(None);
    }
    id_from_value(value)
        .map(Some)
        .ok_or_else(|| D::Error::custom("expected string or integer id"))
}

fn id_from_value(value: serde_json::Value) -> Option<String> {
    match value {
        serde_json::Value::String(s) => Some(s),
        serde_json::Value::Number(n) if n.is_i64() || n.is_u64() => Some(n.to_string()),
        _ => None,
    }
}
