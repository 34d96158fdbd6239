//! Dated events (birthdays, anniversaries)

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EventType {
    Custom,
    Anniversary,
    Other,
    Birthday,
    Unknown,
}

impl EventType {
    pub const fn from_value(value: i64) -> Self {
        match value {
            0 => Self::Custom,
            1 => Self::Anniversary,
            2 => Self::Other,
            3 => Self::Birthday,
            _ => Self::Unknown,
        }
    }
}

/// An event of a contact. The start date is kept as stored.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Event {
    pub start_date: String,
    #[serde(rename = "type")]
    pub event_type: EventType,
    pub label: Option<String>,
}

impl Event {
    pub fn new(start_date: impl Into<String>, event_type: EventType) -> Self {
        Self {
            start_date: start_date.into(),
            event_type,
            label: None,
        }
    }

    pub fn custom(start_date: impl Into<String>, label: Option<String>) -> Self {
        Self {
            label,
            ..Self::new(start_date, EventType::Custom)
        }
    }
}
