//! Email addresses

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EmailType {
    Custom,
    Home,
    Work,
    Other,
    Mobile,
    Unknown,
}

impl EmailType {
    pub const fn from_value(value: i64) -> Self {
        match value {
            0 => Self::Custom,
            1 => Self::Home,
            2 => Self::Work,
            3 => Self::Other,
            4 => Self::Mobile,
            _ => Self::Unknown,
        }
    }
}

/// An email address of a contact
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Email {
    pub address: String,
    #[serde(rename = "type")]
    pub email_type: EmailType,
    /// Only set for `EmailType::Custom`
    pub label: Option<String>,
}

impl Email {
    pub fn new(address: impl Into<String>, email_type: EmailType) -> Self {
        Self {
            address: address.into(),
            email_type,
            label: None,
        }
    }

    pub fn custom(address: impl Into<String>, label: Option<String>) -> Self {
        Self {
            label,
            ..Self::new(address, EmailType::Custom)
        }
    }
}
