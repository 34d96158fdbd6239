//! Postal addresses

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AddressType {
    Custom,
    Home,
    Work,
    Other,
    Unknown,
}

impl AddressType {
    pub const fn from_value(value: i64) -> Self {
        match value {
            0 => Self::Custom,
            1 => Self::Home,
            2 => Self::Work,
            3 => Self::Other,
            _ => Self::Unknown,
        }
    }
}

/// A postal address of a contact
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Address {
    pub formatted_address: String,
    #[serde(rename = "type")]
    pub address_type: AddressType,
    pub street: Option<String>,
    pub city: Option<String>,
    pub region: Option<String>,
    pub postcode: Option<String>,
    pub country: Option<String>,
    /// Only set for `AddressType::Custom`
    pub label: Option<String>,
}

impl Address {
    pub fn new(formatted_address: impl Into<String>, address_type: AddressType) -> Self {
        Self {
            formatted_address: formatted_address.into(),
            address_type,
            street: None,
            city: None,
            region: None,
            postcode: None,
            country: None,
            label: None,
        }
    }
}
