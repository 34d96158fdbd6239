//! Phone numbers

use serde::{Deserialize, Serialize};

/// Phone number type, as stored in the type column
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PhoneType {
    Custom,
    Home,
    Mobile,
    Work,
    FaxWork,
    FaxHome,
    Pager,
    Other,
    Callback,
    Car,
    CompanyMain,
    Isdn,
    Main,
    OtherFax,
    Radio,
    Telex,
    TtyTdd,
    WorkMobile,
    WorkPager,
    Assistant,
    Mms,
    Unknown,
}

impl PhoneType {
    /// Map a stored type code; unknown codes map to `Unknown`
    pub const fn from_value(value: i64) -> Self {
        match value {
            0 => Self::Custom,
            1 => Self::Home,
            2 => Self::Mobile,
            3 => Self::Work,
            4 => Self::FaxWork,
            5 => Self::FaxHome,
            6 => Self::Pager,
            7 => Self::Other,
            8 => Self::Callback,
            9 => Self::Car,
            10 => Self::CompanyMain,
            11 => Self::Isdn,
            12 => Self::Main,
            13 => Self::OtherFax,
            14 => Self::Radio,
            15 => Self::Telex,
            16 => Self::TtyTdd,
            17 => Self::WorkMobile,
            18 => Self::WorkPager,
            19 => Self::Assistant,
            20 => Self::Mms,
            _ => Self::Unknown,
        }
    }
}

/// A phone number of a contact
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PhoneNumber {
    /// Number as entered
    pub number: String,
    /// E.164 form, when the source computed one
    pub normalized_number: Option<String>,
    #[serde(rename = "type")]
    pub phone_type: PhoneType,
    /// Only set for `PhoneType::Custom`
    pub label: Option<String>,
}

impl PhoneNumber {
    pub fn new(number: impl Into<String>, phone_type: PhoneType) -> Self {
        Self {
            number: number.into(),
            normalized_number: None,
            phone_type,
            label: None,
        }
    }

    /// Create a number with a custom label
    pub fn custom(number: impl Into<String>, label: Option<String>) -> Self {
        Self {
            label,
            ..Self::new(number, PhoneType::Custom)
        }
    }

    pub fn with_normalized_number(mut self, normalized: impl Into<String>) -> Self {
        self.normalized_number = Some(normalized.into());
        self
    }
}
