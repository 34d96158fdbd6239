//! Logical contact fields

use crate::catalog::{self, FieldSpec};
use crate::kind::Kind;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A logical attribute of a contact.
///
/// The storage shape of every field (kind tag and columns) lives in the
/// static [catalog](crate::catalog); this enum is only the identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Field {
    ContactId,
    DisplayName,
    PhotoUri,
    SortKey,
    PhoneBookLabel,
    GivenName,
    FamilyName,
    PhoneNumber,
    PhoneNormalizedNumber,
    PhoneType,
    PhoneLabel,
    Email,
    EmailType,
    EmailLabel,
    EventStartDate,
    EventType,
    EventLabel,
    CompanyName,
    CompanyTitle,
    Website,
    Note,
    Address,
    AddressType,
    AddressLabel,
    AddressStreet,
    AddressCity,
    AddressRegion,
    AddressPostcode,
    AddressCountry,
}

impl Field {
    /// Every field, in catalog order
    pub const ALL: [Field; 29] = [
        Field::ContactId,
        Field::DisplayName,
        Field::PhotoUri,
        Field::SortKey,
        Field::PhoneBookLabel,
        Field::GivenName,
        Field::FamilyName,
        Field::PhoneNumber,
        Field::PhoneNormalizedNumber,
        Field::PhoneType,
        Field::PhoneLabel,
        Field::Email,
        Field::EmailType,
        Field::EmailLabel,
        Field::EventStartDate,
        Field::EventType,
        Field::EventLabel,
        Field::CompanyName,
        Field::CompanyTitle,
        Field::Website,
        Field::Note,
        Field::Address,
        Field::AddressType,
        Field::AddressLabel,
        Field::AddressStreet,
        Field::AddressCity,
        Field::AddressRegion,
        Field::AddressPostcode,
        Field::AddressCountry,
    ];

    /// Get the catalog entry for this field
    pub fn spec(&self) -> &'static FieldSpec {
        catalog::lookup(*self)
    }

    /// Kind of the satellite row holding this field; `None` for primary-row fields
    pub fn kind(&self) -> Option<Kind> {
        self.spec().kind
    }

    /// All storage columns needed to read this field
    pub fn columns(&self) -> &'static [&'static str] {
        self.spec().columns
    }

    /// The column constraints on this field filter on
    pub fn column(&self) -> &'static str {
        self.spec().columns[0]
    }

    /// Check if the field lives on every row rather than a satellite row
    pub fn is_primary(&self) -> bool {
        self.kind().is_none()
    }

    /// Stable identifier name
    pub fn name(&self) -> &'static str {
        self.spec().name
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Error parsing a field name
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Unknown field: {0}")]
pub struct UnknownField(pub String);

impl FromStr for Field {
    type Err = UnknownField;

    /// Parse a field name, ignoring ASCII case, `_` and `-`
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted: String = s
            .chars()
            .filter(|c| *c != '_' && *c != '-')
            .collect();
        Field::ALL
            .into_iter()
            .find(|field| field.name().eq_ignore_ascii_case(&wanted))
            .ok_or_else(|| UnknownField(s.to_string()))
    }
}
