//! Static field catalog
//!
//! Maps every [`Field`] to the kind of row it is stored on and the columns
//! it is read from. The query and aggregation code only ever consume this
//! table through [`Field::kind`] and [`Field::columns`].

use crate::field::Field;
use crate::kind::Kind;

/// Storage column names
pub mod columns {
    /// Entity key shared by every row of a contact
    pub const CONTACT_ID: &str = "contact_id";
    /// Kind tag of the row
    pub const MIMETYPE: &str = "mimetype";
    pub const DISPLAY_NAME: &str = "display_name";
    pub const PHOTO_URI: &str = "photo_uri";
    pub const SORT_KEY: &str = "sort_key";
    pub const PHONEBOOK_LABEL: &str = "phonebook_label";
    pub const HAS_PHONE_NUMBER: &str = "has_phone_number";

    pub const DATA1: &str = "data1";
    pub const DATA2: &str = "data2";
    pub const DATA3: &str = "data3";
    pub const DATA4: &str = "data4";
    pub const DATA7: &str = "data7";
    pub const DATA8: &str = "data8";
    pub const DATA9: &str = "data9";
    pub const DATA10: &str = "data10";

    pub mod name {
        pub const GIVEN_NAME: &str = super::DATA2;
        pub const FAMILY_NAME: &str = super::DATA3;
    }

    pub mod phone {
        pub const NUMBER: &str = super::DATA1;
        pub const TYPE: &str = super::DATA2;
        pub const LABEL: &str = super::DATA3;
        pub const NORMALIZED_NUMBER: &str = super::DATA4;
    }

    pub mod email {
        pub const ADDRESS: &str = super::DATA1;
        pub const TYPE: &str = super::DATA2;
        pub const LABEL: &str = super::DATA3;
    }

    pub mod event {
        pub const START_DATE: &str = super::DATA1;
        pub const TYPE: &str = super::DATA2;
        pub const LABEL: &str = super::DATA3;
    }

    pub mod organization {
        pub const COMPANY: &str = super::DATA1;
        pub const TITLE: &str = super::DATA4;
    }

    pub mod website {
        pub const URL: &str = super::DATA1;
    }

    pub mod note {
        pub const NOTE: &str = super::DATA1;
    }

    pub mod postal {
        pub const FORMATTED_ADDRESS: &str = super::DATA1;
        pub const TYPE: &str = super::DATA2;
        pub const LABEL: &str = super::DATA3;
        pub const STREET: &str = super::DATA4;
        pub const CITY: &str = super::DATA7;
        pub const REGION: &str = super::DATA8;
        pub const POSTCODE: &str = super::DATA9;
        pub const COUNTRY: &str = super::DATA10;
    }
}

use columns::{email, event, name, note, organization, phone, postal, website};

/// Columns every row request projects regardless of the included fields
pub const INTERNAL_COLUMNS: [&str; 2] = [columns::CONTACT_ID, columns::MIMETYPE];

/// Catalog entry describing how a field is stored
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldSpec {
    pub field: Field,
    pub name: &'static str,
    /// `None` when the field is carried by every row
    pub kind: Option<Kind>,
    /// Filter column first, then the extra columns needed to rebuild the value
    pub columns: &'static [&'static str],
}

const fn entry(
    field: Field,
    name: &'static str,
    kind: Option<Kind>,
    columns: &'static [&'static str],
) -> FieldSpec {
    FieldSpec {
        field,
        name,
        kind,
        columns,
    }
}

const PHONE: Option<Kind> = Some(Kind::Phone);
const EMAIL: Option<Kind> = Some(Kind::Email);
const EVENT: Option<Kind> = Some(Kind::Event);
const NAME: Option<Kind> = Some(Kind::StructuredName);
const ORGANIZATION: Option<Kind> = Some(Kind::Organization);
const POSTAL: Option<Kind> = Some(Kind::StructuredPostal);

/// The catalog, indexed by `Field as usize`
pub static CATALOG: [FieldSpec; 29] = [
    entry(Field::ContactId, "ContactId", None, &[columns::CONTACT_ID]),
    entry(Field::DisplayName, "DisplayName", None, &[columns::DISPLAY_NAME]),
    entry(Field::PhotoUri, "PhotoUri", None, &[columns::PHOTO_URI]),
    entry(Field::SortKey, "SortKey", None, &[columns::SORT_KEY]),
    entry(Field::PhoneBookLabel, "PhoneBookLabel", None, &[columns::PHONEBOOK_LABEL]),
    entry(Field::GivenName, "GivenName", NAME, &[name::GIVEN_NAME]),
    entry(Field::FamilyName, "FamilyName", NAME, &[name::FAMILY_NAME]),
    entry(
        Field::PhoneNumber,
        "PhoneNumber",
        PHONE,
        &[phone::NUMBER, phone::NORMALIZED_NUMBER, phone::TYPE, phone::LABEL],
    ),
    entry(
        Field::PhoneNormalizedNumber,
        "PhoneNormalizedNumber",
        PHONE,
        &[phone::NORMALIZED_NUMBER],
    ),
    entry(Field::PhoneType, "PhoneType", PHONE, &[phone::TYPE]),
    entry(Field::PhoneLabel, "PhoneLabel", PHONE, &[phone::LABEL]),
    entry(
        Field::Email,
        "Email",
        EMAIL,
        &[email::ADDRESS, email::TYPE, email::LABEL],
    ),
    entry(Field::EmailType, "EmailType", EMAIL, &[email::TYPE]),
    entry(Field::EmailLabel, "EmailLabel", EMAIL, &[email::LABEL]),
    entry(
        Field::EventStartDate,
        "EventStartDate",
        EVENT,
        &[event::START_DATE, event::TYPE, event::LABEL],
    ),
    entry(Field::EventType, "EventType", EVENT, &[event::TYPE]),
    entry(Field::EventLabel, "EventLabel", EVENT, &[event::LABEL]),
    entry(Field::CompanyName, "CompanyName", ORGANIZATION, &[organization::COMPANY]),
    entry(Field::CompanyTitle, "CompanyTitle", ORGANIZATION, &[organization::TITLE]),
    entry(Field::Website, "Website", Some(Kind::Website), &[website::URL]),
    entry(Field::Note, "Note", Some(Kind::Note), &[note::NOTE]),
    entry(
        Field::Address,
        "Address",
        POSTAL,
        &[
            postal::FORMATTED_ADDRESS,
            postal::TYPE,
            postal::LABEL,
            postal::STREET,
            postal::CITY,
            postal::REGION,
            postal::POSTCODE,
            postal::COUNTRY,
        ],
    ),
    entry(Field::AddressType, "AddressType", POSTAL, &[postal::TYPE]),
    entry(Field::AddressLabel, "AddressLabel", POSTAL, &[postal::LABEL]),
    entry(Field::AddressStreet, "AddressStreet", POSTAL, &[postal::STREET]),
    entry(Field::AddressCity, "AddressCity", POSTAL, &[postal::CITY]),
    entry(Field::AddressRegion, "AddressRegion", POSTAL, &[postal::REGION]),
    entry(Field::AddressPostcode, "AddressPostcode", POSTAL, &[postal::POSTCODE]),
    entry(Field::AddressCountry, "AddressCountry", POSTAL, &[postal::COUNTRY]),
];

/// Look up the catalog entry of a field
pub fn lookup(field: Field) -> &'static FieldSpec {
    &CATALOG[field as usize]
}

/// Kinds that carry at least one of the given fields
pub fn kinds_of<'a, I>(fields: I) -> Vec<Kind>
where
    I: IntoIterator<Item = &'a Field>,
{
    let mut kinds: Vec<Kind> = fields.into_iter().filter_map(|f| f.kind()).collect();
    kinds.sort();
    kinds.dedup();
    kinds
}
