//! Row aggregation
//!
//! Folds a stream of rows into one [`Contact`] per entity key. Rows only need
//! to be grouped by key as far as output order goes: contacts come out in the
//! order their key was first seen, however the rows for a key are spread.
//!
//! Aggregation never fails. Rows without a key are skipped, rows of an
//! unknown kind only contribute their primary attributes, and missing or
//! NULL columns count as absent.

use crate::config::AggregationConfig;
use contacts_model::columns::{email, event, name, note, organization, phone, postal, website};
use contacts_model::{
    Address, AddressType, Contact, Email, EmailType, Event, EventType, Field, Kind, PhoneNumber,
    PhoneType, Row, columns,
};
use indexmap::IndexMap;
use log::trace;

/// Primary-row attributes present on every row
const PRIMARY_SCALARS: [Field; 4] = [
    Field::DisplayName,
    Field::PhotoUri,
    Field::SortKey,
    Field::PhoneBookLabel,
];

/// Accumulates contacts from rows
pub struct Aggregator<'c> {
    config: &'c AggregationConfig,
    contacts: IndexMap<i64, Contact>,
    skipped: usize,
}

impl<'c> Aggregator<'c> {
    pub fn new(config: &'c AggregationConfig) -> Self {
        Self {
            config,
            contacts: IndexMap::new(),
            skipped: 0,
        }
    }

    /// Fold one row into its contact
    pub fn fold(&mut self, row: &Row) {
        let Some(id) = row.get_i64(columns::CONTACT_ID) else {
            trace!("skipping row without {}", columns::CONTACT_ID);
            self.skipped += 1;
            return;
        };

        let config = self.config;
        let contact = self.contacts.entry(id).or_insert_with(|| Contact::new(id));

        for field in PRIMARY_SCALARS {
            if let Some(value) = row.get_str(field.column()) {
                merge_scalar(config, contact, field, value);
            }
        }

        match row.get_str(columns::MIMETYPE).map(|tag| (tag, Kind::from_tag(tag))) {
            Some((_, Some(kind))) => extract(config, contact, kind, row),
            Some((tag, None)) => trace!("contact {}: ignoring row of unknown kind {}", id, tag),
            None => {}
        }
    }

    /// Number of contacts seen so far
    pub fn len(&self) -> usize {
        self.contacts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.contacts.is_empty()
    }

    /// Number of rows skipped for lacking an entity key
    pub fn skipped(&self) -> usize {
        self.skipped
    }

    /// Hand out the contacts in first-seen key order
    pub fn finish(self) -> Vec<Contact> {
        self.contacts.into_values().collect()
    }
}

/// Aggregate a complete row sequence
pub fn aggregate<'r, I>(rows: I, config: &AggregationConfig) -> Vec<Contact>
where
    I: IntoIterator<Item = &'r Row>,
{
    let mut aggregator = Aggregator::new(config);
    for row in rows {
        aggregator.fold(row);
    }
    aggregator.finish()
}

fn merge_scalar(config: &AggregationConfig, contact: &mut Contact, field: Field, value: &str) {
    if let Some(slot) = contact.scalar_mut(field) {
        config.merge_scalar(field, slot, value);
    }
}

fn extract(config: &AggregationConfig, contact: &mut Contact, kind: Kind, row: &Row) {
    match kind {
        Kind::Phone => {
            if let Some(phone_number) = phone_number(row) {
                contact.add_phone_number(phone_number);
            }
        }
        Kind::Email => {
            if let Some(email) = email(row) {
                contact.add_email(email);
            }
        }
        Kind::Event => {
            if let Some(event) = event(row) {
                contact.add_event(event);
            }
        }
        Kind::StructuredPostal => {
            if let Some(address) = address(row) {
                contact.add_address(address);
            }
        }
        Kind::Website => {
            if let Some(url) = row.get_str(website::URL) {
                contact.add_website(url);
            }
        }
        Kind::StructuredName => {
            scalar_from(config, contact, row, Field::GivenName, name::GIVEN_NAME);
            scalar_from(config, contact, row, Field::FamilyName, name::FAMILY_NAME);
        }
        Kind::Organization => {
            scalar_from(config, contact, row, Field::CompanyName, organization::COMPANY);
            scalar_from(config, contact, row, Field::CompanyTitle, organization::TITLE);
        }
        Kind::Note => scalar_from(config, contact, row, Field::Note, note::NOTE),
    }
}

fn scalar_from(
    config: &AggregationConfig,
    contact: &mut Contact,
    row: &Row,
    field: Field,
    column: &str,
) {
    if let Some(value) = row.get_str(column) {
        merge_scalar(config, contact, field, value);
    }
}

/// Label is only meaningful for the custom type
fn custom_label(row: &Row, is_custom: bool, column: &str) -> Option<String> {
    if is_custom { row.get_string(column) } else { None }
}

fn phone_number(row: &Row) -> Option<PhoneNumber> {
    let number = row.get_string(phone::NUMBER)?;
    let phone_type = row
        .get_i64(phone::TYPE)
        .map_or(PhoneType::Unknown, PhoneType::from_value);
    Some(PhoneNumber {
        number,
        normalized_number: row.get_string(phone::NORMALIZED_NUMBER),
        phone_type,
        label: custom_label(row, phone_type == PhoneType::Custom, phone::LABEL),
    })
}

fn email(row: &Row) -> Option<Email> {
    let address = row.get_string(email::ADDRESS)?;
    let email_type = row
        .get_i64(email::TYPE)
        .map_or(EmailType::Unknown, EmailType::from_value);
    Some(Email {
        address,
        email_type,
        label: custom_label(row, email_type == EmailType::Custom, email::LABEL),
    })
}

fn event(row: &Row) -> Option<Event> {
    let start_date = row.get_string(event::START_DATE)?;
    let event_type = row
        .get_i64(event::TYPE)
        .map_or(EventType::Unknown, EventType::from_value);
    Some(Event {
        start_date,
        event_type,
        label: custom_label(row, event_type == EventType::Custom, event::LABEL),
    })
}

fn address(row: &Row) -> Option<Address> {
    let formatted_address = row.get_string(postal::FORMATTED_ADDRESS)?;
    let address_type = row
        .get_i64(postal::TYPE)
        .map_or(AddressType::Unknown, AddressType::from_value);
    Some(Address {
        formatted_address,
        address_type,
        street: row.get_string(postal::STREET),
        city: row.get_string(postal::CITY),
        region: row.get_string(postal::REGION),
        postcode: row.get_string(postal::POSTCODE),
        country: row.get_string(postal::COUNTRY),
        label: custom_label(row, address_type == AddressType::Custom, postal::LABEL),
    })
}
