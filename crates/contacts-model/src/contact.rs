//! The aggregated contact

use crate::address::Address;
use crate::email::Email;
use crate::event::{Event, EventType};
use crate::field::Field;
use crate::phone::PhoneNumber;
use indexmap::IndexSet;
use serde::{Deserialize, Serialize};

/// A contact reassembled from all rows sharing one entity key.
///
/// Multi-valued attributes are sets: the same value seen on several rows is
/// kept once, in first-seen order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Contact {
    pub id: i64,
    pub display_name: Option<String>,
    pub photo_uri: Option<String>,
    pub sort_key: Option<String>,
    pub phonebook_label: Option<String>,
    pub given_name: Option<String>,
    pub family_name: Option<String>,
    pub company_name: Option<String>,
    pub company_title: Option<String>,
    pub note: Option<String>,
    pub phone_numbers: IndexSet<PhoneNumber>,
    pub emails: IndexSet<Email>,
    pub events: IndexSet<Event>,
    pub websites: IndexSet<String>,
    pub addresses: IndexSet<Address>,
}

impl Contact {
    /// Create an empty contact for an entity key
    pub fn new(id: i64) -> Self {
        Self {
            id,
            ..Self::default()
        }
    }

    /// Add a phone number; returns false when already present
    pub fn add_phone_number(&mut self, phone_number: PhoneNumber) -> bool {
        self.phone_numbers.insert(phone_number)
    }

    pub fn add_email(&mut self, email: Email) -> bool {
        self.emails.insert(email)
    }

    pub fn add_event(&mut self, event: Event) -> bool {
        self.events.insert(event)
    }

    pub fn add_website(&mut self, website: impl Into<String>) -> bool {
        self.websites.insert(website.into())
    }

    pub fn add_address(&mut self, address: Address) -> bool {
        self.addresses.insert(address)
    }

    /// The first birthday event, if any
    pub fn birthday(&self) -> Option<&Event> {
        self.event(EventType::Birthday)
    }

    /// The first anniversary event, if any
    pub fn anniversary(&self) -> Option<&Event> {
        self.event(EventType::Anniversary)
    }

    fn event(&self, event_type: EventType) -> Option<&Event> {
        self.events.iter().find(|e| e.event_type == event_type)
    }

    /// Slot of a single-valued text attribute; `None` for other fields
    pub fn scalar_mut(&mut self, field: Field) -> Option<&mut Option<String>> {
        match field {
            Field::DisplayName => Some(&mut self.display_name),
            Field::PhotoUri => Some(&mut self.photo_uri),
            Field::SortKey => Some(&mut self.sort_key),
            Field::PhoneBookLabel => Some(&mut self.phonebook_label),
            Field::GivenName => Some(&mut self.given_name),
            Field::FamilyName => Some(&mut self.family_name),
            Field::CompanyName => Some(&mut self.company_name),
            Field::CompanyTitle => Some(&mut self.company_title),
            Field::Note => Some(&mut self.note),
            _ => None,
        }
    }

    /// Value of a single-valued text attribute
    pub fn scalar(&self, field: Field) -> Option<&str> {
        let value = match field {
            Field::DisplayName => &self.display_name,
            Field::PhotoUri => &self.photo_uri,
            Field::SortKey => &self.sort_key,
            Field::PhoneBookLabel => &self.phonebook_label,
            Field::GivenName => &self.given_name,
            Field::FamilyName => &self.family_name,
            Field::CompanyName => &self.company_name,
            Field::CompanyTitle => &self.company_title,
            Field::Note => &self.note,
            _ => return None,
        };
        value.as_deref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::phone::PhoneType;

    #[test]
    fn test_sets_collapse_duplicates() {
        let mut contact = Contact::new(1);
        assert!(contact.add_phone_number(PhoneNumber::new("555", PhoneType::Home)));
        assert!(!contact.add_phone_number(PhoneNumber::new("555", PhoneType::Home)));
        assert!(contact.add_phone_number(PhoneNumber::new("555", PhoneType::Work)));
        assert_eq!(contact.phone_numbers.len(), 2);

        assert!(contact.add_website("https://a.example"));
        assert!(!contact.add_website("https://a.example"));
    }

    #[test]
    fn test_birthday_and_anniversary() {
        let mut contact = Contact::new(1);
        contact.add_event(Event::new("2001-02-03", EventType::Anniversary));
        contact.add_event(Event::new("1980-01-01", EventType::Birthday));
        contact.add_event(Event::new("1981-01-01", EventType::Birthday));

        assert_eq!(contact.birthday().map(|e| e.start_date.as_str()), Some("1980-01-01"));
        assert_eq!(contact.anniversary().map(|e| e.start_date.as_str()), Some("2001-02-03"));
    }

    #[test]
    fn test_scalar_slots() {
        let mut contact = Contact::new(1);
        *contact.scalar_mut(Field::Note).unwrap() = Some("hi".to_string());
        assert_eq!(contact.scalar(Field::Note), Some("hi"));
        assert!(contact.scalar_mut(Field::PhoneNumber).is_none());
        assert_eq!(contact.scalar(Field::Email), None);
    }

    #[test]
    fn test_serializes_camel_case() {
        let mut contact = Contact::new(9);
        contact.display_name = Some("Zed".to_string());
        let json = serde_json::to_value(&contact).unwrap();
        assert_eq!(json["id"], 9);
        assert_eq!(json["displayName"], "Zed");
        assert!(json["phoneNumbers"].as_array().unwrap().is_empty());
    }
}
