//! Tests for running queries
//!
//! Covers:
//! - Kind-specific filters resolved to key sets
//! - Kind-independent filters in the final read
//! - Projection, ordering and transforms

mod common;

use common::*;
use contacts_model::{Field, PhoneNumber, PhoneType, Row, RowSource, columns};
use contacts_query::{AggregationConfig, Query, Selection};
use insta::assert_snapshot;
use pretty_assertions::assert_eq;
use rstest::rstest;
use std::sync::Arc;

fn query(source: &Arc<RecordingRowSource>) -> Query {
    let source: Arc<dyn RowSource> = source.clone();
    Query::new(source)
}

fn names(contacts: &[contacts_model::Contact]) -> Vec<&str> {
    contacts
        .iter()
        .filter_map(|c| c.display_name.as_deref())
        .collect()
}

#[test]
fn test_phone_number_scenario() {
    let source = RecordingRowSource::new(address_book());

    let contacts = query(&source)
        .where_equal_to(Field::PhoneNumber, "+15551234567")
        .unwrap()
        .has_phone_number()
        .unwrap()
        .include([Field::DisplayName, Field::PhoneNumber])
        .find()
        .unwrap();

    assert_eq!(names(&contacts), vec!["Ann Lee", "Dee Ng"]);
    for contact in &contacts {
        assert!(contact.display_name.is_some());
        assert!(
            contact
                .phone_numbers
                .iter()
                .any(|p| p.number == "+15551234567")
        );
    }
    assert_eq!(
        contacts[0].phone_numbers.first(),
        Some(
            &PhoneNumber::new("+15551234567", PhoneType::Mobile)
                .with_normalized_number("+15551234567"),
        )
    );
    assert_eq!(contacts[1].phone_numbers.len(), 2);

    let selections = source.selections();
    assert_eq!(selections.len(), 2);
    assert_snapshot!(
        selections[0],
        @"( mimetype='vnd.android.cursor.item/phone_v2' AND data1='+15551234567' )"
    );
    assert_snapshot!(
        selections[1],
        @"( ( has_phone_number!=0 AND contact_id IN (1, 4) ) AND mimetype IN ('vnd.android.cursor.item/phone_v2') )"
    );
}

#[test]
fn test_quotes_in_values_are_escaped() {
    let source = RecordingRowSource::new(address_book());

    let contacts = query(&source)
        .where_equal_to(Field::DisplayName, "Bob O'Brien")
        .unwrap()
        .find()
        .unwrap();

    assert_eq!(contacts.len(), 1);
    let bob = &contacts[0];
    assert_eq!(bob.id, 2);
    assert_eq!(bob.family_name.as_deref(), Some("O'Brien"));
    assert_eq!(bob.company_name.as_deref(), Some("Acme"));
    assert_eq!(bob.company_title.as_deref(), Some("Engineer"));

    assert_eq!(source.request_count(), 1);
    assert!(source.selections()[0].contains("display_name='Bob O''Brien'"));
}

#[rstest]
#[case(Field::DisplayName, "O'B", vec!["Bob O'Brien"])]
#[case(Field::DisplayName, "ee", vec!["Ann Lee", "Dee Ng"])]
#[case(Field::Email, "example.com", vec!["Ann Lee", "Cyd Park"])]
#[case(Field::FamilyName, "ar", vec!["Cyd Park"])]
#[case(Field::CompanyName, "zzz", vec![])]
fn test_where_contains(#[case] field: Field, #[case] value: &str, #[case] expected: Vec<&str>) {
    let source = RecordingRowSource::new(address_book());
    let contacts = query(&source).where_contains(field, value).unwrap().find().unwrap();
    assert_eq!(names(&contacts), expected);
}

#[test]
fn test_kind_filters_intersect() {
    let source = RecordingRowSource::new(address_book());

    let contacts = query(&source)
        .where_starts_with(Field::PhoneNumber, "+1555")
        .unwrap()
        .where_contains(Field::Email, "example.com")
        .unwrap()
        .find()
        .unwrap();

    assert_eq!(names(&contacts), vec!["Ann Lee"]);
    assert_eq!(source.request_count(), 3);
}

#[test]
fn test_has_phone_number() {
    let source = RecordingRowSource::new(address_book());
    let contacts = query(&source).has_phone_number().unwrap().find().unwrap();
    assert_eq!(names(&contacts), vec!["Ann Lee", "Bob O'Brien", "Dee Ng"]);
}

#[test]
fn test_empty_key_set_short_circuits() {
    let source = RecordingRowSource::new(address_book());

    let contacts = query(&source)
        .where_equal_to(Field::Email, "nobody@example.com")
        .unwrap()
        .where_equal_to(Field::PhoneNumber, "+15551234567")
        .unwrap()
        .find()
        .unwrap();

    assert!(contacts.is_empty());
    // The phone filter is never resolved and there is no final read
    assert_eq!(source.request_count(), 1);
    assert_eq!(source.inner().stats().queries(), 1);
}

#[test]
fn test_disjoint_kind_filters_short_circuit() {
    let source = RecordingRowSource::new(address_book());

    let contacts = query(&source)
        .where_equal_to(Field::PhoneNumber, "+15559876543")
        .unwrap()
        .where_contains(Field::Email, "example")
        .unwrap()
        .find()
        .unwrap();

    assert!(contacts.is_empty());
    assert_eq!(source.request_count(), 2);
}

#[test]
fn test_include_limits_projection_and_kinds() {
    let source = RecordingRowSource::new(address_book());

    let contacts = query(&source).include([Field::DisplayName]).find().unwrap();

    assert_eq!(contacts.len(), 4);
    assert!(contacts.iter().all(|c| c.phone_numbers.is_empty() && c.emails.is_empty()));

    let request = &source.requests()[0];
    assert_eq!(request.selection, None);
    assert_eq!(
        request.projection.iter().map(String::as_str).collect::<Vec<_>>(),
        vec![columns::CONTACT_ID, columns::MIMETYPE, columns::DISPLAY_NAME]
    );
}

#[test]
fn test_full_contact_is_assembled() {
    let source = RecordingRowSource::new(address_book());

    let contacts = query(&source)
        .where_equal_to(Field::ContactId, 1)
        .unwrap()
        .find()
        .unwrap();

    let ann = &contacts[0];
    assert_eq!(ann.given_name.as_deref(), Some("Ann"));
    assert_eq!(ann.family_name.as_deref(), Some("Lee"));
    assert_eq!(ann.sort_key.as_deref(), Some("ann lee"));
    assert_eq!(ann.emails.len(), 1);
    assert_eq!(ann.birthday().map(|e| e.start_date.as_str()), Some("1990-04-01"));
}

#[test]
fn test_sort_order_decides_output_order() {
    let rows = [
        ContactRows::new(5, "Zed").phone("1", 2).build(),
        ContactRows::new(10, "Amy").phone("2", 2).build(),
    ]
    .concat();
    let source = RecordingRowSource::new(rows);

    let by_name = query(&source).find().unwrap();
    assert_eq!(by_name.iter().map(|c| c.id).collect::<Vec<_>>(), vec![10, 5]);

    let by_id = query(&source).sort_order(Field::ContactId).find().unwrap();
    assert_eq!(by_id.iter().map(|c| c.id).collect::<Vec<_>>(), vec![5, 10]);
}

#[test]
fn test_find_is_repeatable() {
    let source = RecordingRowSource::new(address_book());
    let q = query(&source)
        .where_starts_with(Field::PhoneNumber, "+1555")
        .unwrap();

    let first = q.find().unwrap();
    let second = q.find().unwrap();

    assert_eq!(first, second);
    let requests = source.requests();
    assert_eq!(requests[..2], requests[2..]);
}

#[test]
fn test_find_with_transforms_each_contact() {
    let source = RecordingRowSource::new(address_book());

    let summaries = query(&source)
        .include([Field::DisplayName, Field::PhoneNumber])
        .find_with(|c| format!("{}:{}", c.id, c.phone_numbers.len()))
        .unwrap();

    assert_eq!(summaries, vec!["1:1", "2:1", "4:2"]);
}

#[test]
fn test_selector_from_config() {
    let rows = vec![
        Row::new()
            .with(columns::CONTACT_ID, 1)
            .with(columns::MIMETYPE, "vnd.android.cursor.item/name")
            .with(columns::DISPLAY_NAME, "A"),
        Row::new()
            .with(columns::CONTACT_ID, 1)
            .with(columns::MIMETYPE, "vnd.android.cursor.item/nickname")
            .with(columns::DISPLAY_NAME, "Alpha"),
    ];
    let source = RecordingRowSource::new(rows);

    let last_wins = query(&source).include([Field::DisplayName]).find().unwrap();
    assert_eq!(last_wins[0].display_name.as_deref(), Some("Alpha"));

    let config =
        AggregationConfig::new().with_selector(Field::DisplayName, |_, _| Selection::KeepCurrent);
    let first_wins = query(&source)
        .with_config(config)
        .include([Field::DisplayName])
        .find()
        .unwrap();
    assert_eq!(first_wins[0].display_name.as_deref(), Some("A"));
}
