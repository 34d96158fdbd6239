//! Tests for cursor release and row source failures

mod common;

use common::*;
use contacts_model::{Field, RowSource, RowSourceError};
use contacts_query::{Query, QueryError};
use pretty_assertions::assert_eq;
use std::sync::Arc;

fn query(source: &Arc<RecordingRowSource>) -> Query {
    let source: Arc<dyn RowSource> = source.clone();
    Query::new(source)
}

#[test]
fn test_cursors_released_after_success() {
    let source = RecordingRowSource::new(address_book());

    query(&source)
        .where_starts_with(Field::PhoneNumber, "+1")
        .unwrap()
        .where_contains(Field::Email, "@")
        .unwrap()
        .find()
        .unwrap();

    let stats = source.inner().stats();
    assert_eq!(stats.opened(), 3);
    assert_eq!(stats.open(), 0);
}

#[test]
fn test_cursors_released_after_short_circuit() {
    let source = RecordingRowSource::new(address_book());

    let contacts = query(&source)
        .where_equal_to(Field::PhoneNumber, "none")
        .unwrap()
        .find()
        .unwrap();

    assert!(contacts.is_empty());
    let stats = source.inner().stats();
    assert_eq!(stats.opened(), 1);
    assert_eq!(stats.open(), 0);
}

#[test]
fn test_query_failure_is_propagated() {
    let source = RecordingRowSource::new(address_book());
    source
        .inner()
        .fail_queries(RowSourceError::QueryFailed("permission denied".into()));

    let err = query(&source).find().unwrap_err();

    assert_eq!(
        err,
        QueryError::RowSource(RowSourceError::QueryFailed("permission denied".into()))
    );
    assert_eq!(err.to_string(), "Query failed: permission denied");
    assert_eq!(source.inner().stats().open(), 0);
}

#[test]
fn test_read_failure_releases_cursor() {
    let source = RecordingRowSource::new(address_book());
    source
        .inner()
        .fail_reads_after(3, RowSourceError::ReadFailed("disk".into()));

    let err = query(&source).find().unwrap_err();

    assert!(matches!(err, QueryError::RowSource(RowSourceError::ReadFailed(_))));
    let stats = source.inner().stats();
    assert_eq!(stats.opened(), 1);
    assert_eq!(stats.open(), 0);

    source.inner().clear_faults();
    assert_eq!(query(&source).find().unwrap().len(), 4);
    assert_eq!(source.inner().stats().open(), 0);
}

#[test]
fn test_failure_while_resolving_keys() {
    let source = RecordingRowSource::new(address_book());
    source
        .inner()
        .fail_reads_after(0, RowSourceError::InvalidData("bad row".into()));

    let err = query(&source)
        .where_contains(Field::Email, "example")
        .unwrap()
        .find()
        .unwrap_err();

    assert_eq!(
        err,
        QueryError::RowSource(RowSourceError::InvalidData("bad row".into()))
    );
    // No final read after a failed resolution
    assert_eq!(source.request_count(), 1);
    assert_eq!(source.inner().stats().open(), 0);
}
