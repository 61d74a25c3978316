//! Integration tests for error type construction and display.

use stayscout::util::error::{number_err, StayScoutError};

#[test]
fn number_error_names_field_and_value() {
    let err = number_err("stars", "many");
    let msg = err.to_string();
    assert!(msg.contains("stars"), "should name the field: {msg}");
    assert!(msg.contains("many"), "should echo the value: {msg}");
}

#[test]
fn date_error_echoes_the_input() {
    let err = stayscout::util::time::parse_query_date("not-a-date").unwrap_err();
    match &err {
        StayScoutError::DateParse { input, .. } => assert_eq!(input, "not-a-date"),
        other => panic!("expected DateParse, got {other:?}"),
    }
    assert!(err.to_string().contains("not-a-date"));
}

#[test]
fn date_error_exposes_its_source() {
    use std::error::Error as _;
    let err = stayscout::util::time::parse_query_date("2026-13-40").unwrap_err();
    assert!(err.source().is_some(), "chrono failure should be chained");
}

#[test]
fn error_is_send_and_sync() {
    fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<StayScoutError>();
}
