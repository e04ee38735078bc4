//! Tests for the structured error type.

use std::error::Error as StdError;
use std::io;

use serde_json::{json, Value};

use crate::error::Error;

#[test]
fn test_new_sets_code_and_message() {
    let err = Error::new("CODE123", "An error occurred");
    assert_eq!(err.code(), "CODE123");
    assert_eq!(err.message(), "An error occurred");
    assert!(err.data().is_empty());
    assert!(err.status_code().is_none());
    assert!(err.source().is_none());
}

#[test]
fn test_api_sets_code_and_status_only() {
    let err = Error::api("CODE404", 404);
    assert_eq!(err.code(), "CODE404");
    assert_eq!(err.status_code(), Some(404));
    assert_eq!(err.message(), "");
}

#[test]
fn test_display_without_source() {
    let err = Error::new("CODE124", "Another error occurred");
    assert_eq!(
        err.to_string(),
        "code: CODE124, message: Another error occurred"
    );
}

#[test]
fn test_display_with_source() {
    let underlying = io::Error::other("underlying error");
    let err = Error::new("CODE123", "An error occurred").with_source(underlying);
    assert_eq!(
        err.to_string(),
        "code: CODE123, message: An error occurred, underlying error: underlying error"
    );
}

#[test]
fn test_source_is_exposed() {
    let underlying = io::Error::other("boom");
    let err = Error::new("CODE123", "wrapped").with_source(underlying);
    let source = err.source().expect("source should be set");
    assert_eq!(source.to_string(), "boom");
}

#[test]
fn test_with_data_entry() {
    let err = Error::new("CODE123", "with data")
        .with_data_entry("key", json!("value"))
        .with_data_entry("attempts", json!(3));
    assert_eq!(err.data().get("key"), Some(&json!("value")));
    assert_eq!(err.data().get("attempts"), Some(&json!(3)));
}

#[test]
fn test_json_serialization_includes_set_fields() {
    let err = Error::new("CODE123", "An error occurred")
        .with_status(400)
        .with_data_entry("key", json!("value"));
    let value: Value = serde_json::from_slice(&err.to_json_bytes()).unwrap();

    assert_eq!(value["code"], json!("CODE123"));
    assert_eq!(value["status_code"], json!(400));
    assert_eq!(value["message"], json!("An error occurred"));
    assert_eq!(value["data"]["key"], json!("value"));
}

#[test]
fn test_json_serialization_omits_empty_fields() {
    let err = Error::new("CODE123", "plain");
    let value: Value = serde_json::from_slice(&err.to_json_bytes()).unwrap();

    assert!(value.get("status_code").is_none());
    assert!(value.get("data").is_none());
    // The source is never serialized.
    assert!(value.get("source").is_none());
}

#[test]
fn test_predefined_api_errors() {
    assert_eq!(Error::internal_server_error().code(), "INTERNAL_SERVER_ERROR");
    assert_eq!(Error::internal_server_error().status_code(), Some(500));
    assert_eq!(Error::bad_request().code(), "BAD_REQUEST");
    assert_eq!(Error::bad_request().status_code(), Some(400));
    assert_eq!(Error::unauthorized().code(), "UNAUTHORIZED");
    assert_eq!(Error::unauthorized().status_code(), Some(401));
}
