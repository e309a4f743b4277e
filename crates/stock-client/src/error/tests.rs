//! Unit tests for error module.

use super::*;

#[test]
fn test_api_error_display() {
    let error = Error::Api {
        status: 400,
        message: "Bad request".to_string(),
    };

    let display = format!("{}", error);
    assert!(display.contains("400"));
    assert!(display.contains("Bad request"));
}

#[test]
fn test_not_found_error_display() {
    let error = Error::NotFound("Stock not found: 42".to_string());

    let display = format!("{}", error);
    assert!(display.contains("Not found"));
    assert!(display.contains("Stock not found: 42"));
}

#[test]
fn test_error_debug() {
    let error = Error::Api {
        status: 500,
        message: "Internal server error".to_string(),
    };

    let debug = format!("{:?}", error);
    assert!(debug.contains("Api"));
    assert!(debug.contains("500"));
}
