//! Tests for the output module

use strcalc::calculator::CalcError;
use strcalc::output::{AddResult, ErrorResult, OutputMode};

#[test]
fn test_default_mode_is_human() {
    assert_eq!(OutputMode::default(), OutputMode::Human);
}

#[test]
fn test_add_result_serializes() {
    let value = serde_json::to_value(AddResult { sum: 3 }).unwrap();
    assert_eq!(value, serde_json::json!({ "sum": 3 }));
}

#[test]
fn test_error_result_carries_kind_and_message() {
    let err = CalcError::NegativesNotAllowed("-5,-8".to_string());
    let result = ErrorResult::from(&err);
    assert_eq!(result.kind, "OUT_OF_RANGE");
    assert_eq!(result.message, "Negatives not allowed: -5,-8");

    let err = CalcError::MissingInput;
    let result = ErrorResult::from(&err);
    assert_eq!(result.kind, "INVALID_ARGUMENT");
    assert!(result.message.contains("numbers"));
}
