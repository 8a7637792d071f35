//! Parameterized tests using test-case
//!
//! These tests use test-case to run the same test logic with different inputs.

use strcalc::calculator::{CalcError, ErrorKind, add};
use test_case::test_case;

// =============================================================================
// Simple Inputs
// =============================================================================

#[test_case("", 0 ; "empty string")]
#[test_case("1", 1 ; "single number")]
#[test_case("1,2", 3 ; "two numbers")]
#[test_case("1\n,2", 3 ; "newline before comma")]
#[test_case("\n1,2", 3 ; "leading newline")]
#[test_case("1\n\n\n,2\n\n", 3 ; "newlines scattered through body")]
#[test_case("1,+2", 3 ; "explicit plus sign")]
#[test_case("1,2,1001", 3 ; "value above bound excluded")]
#[test_case("999, 1000, 1001", 999 ; "bound is inclusive and spaces tolerated")]
fn test_add_simple_inputs(input: &str, expected: i32) {
    assert_eq!(add(Some(input)).unwrap(), expected);
}

// =============================================================================
// Delimiter Headers
// =============================================================================

#[test_case("//;\n1;2", 3 ; "single custom delimiter")]
#[test_case("//*;\n1;2*3*4;5", 15 ; "two delimiters both split")]
#[test_case("//-\n1-2", 3 ; "dash delimiter")]
#[test_case("//**\n1*2", 3 ; "repeated delimiter character")]
#[test_case("//*;*\n1*2;3", 6 ; "final header char occurs earlier in header")]
#[test_case("//*;\n\n\n\n\n\n\n\n\n\n\n\n1;2", 3 ; "blank lines before numbers")]
fn test_add_inputs_with_header(input: &str, expected: i32) {
    assert_eq!(add(Some(input)).unwrap(), expected);
}

// =============================================================================
// Invalid Arguments
// =============================================================================

#[test_case(None ; "absent input")]
#[test_case(Some("1,\n") ; "dangling trailing delimiter")]
#[test_case(Some("//;1;2") ; "header without terminating newline")]
#[test_case(Some("//\n1,2") ; "empty header")]
#[test_case(Some("1,a,3") ; "non numeric token")]
#[test_case(Some("1 2") ; "space inside a token")]
fn test_add_invalid_argument(input: Option<&str>) {
    let err = add(input).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::InvalidArgument);
}

// =============================================================================
// Out Of Range
// =============================================================================

#[test_case("////////;\n1;2" ; "slashes fill the header")]
#[test_case("////////;//\n1;2" ; "slashes before and after the separator")]
fn test_add_slash_delimiter_rejected(input: &str) {
    let err = add(Some(input)).unwrap_err();
    assert_eq!(err, CalcError::InvalidDelimiterHeader);
    assert_eq!(err.kind(), ErrorKind::OutOfRange);
    assert!(
        err.to_string()
            .contains("Invalid delimiter header specified: '/'")
    );
}

#[test_case("-1", "-1" ; "single negative")]
#[test_case("1,2,-5,4,-8,-3,-3", "-5,-8,-3,-3" ; "all negatives listed in encounter order")]
fn test_add_negatives_rejected(input: &str, audit: &str) {
    let err = add(Some(input)).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::OutOfRange);
    assert_eq!(err.to_string(), format!("Negatives not allowed: {audit}"));
}
