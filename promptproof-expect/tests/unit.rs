use std::str::FromStr;

use promptproof_core::ProofError;
use promptproof_expect::{ExpectError, LengthUnit};

#[test]
fn recognized_units_parse() {
    assert_eq!(LengthUnit::from_str("chars").unwrap(), LengthUnit::Chars);
    assert_eq!(LengthUnit::from_str("words").unwrap(), LengthUnit::Words);
}

#[test]
fn unknown_unit_is_a_configuration_error_not_an_assertion() {
    let err = LengthUnit::from_str("lines").unwrap_err();
    assert_eq!(err, ExpectError::InvalidUnit("lines".to_string()));

    // The distinction survives conversion into the shared error type.
    let proof_err: ProofError = err.into();
    assert!(matches!(proof_err, ProofError::InvalidConfig(_)));
}

#[test]
fn assertion_failures_convert_to_assertion_variant() {
    let err = ExpectError::Assertion {
        predicate: "to_contain",
        expected: "expected subject to contain \"4\"".to_string(),
        subject: "\"nope\"".to_string(),
    };

    let proof_err: ProofError = err.into();
    assert!(matches!(proof_err, ProofError::Assertion(_)));
}

#[test]
fn unit_display_matches_wire_names() {
    assert_eq!(LengthUnit::Chars.to_string(), "chars");
    assert_eq!(LengthUnit::Words.to_string(), "words");
}
