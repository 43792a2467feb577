use promptproof_expect::{expect, ExpectError, LengthUnit};

#[test]
fn string_predicates_chain_on_success() {
    let text = "Hello World! This is a test.";

    expect(text)
        .to_contain("Hello")
        .unwrap()
        .to_start_with("Hello")
        .unwrap()
        .not_to_contain("Goodbye")
        .unwrap()
        .to_be_shorter_than(100, LengthUnit::Chars)
        .unwrap()
        .to_be_longer_than(10, LengthUnit::Chars)
        .unwrap();
}

#[test]
fn to_contain_fails_with_predicate_and_subject() {
    let err = expect("no digits here").to_contain("4").unwrap_err();

    match err {
        ExpectError::Assertion {
            predicate,
            expected,
            subject,
        } => {
            assert_eq!(predicate, "to_contain");
            assert!(expected.contains("\"4\""));
            assert!(subject.contains("no digits here"));
        }
        other => panic!("expected assertion failure, got {other:?}"),
    }
}

#[test]
fn not_to_contain_fails_when_substring_present() {
    let err = expect("Hello World").not_to_contain("World").unwrap_err();
    assert!(matches!(err, ExpectError::Assertion { predicate: "not_to_contain", .. }));
}

#[test]
fn to_start_with_fails_on_wrong_prefix() {
    let err = expect("Hello").to_start_with("World").unwrap_err();
    assert!(matches!(err, ExpectError::Assertion { predicate: "to_start_with", .. }));
}

#[test]
fn to_be_between_is_inclusive_on_both_bounds() {
    expect("one two three").to_be_between(3, 3, LengthUnit::Words).unwrap();
    expect("one two three").to_be_between(1, 3, LengthUnit::Words).unwrap();
    expect("one two three").to_be_between(3, 5, LengthUnit::Words).unwrap();

    let err = expect("one two three")
        .to_be_between(4, 5, LengthUnit::Words)
        .unwrap_err();
    assert!(matches!(err, ExpectError::Assertion { predicate: "to_be_between", .. }));
}

#[test]
fn word_counting_splits_on_whitespace_runs() {
    expect("one   two\t\nthree").to_be_between(3, 3, LengthUnit::Words).unwrap();
    expect("short").to_be_between(1, 10, LengthUnit::Chars).unwrap();
}

#[test]
fn length_predicates_are_strict_at_the_limit() {
    let err = expect("abcde")
        .to_be_shorter_than(5, LengthUnit::Chars)
        .unwrap_err();
    assert!(matches!(err, ExpectError::Assertion { .. }));

    let err = expect("abcde")
        .to_be_longer_than(5, LengthUnit::Chars)
        .unwrap_err();
    assert!(matches!(err, ExpectError::Assertion { .. }));
}

#[test]
fn char_counting_is_scalar_values_not_bytes() {
    // "héllo" is 6 bytes but 5 chars.
    expect("héllo").to_be_between(5, 5, LengthUnit::Chars).unwrap();
}

#[test]
fn boolean_predicates_check_identity() {
    expect(true).to_be_true().unwrap();
    expect(false).to_be_false().unwrap();

    let err = expect(false).to_be_true().unwrap_err();
    assert!(matches!(err, ExpectError::Assertion { predicate: "to_be_true", .. }));

    let err = expect(true).to_be_false().unwrap_err();
    assert!(matches!(err, ExpectError::Assertion { predicate: "to_be_false", .. }));
}

#[test]
fn to_equal_uses_structural_equality() {
    expect(5).to_equal(5).unwrap();
    expect(vec![1, 2, 3]).to_equal(vec![1, 2, 3]).unwrap();

    let err = expect(5).to_equal(6).unwrap_err();
    assert!(matches!(err, ExpectError::Assertion { predicate: "to_equal", .. }));
}

#[test]
fn long_subjects_are_truncated_in_failure_messages() {
    let long = "x".repeat(500);
    let err = expect(long.as_str()).to_contain("y").unwrap_err();

    let message = err.to_string();
    assert!(message.len() < 250);
    assert!(message.contains("..."));
}

#[test]
fn failure_messages_are_self_explanatory() {
    let err = expect("one two").to_be_between(3, 5, LengthUnit::Words).unwrap_err();
    assert_eq!(
        err.to_string(),
        "to_be_between: expected between 3 and 5 words inclusive, measured 2; subject was \"one two\""
    );
}
