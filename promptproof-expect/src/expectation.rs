//! Fluent predicate chains over a single subject value.
//!
//! Each predicate consumes and returns the expectation so chains compose
//! with `?` and fail fast on the first unmet condition:
//!
//! ```
//! use promptproof_expect::expect;
//! # fn main() -> Result<(), promptproof_expect::ExpectError> {
//! expect("Hello World").to_contain("Hello")?.to_start_with("Hello")?;
//! # Ok(())
//! # }
//! ```

use std::fmt::Debug;

use crate::{ExpectError, LengthUnit};

/// Subjects longer than this are truncated in failure messages.
const SUBJECT_PREVIEW_CHARS: usize = 80;

pub fn expect<T>(subject: T) -> Expectation<T> {
    Expectation { subject }
}

#[derive(Debug, Clone)]
pub struct Expectation<T> {
    subject: T,
}

impl<T> Expectation<T> {
    pub fn into_inner(self) -> T {
        self.subject
    }
}

impl<T: AsRef<str>> Expectation<T> {
    pub fn to_contain(self, needle: &str) -> Result<Self, ExpectError> {
        if self.subject.as_ref().contains(needle) {
            Ok(self)
        } else {
            Err(self.failure("to_contain", format!("expected subject to contain {needle:?}")))
        }
    }

    pub fn not_to_contain(self, needle: &str) -> Result<Self, ExpectError> {
        if self.subject.as_ref().contains(needle) {
            Err(self.failure(
                "not_to_contain",
                format!("expected subject not to contain {needle:?}"),
            ))
        } else {
            Ok(self)
        }
    }

    pub fn to_start_with(self, prefix: &str) -> Result<Self, ExpectError> {
        if self.subject.as_ref().starts_with(prefix) {
            Ok(self)
        } else {
            Err(self.failure(
                "to_start_with",
                format!("expected subject to start with {prefix:?}"),
            ))
        }
    }

    pub fn to_be_shorter_than(self, limit: usize, unit: LengthUnit) -> Result<Self, ExpectError> {
        let measured = unit.measure(self.subject.as_ref());
        if measured < limit {
            Ok(self)
        } else {
            Err(self.failure(
                "to_be_shorter_than",
                format!("expected fewer than {limit} {unit}, measured {measured}"),
            ))
        }
    }

    pub fn to_be_longer_than(self, limit: usize, unit: LengthUnit) -> Result<Self, ExpectError> {
        let measured = unit.measure(self.subject.as_ref());
        if measured > limit {
            Ok(self)
        } else {
            Err(self.failure(
                "to_be_longer_than",
                format!("expected more than {limit} {unit}, measured {measured}"),
            ))
        }
    }

    /// Bounds are inclusive on both ends.
    pub fn to_be_between(
        self,
        lo: usize,
        hi: usize,
        unit: LengthUnit,
    ) -> Result<Self, ExpectError> {
        let measured = unit.measure(self.subject.as_ref());
        if (lo..=hi).contains(&measured) {
            Ok(self)
        } else {
            Err(self.failure(
                "to_be_between",
                format!("expected between {lo} and {hi} {unit} inclusive, measured {measured}"),
            ))
        }
    }

    fn failure(&self, predicate: &'static str, expected: String) -> ExpectError {
        ExpectError::Assertion {
            predicate,
            expected,
            subject: preview(self.subject.as_ref()),
        }
    }
}

impl Expectation<bool> {
    /// Identity check, not truthiness: the subject must literally be `true`.
    pub fn to_be_true(self) -> Result<Self, ExpectError> {
        if self.subject {
            Ok(self)
        } else {
            Err(ExpectError::Assertion {
                predicate: "to_be_true",
                expected: "expected subject to be true".to_string(),
                subject: "false".to_string(),
            })
        }
    }

    pub fn to_be_false(self) -> Result<Self, ExpectError> {
        if self.subject {
            Err(ExpectError::Assertion {
                predicate: "to_be_false",
                expected: "expected subject to be false".to_string(),
                subject: "true".to_string(),
            })
        } else {
            Ok(self)
        }
    }
}

impl<T: PartialEq + Debug> Expectation<T> {
    pub fn to_equal(self, other: T) -> Result<Self, ExpectError> {
        if self.subject == other {
            Ok(self)
        } else {
            Err(ExpectError::Assertion {
                predicate: "to_equal",
                expected: format!("expected subject to equal {other:?}"),
                subject: preview(&format!("{:?}", self.subject)),
            })
        }
    }
}

fn preview(subject: &str) -> String {
    if subject.chars().count() <= SUBJECT_PREVIEW_CHARS {
        return format!("{subject:?}");
    }
    let truncated: String = subject.chars().take(SUBJECT_PREVIEW_CHARS).collect();
    format!("{truncated:?}...")
}
