use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::ExpectError;

/// How string length is measured by the length predicates.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LengthUnit {
    Chars,
    Words,
}

impl LengthUnit {
    /// Measures `subject` in this unit. `Words` splits on whitespace runs.
    pub fn measure(self, subject: &str) -> usize {
        match self {
            LengthUnit::Chars => subject.chars().count(),
            LengthUnit::Words => subject.split_whitespace().count(),
        }
    }
}

impl fmt::Display for LengthUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LengthUnit::Chars => write!(f, "chars"),
            LengthUnit::Words => write!(f, "words"),
        }
    }
}

impl FromStr for LengthUnit {
    type Err = ExpectError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "chars" => Ok(LengthUnit::Chars),
            "words" => Ok(LengthUnit::Words),
            other => Err(ExpectError::InvalidUnit(other.to_string())),
        }
    }
}
