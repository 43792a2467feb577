mod error;
mod expectation;
mod unit;

pub use error::ExpectError;
pub use expectation::{expect, Expectation};
pub use unit::LengthUnit;
