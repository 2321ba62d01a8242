//! Errors returned when a coordinate string can't be turned into a [`Coordinate`].
//!
//! Parsing fails in one of two ways: either the string doesn't follow the grammar of the notation
//! that was asked for ([`Error::GrammarMismatch`]), or it does but the resulting latitude or
//! longitude is not a place on Earth ([`Error::RangeError`]).
//!
//! [`Coordinate`]: crate::Coordinate

use crate::gps::Axis;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum Error {
    /// The input doesn't match the token pattern of the expected notation.
    #[error("\"{input}\" is not a valid {expected} coordinate: {details}")]
    GrammarMismatch {
        expected: String,
        input: String,
        details: String,
    },

    /// The input is well-formed, but a latitude or longitude falls outside of its bounds.
    #[error("{axis} {value} is out of range")]
    RangeError { axis: Axis, value: f64 },

    /// A notation name that isn't one of `D`, `HD`, `HDM` or `HDMS`.
    #[error("unknown coordinate notation {0:?} (expected one of D, HD, HDM, HDMS)")]
    UnknownNotation(String),
}

impl Error {
    pub fn grammar_mismatch(expected: &str, input: &str, details: String) -> Self {
        Error::GrammarMismatch {
            expected: expected.to_string(),
            input: input.to_string(),
            details,
        }
    }

    pub fn is_grammar_mismatch(&self) -> bool {
        matches!(self, Error::GrammarMismatch { .. })
    }

    pub fn is_range_error(&self) -> bool {
        matches!(self, Error::RangeError { .. })
    }
}

pub type Result<T> = std::result::Result<T, Error>;
