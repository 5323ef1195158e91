//!
//! Errors from reading a Value
//!

use std::str::Utf8Error;

use thiserror::Error;

use crate::ValueType;

/// An error from accessing the payload of a value.
#[derive(Error, Clone, Debug, PartialEq, Eq)]
pub enum ValueError {
    /// A typed getter was called for a type the value does not hold
    #[error("expected a {expected} value but the value holds {actual}")]
    TypeMismatch {
        /// The type requested by the caller
        expected: ValueType,
        /// The type currently held by the value
        actual: ValueType,
    },

    /// The bytes of a string value are not valid UTF-8
    #[error("string value is not valid UTF-8: {0}")]
    InvalidUtf8(#[from] Utf8Error),
}
