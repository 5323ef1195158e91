//!
//! Errors from reading and writing entries
//!

use thiserror::Error;

use rio_value::{ValueError, ValueType};

/// An error from accessing an entry in the storage.
#[derive(Error, Clone, Debug, PartialEq, Eq)]
pub enum StorageError {
    /// The entry already holds a value of another type
    #[error("entry `{name}` holds a {existing} value and cannot be set to a {attempted} value")]
    TypeMismatch {
        /// The name of the entry
        name: String,
        /// The type currently stored in the entry
        existing: ValueType,
        /// The type of the rejected value
        attempted: ValueType,
    },

    /// Unassigned values cannot be stored
    #[error("cannot store an unassigned value in entry `{name}`")]
    Unassigned {
        /// The name of the entry
        name: String,
    },

    /// There is no entry with the given name
    #[error("no entry named `{name}`")]
    NotFound {
        /// The name of the entry
        name: String,
    },

    /// The stored value could not be read as the requested type
    #[error(transparent)]
    Value(#[from] ValueError),
}
