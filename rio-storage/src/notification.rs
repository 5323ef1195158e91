//!
//! Entry Notifications
//!

use rio_value::Value;

/// What happened to an entry
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum NotifyKind {
    /// The entry did not exist before
    New,
    /// The value of an existing entry changed
    Update,
    /// The entry was removed
    Delete,
}

/// A change to a single entry.
///
/// Every listener receives its own copy of the value, for deletions the
/// value is the last one the entry held.
#[derive(Debug, PartialEq)]
pub struct EntryNotification {
    /// The name of the entry
    pub name: String,
    /// The value of the entry after the change
    pub value: Value,
    /// What happened to the entry
    pub kind: NotifyKind,
}
