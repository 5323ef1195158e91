//!
//! Rio Entry Storage
//!
//! The storage keeps one [`Value`](rio_value::Value) per entry name and
//! tells anyone listening whenever an entry is created, updated or
//! deleted.  It is the local half of a key-value synchronization layer:
//! whatever is written here is what would be shared with other peers.
//!

#![deny(unsafe_code)]
#![deny(missing_docs)]

pub mod error;
pub use error::StorageError;

pub mod notification;
pub use notification::{EntryNotification, NotifyKind};

pub mod storage;
pub use storage::Storage;

pub mod local;
pub use local::{StoragePublisher, StorageSubscriber};
