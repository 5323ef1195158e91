//!
//! Storage Publishers and Subscribers
//!
//! A StoragePublisher writes every published value to a single entry and a
//! StorageSubscriber mirrors the whole storage, applying the notifications
//! it has received whenever it is read.
//!

use std::{collections::HashMap, sync::Arc};

use crossbeam::channel::Receiver;

use rio_core::{Publisher, Subscriber};
use rio_value::Value;

use crate::{EntryNotification, NotifyKind, Storage, StorageError};

impl Storage {
    /// Create a publisher that writes to the entry `name`
    pub fn publisher(self: &Arc<Self>, name: impl Into<String>) -> StoragePublisher {
        StoragePublisher {
            storage: self.clone(),
            name: name.into(),
        }
    }

    /// Create a subscriber that mirrors every entry of the storage
    pub fn subscribe(&self) -> StorageSubscriber {
        let (data, rx) = self.snapshot_and_listen();
        StorageSubscriber { rx, data }
    }
}

/// Publisher that writes values to one entry of a storage
pub struct StoragePublisher {
    /// The storage written to
    storage: Arc<Storage>,
    /// The name of the entry written to
    name: String,
}

impl StoragePublisher {
    /// The name of the entry this publisher writes to
    pub fn name(&self) -> &str {
        &self.name
    }
}

impl Publisher for StoragePublisher {
    type Data = Value;
    type Error = StorageError;

    fn publish(&mut self, data: Self::Data) -> Result<(), Self::Error> {
        self.storage.set_entry_value(&self.name, data)
    }
}

/// Subscriber that keeps a copy of every entry in a storage
pub struct StorageSubscriber {
    /// The receiving end of the storage notifications
    rx: Receiver<EntryNotification>,
    /// The current copy of every entry
    data: HashMap<String, Value>,
}

impl Subscriber for StorageSubscriber {
    type Target = HashMap<String, Value>;

    fn get(&mut self) -> &Self::Target {
        for notification in self.rx.try_iter() {
            match notification.kind {
                NotifyKind::New | NotifyKind::Update => {
                    self.data.insert(notification.name, notification.value);
                }
                NotifyKind::Delete => {
                    self.data.remove(&notification.name);
                }
            }
        }

        &self.data
    }
}
