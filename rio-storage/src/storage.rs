//!
//! The Entry Storage
//!
//! Entries are created by the first write to a name and keep the type of
//! that first value.  A plain write of another type is refused, a typed
//! write replaces the entry outright.
//!
//! Every accepted write is stamped with the storage clock (nanoseconds since
//! the storage was created) while the storage is locked, so the stamps seen
//! by listeners never decrease.
//!

use std::collections::HashMap;

use crossbeam::channel::{self, Receiver, Sender};
use parking_lot::Mutex;
use quanta::{Clock, Instant};
use tracing::{debug, warn};

use rio_value::{Value, ValueType};

use crate::{EntryNotification, NotifyKind, StorageError};

/// The entries and listeners of a storage
struct StorageInner {
    /// The value stored under each entry name
    entries: HashMap<String, Value>,
    /// The sending ends of every listener's channel
    listeners: Vec<Sender<EntryNotification>>,
}

/// Send a copy of `value` to every listener, forgetting listeners whose
/// receiving end has been dropped.
fn notify(listeners: &mut Vec<Sender<EntryNotification>>, name: &str, value: &Value, kind: NotifyKind) {
    listeners.retain(|tx| {
        tx.send(EntryNotification {
            name: name.to_string(),
            value: value.duplicate(),
            kind,
        })
        .is_ok()
    });
}

/// A thread-safe table of named values.
///
/// Storage is usually shared behind an `Arc` so that publishers created with
/// [`Storage::publisher`] can write to it from other threads.
pub struct Storage {
    /// The entries and listeners
    inner: Mutex<StorageInner>,
    /// The clock used to stamp values
    clock: Clock,
    /// The instant the storage was created
    start: Instant,
}

impl Storage {
    /// Create a new empty storage using the quanta high-precision clock
    pub fn new() -> Self {
        Self::with_clock(Clock::new())
    }

    /// Create a new empty storage stamping values with the given clock
    pub fn with_clock(clock: Clock) -> Self {
        let start = clock.now();
        Self {
            inner: Mutex::new(StorageInner {
                entries: HashMap::new(),
                listeners: Vec::new(),
            }),
            clock,
            start,
        }
    }

    /// The current time of the storage clock in nanoseconds
    pub fn now(&self) -> u64 {
        let elapsed = self.clock.now().duration_since(self.start).as_nanos();
        u64::try_from(elapsed).unwrap_or(u64::MAX)
    }

    /// Write `value` to the entry `name`, creating the entry if it does not
    /// exist.
    ///
    /// Note: if the entry exists and holds another type the write is refused
    /// and the entry is left untouched.
    pub fn set_entry_value(&self, name: &str, value: Value) -> Result<(), StorageError> {
        self.set(name, value, false)
    }

    /// Write `value` to the entry `name`, replacing the entry even if it
    /// holds another type.
    pub fn set_entry_type_value(&self, name: &str, value: Value) -> Result<(), StorageError> {
        self.set(name, value, true)
    }

    fn set(&self, name: &str, mut value: Value, force_type: bool) -> Result<(), StorageError> {
        if value.is_unassigned() {
            return Err(StorageError::Unassigned {
                name: name.to_string(),
            });
        }

        // Stamp under the lock so writes to an entry never go back in time
        let mut inner = self.inner.lock();
        value.set_last_change(self.now());
        let StorageInner { entries, listeners } = &mut *inner;
        let kind = match entries.get_mut(name) {
            Some(existing) => {
                if existing.value_type() != value.value_type() && !force_type {
                    warn!(
                        entry = name,
                        existing = %existing.value_type(),
                        attempted = %value.value_type(),
                        "refused entry type change"
                    );
                    return Err(StorageError::TypeMismatch {
                        name: name.to_string(),
                        existing: existing.value_type(),
                        attempted: value.value_type(),
                    });
                }
                if *existing == value {
                    return Ok(());
                }
                *existing = value;
                NotifyKind::Update
            }
            None => {
                debug!(entry = name, value_type = %value.value_type(), "created entry");
                entries.insert(name.to_string(), value);
                NotifyKind::New
            }
        };

        if let Some(stored) = entries.get(name) {
            notify(listeners, name, stored, kind);
        }
        Ok(())
    }

    /// Get a copy of the value stored in the entry `name`
    pub fn get_entry_value(&self, name: &str) -> Option<Value> {
        self.inner.lock().entries.get(name).map(Value::duplicate)
    }

    /// Get the type of the entry `name`, unassigned if there is no such entry
    pub fn get_entry_type(&self, name: &str) -> ValueType {
        self.inner
            .lock()
            .entries
            .get(name)
            .map_or(ValueType::Unassigned, Value::value_type)
    }

    /// Get the boolean stored in the entry `name`
    pub fn get_entry_boolean(&self, name: &str) -> Result<bool, StorageError> {
        let inner = self.inner.lock();
        let value = inner.entries.get(name).ok_or_else(|| StorageError::NotFound {
            name: name.to_string(),
        })?;
        Ok(value.get_boolean()?)
    }

    /// Get the double stored in the entry `name`
    pub fn get_entry_double(&self, name: &str) -> Result<f64, StorageError> {
        let inner = self.inner.lock();
        let value = inner.entries.get(name).ok_or_else(|| StorageError::NotFound {
            name: name.to_string(),
        })?;
        Ok(value.get_double()?)
    }

    /// Remove the entry `name`, returning the value it held
    pub fn delete_entry(&self, name: &str) -> Option<Value> {
        let mut inner = self.inner.lock();
        let value = inner.entries.remove(name)?;
        debug!(entry = name, "deleted entry");
        notify(&mut inner.listeners, name, &value, NotifyKind::Delete);
        Some(value)
    }

    /// The names of every entry starting with `prefix`, in sorted order
    pub fn entry_names(&self, prefix: &str) -> Vec<String> {
        let mut names: Vec<String> = self
            .inner
            .lock()
            .entries
            .keys()
            .filter(|name| name.starts_with(prefix))
            .cloned()
            .collect();
        names.sort();
        names
    }

    /// The number of entries in the storage
    pub fn len(&self) -> usize {
        self.inner.lock().entries.len()
    }

    /// Whether the storage has no entries
    pub fn is_empty(&self) -> bool {
        self.inner.lock().entries.is_empty()
    }

    /// Create a channel that receives a notification for every change made
    /// from now on
    pub fn listen(&self) -> Receiver<EntryNotification> {
        let (tx, rx) = channel::unbounded();
        self.inner.lock().listeners.push(tx);
        rx
    }

    /// Create a channel that receives a notification for every change made
    /// from now on, along with a copy of every entry as it is right now.
    pub(crate) fn snapshot_and_listen(&self) -> (HashMap<String, Value>, Receiver<EntryNotification>) {
        let (tx, rx) = channel::unbounded();
        let mut inner = self.inner.lock();
        inner.listeners.push(tx);
        let snapshot = inner
            .entries
            .iter()
            .map(|(name, value)| (name.clone(), value.duplicate()))
            .collect();
        (snapshot, rx)
    }
}

impl Default for Storage {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use std::{sync::Arc, thread, time::Duration};

    use rand::random;

    use rio_value::ValueError;

    #[test]
    fn test_set_and_get_entry() {
        let storage = Storage::new();
        let voltage: f64 = random();

        storage.set_entry_value("/RoboRio/VInVoltage", Value::double(voltage)).unwrap();

        assert_eq!(
            storage.get_entry_value("/RoboRio/VInVoltage"),
            Some(Value::double(voltage))
        );
        assert_eq!(storage.get_entry_double("/RoboRio/VInVoltage"), Ok(voltage));
        assert_eq!(storage.get_entry_type("/RoboRio/VInVoltage"), ValueType::Double);
        assert_eq!(storage.get_entry_type("/RoboRio/Missing"), ValueType::Unassigned);
        assert_eq!(storage.len(), 1);
    }

    #[test]
    /// A plain write of another type should be refused without touching the
    /// entry
    fn test_type_change_is_refused() {
        let storage = Storage::new();
        storage.set_entry_value("button", Value::boolean(true)).unwrap();

        let result = storage.set_entry_value("button", Value::double(1.0));

        assert_eq!(
            result,
            Err(StorageError::TypeMismatch {
                name: String::from("button"),
                existing: ValueType::Boolean,
                attempted: ValueType::Double,
            })
        );
        assert_eq!(storage.get_entry_boolean("button"), Ok(true));
    }

    #[test]
    fn test_typed_write_replaces_entry() {
        let storage = Storage::new();
        storage.set_entry_value("rail", Value::boolean(true)).unwrap();

        storage.set_entry_type_value("rail", Value::string("6V")).unwrap();

        assert_eq!(storage.get_entry_value("rail"), Some(Value::string("6V")));
    }

    #[test]
    fn test_unassigned_is_refused() {
        let storage = Storage::new();

        assert_eq!(
            storage.set_entry_value("empty", Value::new()),
            Err(StorageError::Unassigned {
                name: String::from("empty")
            })
        );
        assert!(storage.is_empty());
    }

    #[test]
    fn test_typed_getter_errors() {
        let storage = Storage::new();
        storage.set_entry_value("faults", Value::double(2.0)).unwrap();

        assert_eq!(
            storage.get_entry_boolean("faults"),
            Err(StorageError::Value(ValueError::TypeMismatch {
                expected: ValueType::Boolean,
                actual: ValueType::Double,
            }))
        );
        assert_eq!(
            storage.get_entry_double("missing"),
            Err(StorageError::NotFound {
                name: String::from("missing")
            })
        );
    }

    #[test]
    /// Stored values should be stamped with the storage clock
    fn test_last_change_is_stamped() {
        let (clock, mock) = Clock::mock();
        let storage = Storage::with_clock(clock);

        mock.increment(Duration::from_millis(5));
        storage.set_entry_value("voltage", Value::double(12.0)).unwrap();
        assert_eq!(
            storage.get_entry_value("voltage").unwrap().last_change(),
            5_000_000
        );

        mock.increment(Duration::from_millis(5));
        storage.set_entry_value("voltage", Value::double(11.0)).unwrap();
        assert_eq!(
            storage.get_entry_value("voltage").unwrap().last_change(),
            10_000_000
        );
    }

    #[test]
    fn test_listen_notifications() {
        let storage = Storage::new();
        let rx = storage.listen();

        storage.set_entry_value("current", Value::double(1.0)).unwrap();
        storage.set_entry_value("current", Value::double(1.0)).unwrap();
        storage.set_entry_value("current", Value::double(2.0)).unwrap();
        storage.delete_entry("current");

        let notifications: Vec<(String, NotifyKind, Value)> = rx
            .try_iter()
            .map(|notification| (notification.name, notification.kind, notification.value))
            .collect();
        assert_eq!(
            notifications,
            vec![
                (String::from("current"), NotifyKind::New, Value::double(1.0)),
                (String::from("current"), NotifyKind::Update, Value::double(2.0)),
                (String::from("current"), NotifyKind::Delete, Value::double(2.0)),
            ]
        );
    }

    #[test]
    fn test_dropped_listeners_are_pruned() {
        let storage = Storage::new();
        let rx = storage.listen();
        drop(rx);

        storage.set_entry_value("a", Value::boolean(true)).unwrap();

        assert!(storage.inner.lock().listeners.is_empty());
    }

    #[test]
    fn test_delete_entry() {
        let storage = Storage::new();
        storage.set_entry_value("a", Value::raw(vec![1u8, 2, 3])).unwrap();

        assert_eq!(storage.delete_entry("a"), Some(Value::raw(vec![1u8, 2, 3])));
        assert_eq!(storage.delete_entry("a"), None);
        assert!(storage.is_empty());
    }

    #[test]
    fn test_entry_names() {
        let storage = Storage::new();
        storage.set_entry_value("/RoboRio/VInVoltage", Value::double(12.0)).unwrap();
        storage.set_entry_value("/RoboRio/FPGAButton", Value::boolean(false)).unwrap();
        storage.set_entry_value("/Drive/Speed", Value::double(0.0)).unwrap();

        assert_eq!(
            storage.entry_names("/RoboRio/"),
            vec![
                String::from("/RoboRio/FPGAButton"),
                String::from("/RoboRio/VInVoltage")
            ]
        );
        assert_eq!(storage.entry_names("").len(), 3);
    }

    #[test]
    /// Concurrent writers to the same entry should never produce a stamp
    /// older than the one before it
    fn test_concurrent_stamps_never_decrease() {
        let storage = Arc::new(Storage::new());
        let rx = storage.listen();

        let handles: Vec<_> = (0..8)
            .map(|writer| {
                let storage = storage.clone();
                thread::spawn(move || {
                    for i in 0..2_000 {
                        storage
                            .set_entry_value("voltage", Value::double((writer * 2_000 + i) as f64))
                            .unwrap();
                    }
                })
            })
            .collect();
        for handle in handles {
            handle.join().unwrap();
        }

        let stamps: Vec<u64> = rx
            .try_iter()
            .map(|notification| notification.value.last_change())
            .collect();
        assert_eq!(stamps.len(), 16_000);
        assert!(stamps.windows(2).all(|pair| pair[0] <= pair[1]));
    }

    #[test]
    fn test_concurrent_writers() {
        let storage = Arc::new(Storage::new());
        let rx = storage.listen();

        let handles: Vec<_> = (0..4)
            .map(|writer| {
                let storage = storage.clone();
                thread::spawn(move || {
                    for i in 0..25 {
                        storage
                            .set_entry_value(&format!("/writer{writer}/{i}"), Value::double(i as f64))
                            .unwrap();
                    }
                })
            })
            .collect();
        for handle in handles {
            handle.join().unwrap();
        }

        assert_eq!(storage.len(), 100);
        assert_eq!(rx.try_iter().count(), 100);
    }
}
