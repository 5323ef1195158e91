//!
//! Prints storage entries whenever they change.
//!

use std::collections::HashMap;

use rio_core::Subscriber;
use rio_storage::StorageSubscriber;
use rio_value::{Value, ValueData};

/// Prints every entry whose value changed since the last print
pub struct StorageMonitor {
    subscriber: StorageSubscriber,
    /// The last change printed for each entry
    printed: HashMap<String, u64>,
}

impl StorageMonitor {
    /// Create a new monitor for the given subscriber
    pub fn new(subscriber: StorageSubscriber) -> Self {
        Self {
            subscriber,
            printed: HashMap::new(),
        }
    }

    /// Print "{entry}: {value}" for every entry that changed
    pub fn print_changes(&mut self) {
        let mut changed: Vec<(&String, &Value)> = self
            .subscriber
            .get()
            .iter()
            .filter(|(name, value)| self.printed.get(*name) != Some(&value.last_change()))
            .collect();
        changed.sort_by(|a, b| a.0.cmp(b.0));

        for (name, value) in changed {
            println!("{name}: {}", describe(value));
            self.printed.insert(name.clone(), value.last_change());
        }
    }
}

fn describe(value: &Value) -> String {
    match value.data() {
        ValueData::Boolean(value) => value.to_string(),
        ValueData::Double(value) => format!("{value:.2}"),
        other => format!("{other:?}"),
    }
}
