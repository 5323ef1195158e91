//!
//! The most commonly used types and traits of Rio.
//!

pub use rio_core::{HalValue, NotifyCallback, Publisher, SimSignal, Subscriber};
pub use rio_hal::{roborio_data, RoboRioData, SimDataValue};
pub use rio_sim::{CallbackStore, RoboRioSim};
pub use rio_storage::{EntryNotification, NotifyKind, Storage, StorageError};
pub use rio_value::{StringValue, Value, ValueData, ValueError, ValueType};
