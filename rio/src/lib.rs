//!
//! # Rio
//!
//! Rio is a simulation layer for roboRIO based robots paired with the tagged values used to share
//! robot state between processes.
//!
//! ## Description
//!
//! On a real robot the roboRIO's FPGA reports things like the state of the user button, the input
//! voltage and the state of the three user power rails.  In simulation there is no FPGA, so every
//! one of these signals lives in memory instead.  Robot code reads them exactly as it would on
//! hardware while the simulation (or a unit test) writes them and listens for changes.
//!
//! ## Technical Overview
//!
//! ### Signals
//!
//! Every simulated signal implements the [`SimSignal`](rio_core::SimSignal) trait, which is the
//! whole contract between the simulation and the hardware abstraction layer:
//!
//! * `get` - read the current value
//! * `set` - write a new value, notifying callbacks if the value changed
//! * `register_callback` - listen for changes, optionally being notified right away
//! * `cancel_callback` - stop listening
//!
//! ### RoboRioSim
//!
//! [`RoboRioSim`](rio_sim::RoboRioSim) wraps each signal of the roboRIO in a `get_*`, `set_*`
//! and `register_*_callback` method.  Registering a callback returns a
//! [`CallbackStore`](rio_sim::CallbackStore) which cancels the callback as soon as it is dropped,
//! so a callback can never outlive whoever registered it by accident.
//!
//! ```rust
//! use std::sync::Arc;
//!
//! use rio::prelude::*;
//!
//! let sim = RoboRioSim::with_data(Arc::new(RoboRioData::new()));
//! let _store = sim.register_vin_voltage_callback(
//!     Arc::new(|name: &str, value: &HalValue| println!("{name} is now {value}")),
//!     true,
//! );
//! sim.set_vin_voltage(6.8);
//! assert_eq!(sim.get_vin_voltage(), 6.8);
//! ```
//!
//! ### Values
//!
//! A [`Value`](rio_value::Value) is a dynamically typed piece of data: a boolean, a double, a
//! string, raw bytes or an array of booleans, doubles or strings.  Values own their buffers and
//! are move-only, changing the type of a value simply drops the old payload.
//!
//! ```rust
//! use rio::prelude::*;
//!
//! let mut value = Value::new();
//! value.set_double(2.5);
//! assert_eq!(value.get_double(), Ok(2.5));
//! value.set_boolean(true);
//! assert_eq!(value.value_type(), ValueType::Boolean);
//! assert!(value.get_double().is_err());
//! ```
//!
//! ### Storage
//!
//! A [`Storage`](rio_storage::Storage) keeps one value per entry name, stamps every write with
//! its clock and notifies subscribers of every change.  It is the piece a synchronization layer
//! would share with other peers.
//!

pub mod prelude;

/// Rio Core Traits
pub use rio_core as core;
/// Rio Simulated Hardware Abstraction Layer
pub use rio_hal as hal;
/// Rio Simulation Bindings
pub use rio_sim as sim;
/// Rio Entry Storage
pub use rio_storage as storage;
/// Rio Tagged Values
pub use rio_value as value;
