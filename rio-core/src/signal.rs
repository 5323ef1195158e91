//!
//! Simulated Hardware Signals
//!
//! Every piece of simulated hardware state (a button, a rail voltage,
//! a fault counter) is a signal.  A signal can be read, written and
//! observed through callbacks that fire whenever its value changes.
//!

use std::{fmt, sync::Arc};

/// The value handed to a notify callback when a signal changes.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum HalValue {
    /// A boolean signal (buttons, rail enables)
    Boolean(bool),
    /// A floating point signal (voltages, currents)
    Double(f64),
    /// An integer signal (fault counters)
    Int(i32),
}

impl fmt::Display for HalValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HalValue::Boolean(value) => write!(f, "{value}"),
            HalValue::Double(value) => write!(f, "{value}"),
            HalValue::Int(value) => write!(f, "{value}"),
        }
    }
}

impl From<bool> for HalValue {
    fn from(value: bool) -> Self {
        HalValue::Boolean(value)
    }
}

impl From<f64> for HalValue {
    fn from(value: f64) -> Self {
        HalValue::Double(value)
    }
}

impl From<i32> for HalValue {
    fn from(value: i32) -> Self {
        HalValue::Int(value)
    }
}

/// Callback invoked with the name of the signal and its new value.
pub type NotifyCallback = Arc<dyn Fn(&str, &HalValue) + Send + Sync>;

/// The per-signal contract of the hardware abstraction layer.
///
/// Note: all methods take `&self` because signals are shared between the
/// simulation and the robot code under test, so implementors are expected to
/// synchronize internally.
pub trait SimSignal {
    /// The type of data held by the signal
    type Data;

    /// Read the current value of the signal
    fn get(&self) -> Self::Data;

    /// Write a new value to the signal, notifying callbacks if it changed
    fn set(&self, data: Self::Data);

    /// Register a callback for changes to this signal, returning the uid
    /// used to cancel it.
    ///
    /// If `initial_notify` is true the callback is called once immediately
    /// with the current value.  Uids are positive, so 0 never names a
    /// registered callback and is returned when registration is refused.
    fn register_callback(&self, callback: NotifyCallback, initial_notify: bool) -> i32;

    /// Cancel a previously registered callback.  Unknown uids are ignored.
    fn cancel_callback(&self, uid: i32);
}
