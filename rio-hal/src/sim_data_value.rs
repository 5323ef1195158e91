//!
//! A Single Simulated Signal
//!
//! SimDataValue stores the current value of one signal along with the
//! callbacks interested in it.  Callbacks are only run when a write actually
//! changes the value, and they are always run after the internal lock has
//! been released so a callback is free to read or write the signal again.
//!

use parking_lot::Mutex;
use tracing::{debug, trace, warn};

use rio_core::{HalValue, NotifyCallback, SimSignal};

/// The types a simulated signal can hold.
pub trait SimType: Copy + PartialEq + Into<HalValue> + Send + 'static {}

impl SimType for bool {}
impl SimType for f64 {}
impl SimType for i32 {}

/// The mutable state of a signal
struct SimDataInner<T> {
    /// The current value of the signal
    value: T,
    /// The registered callbacks and their uids in registration order
    callbacks: Vec<(i32, NotifyCallback)>,
    /// The uid handed to the next registered callback, `None` once every
    /// positive uid has been handed out
    next_uid: Option<i32>,
}

/// A named simulated signal.
pub struct SimDataValue<T: SimType> {
    /// The name passed to callbacks
    name: &'static str,
    /// The value the signal holds after a reset
    default: T,
    /// The value and callbacks of the signal
    inner: Mutex<SimDataInner<T>>,
}

impl<T: SimType> SimDataValue<T> {
    /// Create a new signal holding its default value
    pub fn new(name: &'static str, default: T) -> Self {
        Self {
            name,
            default,
            inner: Mutex::new(SimDataInner {
                value: default,
                callbacks: Vec::new(),
                next_uid: Some(1),
            }),
        }
    }

    /// The name of the signal
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// The value the signal holds after a reset
    pub fn default_value(&self) -> T {
        self.default
    }

    /// The number of callbacks currently registered
    pub fn callback_count(&self) -> usize {
        self.inner.lock().callbacks.len()
    }

    /// Restore the default value and drop every registered callback.
    ///
    /// Note: uids are never reused, even across resets, so a stale uid can
    /// never cancel a callback registered after the reset.
    pub fn reset(&self) {
        let mut inner = self.inner.lock();
        inner.value = self.default;
        inner.callbacks.clear();
        debug!(signal = self.name, "reset simulated signal");
    }
}

impl<T: SimType> SimSignal for SimDataValue<T> {
    type Data = T;

    fn get(&self) -> Self::Data {
        self.inner.lock().value
    }

    fn set(&self, data: Self::Data) {
        let callbacks: Vec<NotifyCallback> = {
            let mut inner = self.inner.lock();
            if inner.value == data {
                return;
            }
            inner.value = data;
            inner.callbacks.iter().map(|(_, callback)| callback.clone()).collect()
        };

        let value: HalValue = data.into();
        for callback in callbacks {
            callback(self.name, &value);
        }
    }

    /// Note: once `i32::MAX` has been handed out the signal refuses further
    /// registrations and returns 0, which no registered callback ever uses.
    fn register_callback(&self, callback: NotifyCallback, initial_notify: bool) -> i32 {
        let (uid, current) = {
            let mut inner = self.inner.lock();
            let Some(uid) = inner.next_uid else {
                warn!(signal = self.name, "callback uids exhausted, registration refused");
                return 0;
            };
            inner.next_uid = uid.checked_add(1);
            inner.callbacks.push((uid, callback.clone()));
            (uid, inner.value)
        };
        trace!(signal = self.name, uid, initial_notify, "registered callback");

        if initial_notify {
            callback(self.name, &current.into());
        }
        uid
    }

    fn cancel_callback(&self, uid: i32) {
        let mut inner = self.inner.lock();
        let before = inner.callbacks.len();
        inner.callbacks.retain(|(id, _)| *id != uid);
        if inner.callbacks.len() != before {
            trace!(signal = self.name, uid, "cancelled callback");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use std::sync::Arc;

    use crossbeam::channel::{unbounded, Receiver};
    use rand::random;

    fn recording_callback() -> (NotifyCallback, Receiver<(String, HalValue)>) {
        let (tx, rx) = unbounded();
        let callback: NotifyCallback = Arc::new(move |name: &str, value: &HalValue| {
            tx.send((name.to_string(), *value)).unwrap();
        });
        (callback, rx)
    }

    #[test]
    fn test_get_set() {
        let signal = SimDataValue::new("VInVoltage", 12.0);
        assert_eq!(signal.get(), 12.0);

        let voltage: f64 = random();
        signal.set(voltage);
        assert_eq!(signal.get(), voltage);
        assert_eq!(signal.default_value(), 12.0);
    }

    #[test]
    /// Registering with an initial notify should call the callback once
    /// immediately with the current value
    fn test_register_initial_notify() {
        let signal = SimDataValue::new("UserFaults6V", 3i32);
        let (callback, rx) = recording_callback();

        let uid = signal.register_callback(callback, true);

        assert!(uid > 0);
        assert_eq!(
            rx.try_iter().collect::<Vec<_>>(),
            vec![(String::from("UserFaults6V"), HalValue::Int(3))]
        );
    }

    #[test]
    fn test_register_without_initial_notify() {
        let signal = SimDataValue::new("FPGAButton", false);
        let (callback, rx) = recording_callback();

        signal.register_callback(callback, false);

        assert!(rx.try_recv().is_err());
    }

    #[test]
    /// Writing the value the signal already holds should not notify anyone
    fn test_set_notifies_on_change_only() {
        let signal = SimDataValue::new("UserActive5V", false);
        let (callback, rx) = recording_callback();
        signal.register_callback(callback, false);

        signal.set(false);
        assert!(rx.try_recv().is_err());

        signal.set(true);
        signal.set(true);
        assert_eq!(
            rx.try_iter().collect::<Vec<_>>(),
            vec![(String::from("UserActive5V"), HalValue::Boolean(true))]
        );
    }

    #[test]
    fn test_every_callback_is_notified() {
        let signal = SimDataValue::new("VInCurrent", 0.0);
        let (first, first_rx) = recording_callback();
        let (second, second_rx) = recording_callback();
        let first_uid = signal.register_callback(first, false);
        let second_uid = signal.register_callback(second, false);

        assert!(second_uid > first_uid);

        signal.set(1.5);
        assert_eq!(first_rx.try_iter().count(), 1);
        assert_eq!(second_rx.try_iter().count(), 1);
    }

    #[test]
    fn test_cancel_callback() {
        let signal = SimDataValue::new("UserCurrent3V3", 0.0);
        let (callback, rx) = recording_callback();
        let uid = signal.register_callback(callback, false);

        signal.cancel_callback(uid);
        signal.cancel_callback(uid + 100);
        signal.set(0.25);

        assert_eq!(signal.callback_count(), 0);
        assert!(rx.try_recv().is_err());
    }

    #[test]
    /// Reset should restore the default value and drop every callback
    /// without ever reusing a uid
    fn test_reset() {
        let signal = SimDataValue::new("UserVoltage3V3", 3.3);
        let (callback, rx) = recording_callback();
        let uid = signal.register_callback(callback.clone(), false);
        signal.set(2.9);
        rx.try_iter().for_each(drop);

        signal.reset();

        assert_eq!(signal.get(), 3.3);
        assert_eq!(signal.callback_count(), 0);
        signal.set(1.0);
        assert!(rx.try_recv().is_err());
        assert!(signal.register_callback(callback, false) > uid);
    }

    #[test]
    /// Registering past the last uid should be refused instead of wrapping
    /// around to a uid that is already in use
    fn test_uid_exhaustion() {
        let signal = SimDataValue::new("BrownoutVoltage", 6.75);
        signal.inner.lock().next_uid = Some(i32::MAX);
        let (callback, rx) = recording_callback();

        assert_eq!(signal.register_callback(callback.clone(), false), i32::MAX);
        assert_eq!(signal.register_callback(callback.clone(), true), 0);
        assert_eq!(signal.register_callback(callback, false), 0);
        assert_eq!(signal.callback_count(), 1);
        assert!(rx.try_recv().is_err());

        signal.cancel_callback(0);
        assert_eq!(signal.callback_count(), 1);
        signal.set(6.5);
        assert_eq!(rx.try_iter().count(), 1);
    }

    #[test]
    /// Callbacks run outside the lock so they can read the signal
    fn test_callback_can_reenter_signal() {
        let signal = Arc::new(SimDataValue::new("UserVoltage5V", 5.0));
        let (tx, rx) = unbounded();
        let reader = signal.clone();
        signal.register_callback(
            Arc::new(move |_: &str, _: &HalValue| {
                tx.send(reader.get()).unwrap();
            }),
            false,
        );

        signal.set(4.5);

        assert_eq!(rx.try_recv(), Ok(4.5));
    }
}
