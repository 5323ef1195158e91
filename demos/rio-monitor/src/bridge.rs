//!
//! Mirrors roboRIO signals into storage entries.
//!

use std::sync::Arc;

use tracing::warn;

use rio_core::{HalValue, NotifyCallback};
use rio_sim::{CallbackStore, RoboRioSim};
use rio_storage::Storage;
use rio_value::Value;

/// Keeps a callback registered on every roboRIO signal that writes the
/// signal to the storage entry `{prefix}{signal name}`.
///
/// Dropping the bridge cancels every callback.
pub struct SignalBridge {
    stores: Vec<CallbackStore>,
}

impl SignalBridge {
    /// Register the bridge callbacks on every signal of `sim`
    pub fn new(sim: &RoboRioSim, storage: Arc<Storage>, prefix: &str) -> Self {
        let prefix = prefix.to_string();
        let callback: NotifyCallback = Arc::new(move |name: &str, value: &HalValue| {
            let entry = format!("{prefix}{name}");
            if let Err(err) = storage.set_entry_value(&entry, to_value(value)) {
                warn!(%err, "could not mirror signal");
            }
        });

        let stores = vec![
            sim.register_fpga_button_callback(callback.clone(), true),
            sim.register_vin_voltage_callback(callback.clone(), true),
            sim.register_vin_current_callback(callback.clone(), true),
            sim.register_user_voltage_6v_callback(callback.clone(), true),
            sim.register_user_current_6v_callback(callback.clone(), true),
            sim.register_user_active_6v_callback(callback.clone(), true),
            sim.register_user_voltage_5v_callback(callback.clone(), true),
            sim.register_user_current_5v_callback(callback.clone(), true),
            sim.register_user_active_5v_callback(callback.clone(), true),
            sim.register_user_voltage_3v3_callback(callback.clone(), true),
            sim.register_user_current_3v3_callback(callback.clone(), true),
            sim.register_user_active_3v3_callback(callback.clone(), true),
            sim.register_user_faults_6v_callback(callback.clone(), true),
            sim.register_user_faults_5v_callback(callback.clone(), true),
            sim.register_user_faults_3v3_callback(callback, true),
        ];

        Self { stores }
    }

    /// The number of signals being mirrored
    pub fn signal_count(&self) -> usize {
        self.stores.len()
    }
}

/// Fault counters have no integer value type so they are stored as doubles
fn to_value(value: &HalValue) -> Value {
    match *value {
        HalValue::Boolean(value) => Value::boolean(value),
        HalValue::Double(value) => Value::double(value),
        HalValue::Int(value) => Value::double(f64::from(value)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use rio_hal::RoboRioData;

    #[test]
    /// The bridge should seed an entry for every signal and follow changes
    /// until it is dropped
    fn test_bridge_mirrors_signals() {
        let data = Arc::new(RoboRioData::new());
        let sim = RoboRioSim::with_data(data.clone());
        let storage = Arc::new(Storage::new());

        let bridge = SignalBridge::new(&sim, storage.clone(), "/RoboRio/");
        assert_eq!(bridge.signal_count(), 15);
        assert_eq!(storage.len(), 15);
        assert_eq!(storage.get_entry_double("/RoboRio/VInVoltage"), Ok(12.0));
        assert_eq!(storage.get_entry_boolean("/RoboRio/FPGAButton"), Ok(false));

        sim.set_vin_voltage(7.25);
        sim.set_user_faults_5v(2);
        assert_eq!(storage.get_entry_double("/RoboRio/VInVoltage"), Ok(7.25));
        assert_eq!(storage.get_entry_double("/RoboRio/UserFaults5V"), Ok(2.0));

        drop(bridge);
        sim.set_vin_voltage(11.0);
        assert_eq!(storage.get_entry_double("/RoboRio/VInVoltage"), Ok(7.25));
        assert_eq!(data.vin_voltage.callback_count(), 0);
    }
}
