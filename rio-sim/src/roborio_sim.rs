//!
//! roboRIO Simulation
//!
//! RoboRioSim forwards to the simulated roboRIO signal table.  For each
//! signal there is a `register_*_callback`, a `get_*` and a `set_*` method,
//! all generated from the list at the bottom of this file.
//!

use std::sync::Arc;

use rio_core::{NotifyCallback, SimSignal};
use rio_hal::{roborio_data, RoboRioData};

use crate::CallbackStore;

/// Simulation bindings for the roboRIO's button, input power and user
/// power rails.
#[derive(Clone)]
pub struct RoboRioSim {
    /// The signal table these bindings forward to
    data: Arc<RoboRioData>,
}

impl RoboRioSim {
    /// Create bindings for the roboRIO table shared by the whole process
    pub fn new() -> Self {
        Self {
            data: roborio_data(),
        }
    }

    /// Create bindings for a specific roboRIO table
    pub fn with_data(data: Arc<RoboRioData>) -> Self {
        Self { data }
    }

    /// The signal table these bindings forward to
    pub fn data(&self) -> &Arc<RoboRioData> {
        &self.data
    }

    /// Reset every roboRIO signal to its default value and drop every
    /// registered callback
    pub fn reset_data(&self) {
        self.data.reset();
    }
}

impl Default for RoboRioSim {
    fn default() -> Self {
        Self::new()
    }
}

macro_rules! roborio_sim_signals {
    ($($field: ident: $data_type: ty, $name: literal => $register: ident, $get: ident, $set: ident;)*) => {
        impl RoboRioSim {
            $(
                #[doc = concat!("Register a callback on the `", $name, "` signal.")]
                ///
                /// The callback stays registered until the returned store is dropped.
                pub fn $register(&self, callback: NotifyCallback, initial_notify: bool) -> CallbackStore {
                    let uid = self.data.$field.register_callback(callback, initial_notify);
                    let data = self.data.clone();
                    CallbackStore::new(uid, move |uid| data.$field.cancel_callback(uid))
                }

                #[doc = concat!("Get the value of the `", $name, "` signal")]
                pub fn $get(&self) -> $data_type {
                    self.data.$field.get()
                }

                #[doc = concat!("Set the value of the `", $name, "` signal")]
                pub fn $set(&self, value: $data_type) {
                    self.data.$field.set(value);
                }
            )*
        }
    };
}

roborio_sim_signals! {
    fpga_button: bool, "FPGAButton" => register_fpga_button_callback, get_fpga_button, set_fpga_button;
    vin_voltage: f64, "VInVoltage" => register_vin_voltage_callback, get_vin_voltage, set_vin_voltage;
    vin_current: f64, "VInCurrent" => register_vin_current_callback, get_vin_current, set_vin_current;
    user_voltage_6v: f64, "UserVoltage6V" => register_user_voltage_6v_callback, get_user_voltage_6v, set_user_voltage_6v;
    user_current_6v: f64, "UserCurrent6V" => register_user_current_6v_callback, get_user_current_6v, set_user_current_6v;
    user_active_6v: bool, "UserActive6V" => register_user_active_6v_callback, get_user_active_6v, set_user_active_6v;
    user_voltage_5v: f64, "UserVoltage5V" => register_user_voltage_5v_callback, get_user_voltage_5v, set_user_voltage_5v;
    user_current_5v: f64, "UserCurrent5V" => register_user_current_5v_callback, get_user_current_5v, set_user_current_5v;
    user_active_5v: bool, "UserActive5V" => register_user_active_5v_callback, get_user_active_5v, set_user_active_5v;
    user_voltage_3v3: f64, "UserVoltage3V3" => register_user_voltage_3v3_callback, get_user_voltage_3v3, set_user_voltage_3v3;
    user_current_3v3: f64, "UserCurrent3V3" => register_user_current_3v3_callback, get_user_current_3v3, set_user_current_3v3;
    user_active_3v3: bool, "UserActive3V3" => register_user_active_3v3_callback, get_user_active_3v3, set_user_active_3v3;
    user_faults_6v: i32, "UserFaults6V" => register_user_faults_6v_callback, get_user_faults_6v, set_user_faults_6v;
    user_faults_5v: i32, "UserFaults5V" => register_user_faults_5v_callback, get_user_faults_5v, set_user_faults_5v;
    user_faults_3v3: i32, "UserFaults3V3" => register_user_faults_3v3_callback, get_user_faults_3v3, set_user_faults_3v3;
}
