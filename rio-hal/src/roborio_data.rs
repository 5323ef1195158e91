//!
//! The Simulated roboRIO
//!
//! The roboRIO reports the state of its FPGA button, its input power and
//! the three user power rails (6V, 5V and 3.3V).  Each of these is a
//! [`SimDataValue`] in the [`RoboRioData`] table.
//!

use std::sync::{Arc, OnceLock};

use tracing::debug;

use crate::SimDataValue;

/// The table of roboRIO signals shared by the process
static ROBORIO_DATA: OnceLock<Arc<RoboRioData>> = OnceLock::new();

/// Get the roboRIO signal table shared by the whole process.
///
/// Note: tests that need a table nobody else touches should create their
/// own [`RoboRioData`] instead.
pub fn roborio_data() -> Arc<RoboRioData> {
    ROBORIO_DATA
        .get_or_init(|| Arc::new(RoboRioData::new()))
        .clone()
}

macro_rules! roborio_data {
    ($($field: ident: $data_type: ty = $default: expr, $name: literal;)*) => {
        /// The signals reported by a simulated roboRIO
        pub struct RoboRioData {
            $(
                #[doc = concat!("The `", $name, "` signal")]
                pub $field: SimDataValue<$data_type>,
            )*
        }

        impl RoboRioData {
            /// Create a new table with every signal at its default value
            pub fn new() -> Self {
                Self {
                    $($field: SimDataValue::new($name, $default),)*
                }
            }

            /// Reset every signal to its default value and drop all callbacks
            pub fn reset(&self) {
                $(self.$field.reset();)*
                debug!("reset roboRIO data");
            }
        }
    };
}

roborio_data! {
    fpga_button: bool = false, "FPGAButton";
    vin_voltage: f64 = 12.0, "VInVoltage";
    vin_current: f64 = 0.0, "VInCurrent";
    user_voltage_6v: f64 = 6.0, "UserVoltage6V";
    user_current_6v: f64 = 0.0, "UserCurrent6V";
    user_active_6v: bool = false, "UserActive6V";
    user_voltage_5v: f64 = 5.0, "UserVoltage5V";
    user_current_5v: f64 = 0.0, "UserCurrent5V";
    user_active_5v: bool = false, "UserActive5V";
    user_voltage_3v3: f64 = 3.3, "UserVoltage3V3";
    user_current_3v3: f64 = 0.0, "UserCurrent3V3";
    user_active_3v3: bool = false, "UserActive3V3";
    user_faults_6v: i32 = 0, "UserFaults6V";
    user_faults_5v: i32 = 0, "UserFaults5V";
    user_faults_3v3: i32 = 0, "UserFaults3V3";
}

impl Default for RoboRioData {
    fn default() -> Self {
        Self::new()
    }
}
