//!
//! The Simulated Hardware Abstraction Layer
//!
//! In simulation there is no FPGA to read from so every signal the hardware
//! would normally report lives in memory instead.  Robot code reads the
//! signals as if they came from hardware, while the simulation writes them
//! and observes writes through callbacks.
//!

#![deny(unsafe_code)]
#![deny(missing_docs)]

pub mod sim_data_value;
pub use sim_data_value::{SimDataValue, SimType};

pub mod roborio_data;
pub use roborio_data::{roborio_data, RoboRioData};
