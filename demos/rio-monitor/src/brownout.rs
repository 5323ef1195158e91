//!
//! A simple brownout model for the roboRIO.
//!
//! The input voltage sags linearly from 12.5V and recovers once it hits
//! 6V.  Below 6.8V the roboRIO disables its user rails and counts a fault
//! on each of them, just like the real controller does when browning out.
//!

use rio_sim::RoboRioSim;

/// Below this input voltage the user rails are disabled
const BROWNOUT_VOLTAGE: f64 = 6.8;
/// The input voltage the sag starts from
const NOMINAL_VOLTAGE: f64 = 12.5;
/// The lowest input voltage before the battery recovers
const MINIMUM_VOLTAGE: f64 = 6.0;
/// The voltage lost every step
const SAG_PER_STEP: f64 = 0.25;

/// Drives the roboRIO input voltage, current and rails
pub struct BrownoutSimulation {
    sim: RoboRioSim,
    voltage: f64,
    browned_out: bool,
}

impl BrownoutSimulation {
    /// Create a new brownout simulation starting at the nominal voltage
    pub fn new(sim: RoboRioSim) -> Self {
        sim.set_vin_voltage(NOMINAL_VOLTAGE);
        set_rails_active(&sim, true);

        Self {
            sim,
            voltage: NOMINAL_VOLTAGE,
            browned_out: false,
        }
    }

    /// Advance the simulation by one step
    pub fn step(&mut self) {
        self.voltage -= SAG_PER_STEP;
        if self.voltage < MINIMUM_VOLTAGE {
            self.voltage = NOMINAL_VOLTAGE;
        }

        self.sim.set_vin_voltage(self.voltage);
        // Current draw rises as the battery sags
        self.sim.set_vin_current((NOMINAL_VOLTAGE - self.voltage) * 4.0);

        let browned_out = self.voltage < BROWNOUT_VOLTAGE;
        if browned_out && !self.browned_out {
            self.sim.set_user_faults_6v(self.sim.get_user_faults_6v() + 1);
            self.sim.set_user_faults_5v(self.sim.get_user_faults_5v() + 1);
            self.sim.set_user_faults_3v3(self.sim.get_user_faults_3v3() + 1);
        }
        if browned_out != self.browned_out {
            set_rails_active(&self.sim, !browned_out);
            self.browned_out = browned_out;
        }
    }
}

fn set_rails_active(sim: &RoboRioSim, active: bool) {
    sim.set_user_active_6v(active);
    sim.set_user_active_5v(active);
    sim.set_user_active_3v3(active);
}
