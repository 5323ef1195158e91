//!
//! This demo drives a simulated roboRIO through repeated brownouts and
//! mirrors every roboRIO signal into an entry storage under `/RoboRio/`.
//!
//! The brownout simulation writes the input voltage and rail states, the
//! signal bridge turns each change into a storage entry and the monitor
//! prints the entries whenever they change.  Press Ctrl-C to stop.
//!
//! Logging is controlled with `RUST_LOG` (for example `RUST_LOG=debug`).
//!

#![deny(missing_docs)]

use std::{sync::Arc, time::Duration};

use crossbeam::channel::{unbounded, RecvTimeoutError};
use tracing::info;
use tracing_subscriber::EnvFilter;

use rio_sim::RoboRioSim;
use rio_storage::Storage;

pub mod brownout;
use brownout::BrownoutSimulation;

pub mod bridge;
use bridge::SignalBridge;

pub mod monitor;
use monitor::StorageMonitor;

/// The time between simulation steps
const STEP: Duration = Duration::from_millis(100);

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let storage = Arc::new(Storage::new());
    let sim = RoboRioSim::new();
    sim.reset_data();

    let bridge = SignalBridge::new(&sim, storage.clone(), "/RoboRio/");
    let mut monitor = StorageMonitor::new(storage.subscribe());
    let mut simulation = BrownoutSimulation::new(sim.clone());

    let (tx, rx) = unbounded();
    ctrlc::set_handler(move || tx.send(()).expect("Could not send interrupt"))
        .expect("Error setting Ctrl-C handler");

    info!(signals = bridge.signal_count(), "monitoring simulated roboRIO");
    loop {
        simulation.step();
        monitor.print_changes();

        match rx.recv_timeout(STEP) {
            Ok(()) | Err(RecvTimeoutError::Disconnected) => break,
            Err(RecvTimeoutError::Timeout) => {}
        }
    }

    drop(bridge);
    info!(entries = storage.len(), "stopped monitoring");
}
