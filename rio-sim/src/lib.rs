//!
//! Simulation Bindings for Robot Code
//!
//! The bindings in this crate let a simulation (or a test) drive the
//! simulated hardware that robot code reads from.  Every signal can be read,
//! written and observed, and every observation is handed back as a
//! [`CallbackStore`] that cancels itself when dropped.
//!

#![deny(unsafe_code)]
#![deny(missing_docs)]

pub mod callback_store;
pub use callback_store::CallbackStore;

pub mod roborio_sim;
pub use roborio_sim::RoboRioSim;
