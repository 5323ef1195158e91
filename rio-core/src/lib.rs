//!
//! Rio-Core is a collection of traits that layout the core of the
//! rio simulation framework.
//!
//! The simulated hardware abstraction layer exposes every signal through
//! the same four primitives (get, set, register a callback, cancel a callback)
//! so the traits here are all that the binding layer needs to know about
//! the signals it forwards to.
//!

#![deny(unsafe_code)]
#![deny(missing_docs)]

pub mod signal;
pub use signal::{HalValue, NotifyCallback, SimSignal};

pub mod publisher_subscriber;
pub use publisher_subscriber::{Publisher, Subscriber};
