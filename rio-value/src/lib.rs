//!
//! Tagged Values for Rio
//!
//! A [`Value`] is a dynamically typed piece of data (a boolean, a double,
//! a string, a raw byte buffer or an array of booleans, doubles or strings)
//! along with the time it was last changed.  Values are what gets stored
//! under a name in an entry storage and shared between the simulated
//! hardware and the robot code.
//!
//! Values own their buffers outright and are move-only.  Duplicating a
//! value is always an explicit [`Value::duplicate`].
//!

#![deny(unsafe_code)]
#![deny(missing_docs)]

pub mod error;
pub use error::ValueError;

pub mod string_value;
pub use string_value::StringValue;

pub mod value_type;
pub use value_type::ValueType;

pub mod value;
pub use value::{Value, ValueData};
