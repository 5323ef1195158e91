//!
//! The Tagged Value
//!
//! A Value holds exactly one payload at a time.  Changing the type of a
//! value drops whatever buffer the previous payload owned before the new
//! payload is installed, so a value can be moved between types freely
//! without any manual cleanup.
//!

use std::mem;

use crate::{StringValue, ValueError, ValueType};

/// The payload of a [`Value`].
///
/// Matching on the payload is the preferred way to read a value of an
/// unknown type, the typed getters on [`Value`] are for when the type is
/// already known.
#[derive(Debug, Default, PartialEq)]
pub enum ValueData {
    /// No value has been assigned yet
    #[default]
    Unassigned,
    /// A single boolean
    Boolean(bool),
    /// A single double
    Double(f64),
    /// A string, stored as its UTF-8 bytes
    String(StringValue),
    /// An arbitrary byte buffer
    Raw(StringValue),
    /// An array of booleans
    BooleanArray(Vec<bool>),
    /// An array of doubles
    DoubleArray(Vec<f64>),
    /// An array of strings
    StringArray(Vec<StringValue>),
}

impl ValueData {
    /// The type tag of this payload
    pub fn value_type(&self) -> ValueType {
        match self {
            ValueData::Unassigned => ValueType::Unassigned,
            ValueData::Boolean(_) => ValueType::Boolean,
            ValueData::Double(_) => ValueType::Double,
            ValueData::String(_) => ValueType::String,
            ValueData::Raw(_) => ValueType::Raw,
            ValueData::BooleanArray(_) => ValueType::BooleanArray,
            ValueData::DoubleArray(_) => ValueType::DoubleArray,
            ValueData::StringArray(_) => ValueType::StringArray,
        }
    }
}

/// A dynamically typed value along with the time it was last changed.
///
/// Values are move-only.  [`Value::take`] moves the payload out of a value
/// that has to stay usable (resetting it to unassigned) and
/// [`Value::duplicate`] makes an explicit deep copy.
///
/// Two values are equal when they hold the same type and the same payload,
/// the last change timestamp is not compared.
#[derive(Debug, Default)]
pub struct Value {
    /// The current payload
    data: ValueData,
    /// The time of the last change to this value
    last_change: u64,
}

impl Value {
    /// Create a new unassigned value
    pub fn new() -> Self {
        Self {
            data: ValueData::Unassigned,
            last_change: 0,
        }
    }

    /// Create a boolean value
    pub fn boolean(value: bool) -> Self {
        let mut new = Self::new();
        new.set_boolean(value);
        new
    }

    /// Create a double value
    pub fn double(value: f64) -> Self {
        let mut new = Self::new();
        new.set_double(value);
        new
    }

    /// Create a string value
    pub fn string(value: impl Into<StringValue>) -> Self {
        let mut new = Self::new();
        new.set_string(value);
        new
    }

    /// Create a raw value
    pub fn raw(value: impl Into<StringValue>) -> Self {
        let mut new = Self::new();
        new.set_raw(value);
        new
    }

    /// Create a boolean array value
    pub fn boolean_array(value: impl Into<Vec<bool>>) -> Self {
        let mut new = Self::new();
        new.set_boolean_array(value);
        new
    }

    /// Create a double array value
    pub fn double_array(value: impl Into<Vec<f64>>) -> Self {
        let mut new = Self::new();
        new.set_double_array(value);
        new
    }

    /// Create a string array value from anything that can be turned into
    /// a sequence of strings
    pub fn string_array<I, S>(values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<StringValue>,
    {
        let mut strings: Vec<StringValue> = values.into_iter().map(Into::into).collect();
        let mut new = Self::new();
        new.set_string_array(&mut strings);
        new
    }

    /// The type of data currently held by this value
    pub fn value_type(&self) -> ValueType {
        self.data.value_type()
    }

    /// Whether a value has been assigned yet
    pub fn is_unassigned(&self) -> bool {
        matches!(self.data, ValueData::Unassigned)
    }

    /// Borrow the payload of this value
    pub fn data(&self) -> &ValueData {
        &self.data
    }

    /// Consume the value and return its payload
    pub fn into_data(self) -> ValueData {
        self.data
    }

    /// The time of the last change to this value
    pub fn last_change(&self) -> u64 {
        self.last_change
    }

    /// Set the time of the last change to this value.
    ///
    /// Note: the typed setters never touch the timestamp, whoever owns the
    /// clock (usually the entry storage) is responsible for stamping values.
    pub fn set_last_change(&mut self, last_change: u64) {
        self.last_change = last_change;
    }

    /// Move the payload and timestamp out of this value, leaving it
    /// unassigned with a timestamp of 0.
    pub fn take(&mut self) -> Value {
        mem::take(self)
    }

    /// Make a deep copy of this value, timestamp included.
    pub fn duplicate(&self) -> Value {
        let mut copy = Value::new();
        match &self.data {
            ValueData::Unassigned => {}
            ValueData::Boolean(value) => copy.set_boolean(*value),
            ValueData::Double(value) => copy.set_double(*value),
            ValueData::String(value) => copy.set_string(value.duplicate()),
            ValueData::Raw(value) => copy.set_raw(value.duplicate()),
            ValueData::BooleanArray(value) => copy.set_boolean_array(value.as_slice()),
            ValueData::DoubleArray(value) => copy.set_double_array(value.as_slice()),
            ValueData::StringArray(value) => {
                let mut strings: Vec<StringValue> =
                    value.iter().map(StringValue::duplicate).collect();
                copy.set_string_array(&mut strings);
            }
        }
        copy.last_change = self.last_change;
        copy
    }

    fn mismatch(&self, expected: ValueType) -> ValueError {
        ValueError::TypeMismatch {
            expected,
            actual: self.value_type(),
        }
    }

    /*
     * Type-Safe Getters
     */

    /// Get the boolean held by this value
    pub fn get_boolean(&self) -> Result<bool, ValueError> {
        match self.data {
            ValueData::Boolean(value) => Ok(value),
            _ => Err(self.mismatch(ValueType::Boolean)),
        }
    }

    /// Get the double held by this value
    pub fn get_double(&self) -> Result<f64, ValueError> {
        match self.data {
            ValueData::Double(value) => Ok(value),
            _ => Err(self.mismatch(ValueType::Double)),
        }
    }

    /// Borrow the string held by this value
    pub fn get_string(&self) -> Result<&StringValue, ValueError> {
        match &self.data {
            ValueData::String(value) => Ok(value),
            _ => Err(self.mismatch(ValueType::String)),
        }
    }

    /// Borrow the raw bytes held by this value
    pub fn get_raw(&self) -> Result<&StringValue, ValueError> {
        match &self.data {
            ValueData::Raw(value) => Ok(value),
            _ => Err(self.mismatch(ValueType::Raw)),
        }
    }

    /// Borrow the boolean array held by this value
    pub fn get_boolean_array(&self) -> Result<&[bool], ValueError> {
        match &self.data {
            ValueData::BooleanArray(value) => Ok(value),
            _ => Err(self.mismatch(ValueType::BooleanArray)),
        }
    }

    /// Borrow the double array held by this value
    pub fn get_double_array(&self) -> Result<&[f64], ValueError> {
        match &self.data {
            ValueData::DoubleArray(value) => Ok(value),
            _ => Err(self.mismatch(ValueType::DoubleArray)),
        }
    }

    /// Borrow the string array held by this value
    pub fn get_string_array(&self) -> Result<&[StringValue], ValueError> {
        match &self.data {
            ValueData::StringArray(value) => Ok(value),
            _ => Err(self.mismatch(ValueType::StringArray)),
        }
    }

    /*
     * Type-Safe Setters
     */

    /// Set this value to a boolean
    pub fn set_boolean(&mut self, value: bool) {
        match &mut self.data {
            ValueData::Boolean(current) => *current = value,
            _ => self.data = ValueData::Boolean(value),
        }
    }

    /// Set this value to a double
    pub fn set_double(&mut self, value: f64) {
        match &mut self.data {
            ValueData::Double(current) => *current = value,
            _ => self.data = ValueData::Double(value),
        }
    }

    /// Set this value to a string.
    ///
    /// Borrowed strings are copied into a new buffer, owned strings and
    /// buffers are moved in without copying.
    pub fn set_string(&mut self, value: impl Into<StringValue>) {
        self.data = ValueData::String(value.into());
    }

    /// Set this value to a raw byte buffer.
    ///
    /// Borrowed bytes are copied into a new buffer, owned buffers are moved
    /// in without copying.
    pub fn set_raw(&mut self, value: impl Into<StringValue>) {
        self.data = ValueData::Raw(value.into());
    }

    /// Set this value to an array of booleans
    pub fn set_boolean_array(&mut self, value: impl Into<Vec<bool>>) {
        self.data = ValueData::BooleanArray(value.into());
    }

    /// Set this value to an array of booleans given as integers where any
    /// non-zero integer is true.
    pub fn set_boolean_array_from_ints(&mut self, value: &[i32]) {
        self.data = ValueData::BooleanArray(value.iter().map(|v| *v != 0).collect());
    }

    /// Set this value to an array of doubles
    pub fn set_double_array(&mut self, value: impl Into<Vec<f64>>) {
        self.data = ValueData::DoubleArray(value.into());
    }

    /// Set this value to an array of strings.
    ///
    /// Note: the strings are moved out of `values`, which keeps its length
    /// but is left holding only empty strings.
    pub fn set_string_array(&mut self, values: &mut [StringValue]) {
        self.data = ValueData::StringArray(values.iter_mut().map(StringValue::take).collect());
    }
}

impl PartialEq for Value {
    fn eq(&self, other: &Self) -> bool {
        self.data == other.data
    }
}

impl From<bool> for Value {
    fn from(value: bool) -> Self {
        Value::boolean(value)
    }
}

impl From<f64> for Value {
    fn from(value: f64) -> Self {
        Value::double(value)
    }
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Value::string(value)
    }
}

impl From<String> for Value {
    fn from(value: String) -> Self {
        Value::string(value)
    }
}

impl From<ValueData> for Value {
    fn from(data: ValueData) -> Self {
        Self {
            data,
            last_change: 0,
        }
    }
}
