//!
//! The type tag of a Value
//!

use std::fmt;

/// The type of data held by a [`Value`](crate::Value).
///
/// The discriminants are bit flags so that a set of types can be expressed
/// as a mask (for example when filtering entry notifications by type).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[repr(u32)]
pub enum ValueType {
    /// No value has been assigned yet
    #[default]
    Unassigned = 0x00,
    /// A single boolean
    Boolean = 0x01,
    /// A single double
    Double = 0x02,
    /// A UTF-8 string
    String = 0x04,
    /// An arbitrary byte buffer
    Raw = 0x08,
    /// An array of booleans
    BooleanArray = 0x10,
    /// An array of doubles
    DoubleArray = 0x20,
    /// An array of strings
    StringArray = 0x40,
}

impl ValueType {
    /// Get the bit flag of this type
    pub fn bits(self) -> u32 {
        self as u32
    }

    /// Get the type with the given bit flag, if there is one
    pub fn from_bits(bits: u32) -> Option<Self> {
        match bits {
            0x00 => Some(ValueType::Unassigned),
            0x01 => Some(ValueType::Boolean),
            0x02 => Some(ValueType::Double),
            0x04 => Some(ValueType::String),
            0x08 => Some(ValueType::Raw),
            0x10 => Some(ValueType::BooleanArray),
            0x20 => Some(ValueType::DoubleArray),
            0x40 => Some(ValueType::StringArray),
            _ => None,
        }
    }

    /// Whether values of this type own an array buffer
    pub fn is_array(self) -> bool {
        matches!(
            self,
            ValueType::BooleanArray | ValueType::DoubleArray | ValueType::StringArray
        )
    }
}

impl fmt::Display for ValueType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ValueType::Unassigned => "unassigned",
            ValueType::Boolean => "boolean",
            ValueType::Double => "double",
            ValueType::String => "string",
            ValueType::Raw => "raw",
            ValueType::BooleanArray => "boolean[]",
            ValueType::DoubleArray => "double[]",
            ValueType::StringArray => "string[]",
        };
        f.write_str(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_value_type_bits() {
        let types = [
            ValueType::Unassigned,
            ValueType::Boolean,
            ValueType::Double,
            ValueType::String,
            ValueType::Raw,
            ValueType::BooleanArray,
            ValueType::DoubleArray,
            ValueType::StringArray,
        ];
        for value_type in types {
            assert_eq!(ValueType::from_bits(value_type.bits()), Some(value_type));
        }
        assert_eq!(ValueType::from_bits(0x80), None);
        assert_eq!(ValueType::from_bits(0x03), None);
    }

    #[test]
    fn test_value_type_is_array() {
        assert!(ValueType::StringArray.is_array());
        assert!(ValueType::BooleanArray.is_array());
        assert!(!ValueType::Raw.is_array());
        assert!(!ValueType::Unassigned.is_array());
    }

    #[test]
    fn test_value_type_display() {
        assert_eq!(ValueType::DoubleArray.to_string(), "double[]");
        assert_eq!(ValueType::Unassigned.to_string(), "unassigned");
    }
}
