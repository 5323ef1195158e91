//!
//! Owned String and Byte Buffers
//!
//! A StringValue is the buffer behind both string and raw values.  It is a
//! plain sequence of bytes with an explicit length and exactly one owner.
//!

use std::{fmt, mem, str};

use crate::ValueError;

/// An owned, move-only byte buffer.
///
/// StringValue intentionally does not implement `Clone`.  Moving one out of
/// a place that must stay valid is done with [`StringValue::take`], which
/// leaves an empty buffer behind.
#[derive(Debug, Default, PartialEq, Eq, Hash)]
pub struct StringValue {
    /// The bytes owned by this buffer
    bytes: Vec<u8>,
}

impl StringValue {
    /// Create a new empty buffer
    pub fn new() -> Self {
        Self { bytes: Vec::new() }
    }

    /// The number of bytes in the buffer
    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    /// Whether the buffer is empty
    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    /// Borrow the bytes of the buffer
    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    /// Borrow the buffer as a UTF-8 string
    pub fn to_str(&self) -> Result<&str, ValueError> {
        Ok(str::from_utf8(&self.bytes)?)
    }

    /// Move the contents out of this buffer, leaving it empty.
    pub fn take(&mut self) -> StringValue {
        mem::take(self)
    }

    /// Consume the buffer and return the owned bytes
    pub fn into_bytes(self) -> Vec<u8> {
        self.bytes
    }

    /// Copy the bytes of this buffer into a new, independently owned buffer
    pub fn duplicate(&self) -> StringValue {
        StringValue::from(self.as_bytes())
    }
}

impl From<&str> for StringValue {
    fn from(value: &str) -> Self {
        Self {
            bytes: value.as_bytes().to_vec(),
        }
    }
}

impl From<String> for StringValue {
    fn from(value: String) -> Self {
        Self {
            bytes: value.into_bytes(),
        }
    }
}

impl From<&[u8]> for StringValue {
    fn from(value: &[u8]) -> Self {
        Self {
            bytes: value.to_vec(),
        }
    }
}

impl<const N: usize> From<&[u8; N]> for StringValue {
    fn from(value: &[u8; N]) -> Self {
        Self {
            bytes: value.to_vec(),
        }
    }
}

impl From<Vec<u8>> for StringValue {
    fn from(value: Vec<u8>) -> Self {
        Self { bytes: value }
    }
}

impl AsRef<[u8]> for StringValue {
    fn as_ref(&self) -> &[u8] {
        &self.bytes
    }
}

impl PartialEq<str> for StringValue {
    fn eq(&self, other: &str) -> bool {
        self.bytes == other.as_bytes()
    }
}

impl PartialEq<&str> for StringValue {
    fn eq(&self, other: &&str) -> bool {
        self.bytes == other.as_bytes()
    }
}

impl PartialEq<[u8]> for StringValue {
    fn eq(&self, other: &[u8]) -> bool {
        self.bytes == other
    }
}

impl fmt::Display for StringValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&String::from_utf8_lossy(&self.bytes))
    }
}
