//! Object Identifier Bytes Module
//!
//! The document layer's native 12-byte identifier and its 24-character
//! lowercase hexadecimal form.

use std::fmt;
use std::str::FromStr;

use crate::error::CodecError;

/// Raw 12-byte identifier
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ObjectIdBytes([u8; 12]);

impl ObjectIdBytes {
    pub const fn new(bytes: [u8; 12]) -> Self {
        Self(bytes)
    }

    /// Parse the 24-character hexadecimal form
    pub fn from_hex(s: &str) -> Result<Self, CodecError> {
        let mut bytes = [0u8; 12];
        hex::decode_to_slice(s, &mut bytes)
            .map_err(|_| CodecError::InvalidObjectId(s.to_string()))?;
        Ok(Self(bytes))
    }

    /// Lowercase hexadecimal form
    pub fn to_hex(&self) -> String {
        hex::encode(self.0)
    }

    pub fn bytes(&self) -> [u8; 12] {
        self.0
    }
}

impl FromStr for ObjectIdBytes {
    type Err = CodecError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_hex(s)
    }
}

impl fmt::Display for ObjectIdBytes {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}
