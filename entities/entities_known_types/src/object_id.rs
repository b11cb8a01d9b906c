//! Object Identifier Module
//!
//! Message carrying the 24-character hexadecimal form of a 12-byte
//! document identifier. The string is not checked here; codecs parse it
//! when the value crosses into the document layer.

/// Identifier message holding the hexadecimal form of a 12-byte id
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct ObjectId {
    pub value: String,
}

impl ObjectId {
    /// Create an identifier message from its hexadecimal form
    pub fn new(value: impl Into<String>) -> Self {
        Self {
            value: value.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_object_id_new() {
        let id = ObjectId::new("5f1d7a2e9c3b4a0012345678");
        assert_eq!(id.value, "5f1d7a2e9c3b4a0012345678");
    }
}
