//! Codec Errors Module

use entities_known_types::ValidationError;
use thiserror::Error;

use crate::types::{KnownType, PrimitiveKind, TypeKey};

/// Errors raised while encoding or decoding through the registry
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CodecError {
    /// Nothing is registered under the key
    #[error("no codec registered for {0}")]
    NoCodec(TypeKey),

    /// The document holds a different kind of value than requested
    #[error("expected {expected} but found {found}")]
    TypeMismatch {
        expected: &'static str,
        found: &'static str,
    },

    /// The reader has no values left
    #[error("unexpected end of document")]
    UnexpectedEndOfDocument,

    /// A codec was handed a value of a type it does not serve
    #[error("codec cannot handle a value of type {0}")]
    UnsupportedValue(TypeKey),

    /// A structured value failed its structural checks
    #[error("invalid {shape} value: {source}")]
    Validation {
        shape: KnownType,
        source: ValidationError,
    },

    /// An identifier string is not 24 hexadecimal characters
    #[error("invalid object id {0:?}")]
    InvalidObjectId(String),

    /// A value does not fit the native representation
    #[error("{kind} value out of range: {detail}")]
    Overflow { kind: PrimitiveKind, detail: String },
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error;

    #[test]
    fn test_validation_error_has_source() {
        let error = CodecError::Validation {
            shape: KnownType::Duration,
            source: ValidationError::DurationSignMismatch {
                seconds: 1,
                nanos: -1,
            },
        };
        assert!(error.source().is_some());
        assert!(error.to_string().starts_with("invalid google.protobuf.Duration value"));
    }

    #[test]
    fn test_no_codec_names_key() {
        let error = CodecError::NoCodec(TypeKey::Primitive(PrimitiveKind::Float));
        assert_eq!(error.to_string(), "no codec registered for float");
    }
}
