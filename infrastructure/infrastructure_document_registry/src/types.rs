//! Type Keys Module
//!
//! The keys a codec is registered under. A key names either a primitive
//! kind the document layer stores natively, or one of the well-known
//! structured types.

use std::fmt;

use entities_known_types::ScalarKind;

/// Value kinds the document layer encodes natively
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum PrimitiveKind {
    Null,
    Bool,
    Bytes,
    Double,
    Float,
    Int32,
    Int64,
    String,
    UInt32,
    UInt64,
    /// Signed elapsed time (`chrono::TimeDelta`)
    Elapsed,
    /// Point in time with an offset (`chrono::DateTime<FixedOffset>`)
    DateTime,
    /// 12-byte identifier
    ObjectId,
}

impl PrimitiveKind {
    pub fn name(self) -> &'static str {
        match self {
            PrimitiveKind::Null => "null",
            PrimitiveKind::Bool => "bool",
            PrimitiveKind::Bytes => "bytes",
            PrimitiveKind::Double => "double",
            PrimitiveKind::Float => "float",
            PrimitiveKind::Int32 => "int32",
            PrimitiveKind::Int64 => "int64",
            PrimitiveKind::String => "string",
            PrimitiveKind::UInt32 => "uint32",
            PrimitiveKind::UInt64 => "uint64",
            PrimitiveKind::Elapsed => "elapsed",
            PrimitiveKind::DateTime => "datetime",
            PrimitiveKind::ObjectId => "objectid",
        }
    }
}

impl From<ScalarKind> for PrimitiveKind {
    fn from(kind: ScalarKind) -> Self {
        match kind {
            ScalarKind::Bool => PrimitiveKind::Bool,
            ScalarKind::Bytes => PrimitiveKind::Bytes,
            ScalarKind::Double => PrimitiveKind::Double,
            ScalarKind::Float => PrimitiveKind::Float,
            ScalarKind::Int32 => PrimitiveKind::Int32,
            ScalarKind::Int64 => PrimitiveKind::Int64,
            ScalarKind::String => PrimitiveKind::String,
            ScalarKind::UInt32 => PrimitiveKind::UInt32,
            ScalarKind::UInt64 => PrimitiveKind::UInt64,
        }
    }
}

impl fmt::Display for PrimitiveKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Well-known structured types with codecs of their own
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum KnownType {
    /// Nullable scalar wrapper of the given payload kind
    Wrapper(ScalarKind),
    Duration,
    Timestamp,
    ObjectId,
}

impl fmt::Display for KnownType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            KnownType::Wrapper(kind) => f.write_str(kind.wrapper_name()),
            KnownType::Duration => f.write_str("google.protobuf.Duration"),
            KnownType::Timestamp => f.write_str("google.protobuf.Timestamp"),
            KnownType::ObjectId => f.write_str("ObjectID"),
        }
    }
}

/// Registration and lookup key of a codec
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum TypeKey {
    Primitive(PrimitiveKind),
    Known(KnownType),
}

impl TypeKey {
    /// Key of the nullable wrapper carrying `kind`
    pub fn wrapper(kind: ScalarKind) -> Self {
        TypeKey::Known(KnownType::Wrapper(kind))
    }
}

impl From<PrimitiveKind> for TypeKey {
    fn from(kind: PrimitiveKind) -> Self {
        TypeKey::Primitive(kind)
    }
}

impl From<KnownType> for TypeKey {
    fn from(known: KnownType) -> Self {
        TypeKey::Known(known)
    }
}

impl fmt::Display for TypeKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TypeKey::Primitive(kind) => kind.fmt(f),
            TypeKey::Known(known) => known.fmt(f),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scalar_kind_maps_to_primitive() {
        assert_eq!(PrimitiveKind::from(ScalarKind::String), PrimitiveKind::String);
        assert_eq!(PrimitiveKind::from(ScalarKind::UInt64), PrimitiveKind::UInt64);
    }

    #[test]
    fn test_display() {
        assert_eq!(TypeKey::from(PrimitiveKind::Int64).to_string(), "int64");
        assert_eq!(
            TypeKey::wrapper(ScalarKind::Bool).to_string(),
            "google.protobuf.BoolValue"
        );
        assert_eq!(
            TypeKey::Known(KnownType::Duration).to_string(),
            "google.protobuf.Duration"
        );
    }
}
