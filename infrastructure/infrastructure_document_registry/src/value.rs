//! Values Module
//!
//! The dynamic value passed between the registry and its codecs, and the
//! `Encodable`/`Decodable` traits that map typed Rust values onto it.
//!
//! Absent structured values are `None` inside their `KnownValue` variant, so
//! a missing `Duration` still carries its type and can be routed to the
//! duration codec, which then writes the document's null.

use chrono::{DateTime, FixedOffset, TimeDelta, Utc};
use entities_known_types::{
    Duration, ObjectId, Scalar, ScalarKind, Timestamp, Wrapper, WrapperPayload,
};

use crate::error::CodecError;
use crate::object_id::ObjectIdBytes;
use crate::types::{KnownType, PrimitiveKind, TypeKey};

/// Value of a kind the document layer stores natively
#[derive(Clone, Debug, PartialEq)]
pub enum PrimitiveValue {
    Null,
    Scalar(Scalar),
    Elapsed(TimeDelta),
    DateTime(DateTime<FixedOffset>),
    ObjectId(ObjectIdBytes),
}

impl PrimitiveValue {
    pub fn kind(&self) -> PrimitiveKind {
        match self {
            PrimitiveValue::Null => PrimitiveKind::Null,
            PrimitiveValue::Scalar(scalar) => scalar.kind().into(),
            PrimitiveValue::Elapsed(_) => PrimitiveKind::Elapsed,
            PrimitiveValue::DateTime(_) => PrimitiveKind::DateTime,
            PrimitiveValue::ObjectId(_) => PrimitiveKind::ObjectId,
        }
    }
}

/// Possibly absent well-known structured value
#[derive(Clone, Debug, PartialEq)]
pub enum KnownValue {
    Wrapper(ScalarKind, Option<Scalar>),
    Duration(Option<Duration>),
    Timestamp(Option<Timestamp>),
    ObjectId(Option<ObjectId>),
}

impl KnownValue {
    pub fn known_type(&self) -> KnownType {
        match self {
            KnownValue::Wrapper(kind, _) => KnownType::Wrapper(*kind),
            KnownValue::Duration(_) => KnownType::Duration,
            KnownValue::Timestamp(_) => KnownType::Timestamp,
            KnownValue::ObjectId(_) => KnownType::ObjectId,
        }
    }

    /// Absent value of the given type
    pub fn absent(known: KnownType) -> Self {
        match known {
            KnownType::Wrapper(kind) => KnownValue::Wrapper(kind, None),
            KnownType::Duration => KnownValue::Duration(None),
            KnownType::Timestamp => KnownValue::Timestamp(None),
            KnownType::ObjectId => KnownValue::ObjectId(None),
        }
    }

    pub fn is_absent(&self) -> bool {
        match self {
            KnownValue::Wrapper(_, v) => v.is_none(),
            KnownValue::Duration(v) => v.is_none(),
            KnownValue::Timestamp(v) => v.is_none(),
            KnownValue::ObjectId(v) => v.is_none(),
        }
    }
}

/// Any value a codec can be asked to encode or produce
#[derive(Clone, Debug, PartialEq)]
pub enum Value {
    Primitive(PrimitiveValue),
    Known(KnownValue),
}

impl Value {
    pub fn type_key(&self) -> TypeKey {
        match self {
            Value::Primitive(p) => TypeKey::Primitive(p.kind()),
            Value::Known(k) => TypeKey::Known(k.known_type()),
        }
    }
}

impl From<PrimitiveValue> for Value {
    fn from(value: PrimitiveValue) -> Self {
        Value::Primitive(value)
    }
}

impl From<KnownValue> for Value {
    fn from(value: KnownValue) -> Self {
        Value::Known(value)
    }
}

/// Typed values that can be handed to the registry for encoding
pub trait Encodable {
    fn to_value(&self) -> Value;
}

/// Typed values the registry can decode into
pub trait Decodable: Sized {
    /// Key of the codec that produces this type
    fn type_key() -> TypeKey;

    fn from_value(value: Value) -> Result<Self, CodecError>;
}

fn unsupported(value: &Value) -> CodecError {
    CodecError::UnsupportedValue(value.type_key())
}

macro_rules! scalar_value {
    ($ty:ty) => {
        impl Encodable for $ty {
            fn to_value(&self) -> Value {
                Value::Primitive(PrimitiveValue::Scalar(self.clone().into_scalar()))
            }
        }

        impl Decodable for $ty {
            fn type_key() -> TypeKey {
                TypeKey::Primitive(<$ty as WrapperPayload>::KIND.into())
            }

            fn from_value(value: Value) -> Result<Self, CodecError> {
                match value {
                    Value::Primitive(PrimitiveValue::Scalar(scalar)) => {
                        <$ty as WrapperPayload>::from_scalar(scalar)
                            .map_err(|other| unsupported(&PrimitiveValue::Scalar(other).into()))
                    }
                    other => Err(unsupported(&other)),
                }
            }
        }
    };
}

scalar_value!(bool);
scalar_value!(Vec<u8>);
scalar_value!(f64);
scalar_value!(f32);
scalar_value!(i32);
scalar_value!(i64);
scalar_value!(String);
scalar_value!(u32);
scalar_value!(u64);

impl Encodable for TimeDelta {
    fn to_value(&self) -> Value {
        Value::Primitive(PrimitiveValue::Elapsed(*self))
    }
}

impl Decodable for TimeDelta {
    fn type_key() -> TypeKey {
        TypeKey::Primitive(PrimitiveKind::Elapsed)
    }

    fn from_value(value: Value) -> Result<Self, CodecError> {
        match value {
            Value::Primitive(PrimitiveValue::Elapsed(delta)) => Ok(delta),
            other => Err(unsupported(&other)),
        }
    }
}

impl Encodable for DateTime<FixedOffset> {
    fn to_value(&self) -> Value {
        Value::Primitive(PrimitiveValue::DateTime(*self))
    }
}

impl Encodable for DateTime<Utc> {
    fn to_value(&self) -> Value {
        Value::Primitive(PrimitiveValue::DateTime(self.fixed_offset()))
    }
}

impl Decodable for DateTime<FixedOffset> {
    fn type_key() -> TypeKey {
        TypeKey::Primitive(PrimitiveKind::DateTime)
    }

    fn from_value(value: Value) -> Result<Self, CodecError> {
        match value {
            Value::Primitive(PrimitiveValue::DateTime(t)) => Ok(t),
            other => Err(unsupported(&other)),
        }
    }
}

impl Decodable for DateTime<Utc> {
    fn type_key() -> TypeKey {
        TypeKey::Primitive(PrimitiveKind::DateTime)
    }

    fn from_value(value: Value) -> Result<Self, CodecError> {
        DateTime::<FixedOffset>::from_value(value).map(|t| t.with_timezone(&Utc))
    }
}

impl Encodable for ObjectIdBytes {
    fn to_value(&self) -> Value {
        Value::Primitive(PrimitiveValue::ObjectId(*self))
    }
}

impl Decodable for ObjectIdBytes {
    fn type_key() -> TypeKey {
        TypeKey::Primitive(PrimitiveKind::ObjectId)
    }

    fn from_value(value: Value) -> Result<Self, CodecError> {
        match value {
            Value::Primitive(PrimitiveValue::ObjectId(id)) => Ok(id),
            other => Err(unsupported(&other)),
        }
    }
}

impl<T: WrapperPayload> Encodable for Option<Wrapper<T>> {
    fn to_value(&self) -> Value {
        let payload = self.as_ref().map(|w| w.clone().into_scalar());
        Value::Known(KnownValue::Wrapper(T::KIND, payload))
    }
}

impl<T: WrapperPayload> Decodable for Option<Wrapper<T>> {
    fn type_key() -> TypeKey {
        TypeKey::wrapper(T::KIND)
    }

    fn from_value(value: Value) -> Result<Self, CodecError> {
        match value {
            Value::Known(KnownValue::Wrapper(kind, payload)) if kind == T::KIND => payload
                .map(|scalar| {
                    Wrapper::<T>::from_scalar(scalar).map_err(|other| {
                        unsupported(&KnownValue::Wrapper(other.kind(), Some(other)).into())
                    })
                })
                .transpose(),
            other => Err(unsupported(&other)),
        }
    }
}

macro_rules! known_value {
    ($ty:ty, $variant:ident) => {
        impl Encodable for Option<$ty> {
            fn to_value(&self) -> Value {
                Value::Known(KnownValue::$variant(self.clone()))
            }
        }

        impl Decodable for Option<$ty> {
            fn type_key() -> TypeKey {
                TypeKey::Known(KnownType::$variant)
            }

            fn from_value(value: Value) -> Result<Self, CodecError> {
                match value {
                    Value::Known(KnownValue::$variant(v)) => Ok(v),
                    other => Err(unsupported(&other)),
                }
            }
        }
    };
}

known_value!(Duration, Duration);
known_value!(Timestamp, Timestamp);
known_value!(ObjectId, ObjectId);
