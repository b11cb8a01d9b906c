//! Scalar Wrappers Module
//!
//! Nullable wrappers around a single scalar payload field named `value`.
//! The nine wrapper types are one generic `Wrapper<T>` instantiated over the
//! closed set of payload types implementing [`WrapperPayload`]. The payload
//! kind is a compile-time constant of the wrapper type, so codecs never need
//! to discover it at run time.

/// The nine scalar payload kinds a wrapper can hold
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ScalarKind {
    Bool,
    Bytes,
    Double,
    Float,
    Int32,
    Int64,
    String,
    UInt32,
    UInt64,
}

impl ScalarKind {
    /// Every scalar kind, in declaration order
    pub const ALL: [ScalarKind; 9] = [
        ScalarKind::Bool,
        ScalarKind::Bytes,
        ScalarKind::Double,
        ScalarKind::Float,
        ScalarKind::Int32,
        ScalarKind::Int64,
        ScalarKind::String,
        ScalarKind::UInt32,
        ScalarKind::UInt64,
    ];

    /// Fully qualified message name of the wrapper carrying this kind
    pub fn wrapper_name(self) -> &'static str {
        match self {
            ScalarKind::Bool => "google.protobuf.BoolValue",
            ScalarKind::Bytes => "google.protobuf.BytesValue",
            ScalarKind::Double => "google.protobuf.DoubleValue",
            ScalarKind::Float => "google.protobuf.FloatValue",
            ScalarKind::Int32 => "google.protobuf.Int32Value",
            ScalarKind::Int64 => "google.protobuf.Int64Value",
            ScalarKind::String => "google.protobuf.StringValue",
            ScalarKind::UInt32 => "google.protobuf.UInt32Value",
            ScalarKind::UInt64 => "google.protobuf.UInt64Value",
        }
    }
}

/// A scalar payload tagged with its kind
#[derive(Clone, Debug, PartialEq)]
pub enum Scalar {
    Bool(bool),
    Bytes(Vec<u8>),
    Double(f64),
    Float(f32),
    Int32(i32),
    Int64(i64),
    String(String),
    UInt32(u32),
    UInt64(u64),
}

impl Scalar {
    /// Kind of the payload
    pub fn kind(&self) -> ScalarKind {
        match self {
            Scalar::Bool(_) => ScalarKind::Bool,
            Scalar::Bytes(_) => ScalarKind::Bytes,
            Scalar::Double(_) => ScalarKind::Double,
            Scalar::Float(_) => ScalarKind::Float,
            Scalar::Int32(_) => ScalarKind::Int32,
            Scalar::Int64(_) => ScalarKind::Int64,
            Scalar::String(_) => ScalarKind::String,
            Scalar::UInt32(_) => ScalarKind::UInt32,
            Scalar::UInt64(_) => ScalarKind::UInt64,
        }
    }
}

mod sealed {
    pub trait Sealed {}
}

/// Payload types that may occupy a wrapper's `value` field
///
/// This trait is sealed; the nine implementations below are the whole set.
pub trait WrapperPayload: sealed::Sealed + Clone + Sized {
    /// Kind tag of this payload type
    const KIND: ScalarKind;

    /// Tag the payload with its kind
    fn into_scalar(self) -> Scalar;

    /// Take the payload back out of a scalar of the matching kind
    ///
    /// Returns the scalar unchanged if its kind differs.
    fn from_scalar(scalar: Scalar) -> Result<Self, Scalar>;
}

macro_rules! wrapper_payload {
    ($ty:ty, $variant:ident) => {
        impl sealed::Sealed for $ty {}

        impl WrapperPayload for $ty {
            const KIND: ScalarKind = ScalarKind::$variant;

            fn into_scalar(self) -> Scalar {
                Scalar::$variant(self)
            }

            fn from_scalar(scalar: Scalar) -> Result<Self, Scalar> {
                match scalar {
                    Scalar::$variant(value) => Ok(value),
                    other => Err(other),
                }
            }
        }
    };
}

wrapper_payload!(bool, Bool);
wrapper_payload!(Vec<u8>, Bytes);
wrapper_payload!(f64, Double);
wrapper_payload!(f32, Float);
wrapper_payload!(i32, Int32);
wrapper_payload!(i64, Int64);
wrapper_payload!(String, String);
wrapper_payload!(u32, UInt32);
wrapper_payload!(u64, UInt64);

/// Wrapper message with a single scalar field named `value`
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Wrapper<T> {
    pub value: T,
}

impl<T: WrapperPayload> Wrapper<T> {
    /// Wrap a payload
    pub fn new(value: T) -> Self {
        Self { value }
    }

    /// Kind of the payload carried by this wrapper type
    pub fn kind() -> ScalarKind {
        T::KIND
    }

    /// Unwrap into a kind-tagged scalar
    pub fn into_scalar(self) -> Scalar {
        self.value.into_scalar()
    }

    /// Wrap a kind-tagged scalar, failing if the kind does not match
    pub fn from_scalar(scalar: Scalar) -> Result<Self, Scalar> {
        T::from_scalar(scalar).map(Self::new)
    }
}

pub type BoolValue = Wrapper<bool>;
pub type BytesValue = Wrapper<Vec<u8>>;
pub type DoubleValue = Wrapper<f64>;
pub type FloatValue = Wrapper<f32>;
pub type Int32Value = Wrapper<i32>;
pub type Int64Value = Wrapper<i64>;
pub type StringValue = Wrapper<String>;
pub type UInt32Value = Wrapper<u32>;
pub type UInt64Value = Wrapper<u64>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wrapper_kind_is_static() {
        assert_eq!(BoolValue::kind(), ScalarKind::Bool);
        assert_eq!(BytesValue::kind(), ScalarKind::Bytes);
        assert_eq!(FloatValue::kind(), ScalarKind::Float);
        assert_eq!(UInt64Value::kind(), ScalarKind::UInt64);
    }

    #[test]
    fn test_into_and_from_scalar() {
        let wrapped = StringValue::new("x".to_string());
        let scalar = wrapped.clone().into_scalar();
        assert_eq!(scalar, Scalar::String("x".to_string()));
        assert_eq!(StringValue::from_scalar(scalar), Ok(wrapped));
    }

    #[test]
    fn test_from_scalar_kind_mismatch() {
        let result = Int32Value::from_scalar(Scalar::Int64(7));
        assert_eq!(result, Err(Scalar::Int64(7)));
    }

    #[test]
    fn test_scalar_kind_matches_payload() {
        for (scalar, kind) in [
            (Scalar::Bool(true), ScalarKind::Bool),
            (Scalar::Bytes(vec![1]), ScalarKind::Bytes),
            (Scalar::Double(1.5), ScalarKind::Double),
            (Scalar::Float(1.5), ScalarKind::Float),
            (Scalar::Int32(-1), ScalarKind::Int32),
            (Scalar::Int64(-1), ScalarKind::Int64),
            (Scalar::String(String::new()), ScalarKind::String),
            (Scalar::UInt32(1), ScalarKind::UInt32),
            (Scalar::UInt64(1), ScalarKind::UInt64),
        ] {
            assert_eq!(scalar.kind(), kind);
        }
    }

    #[test]
    fn test_wrapper_names_are_distinct() {
        let mut names: Vec<_> = ScalarKind::ALL.iter().map(|k| k.wrapper_name()).collect();
        names.sort();
        names.dedup();
        assert_eq!(names.len(), 9);
    }
}
