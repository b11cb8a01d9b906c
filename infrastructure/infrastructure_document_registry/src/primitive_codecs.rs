//! Primitive Codecs Module
//!
//! Native codecs for the primitive kinds, mapping each onto the document
//! values a `ValueWriter` accepts:
//!
//! | kind     | document value                                   |
//! |----------|--------------------------------------------------|
//! | float    | double (widened on write, narrowed on read)      |
//! | uint32   | int64                                            |
//! | uint64   | int64, failing above `i64::MAX`                  |
//! | elapsed  | int64 nanoseconds, clamped at the `i64` bounds   |
//! | datetime | milliseconds since the Unix epoch, in UTC        |
//!
//! Every other kind maps onto the document value of the same name.

use std::sync::Arc;

use chrono::{DateTime, TimeDelta, Utc};
use entities_known_types::Scalar;

use crate::error::CodecError;
use crate::registry::{DecodeContext, EncodeContext, RegistryBuilder, ValueCodec};
use crate::types::{PrimitiveKind, TypeKey};
use crate::value::{PrimitiveValue, Value};
use crate::value_rw::{ValueReader, ValueWriter};

/// Bind the native codec of every primitive kind
pub fn register_primitive_codecs(builder: RegistryBuilder) -> RegistryBuilder {
    let scalar: Arc<dyn ValueCodec> = Arc::new(ScalarCodec);
    let builder = builder.register_codec(PrimitiveKind::Null.into(), Arc::new(NullCodec));
    let builder = [
        PrimitiveKind::Bool,
        PrimitiveKind::Bytes,
        PrimitiveKind::Double,
        PrimitiveKind::Float,
        PrimitiveKind::Int32,
        PrimitiveKind::Int64,
        PrimitiveKind::String,
        PrimitiveKind::UInt32,
        PrimitiveKind::UInt64,
    ]
    .into_iter()
    .fold(builder, |builder, kind| {
        builder.register_codec(kind.into(), Arc::clone(&scalar))
    });
    builder
        .register_codec(PrimitiveKind::Elapsed.into(), Arc::new(ElapsedCodec))
        .register_codec(PrimitiveKind::DateTime.into(), Arc::new(DateTimeCodec))
        .register_codec(PrimitiveKind::ObjectId.into(), Arc::new(ObjectIdCodec))
}

fn unsupported(value: &Value) -> CodecError {
    CodecError::UnsupportedValue(value.type_key())
}

/// Native null
#[derive(Clone, Copy, Debug, Default)]
pub struct NullCodec;

impl ValueCodec for NullCodec {
    fn encode_value(
        &self,
        _ctx: &EncodeContext<'_>,
        writer: &mut dyn ValueWriter,
        _value: Value,
    ) -> Result<(), CodecError> {
        writer.write_null()
    }

    fn decode_value(
        &self,
        _ctx: &DecodeContext<'_>,
        reader: &mut dyn ValueReader,
        _target: TypeKey,
    ) -> Result<Value, CodecError> {
        reader.read_null()?;
        Ok(Value::Primitive(PrimitiveValue::Null))
    }
}

/// The nine scalar kinds
#[derive(Clone, Copy, Debug, Default)]
pub struct ScalarCodec;

impl ValueCodec for ScalarCodec {
    fn encode_value(
        &self,
        _ctx: &EncodeContext<'_>,
        writer: &mut dyn ValueWriter,
        value: Value,
    ) -> Result<(), CodecError> {
        let scalar = match value {
            Value::Primitive(PrimitiveValue::Scalar(scalar)) => scalar,
            other => return Err(unsupported(&other)),
        };
        match scalar {
            Scalar::Bool(v) => writer.write_boolean(v),
            Scalar::Bytes(v) => writer.write_binary(&v),
            Scalar::Double(v) => writer.write_double(v),
            Scalar::Float(v) => writer.write_double(f64::from(v)),
            Scalar::Int32(v) => writer.write_int32(v),
            Scalar::Int64(v) => writer.write_int64(v),
            Scalar::String(v) => writer.write_string(&v),
            Scalar::UInt32(v) => writer.write_int64(i64::from(v)),
            Scalar::UInt64(v) => {
                let v = i64::try_from(v).map_err(|_| CodecError::Overflow {
                    kind: PrimitiveKind::UInt64,
                    detail: format!("{v} is larger than {}", i64::MAX),
                })?;
                writer.write_int64(v)
            }
        }
    }

    fn decode_value(
        &self,
        _ctx: &DecodeContext<'_>,
        reader: &mut dyn ValueReader,
        target: TypeKey,
    ) -> Result<Value, CodecError> {
        let scalar = match target {
            TypeKey::Primitive(PrimitiveKind::Bool) => Scalar::Bool(reader.read_boolean()?),
            TypeKey::Primitive(PrimitiveKind::Bytes) => Scalar::Bytes(reader.read_binary()?),
            TypeKey::Primitive(PrimitiveKind::Double) => Scalar::Double(reader.read_double()?),
            TypeKey::Primitive(PrimitiveKind::Float) => {
                let v = reader.read_double()?;
                let narrowed = v as f32;
                // NaN compares unequal to itself but narrows without loss.
                if !v.is_nan() && f64::from(narrowed) != v {
                    return Err(CodecError::Overflow {
                        kind: PrimitiveKind::Float,
                        detail: format!("{v} is not exactly representable as float32"),
                    });
                }
                Scalar::Float(narrowed)
            }
            TypeKey::Primitive(PrimitiveKind::Int32) => Scalar::Int32(reader.read_int32()?),
            TypeKey::Primitive(PrimitiveKind::Int64) => Scalar::Int64(reader.read_int64()?),
            TypeKey::Primitive(PrimitiveKind::String) => Scalar::String(reader.read_string()?),
            TypeKey::Primitive(PrimitiveKind::UInt32) => {
                let v = reader.read_int64()?;
                Scalar::UInt32(u32::try_from(v).map_err(|_| CodecError::Overflow {
                    kind: PrimitiveKind::UInt32,
                    detail: format!("{v} does not fit in uint32"),
                })?)
            }
            TypeKey::Primitive(PrimitiveKind::UInt64) => {
                let v = reader.read_int64()?;
                Scalar::UInt64(u64::try_from(v).map_err(|_| CodecError::Overflow {
                    kind: PrimitiveKind::UInt64,
                    detail: format!("{v} is negative"),
                })?)
            }
            other => return Err(CodecError::UnsupportedValue(other)),
        };
        Ok(Value::Primitive(PrimitiveValue::Scalar(scalar)))
    }
}

/// Signed elapsed time as int64 nanoseconds
#[derive(Clone, Copy, Debug, Default)]
pub struct ElapsedCodec;

impl ValueCodec for ElapsedCodec {
    fn encode_value(
        &self,
        _ctx: &EncodeContext<'_>,
        writer: &mut dyn ValueWriter,
        value: Value,
    ) -> Result<(), CodecError> {
        let delta = match value {
            Value::Primitive(PrimitiveValue::Elapsed(delta)) => delta,
            other => return Err(unsupported(&other)),
        };
        let nanos = delta.num_nanoseconds().unwrap_or(if delta < TimeDelta::zero() {
            i64::MIN
        } else {
            i64::MAX
        });
        writer.write_int64(nanos)
    }

    fn decode_value(
        &self,
        _ctx: &DecodeContext<'_>,
        reader: &mut dyn ValueReader,
        _target: TypeKey,
    ) -> Result<Value, CodecError> {
        let nanos = reader.read_int64()?;
        Ok(Value::Primitive(PrimitiveValue::Elapsed(TimeDelta::nanoseconds(nanos))))
    }
}

/// Point in time as UTC milliseconds since the Unix epoch
#[derive(Clone, Copy, Debug, Default)]
pub struct DateTimeCodec;

impl ValueCodec for DateTimeCodec {
    fn encode_value(
        &self,
        _ctx: &EncodeContext<'_>,
        writer: &mut dyn ValueWriter,
        value: Value,
    ) -> Result<(), CodecError> {
        let t = match value {
            Value::Primitive(PrimitiveValue::DateTime(t)) => t,
            other => return Err(unsupported(&other)),
        };
        writer.write_date_time(t.timestamp_millis())
    }

    fn decode_value(
        &self,
        _ctx: &DecodeContext<'_>,
        reader: &mut dyn ValueReader,
        _target: TypeKey,
    ) -> Result<Value, CodecError> {
        let millis = reader.read_date_time()?;
        let t = DateTime::<Utc>::from_timestamp_millis(millis).ok_or_else(|| CodecError::Overflow {
            kind: PrimitiveKind::DateTime,
            detail: format!("{millis}ms is outside the representable range"),
        })?;
        Ok(Value::Primitive(PrimitiveValue::DateTime(t.fixed_offset())))
    }
}

/// 12-byte identifier
#[derive(Clone, Copy, Debug, Default)]
pub struct ObjectIdCodec;

impl ValueCodec for ObjectIdCodec {
    fn encode_value(
        &self,
        _ctx: &EncodeContext<'_>,
        writer: &mut dyn ValueWriter,
        value: Value,
    ) -> Result<(), CodecError> {
        let id = match value {
            Value::Primitive(PrimitiveValue::ObjectId(id)) => id,
            other => return Err(unsupported(&other)),
        };
        writer.write_object_id(id)
    }

    fn decode_value(
        &self,
        _ctx: &DecodeContext<'_>,
        reader: &mut dyn ValueReader,
        _target: TypeKey,
    ) -> Result<Value, CodecError> {
        Ok(Value::Primitive(PrimitiveValue::ObjectId(reader.read_object_id()?)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::document::{DocumentReader, DocumentValue, DocumentWriter};
    use crate::object_id::ObjectIdBytes;
    use crate::value::Encodable;
    use chrono::{FixedOffset, TimeZone};

    fn registry() -> crate::registry::Registry {
        RegistryBuilder::with_primitives().build()
    }

    #[test]
    fn test_scalars_map_to_document_values() {
        let registry = registry();
        let mut writer = DocumentWriter::new();
        registry.encode(&mut writer, &true).unwrap();
        registry.encode(&mut writer, &vec![1u8, 2]).unwrap();
        registry.encode(&mut writer, &1.5f32).unwrap();
        registry.encode(&mut writer, &7u32).unwrap();
        registry.encode(&mut writer, &"x".to_string()).unwrap();
        assert_eq!(
            writer.values(),
            &[
                DocumentValue::Boolean(true),
                DocumentValue::Binary(vec![1, 2]),
                DocumentValue::Double(1.5),
                DocumentValue::Int64(7),
                DocumentValue::String("x".to_string()),
            ]
        );
    }

    #[test]
    fn test_uint64_above_i64_max_fails() {
        let registry = registry();
        let mut writer = DocumentWriter::new();
        let result = registry.encode(&mut writer, &u64::MAX);
        assert!(matches!(
            result,
            Err(CodecError::Overflow {
                kind: PrimitiveKind::UInt64,
                ..
            })
        ));
        assert!(writer.values().is_empty());
    }

    #[test]
    fn test_scalar_decode() {
        let registry = registry();
        let mut reader = DocumentReader::new(vec![
            DocumentValue::Double(0.25),
            DocumentValue::Int64(9),
            DocumentValue::Int64(-1),
        ]);
        assert_eq!(registry.decode::<f32>(&mut reader), Ok(0.25));
        assert_eq!(registry.decode::<u64>(&mut reader), Ok(9));
        assert!(matches!(
            registry.decode::<u32>(&mut reader),
            Err(CodecError::Overflow { .. })
        ));
    }

    #[test]
    fn test_float_decode_refuses_truncation() {
        let registry = registry();
        let mut reader = DocumentReader::new(vec![
            DocumentValue::Double(1e300),
            DocumentValue::Double(0.1),
            DocumentValue::Double(f64::INFINITY),
            DocumentValue::Double(f64::NAN),
        ]);
        for _ in 0..2 {
            assert!(matches!(
                registry.decode::<f32>(&mut reader),
                Err(CodecError::Overflow {
                    kind: PrimitiveKind::Float,
                    ..
                })
            ));
        }
        assert_eq!(registry.decode::<f32>(&mut reader), Ok(f32::INFINITY));
        assert!(registry.decode::<f32>(&mut reader).unwrap().is_nan());
    }

    #[test]
    fn test_elapsed_saturates() {
        let registry = registry();
        let mut writer = DocumentWriter::new();
        registry.encode(&mut writer, &TimeDelta::seconds(1)).unwrap();
        registry.encode(&mut writer, &TimeDelta::MAX).unwrap();
        registry.encode(&mut writer, &TimeDelta::MIN).unwrap();
        assert_eq!(
            writer.values(),
            &[
                DocumentValue::Int64(1_000_000_000),
                DocumentValue::Int64(i64::MAX),
                DocumentValue::Int64(i64::MIN),
            ]
        );
    }

    #[test]
    fn test_date_time_written_as_utc_millis() {
        let registry = registry();
        let offset = FixedOffset::east_opt(2 * 3600).unwrap();
        let t = offset.with_ymd_and_hms(1970, 1, 1, 2, 0, 1).unwrap();
        let mut writer = DocumentWriter::new();
        registry.encode(&mut writer, &t).unwrap();
        assert_eq!(writer.values(), &[DocumentValue::DateTime(1000)]);

        let mut reader = DocumentReader::new(writer.into_values());
        let decoded: DateTime<Utc> = registry.decode(&mut reader).unwrap();
        assert_eq!(decoded.timestamp(), 1);
    }

    #[test]
    fn test_object_id_and_null() {
        let registry = registry();
        let id = ObjectIdBytes::new([7; 12]);
        let mut writer = DocumentWriter::new();
        registry.encode(&mut writer, &id).unwrap();
        registry
            .encode_value(&mut writer, Value::Primitive(PrimitiveValue::Null))
            .unwrap();
        assert_eq!(
            writer.values(),
            &[DocumentValue::ObjectId(id), DocumentValue::Null]
        );
    }

    #[test]
    fn test_codec_rejects_foreign_value() {
        let registry = registry();
        let ctx = EncodeContext::new(&registry);
        let mut writer = DocumentWriter::new();
        let result = ObjectIdCodec.encode_value(&ctx, &mut writer, true.to_value());
        assert_eq!(
            result,
            Err(CodecError::UnsupportedValue(PrimitiveKind::Bool.into()))
        );
    }
}
