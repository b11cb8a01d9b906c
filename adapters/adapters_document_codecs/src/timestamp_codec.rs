//! Timestamp Codec Module
//!
//! A `Timestamp` travels as the document's date-time primitive, normalized to
//! UTC. The Unix epoch decodes as absent, matching the zero-equivalence rule
//! of the conversion helpers.

use std::sync::Arc;

use chrono::Utc;
use infrastructure_document_registry::{
    CodecError, DecodeContext, EncodeContext, KnownType, KnownValue, PrimitiveKind,
    PrimitiveValue, RegistryBuilder, TypeKey, Value, ValueCodec, ValueReader, ValueWriter,
};
use tracing::debug;
use usecases_time_conversion::timestamp_utils::new_timestamp;

use crate::null::{decode_null, encode_null};

const DATE_TIME: TypeKey = TypeKey::Primitive(PrimitiveKind::DateTime);

/// Codec for `Timestamp`
///
/// The date-time primitive keeps whole milliseconds only. An instant less
/// than one millisecond after the epoch is therefore written as the epoch
/// and decodes as absent.
#[derive(Clone, Copy, Debug, Default)]
pub struct TimestampCodec;

impl ValueCodec for TimestampCodec {
    fn encode_value(
        &self,
        ctx: &EncodeContext<'_>,
        writer: &mut dyn ValueWriter,
        value: Value,
    ) -> Result<(), CodecError> {
        let timestamp = match value {
            Value::Known(KnownValue::Timestamp(timestamp)) => timestamp,
            other => return Err(CodecError::UnsupportedValue(other.type_key())),
        };
        let Some(timestamp) = timestamp else {
            return encode_null(ctx, writer);
        };
        let t = timestamp.as_date_time().map_err(|source| {
            debug!(%source, "rejecting timestamp");
            CodecError::Validation {
                shape: KnownType::Timestamp,
                source,
            }
        })?;
        let codec = ctx.lookup_encoder(DATE_TIME)?;
        let primitive = PrimitiveValue::DateTime(t.fixed_offset());
        codec.encode_value(ctx, writer, Value::Primitive(primitive))
    }

    fn decode_value(
        &self,
        ctx: &DecodeContext<'_>,
        reader: &mut dyn ValueReader,
        _target: TypeKey,
    ) -> Result<Value, CodecError> {
        if decode_null(ctx, reader)? {
            return Ok(Value::Known(KnownValue::Timestamp(None)));
        }
        let codec = ctx.lookup_decoder(DATE_TIME)?;
        match codec.decode_value(ctx, reader, DATE_TIME)? {
            Value::Primitive(PrimitiveValue::DateTime(t)) => {
                let t = t.with_timezone(&Utc);
                Ok(Value::Known(KnownValue::Timestamp(new_timestamp(Some(&t)))))
            }
            other => Err(CodecError::UnsupportedValue(other.type_key())),
        }
    }
}

pub fn register_timestamp_codec(builder: RegistryBuilder) -> RegistryBuilder {
    builder.register_codec(TypeKey::Known(KnownType::Timestamp), Arc::new(TimestampCodec))
}
