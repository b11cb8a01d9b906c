//! Duration Codec Module
//!
//! A `Duration` travels as the document's elapsed-time primitive. Invalid
//! durations are rejected before anything is written.

use std::sync::Arc;

use infrastructure_document_registry::{
    CodecError, DecodeContext, EncodeContext, KnownType, KnownValue, PrimitiveKind,
    PrimitiveValue, RegistryBuilder, TypeKey, Value, ValueCodec, ValueReader, ValueWriter,
};
use tracing::debug;
use usecases_time_conversion::duration_utils::new_duration;

use crate::null::{decode_null, encode_null};

const ELAPSED: TypeKey = TypeKey::Primitive(PrimitiveKind::Elapsed);

/// Codec for `Duration`
///
/// The elapsed primitive holds `i64` nanoseconds (about +-292 years). A valid
/// duration beyond that is written clamped to `i64::MIN`/`i64::MAX` and
/// decodes as the clamped value.
#[derive(Clone, Copy, Debug, Default)]
pub struct DurationCodec;

impl ValueCodec for DurationCodec {
    fn encode_value(
        &self,
        ctx: &EncodeContext<'_>,
        writer: &mut dyn ValueWriter,
        value: Value,
    ) -> Result<(), CodecError> {
        let duration = match value {
            Value::Known(KnownValue::Duration(duration)) => duration,
            other => return Err(CodecError::UnsupportedValue(other.type_key())),
        };
        let Some(duration) = duration else {
            return encode_null(ctx, writer);
        };
        let delta = duration.as_time_delta().map_err(|source| {
            debug!(%source, "rejecting duration");
            CodecError::Validation {
                shape: KnownType::Duration,
                source,
            }
        })?;
        let codec = ctx.lookup_encoder(ELAPSED)?;
        codec.encode_value(ctx, writer, Value::Primitive(PrimitiveValue::Elapsed(delta)))
    }

    fn decode_value(
        &self,
        ctx: &DecodeContext<'_>,
        reader: &mut dyn ValueReader,
        _target: TypeKey,
    ) -> Result<Value, CodecError> {
        if decode_null(ctx, reader)? {
            return Ok(Value::Known(KnownValue::Duration(None)));
        }
        let codec = ctx.lookup_decoder(ELAPSED)?;
        match codec.decode_value(ctx, reader, ELAPSED)? {
            Value::Primitive(PrimitiveValue::Elapsed(delta)) => {
                Ok(Value::Known(KnownValue::Duration(Some(new_duration(delta)))))
            }
            other => Err(CodecError::UnsupportedValue(other.type_key())),
        }
    }
}

pub fn register_duration_codec(builder: RegistryBuilder) -> RegistryBuilder {
    builder.register_codec(TypeKey::Known(KnownType::Duration), Arc::new(DurationCodec))
}
