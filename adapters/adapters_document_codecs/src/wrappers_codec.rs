//! Wrappers Codec Module
//!
//! One codec serving all nine scalar wrapper types. It never touches the
//! payload itself: encoding looks up the primitive codec for the payload's
//! kind and hands the payload over; decoding asks that same codec for a
//! scalar and wraps it.

use std::sync::Arc;

use entities_known_types::ScalarKind;
use infrastructure_document_registry::{
    CodecError, DecodeContext, EncodeContext, KnownType, KnownValue, PrimitiveKind,
    PrimitiveValue, RegistryBuilder, TypeKey, Value, ValueCodec, ValueReader, ValueWriter,
};

use crate::null::{decode_null, encode_null};

/// Codec for `BoolValue`, `BytesValue`, ..., `UInt64Value`
#[derive(Clone, Copy, Debug, Default)]
pub struct WrappersCodec;

fn payload_key(kind: ScalarKind) -> TypeKey {
    TypeKey::Primitive(PrimitiveKind::from(kind))
}

impl ValueCodec for WrappersCodec {
    fn encode_value(
        &self,
        ctx: &EncodeContext<'_>,
        writer: &mut dyn ValueWriter,
        value: Value,
    ) -> Result<(), CodecError> {
        let payload = match value {
            Value::Known(KnownValue::Wrapper(_, payload)) => payload,
            other => return Err(CodecError::UnsupportedValue(other.type_key())),
        };
        let Some(scalar) = payload else {
            return encode_null(ctx, writer);
        };
        let codec = ctx.lookup_encoder(payload_key(scalar.kind()))?;
        codec.encode_value(ctx, writer, Value::Primitive(PrimitiveValue::Scalar(scalar)))
    }

    fn decode_value(
        &self,
        ctx: &DecodeContext<'_>,
        reader: &mut dyn ValueReader,
        target: TypeKey,
    ) -> Result<Value, CodecError> {
        let TypeKey::Known(KnownType::Wrapper(kind)) = target else {
            return Err(CodecError::UnsupportedValue(target));
        };
        if decode_null(ctx, reader)? {
            return Ok(Value::Known(KnownValue::Wrapper(kind, None)));
        }
        let key = payload_key(kind);
        let codec = ctx.lookup_decoder(key)?;
        match codec.decode_value(ctx, reader, key)? {
            Value::Primitive(PrimitiveValue::Scalar(scalar)) if scalar.kind() == kind => {
                Ok(Value::Known(KnownValue::Wrapper(kind, Some(scalar))))
            }
            other => Err(CodecError::UnsupportedValue(other.type_key())),
        }
    }
}

/// Bind one shared `WrappersCodec` under all nine wrapper keys
pub fn register_wrappers_codec(builder: RegistryBuilder) -> RegistryBuilder {
    let codec: Arc<dyn ValueCodec> = Arc::new(WrappersCodec);
    ScalarKind::ALL.into_iter().fold(builder, |builder, kind| {
        builder.register_codec(TypeKey::wrapper(kind), Arc::clone(&codec))
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use entities_known_types::{BoolValue, BytesValue, FloatValue, StringValue, UInt64Value};
    use infrastructure_document_registry::{DocumentReader, DocumentValue, DocumentWriter, Registry};

    fn registry() -> Registry {
        register_wrappers_codec(RegistryBuilder::with_primitives()).build()
    }

    #[test]
    fn test_registered_for_every_kind() {
        let registry = registry();
        for kind in ScalarKind::ALL {
            assert!(registry.contains(TypeKey::wrapper(kind)));
        }
    }

    #[test]
    fn test_encode_delegates_to_payload_codec() {
        let registry = registry();
        let mut writer = DocumentWriter::new();
        registry.encode(&mut writer, &Some(BoolValue::new(true))).unwrap();
        registry.encode(&mut writer, &Some(FloatValue::new(0.5))).unwrap();
        registry.encode(&mut writer, &Some(BytesValue::new(vec![9]))).unwrap();
        assert_eq!(
            writer.values(),
            &[
                DocumentValue::Boolean(true),
                DocumentValue::Double(0.5),
                DocumentValue::Binary(vec![9]),
            ]
        );
    }

    #[test]
    fn test_absent_wrapper_is_null() {
        let registry = registry();
        let mut writer = DocumentWriter::new();
        registry.encode(&mut writer, &None::<StringValue>).unwrap();
        assert_eq!(writer.values(), &[DocumentValue::Null]);

        let mut reader = DocumentReader::new(writer.into_values());
        assert_eq!(registry.decode::<Option<StringValue>>(&mut reader), Ok(None));
    }

    #[test]
    fn test_decode_rewraps_payload() {
        let registry = registry();
        let mut reader = DocumentReader::new(vec![DocumentValue::Int64(42)]);
        assert_eq!(
            registry.decode::<Option<UInt64Value>>(&mut reader),
            Ok(Some(UInt64Value::new(42)))
        );
    }

    #[test]
    fn test_missing_payload_codec() {
        let registry = register_wrappers_codec(RegistryBuilder::new()).build();
        let mut writer = DocumentWriter::new();
        assert_eq!(
            registry.encode(&mut writer, &Some(StringValue::new("x".to_string()))),
            Err(CodecError::NoCodec(TypeKey::Primitive(PrimitiveKind::String)))
        );
    }
}
