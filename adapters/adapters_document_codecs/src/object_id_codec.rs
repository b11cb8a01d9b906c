//! Object Id Codec Module
//!
//! An `ObjectId` carries its identifier as 24 hex characters; on the wire it
//! is the document's native 12-byte object id.

use std::sync::Arc;

use entities_known_types::ObjectId;
use infrastructure_document_registry::{
    CodecError, DecodeContext, EncodeContext, KnownType, KnownValue, ObjectIdBytes,
    PrimitiveKind, PrimitiveValue, RegistryBuilder, TypeKey, Value, ValueCodec, ValueReader,
    ValueWriter,
};
use tracing::debug;

use crate::null::{decode_null, encode_null};

const OBJECT_ID: TypeKey = TypeKey::Primitive(PrimitiveKind::ObjectId);

#[derive(Clone, Copy, Debug, Default)]
pub struct ObjectIdCodec;

impl ValueCodec for ObjectIdCodec {
    fn encode_value(
        &self,
        ctx: &EncodeContext<'_>,
        writer: &mut dyn ValueWriter,
        value: Value,
    ) -> Result<(), CodecError> {
        let id = match value {
            Value::Known(KnownValue::ObjectId(id)) => id,
            other => return Err(CodecError::UnsupportedValue(other.type_key())),
        };
        let Some(id) = id else {
            return encode_null(ctx, writer);
        };
        let bytes = ObjectIdBytes::from_hex(&id.value).map_err(|e| {
            debug!(id = %id.value, "rejecting object id");
            e
        })?;
        let codec = ctx.lookup_encoder(OBJECT_ID)?;
        codec.encode_value(ctx, writer, Value::Primitive(PrimitiveValue::ObjectId(bytes)))
    }

    fn decode_value(
        &self,
        ctx: &DecodeContext<'_>,
        reader: &mut dyn ValueReader,
        _target: TypeKey,
    ) -> Result<Value, CodecError> {
        if decode_null(ctx, reader)? {
            return Ok(Value::Known(KnownValue::ObjectId(None)));
        }
        let codec = ctx.lookup_decoder(OBJECT_ID)?;
        match codec.decode_value(ctx, reader, OBJECT_ID)? {
            Value::Primitive(PrimitiveValue::ObjectId(bytes)) => {
                Ok(Value::Known(KnownValue::ObjectId(Some(ObjectId::new(bytes.to_hex())))))
            }
            other => Err(CodecError::UnsupportedValue(other.type_key())),
        }
    }
}

pub fn register_object_id_codec(builder: RegistryBuilder) -> RegistryBuilder {
    builder.register_codec(TypeKey::Known(KnownType::ObjectId), Arc::new(ObjectIdCodec))
}

#[cfg(test)]
mod tests {
    use super::*;
    use infrastructure_document_registry::{DocumentReader, DocumentValue, DocumentWriter, Registry};

    const HEX: &str = "5f1a2b3c4d5e6f7081920a1b";

    fn registry() -> Registry {
        register_object_id_codec(RegistryBuilder::with_primitives()).build()
    }

    #[test]
    fn test_round_trip() {
        let registry = registry();
        let id = Some(ObjectId::new(HEX));
        let mut writer = DocumentWriter::new();
        registry.encode(&mut writer, &id).unwrap();
        assert!(matches!(writer.values(), [DocumentValue::ObjectId(_)]));

        let mut reader = DocumentReader::new(writer.into_values());
        assert_eq!(registry.decode::<Option<ObjectId>>(&mut reader), Ok(id));
    }

    #[test]
    fn test_uppercase_hex_decodes_lowercase() {
        let registry = registry();
        let mut writer = DocumentWriter::new();
        registry
            .encode(&mut writer, &Some(ObjectId::new(HEX.to_uppercase())))
            .unwrap();
        let mut reader = DocumentReader::new(writer.into_values());
        assert_eq!(
            registry.decode::<Option<ObjectId>>(&mut reader),
            Ok(Some(ObjectId::new(HEX)))
        );
    }

    #[test]
    fn test_invalid_hex_is_parse_error() {
        let registry = registry();
        let mut writer = DocumentWriter::new();
        let result = registry.encode(&mut writer, &Some(ObjectId::new("not-an-object-id")));
        assert!(matches!(result, Err(CodecError::InvalidObjectId(_))));
        assert!(writer.values().is_empty());
    }

    #[test]
    fn test_null_round_trip() {
        let registry = registry();
        let mut writer = DocumentWriter::new();
        registry.encode(&mut writer, &None::<ObjectId>).unwrap();
        let mut reader = DocumentReader::new(writer.into_values());
        assert_eq!(registry.decode::<Option<ObjectId>>(&mut reader), Ok(None));
    }
}
