//! Null Helpers Module
//!
//! Absent values are written and recognized through the registry's own null
//! codec, so every structured codec produces exactly the document's native
//! null.

use infrastructure_document_registry::{
    CodecError, DecodeContext, EncodeContext, PrimitiveKind, PrimitiveValue, TypeKey, Value,
    ValueReader, ValueWriter,
};

const NULL: TypeKey = TypeKey::Primitive(PrimitiveKind::Null);

/// Write the document's null
pub fn encode_null(
    ctx: &EncodeContext<'_>,
    writer: &mut dyn ValueWriter,
) -> Result<(), CodecError> {
    let codec = ctx.lookup_encoder(NULL)?;
    codec.encode_value(ctx, writer, Value::Primitive(PrimitiveValue::Null))
}

/// Consume a null if the next value is one
///
/// # Returns
/// * `Ok(true)` - a null was read
/// * `Ok(false)` - the next value is not null and was left in place
/// * `Err(CodecError)` - no null codec is registered
pub fn decode_null(
    ctx: &DecodeContext<'_>,
    reader: &mut dyn ValueReader,
) -> Result<bool, CodecError> {
    let codec = ctx.lookup_decoder(NULL)?;
    Ok(codec.decode_value(ctx, reader, NULL).is_ok())
}

#[cfg(test)]
mod tests {
    use super::*;
    use infrastructure_document_registry::{
        DocumentReader, DocumentValue, DocumentWriter, RegistryBuilder,
    };

    #[test]
    fn test_encode_null() {
        let registry = RegistryBuilder::with_primitives().build();
        let mut writer = DocumentWriter::new();
        encode_null(&EncodeContext::new(&registry), &mut writer).unwrap();
        assert_eq!(writer.values(), &[DocumentValue::Null]);
    }

    #[test]
    fn test_decode_null_leaves_other_values() {
        let registry = RegistryBuilder::with_primitives().build();
        let ctx = DecodeContext::new(&registry);
        let mut reader = DocumentReader::new(vec![DocumentValue::Null, DocumentValue::Int32(1)]);
        assert_eq!(decode_null(&ctx, &mut reader), Ok(true));
        assert_eq!(decode_null(&ctx, &mut reader), Ok(false));
        assert_eq!(reader.remaining(), 1);
    }

    #[test]
    fn test_null_codec_required() {
        let registry = RegistryBuilder::new().build();
        let mut writer = DocumentWriter::new();
        assert_eq!(
            encode_null(&EncodeContext::new(&registry), &mut writer),
            Err(CodecError::NoCodec(NULL))
        );
    }
}
