//! Registry Module
//!
//! Codec units bound to the type keys they serve.
//!
//! A `RegistryBuilder` collects bindings during startup; `build` freezes them
//! into a `Registry` that is shared (cheaply cloned) by everything that
//! encodes or decodes. The same codec instance may be bound under several
//! keys. Binding a key twice keeps the later codec.

use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

use tracing::debug;

use crate::error::CodecError;
use crate::primitive_codecs;
use crate::types::TypeKey;
use crate::value::{Decodable, Encodable, Value};
use crate::value_rw::{ValueReader, ValueWriter};

/// Paired encode/decode implementation for one or more type keys
///
/// Codecs hold no per-call state and may be used from many threads at once.
pub trait ValueCodec: Send + Sync {
    /// Write `value` through `writer`
    fn encode_value(
        &self,
        ctx: &EncodeContext<'_>,
        writer: &mut dyn ValueWriter,
        value: Value,
    ) -> Result<(), CodecError>;

    /// Read a value of type `target` from `reader`
    fn decode_value(
        &self,
        ctx: &DecodeContext<'_>,
        reader: &mut dyn ValueReader,
        target: TypeKey,
    ) -> Result<Value, CodecError>;
}

/// Collects codec bindings before a `Registry` is built
#[derive(Clone, Default)]
pub struct RegistryBuilder {
    codecs: HashMap<TypeKey, Arc<dyn ValueCodec>>,
}

impl RegistryBuilder {
    /// Builder with no bindings at all
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder seeded with the native primitive codecs
    pub fn with_primitives() -> Self {
        primitive_codecs::register_primitive_codecs(Self::new())
    }

    /// Bind `codec` under `key`, replacing any earlier binding
    pub fn register_codec(mut self, key: TypeKey, codec: Arc<dyn ValueCodec>) -> Self {
        debug!(%key, "registering codec");
        self.codecs.insert(key, codec);
        self
    }

    pub fn contains(&self, key: TypeKey) -> bool {
        self.codecs.contains_key(&key)
    }

    /// Freeze the bindings
    pub fn build(self) -> Registry {
        Registry {
            codecs: Arc::new(self.codecs),
        }
    }
}

impl fmt::Debug for RegistryBuilder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut keys: Vec<_> = self.codecs.keys().collect();
        keys.sort();
        f.debug_struct("RegistryBuilder").field("keys", &keys).finish()
    }
}

/// Immutable set of codec bindings
#[derive(Clone)]
pub struct Registry {
    codecs: Arc<HashMap<TypeKey, Arc<dyn ValueCodec>>>,
}

impl Registry {
    /// Codec that encodes values of type `key`
    pub fn lookup_encoder(&self, key: TypeKey) -> Result<&dyn ValueCodec, CodecError> {
        self.lookup(key)
    }

    /// Codec that decodes values of type `key`
    pub fn lookup_decoder(&self, key: TypeKey) -> Result<&dyn ValueCodec, CodecError> {
        self.lookup(key)
    }

    fn lookup(&self, key: TypeKey) -> Result<&dyn ValueCodec, CodecError> {
        self.codecs
            .get(&key)
            .map(|codec| codec.as_ref())
            .ok_or(CodecError::NoCodec(key))
    }

    pub fn contains(&self, key: TypeKey) -> bool {
        self.codecs.contains_key(&key)
    }

    pub fn len(&self) -> usize {
        self.codecs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.codecs.is_empty()
    }

    /// Encode a dynamic value with the codec bound to its type
    pub fn encode_value(
        &self,
        writer: &mut dyn ValueWriter,
        value: Value,
    ) -> Result<(), CodecError> {
        let ctx = EncodeContext::new(self);
        let codec = ctx.lookup_encoder(value.type_key())?;
        codec.encode_value(&ctx, writer, value)
    }

    /// Decode a dynamic value of type `target`
    pub fn decode_value(
        &self,
        reader: &mut dyn ValueReader,
        target: TypeKey,
    ) -> Result<Value, CodecError> {
        let ctx = DecodeContext::new(self);
        let codec = ctx.lookup_decoder(target)?;
        codec.decode_value(&ctx, reader, target)
    }

    /// Encode a typed value
    pub fn encode<T: Encodable + ?Sized>(
        &self,
        writer: &mut dyn ValueWriter,
        value: &T,
    ) -> Result<(), CodecError> {
        self.encode_value(writer, value.to_value())
    }

    /// Decode a typed value
    pub fn decode<T: Decodable>(&self, reader: &mut dyn ValueReader) -> Result<T, CodecError> {
        let value = self.decode_value(reader, T::type_key())?;
        T::from_value(value)
    }
}

impl fmt::Debug for Registry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut keys: Vec<_> = self.codecs.keys().collect();
        keys.sort();
        f.debug_struct("Registry").field("keys", &keys).finish()
    }
}

/// Registry access handed to a codec while it encodes
#[derive(Clone, Copy, Debug)]
pub struct EncodeContext<'a> {
    registry: &'a Registry,
}

impl<'a> EncodeContext<'a> {
    pub fn new(registry: &'a Registry) -> Self {
        Self { registry }
    }

    pub fn registry(&self) -> &'a Registry {
        self.registry
    }

    pub fn lookup_encoder(&self, key: TypeKey) -> Result<&'a dyn ValueCodec, CodecError> {
        self.registry.lookup_encoder(key)
    }
}

/// Registry access handed to a codec while it decodes
#[derive(Clone, Copy, Debug)]
pub struct DecodeContext<'a> {
    registry: &'a Registry,
}

impl<'a> DecodeContext<'a> {
    pub fn new(registry: &'a Registry) -> Self {
        Self { registry }
    }

    pub fn registry(&self) -> &'a Registry {
        self.registry
    }

    pub fn lookup_decoder(&self, key: TypeKey) -> Result<&'a dyn ValueCodec, CodecError> {
        self.registry.lookup_decoder(key)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::document::{DocumentReader, DocumentValue, DocumentWriter};
    use crate::types::PrimitiveKind;
    use crate::value::PrimitiveValue;

    struct ConstCodec(i32);

    impl ValueCodec for ConstCodec {
        fn encode_value(
            &self,
            _ctx: &EncodeContext<'_>,
            writer: &mut dyn ValueWriter,
            _value: Value,
        ) -> Result<(), CodecError> {
            writer.write_int32(self.0)
        }

        fn decode_value(
            &self,
            _ctx: &DecodeContext<'_>,
            reader: &mut dyn ValueReader,
            _target: TypeKey,
        ) -> Result<Value, CodecError> {
            reader.read_int32()?;
            Ok(Value::Primitive(PrimitiveValue::Null))
        }
    }

    const INT32: TypeKey = TypeKey::Primitive(PrimitiveKind::Int32);

    #[test]
    fn test_empty_registry_has_no_codecs() {
        let registry = RegistryBuilder::new().build();
        assert!(registry.is_empty());
        assert_eq!(
            registry.lookup_encoder(INT32).err(),
            Some(CodecError::NoCodec(INT32))
        );
    }

    #[test]
    fn test_later_registration_wins() {
        let registry = RegistryBuilder::new()
            .register_codec(INT32, Arc::new(ConstCodec(1)))
            .register_codec(INT32, Arc::new(ConstCodec(2)))
            .build();
        assert_eq!(registry.len(), 1);

        let mut writer = DocumentWriter::new();
        registry.encode(&mut writer, &0i32).unwrap();
        assert_eq!(writer.values(), &[DocumentValue::Int32(2)]);
    }

    #[test]
    fn test_shared_codec_instance() {
        let codec: Arc<dyn ValueCodec> = Arc::new(ConstCodec(5));
        let int64 = TypeKey::Primitive(PrimitiveKind::Int64);
        let registry = RegistryBuilder::new()
            .register_codec(INT32, Arc::clone(&codec))
            .register_codec(int64, codec)
            .build();
        assert!(registry.contains(INT32));
        assert!(registry.contains(int64));

        let mut reader = DocumentReader::new(vec![DocumentValue::Int32(5)]);
        let value = registry.decode_value(&mut reader, int64).unwrap();
        assert_eq!(value, Value::Primitive(PrimitiveValue::Null));
    }

    #[test]
    fn test_registry_is_send_and_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<Registry>();
    }

    #[test]
    fn test_with_primitives_covers_every_kind() {
        let builder = RegistryBuilder::with_primitives();
        for kind in [
            PrimitiveKind::Null,
            PrimitiveKind::Bool,
            PrimitiveKind::Bytes,
            PrimitiveKind::Double,
            PrimitiveKind::Float,
            PrimitiveKind::Int32,
            PrimitiveKind::Int64,
            PrimitiveKind::String,
            PrimitiveKind::UInt32,
            PrimitiveKind::UInt64,
            PrimitiveKind::Elapsed,
            PrimitiveKind::DateTime,
            PrimitiveKind::ObjectId,
        ] {
            assert!(builder.contains(TypeKey::Primitive(kind)), "{kind}");
        }
    }
}
