//! Codec Facades
//!
//! Registry types, the codec registration entry points, and a ready-made
//! registry with every codec bound.

pub use adapters_document_codecs::{
    register_all_codecs, register_codecs, register_duration_codec, register_object_id_codec,
    register_timestamp_codec, register_wrappers_codec, CodecSelection,
};
pub use entities_known_types::{
    BoolValue, BytesValue, DoubleValue, FloatValue, Int32Value, Int64Value, ObjectId, Scalar,
    ScalarKind, StringValue, UInt32Value, UInt64Value, Wrapper,
};
pub use infrastructure_document_registry::{
    CodecError, Decodable, DocumentReader, DocumentValue, DocumentWriter, Encodable, KnownType,
    ObjectIdBytes, PrimitiveKind, Registry, RegistryBuilder, TypeKey, ValueCodec, ValueReader,
    ValueWriter,
};

/// Registry with the native primitive codecs and every well-known type codec
pub fn default_registry() -> Registry {
    register_all_codecs(RegistryBuilder::with_primitives()).build()
}
