//! Value Reader/Writer Module
//!
//! The primitive operations a document layer exposes to codecs. Codecs
//! never see the document format itself, only these calls.

use crate::error::CodecError;
use crate::object_id::ObjectIdBytes;

/// Sink for one document value at a time
pub trait ValueWriter {
    fn write_null(&mut self) -> Result<(), CodecError>;
    fn write_boolean(&mut self, value: bool) -> Result<(), CodecError>;
    fn write_binary(&mut self, value: &[u8]) -> Result<(), CodecError>;
    fn write_double(&mut self, value: f64) -> Result<(), CodecError>;
    fn write_int32(&mut self, value: i32) -> Result<(), CodecError>;
    fn write_int64(&mut self, value: i64) -> Result<(), CodecError>;
    fn write_string(&mut self, value: &str) -> Result<(), CodecError>;
    /// Milliseconds since the Unix epoch
    fn write_date_time(&mut self, millis: i64) -> Result<(), CodecError>;
    fn write_object_id(&mut self, value: ObjectIdBytes) -> Result<(), CodecError>;
}

/// Source of document values, read in order
pub trait ValueReader {
    /// Consume a null if the next value is one
    ///
    /// On any other value this fails without consuming anything, so the
    /// caller can go on to read the value with its real type.
    fn read_null(&mut self) -> Result<(), CodecError>;
    fn read_boolean(&mut self) -> Result<bool, CodecError>;
    fn read_binary(&mut self) -> Result<Vec<u8>, CodecError>;
    fn read_double(&mut self) -> Result<f64, CodecError>;
    fn read_int32(&mut self) -> Result<i32, CodecError>;
    fn read_int64(&mut self) -> Result<i64, CodecError>;
    fn read_string(&mut self) -> Result<String, CodecError>;
    /// Milliseconds since the Unix epoch
    fn read_date_time(&mut self) -> Result<i64, CodecError>;
    fn read_object_id(&mut self) -> Result<ObjectIdBytes, CodecError>;
}
