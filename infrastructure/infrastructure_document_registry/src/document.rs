//! In-Memory Document Module
//!
//! A flat sequence of document values with a `ValueWriter` that appends to
//! it and a `ValueReader` that consumes it from the front. This is the
//! document layer the native primitive codecs are exercised against; a real
//! binary format plugs in by implementing the same two traits.

use std::collections::VecDeque;

use crate::error::CodecError;
use crate::object_id::ObjectIdBytes;
use crate::value_rw::{ValueReader, ValueWriter};

/// One value as stored by the document layer
#[derive(Clone, Debug, PartialEq)]
pub enum DocumentValue {
    Null,
    Boolean(bool),
    Binary(Vec<u8>),
    Double(f64),
    Int32(i32),
    Int64(i64),
    String(String),
    /// Milliseconds since the Unix epoch
    DateTime(i64),
    ObjectId(ObjectIdBytes),
}

impl DocumentValue {
    pub fn type_name(&self) -> &'static str {
        match self {
            DocumentValue::Null => "null",
            DocumentValue::Boolean(_) => "boolean",
            DocumentValue::Binary(_) => "binary",
            DocumentValue::Double(_) => "double",
            DocumentValue::Int32(_) => "int32",
            DocumentValue::Int64(_) => "int64",
            DocumentValue::String(_) => "string",
            DocumentValue::DateTime(_) => "datetime",
            DocumentValue::ObjectId(_) => "objectid",
        }
    }
}

/// Writer appending every value to an in-memory list
#[derive(Debug, Default)]
pub struct DocumentWriter {
    values: Vec<DocumentValue>,
}

impl DocumentWriter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn values(&self) -> &[DocumentValue] {
        &self.values
    }

    pub fn into_values(self) -> Vec<DocumentValue> {
        self.values
    }

    fn push(&mut self, value: DocumentValue) -> Result<(), CodecError> {
        self.values.push(value);
        Ok(())
    }
}

impl ValueWriter for DocumentWriter {
    fn write_null(&mut self) -> Result<(), CodecError> {
        self.push(DocumentValue::Null)
    }

    fn write_boolean(&mut self, value: bool) -> Result<(), CodecError> {
        self.push(DocumentValue::Boolean(value))
    }

    fn write_binary(&mut self, value: &[u8]) -> Result<(), CodecError> {
        self.push(DocumentValue::Binary(value.to_vec()))
    }

    fn write_double(&mut self, value: f64) -> Result<(), CodecError> {
        self.push(DocumentValue::Double(value))
    }

    fn write_int32(&mut self, value: i32) -> Result<(), CodecError> {
        self.push(DocumentValue::Int32(value))
    }

    fn write_int64(&mut self, value: i64) -> Result<(), CodecError> {
        self.push(DocumentValue::Int64(value))
    }

    fn write_string(&mut self, value: &str) -> Result<(), CodecError> {
        self.push(DocumentValue::String(value.to_string()))
    }

    fn write_date_time(&mut self, millis: i64) -> Result<(), CodecError> {
        self.push(DocumentValue::DateTime(millis))
    }

    fn write_object_id(&mut self, value: ObjectIdBytes) -> Result<(), CodecError> {
        self.push(DocumentValue::ObjectId(value))
    }
}

/// Reader consuming values from the front of an in-memory list
#[derive(Debug, Default)]
pub struct DocumentReader {
    values: VecDeque<DocumentValue>,
}

impl DocumentReader {
    pub fn new(values: Vec<DocumentValue>) -> Self {
        Self {
            values: values.into(),
        }
    }

    /// Number of values not yet read
    pub fn remaining(&self) -> usize {
        self.values.len()
    }

    fn next_value(&mut self, expected: &'static str) -> Result<DocumentValue, CodecError> {
        let found = self
            .values
            .front()
            .ok_or(CodecError::UnexpectedEndOfDocument)?
            .type_name();
        if found != expected {
            return Err(CodecError::TypeMismatch { expected, found });
        }
        self.values
            .pop_front()
            .ok_or(CodecError::UnexpectedEndOfDocument)
    }
}

macro_rules! read_as {
    ($self:ident, $name:literal, $variant:ident) => {
        match $self.next_value($name)? {
            DocumentValue::$variant(v) => Ok(v),
            other => Err(CodecError::TypeMismatch {
                expected: $name,
                found: other.type_name(),
            }),
        }
    };
}

impl ValueReader for DocumentReader {
    fn read_null(&mut self) -> Result<(), CodecError> {
        self.next_value("null").map(|_| ())
    }

    fn read_boolean(&mut self) -> Result<bool, CodecError> {
        read_as!(self, "boolean", Boolean)
    }

    fn read_binary(&mut self) -> Result<Vec<u8>, CodecError> {
        read_as!(self, "binary", Binary)
    }

    fn read_double(&mut self) -> Result<f64, CodecError> {
        read_as!(self, "double", Double)
    }

    fn read_int32(&mut self) -> Result<i32, CodecError> {
        read_as!(self, "int32", Int32)
    }

    fn read_int64(&mut self) -> Result<i64, CodecError> {
        read_as!(self, "int64", Int64)
    }

    fn read_string(&mut self) -> Result<String, CodecError> {
        read_as!(self, "string", String)
    }

    fn read_date_time(&mut self) -> Result<i64, CodecError> {
        read_as!(self, "datetime", DateTime)
    }

    fn read_object_id(&mut self) -> Result<ObjectIdBytes, CodecError> {
        read_as!(self, "objectid", ObjectId)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_write_then_read() {
        let mut writer = DocumentWriter::new();
        writer.write_string("a").unwrap();
        writer.write_int64(7).unwrap();
        writer.write_null().unwrap();

        let mut reader = DocumentReader::new(writer.into_values());
        assert_eq!(reader.read_string().unwrap(), "a");
        assert_eq!(reader.read_int64().unwrap(), 7);
        assert!(reader.read_null().is_ok());
        assert_eq!(reader.remaining(), 0);
    }

    #[test]
    fn test_read_null_does_not_consume_other_values() {
        let mut reader = DocumentReader::new(vec![DocumentValue::Int32(3)]);
        assert_eq!(
            reader.read_null(),
            Err(CodecError::TypeMismatch {
                expected: "null",
                found: "int32"
            })
        );
        assert_eq!(reader.remaining(), 1);
        assert_eq!(reader.read_int32().unwrap(), 3);
    }

    #[test]
    fn test_read_past_end() {
        let mut reader = DocumentReader::new(vec![]);
        assert_eq!(reader.read_boolean(), Err(CodecError::UnexpectedEndOfDocument));
    }
}
