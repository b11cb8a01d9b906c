//! Infrastructure Layer: Document Registry
//!
//! Provides the document-codec registry that structured-value codecs plug
//! into, together with the native primitive codecs they delegate to.
//!
//! ## Overview
//!
//! The `infrastructure_document_registry` crate is part of the infrastructure
//! layer. It owns everything about the document side of encoding: which
//! primitive kinds exist, how each is written through a `ValueWriter` and read
//! back through a `ValueReader`, and how codecs are looked up by type key.
//! It knows nothing about durations, timestamps or wrappers beyond their keys.
//!
//! ## Modules
//!
//! - **[`types`](types/index.html)**: `TypeKey`, `PrimitiveKind`, `KnownType`
//! - **[`value`](value/index.html)**: `Value` passed to codecs, and the typed
//!   `Encodable`/`Decodable` front door
//! - **[`value_rw`](value_rw/index.html)**: `ValueWriter`/`ValueReader` traits
//! - **[`document`](document/index.html)**: in-memory document reader and writer
//! - **[`registry`](registry/index.html)**: `ValueCodec`, `RegistryBuilder`, `Registry`
//! - **[`primitive_codecs`](primitive_codecs/index.html)**: native codecs for
//!   every primitive kind
//! - **[`object_id`](object_id/index.html)**: native 12-byte identifier
//!
//! ## Usage
//!
//! ```rust
//! use infrastructure_document_registry::{DocumentValue, DocumentWriter, RegistryBuilder};
//!
//! let registry = RegistryBuilder::with_primitives().build();
//! let mut writer = DocumentWriter::new();
//! registry.encode(&mut writer, &"x".to_string()).unwrap();
//! assert_eq!(writer.values(), &[DocumentValue::String("x".to_string())]);
//! ```

/*
 * %CopyrightBegin%
 *
 * SPDX-License-Identifier: Apache-2.0
 *
 * Licensed under the Apache License, Version 2.0 (the "License");
 * you may not use this file except in compliance with the License.
 * You may obtain a copy of the License at
 *
 *     http://www.apache.org/licenses/LICENSE-2.0
 *
 * Unless required by applicable law or agreed to in writing, software
 * distributed under the License is distributed on an "AS IS" BASIS,
 * WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
 * See the License for the specific language governing permissions and
 * limitations under the License.
 *
 * %CopyrightEnd%
 */

pub mod document;
pub mod error;
pub mod object_id;
pub mod primitive_codecs;
pub mod registry;
pub mod types;
pub mod value;
pub mod value_rw;

pub use document::{DocumentReader, DocumentValue, DocumentWriter};
pub use error::CodecError;
pub use object_id::ObjectIdBytes;
pub use registry::{DecodeContext, EncodeContext, Registry, RegistryBuilder, ValueCodec};
pub use types::{KnownType, PrimitiveKind, TypeKey};
pub use value::{Decodable, Encodable, KnownValue, PrimitiveValue, Value};
pub use value_rw::{ValueReader, ValueWriter};
