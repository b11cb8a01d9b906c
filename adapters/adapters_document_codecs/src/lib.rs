//! Adapters Layer: Document Codecs
//!
//! Codecs that let the well-known types travel through a document registry.
//! None of them writes document bytes directly: each one converts its value
//! to a native primitive and hands it to the primitive codec bound in the
//! same registry. Absent values are written as the document's null and a
//! null reads back as absent.
//!
//! ## Modules
//!
//! - **[`null`](null/index.html)**: Write and recognize null through the registry.
//!
//! - **[`wrappers_codec`](wrappers_codec/index.html)**: One codec for all nine scalar
//!   wrappers; a present wrapper encodes exactly like its bare payload.
//!
//! - **[`duration_codec`](duration_codec/index.html)**: `Duration` as the elapsed-time
//!   primitive.
//!
//! - **[`timestamp_codec`](timestamp_codec/index.html)**: `Timestamp` as a UTC date-time.
//!
//! - **[`object_id_codec`](object_id_codec/index.html)**: `ObjectId` hex strings as
//!   native 12-byte object ids.
//!
//! - **[`registration`](registration/index.html)**: `register_codecs` and
//!   `register_all_codecs`.
//!
//! ## Usage
//!
//! ```rust
//! use adapters_document_codecs::register_all_codecs;
//! use entities_known_types::Duration;
//! use infrastructure_document_registry::{DocumentReader, DocumentWriter, RegistryBuilder};
//!
//! let registry = register_all_codecs(RegistryBuilder::with_primitives()).build();
//!
//! let mut writer = DocumentWriter::new();
//! registry.encode(&mut writer, &Some(Duration::new(2, 0))).unwrap();
//!
//! let mut reader = DocumentReader::new(writer.into_values());
//! let decoded: Option<Duration> = registry.decode(&mut reader).unwrap();
//! assert_eq!(decoded, Some(Duration::new(2, 0)));
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

pub mod duration_codec;
pub mod null;
pub mod object_id_codec;
pub mod registration;
pub mod timestamp_codec;
pub mod wrappers_codec;

pub use duration_codec::{register_duration_codec, DurationCodec};
pub use null::{decode_null, encode_null};
pub use object_id_codec::{register_object_id_codec, ObjectIdCodec};
pub use registration::{register_all_codecs, register_codecs, CodecSelection};
pub use timestamp_codec::{register_timestamp_codec, TimestampCodec};
pub use wrappers_codec::{register_wrappers_codec, WrappersCodec};
