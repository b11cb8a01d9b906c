//! Entities Layer: Well-Known Types
//!
//! This crate provides the small family of structured value types that the
//! document codecs understand. All types are plain immutable values; absence
//! is expressed with `Option` rather than a sentinel.
//!
//! ## Modules
//!
//! - **[`duration`](duration/index.html)**: `Duration`, a signed elapsed time made of
//!   whole seconds and a nanosecond remainder that shares the sign of the seconds.
//!
//! - **[`timestamp`](timestamp/index.html)**: `Timestamp`, a point in time as seconds
//!   and non-negative nanoseconds since the Unix epoch.
//!
//! - **[`wrappers`](wrappers/index.html)**: `Wrapper<T>` nullable scalar wrappers
//!   (`BoolValue`, `StringValue`, ...) and the `Scalar` tagged union of their payloads.
//!
//! - **[`object_id`](object_id/index.html)**: `ObjectId`, a message carrying the
//!   hexadecimal form of a 12-byte identifier.
//!
//! - **[`error`](error/index.html)**: `ValidationError` returned by the structural
//!   checks on durations and timestamps.
//!
//! ## Usage
//!
//! ```rust
//! use entities_known_types::{Duration, Timestamp, StringValue};
//!
//! let elapsed = Duration::new(1, 500_000_000);
//! assert!(elapsed.is_valid());
//!
//! let at = Timestamp::new(0, 0);
//! assert!(at.is_zero());
//!
//! let name = StringValue::new("x".to_string());
//! assert_eq!(name.value, "x");
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

pub mod duration;
pub mod error;
pub mod object_id;
pub mod timestamp;
pub mod wrappers;

// Re-export main types for convenience
pub use duration::Duration;
pub use error::ValidationError;
pub use object_id::ObjectId;
pub use timestamp::Timestamp;
pub use wrappers::{
    BoolValue, BytesValue, DoubleValue, FloatValue, Int32Value, Int64Value, Scalar, ScalarKind,
    StringValue, UInt32Value, UInt64Value, Wrapper, WrapperPayload,
};

/// Number of nanoseconds in one second
pub const NANOS_PER_SECOND: i64 = 1_000_000_000;
