//! API Facades Layer
//!
//! One crate to depend on. Re-exports the well-known types, the duration and
//! timestamp conversion helpers, and the document registry with its codecs,
//! and adds `default_registry` for callers that want everything bound.

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

pub mod codec_facades;
pub mod time_facades;

// Re-export main facade types
pub use codec_facades::*;
pub use time_facades::*;
