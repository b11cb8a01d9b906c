//! Use Cases Layer: Time Conversion
//!
//! Converts durations and timestamps to and from plain `i64` counts at four
//! granularities (nanoseconds, microseconds, milliseconds, seconds).
//!
//! ## Overview
//!
//! Every conversion goes through an exact arbitrary precision intermediate
//! (`seconds * 1e9 + nanos`) and clamps results that do not fit in an `i64`
//! to `i64::MIN` or `i64::MAX`. Overflow is never reported as an error.
//!
//! ## Modules
//!
//! - **[`granularity`](granularity/index.html)**: The single divide-by-factor /
//!   multiply-then-split engine shared by every granularity.
//!
//! - **[`duration_utils`](duration_utils/index.html)**: Duration conversions using
//!   truncating division, so the nanosecond remainder keeps the sign of the total.
//!
//! - **[`timestamp_utils`](timestamp_utils/index.html)**: Timestamp conversions using
//!   floored division, so the nanosecond remainder is never negative, plus the
//!   zero-equivalence helpers (`None` and the Unix epoch are the same instant).
//!
//! ## Usage
//!
//! ```rust
//! use usecases_time_conversion::duration_utils::{
//!     duration_as_milliseconds, new_duration_by_seconds,
//! };
//! use usecases_time_conversion::timestamp_utils::is_timestamp_zero;
//!
//! let d = new_duration_by_seconds(1);
//! assert_eq!(duration_as_milliseconds(Some(&d)), 1000);
//! assert!(is_timestamp_zero(None));
//! ```

pub mod duration_utils;
pub mod granularity;
pub mod timestamp_utils;

pub use duration_utils::DurationConversions;
pub use granularity::{DivisionRule, Granularity};
pub use timestamp_utils::TimestampConversions;
