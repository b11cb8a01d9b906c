//! Validation Errors Module
//!
//! Errors reported by the structural checks on `Duration` and `Timestamp`.

use thiserror::Error;

/// Structural validation failures for duration and timestamp values
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// Duration seconds exceed roughly ten thousand years in either direction
    #[error("duration ({seconds}s, {nanos}ns) exceeds +-10000 years")]
    DurationSecondsOutOfRange {
        /// Whole seconds of the rejected value
        seconds: i64,
        /// Nanoseconds of the rejected value
        nanos: i32,
    },

    /// Duration nanoseconds magnitude is one second or more
    #[error("duration ({seconds}s, {nanos}ns) has out-of-range nanos")]
    DurationNanosOutOfRange {
        /// Whole seconds of the rejected value
        seconds: i64,
        /// Nanoseconds of the rejected value
        nanos: i32,
    },

    /// Duration seconds and nanoseconds carry opposite signs
    #[error("duration ({seconds}s, {nanos}ns) has seconds and nanos with different signs")]
    DurationSignMismatch {
        /// Whole seconds of the rejected value
        seconds: i64,
        /// Nanoseconds of the rejected value
        nanos: i32,
    },

    /// Timestamp is earlier than 0001-01-01T00:00:00Z
    #[error("timestamp ({seconds}s, {nanos}ns) before 0001-01-01")]
    TimestampBeforeMinimum {
        /// Whole seconds of the rejected value
        seconds: i64,
        /// Nanoseconds of the rejected value
        nanos: i32,
    },

    /// Timestamp is later than 9999-12-31T23:59:59Z
    #[error("timestamp ({seconds}s, {nanos}ns) after 9999-12-31")]
    TimestampAfterMaximum {
        /// Whole seconds of the rejected value
        seconds: i64,
        /// Nanoseconds of the rejected value
        nanos: i32,
    },

    /// Timestamp nanoseconds outside [0, 999999999]
    #[error("timestamp ({seconds}s, {nanos}ns) has out-of-range nanos")]
    TimestampNanosOutOfRange {
        /// Whole seconds of the rejected value
        seconds: i64,
        /// Nanoseconds of the rejected value
        nanos: i32,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display_names_the_value() {
        let error = ValidationError::DurationSignMismatch {
            seconds: 1,
            nanos: -1,
        };
        let message = error.to_string();
        assert!(message.contains("1s"));
        assert!(message.contains("-1ns"));
    }

    #[test]
    fn test_error_clone_eq() {
        let error = ValidationError::TimestampNanosOutOfRange {
            seconds: 0,
            nanos: -5,
        };
        assert_eq!(error.clone(), error);
    }
}
