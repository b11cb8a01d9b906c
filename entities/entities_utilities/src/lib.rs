//! Entities Layer: Utilities
//!
//! Provides utility types shared by the inner layers:
//! - Big number operations used as an exact intermediate for time arithmetic

pub mod big;

pub use big::BigNumber;
