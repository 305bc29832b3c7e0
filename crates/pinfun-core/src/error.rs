//! # Error Types
//!
//! Defines the error type returned by every fallible operation in
//! `pinfun-core`. All variants use `thiserror` for derive-based `Display`
//! and `Error` implementations.
//!
//! ## Design
//!
//! - Errors are raised at the point of the invalid call. Nothing is
//!   deferred and nothing is retried internally.
//! - `InvalidArgument` and `Format` are caller mistakes: retrying with the
//!   same input will fail the same way.
//! - `Exhausted` is the one outcome that depends on the policies rather
//!   than on malformed input.

use thiserror::Error;

/// Top-level error type for PIN construction, parsing and generation.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PinError {
    /// A length, count, digit sequence or policy name was rejected.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// Text could not be parsed as a sequence of decimal digits.
    #[error("format error: {0}")]
    Format(String),

    /// The whole PIN space was sampled without finding an acceptable PIN.
    #[error("no PIN of length {length} satisfies the policies (sampled all {attempts} combinations)")]
    Exhausted {
        /// Requested PIN length.
        length: usize,
        /// Number of candidates drawn before giving up.
        attempts: u128,
    },
}

impl PinError {
    pub(crate) fn invalid(msg: impl Into<String>) -> Self {
        Self::InvalidArgument(msg.into())
    }
}
