//! Canonical error vocabulary for subscript queries.
//!
//! The core reports precise failure reasons; consumers choose policy. The
//! facade crate (`pyslice`) flattens every failure into an absent result so
//! the public surface stays total and panic-free, while tests and embedders
//! that call the core directly can still assert on the exact reason.

use std::fmt;

/// Message for an index or bound whose magnitude exceeds the sequence length.
pub const OUT_OF_RANGE_MSG: &str = "index out of range";
/// Message for a range whose bounds resolve out of order.
pub const INVERTED_RANGE_MSG: &str = "range bounds resolve out of order";
/// Message for a zero-length pattern.
pub const EMPTY_PATTERN_MSG: &str = "pattern must not be empty";
/// Message for a pattern with no occurrence in the sequence.
pub const PATTERN_NOT_FOUND_MSG: &str = "pattern not found";

/// Represent query failures produced by the resolution and scanning helpers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QueryError {
    /// Index or bound magnitude exceeds the sequence length.
    OutOfRange,
    /// Resolved bounds violate the ordering invariant (`start <= end`;
    /// strictly increasing for closed shapes).
    InvertedRange,
    /// Zero-length pattern. Always rejected: a scan over it could never
    /// advance its cursor.
    EmptyPattern,
    /// The pattern does not occur in the sequence.
    PatternNotFound,
}

impl QueryError {
    /// Return the canonical error message for this failure.
    ///
    /// ## Returns
    /// - (`&'static str`): the shared error message string.
    pub fn message(self) -> &'static str {
        match self {
            QueryError::OutOfRange => OUT_OF_RANGE_MSG,
            QueryError::InvertedRange => INVERTED_RANGE_MSG,
            QueryError::EmptyPattern => EMPTY_PATTERN_MSG,
            QueryError::PatternNotFound => PATTERN_NOT_FOUND_MSG,
        }
    }
}

impl fmt::Display for QueryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message())
    }
}

impl std::error::Error for QueryError {}
