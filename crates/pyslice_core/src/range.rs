//! Logical range shapes and their resolution.
//!
//! The six subscript range shapes are modeled as one closed tagged union,
//! [`SignedRange`], with a single resolution arm per variant so the match
//! stays exhaustiveness-checked as shapes evolve. `From` conversions from
//! Rust's own range family keep call sites in native syntax: `1..-1`,
//! `..=2`, `-3..`, `..`.
//!
//! ## Notes
//! - Every shape resolves to a *normalized half-open* pair of positions
//!   `(start, end)` with `start <= end <= N`; closed shapes are normalized
//!   by extending their inclusive endpoint by one.
//! - Exclusive bounds resolve in `[0, N]`; inclusive endpoints name an
//!   element and resolve in `[0, N)`.
//! - Closed two-sided ranges require their resolved bounds to be strictly
//!   increasing: an equal-bound closed range is degenerate and does not
//!   resolve (element access covers the single-cluster case).
//! - Nothing is clamped: any endpoint outside the sequence makes the whole
//!   range unresolvable.

use std::ops::{Range, RangeFrom, RangeFull, RangeInclusive, RangeTo, RangeToInclusive};

use crate::errors::QueryError;
use crate::index::{resolve_bound, resolve_element};

/// The six logical range shapes over signed indices.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SignedRange {
    /// `lo..hi`: half-open.
    Range(i64, i64),
    /// `lo..=hi`: closed; resolved bounds must be strictly increasing.
    Inclusive(i64, i64),
    /// `lo..`: from `lo` through the end of the sequence.
    From(i64),
    /// `..hi`: from the start up to `hi`, exclusive.
    To(i64),
    /// `..=hi`: from the start through the element at `hi`.
    ToInclusive(i64),
    /// `..`: the whole sequence.
    Full,
}

impl From<Range<i64>> for SignedRange {
    fn from(range: Range<i64>) -> SignedRange {
        SignedRange::Range(range.start, range.end)
    }
}

impl From<RangeInclusive<i64>> for SignedRange {
    fn from(range: RangeInclusive<i64>) -> SignedRange {
        SignedRange::Inclusive(*range.start(), *range.end())
    }
}

impl From<RangeFrom<i64>> for SignedRange {
    fn from(range: RangeFrom<i64>) -> SignedRange {
        SignedRange::From(range.start)
    }
}

impl From<RangeTo<i64>> for SignedRange {
    fn from(range: RangeTo<i64>) -> SignedRange {
        SignedRange::To(range.end)
    }
}

impl From<RangeToInclusive<i64>> for SignedRange {
    fn from(range: RangeToInclusive<i64>) -> SignedRange {
        SignedRange::ToInclusive(range.end)
    }
}

impl From<RangeFull> for SignedRange {
    fn from(_: RangeFull) -> SignedRange {
        SignedRange::Full
    }
}

/// Resolve a logical range against a sequence of `len` clusters.
///
/// ## Parameters
/// - `len`: the sequence length `N` in clusters.
/// - `range`: the logical range shape.
///
/// ## Returns
/// - `Ok((start, end))`: a normalized half-open position pair with
///   `start <= end <= N` (equal positions denote an empty slice).
/// - `Err(QueryError::OutOfRange)`: an endpoint cannot be resolved.
/// - `Err(QueryError::InvertedRange)`: resolved bounds are out of order
///   (or equal, for a closed two-sided range).
pub fn resolve_range(len: usize, range: SignedRange) -> Result<(usize, usize), QueryError> {
    match range {
        SignedRange::Range(lo, hi) => {
            let start = resolve_bound(len, lo)?;
            let end = resolve_bound(len, hi)?;
            if start <= end {
                Ok((start, end))
            } else {
                Err(QueryError::InvertedRange)
            }
        }
        SignedRange::Inclusive(lo, hi) => {
            let start = resolve_element(len, lo)?;
            let last = resolve_element(len, hi)?;
            if last > start {
                Ok((start, last + 1))
            } else {
                Err(QueryError::InvertedRange)
            }
        }
        SignedRange::From(lo) => {
            let start = resolve_bound(len, lo)?;
            Ok((start, len))
        }
        SignedRange::To(hi) => {
            let end = resolve_bound(len, hi)?;
            Ok((0, end))
        }
        SignedRange::ToInclusive(hi) => {
            let last = resolve_element(len, hi)?;
            Ok((0, last + 1))
        }
        SignedRange::Full => Ok((0, len)),
    }
}
