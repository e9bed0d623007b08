//! Signed logical-index resolution.
//!
//! Logical indices are Python-style: non-negative values address from the
//! front (`0` is the first cluster), negative values address from the end
//! (`-1` is the last cluster, `-N` the first). Element addressing and
//! range-bound addressing differ in exactly one place: the sequence length
//! `N` is a valid *bound* (the exclusive end sentinel) but never a valid
//! *element*.
//!
//! ## Notes
//! - Negative values resolve by pure positional mirroring (`N + index`).
//!   Resolution never inspects cluster contents, so two clusters with equal
//!   text at different positions can never be confused for one another.
//! - Out-of-range indices are reported as [`QueryError::OutOfRange`], never
//!   clamped and never panicking.

use crate::errors::QueryError;

/// Resolve a logical index to an element position in `[0, N)`.
///
/// ## Parameters
/// - `len`: the sequence length `N` in clusters.
/// - `index`: the signed logical index.
///
/// ## Returns
/// - `Ok(usize)`: the concrete position of the addressed element.
/// - `Err(QueryError::OutOfRange)`: if `index >= N` or `index < -N`.
pub fn resolve_element(len: usize, index: i64) -> Result<usize, QueryError> {
    let len = len as i64;
    let pos = if index < 0 { len + index } else { index };
    if pos < 0 || pos >= len {
        Err(QueryError::OutOfRange)
    } else {
        Ok(pos as usize)
    }
}

/// Resolve a logical index to a range-bound position in `[0, N]`.
///
/// Identical to [`resolve_element`] except that position `N`, the
/// exclusive end sentinel, is accepted. Only the non-negative form can
/// reach it (`-0` does not exist; `-N` mirrors to position `0`).
///
/// ## Returns
/// - `Ok(usize)`: the concrete bound position.
/// - `Err(QueryError::OutOfRange)`: if `index > N` or `index < -N`.
pub fn resolve_bound(len: usize, index: i64) -> Result<usize, QueryError> {
    let len = len as i64;
    let pos = if index < 0 { len + index } else { index };
    if pos < 0 || pos > len {
        Err(QueryError::OutOfRange)
    } else {
        Ok(pos as usize)
    }
}
