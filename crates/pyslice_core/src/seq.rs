//! Borrowed grapheme-cluster view of a string.
//!
//! Rust strings are UTF-8 byte buffers; a user-perceived character (an
//! extended grapheme cluster) can span several bytes and several Unicode
//! scalars, so byte offsets and `char` counts are both the wrong unit for
//! Python-style subscripts. [`GraphemeSeq`] reifies the cluster view once:
//! it records the byte offset of every cluster boundary, and every resolver
//! in this crate works in cluster positions against that table.
//!
//! ## Notes
//! - Positions are `usize` in `[0, N]`, where `N` is the cluster count.
//!   `N` itself is the end sentinel: valid as an exclusive upper bound,
//!   never as an element.
//! - Segmentation policy is delegated wholesale to `unicode-segmentation`
//!   (extended clusters, UAX #29). This crate adds no segmentation rules of
//!   its own.
//! - The view borrows the text; sub-slices returned by accessors borrow the
//!   *original* text, not the view, so they outlive a temporary view.

use std::ops::Range;

use unicode_segmentation::UnicodeSegmentation;

/// An immutable sequence-of-clusters view over a borrowed `&str`.
///
/// Construction walks the text once and stores `N + 1` byte offsets:
/// `bounds[i]` is where cluster `i` starts and `bounds[N]` is the total byte
/// length. All per-call query state lives in the caller; the view itself is
/// read-only and freely shareable across threads.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GraphemeSeq<'a> {
    text: &'a str,
    bounds: Vec<usize>,
}

impl<'a> GraphemeSeq<'a> {
    /// Segment `text` into its extended grapheme clusters.
    ///
    /// ## Parameters
    /// - `text`: the string to view; borrowed for the life of the view.
    ///
    /// ## Returns
    /// - (`GraphemeSeq`): a boundary table over `text`.
    pub fn new(text: &'a str) -> GraphemeSeq<'a> {
        let mut bounds: Vec<usize> =
            text.grapheme_indices(true).map(|(offset, _)| offset).collect();
        bounds.push(text.len());
        GraphemeSeq { text, bounds }
    }

    /// Return the number of grapheme clusters in the sequence.
    pub fn len(&self) -> usize {
        self.bounds.len() - 1
    }

    /// Check whether the sequence contains no clusters.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Return the underlying text.
    pub fn as_str(&self) -> &'a str {
        self.text
    }

    /// Return the cluster at `pos`, or `None` past the end.
    ///
    /// Clusters are returned as `&str` because a user-perceived character
    /// may span several Unicode scalars (e.g. a skin-tone emoji).
    pub fn grapheme(&self, pos: usize) -> Option<&'a str> {
        if pos < self.len() {
            Some(&self.text[self.bounds[pos]..self.bounds[pos + 1]])
        } else {
            None
        }
    }

    /// Return the sub-slice covering the half-open position range `span`.
    ///
    /// ## Parameters
    /// - `span`: cluster positions, `span.start <= span.end <= len()`.
    ///
    /// ## Returns
    /// - `Some(&str)`: the covered text (empty when `span` is empty).
    /// - `None`: if `span` is inverted or reaches past the end.
    pub fn span_str(&self, span: Range<usize>) -> Option<&'a str> {
        if span.start <= span.end && span.end <= self.len() {
            Some(&self.text[self.bounds[span.start]..self.bounds[span.end]])
        } else {
            None
        }
    }

    /// Return the byte offset where cluster `pos` starts.
    ///
    /// `pos == len()` yields the total byte length (the end boundary).
    pub fn byte_offset(&self, pos: usize) -> Option<usize> {
        self.bounds.get(pos).copied()
    }

    /// Map an exact cluster-boundary byte offset back to its position.
    ///
    /// Returns `None` when `byte` falls inside a cluster; scanners use this
    /// to reject byte-level pattern hits that straddle cluster boundaries.
    pub fn position_at_byte(&self, byte: usize) -> Option<usize> {
        self.bounds.binary_search(&byte).ok()
    }

    /// Return the byte offset of the first cluster boundary strictly after
    /// `byte`, or `None` when `byte` is at or past the end boundary.
    pub fn next_boundary_after(&self, byte: usize) -> Option<usize> {
        let idx = self.bounds.partition_point(|&b| b <= byte);
        self.bounds.get(idx).copied()
    }

    /// Iterate over the clusters in order.
    pub fn iter(&self) -> impl Iterator<Item = &'a str> + '_ {
        let text = self.text;
        self.bounds.windows(2).map(move |w| &text[w[0]..w[1]])
    }
}
