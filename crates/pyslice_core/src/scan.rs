//! Occurrence scanning at grapheme-cluster granularity.
//!
//! Patterns are matched by exact code-unit equality on the underlying
//! bytes, but a byte-level hit only counts as an occurrence when both of
//! its ends land on cluster boundaries. A hit that starts or stops inside
//! a cluster (`"e"` inside `"e\u{301}"`, one regional indicator inside a
//! two-indicator flag) is skipped and the scan resumes at the next
//! boundary.
//!
//! ## Notes
//! - All scans are left-to-right and non-overlapping: each resumes at or
//!   after the previous match's end, so a scan over `N` clusters takes at
//!   most `N` steps and always terminates.
//! - Results are cluster-position ranges, directly applicable back to the
//!   same sequence via [`GraphemeSeq::span_str`].
//! - Empty patterns never match anything. A zero-width match could not
//!   advance the cursor, so the guard doubles as the termination proof.
//! - Scans are eager and hold no state between calls; rescanning the same
//!   input yields the same occurrence list.

use std::ops::{Range, RangeFrom, RangeToInclusive};

use unicode_segmentation::UnicodeSegmentation;

use crate::errors::QueryError;
use crate::seq::GraphemeSeq;

/// Find the first cluster-aligned occurrence of `pattern` at or after
/// cluster position `from`.
///
/// Byte-level hits are candidates; a candidate whose start or end falls
/// inside a cluster is discarded and the search resumes at the next
/// cluster boundary after the discarded start. Callers must reject empty
/// patterns first.
fn find_from(seq: &GraphemeSeq<'_>, from: usize, pattern: &str) -> Option<Range<usize>> {
    let text = seq.as_str();
    let mut cursor = seq.byte_offset(from)?;
    loop {
        let hit = cursor + text[cursor..].find(pattern)?;
        if let (Some(start), Some(end)) =
            (seq.position_at_byte(hit), seq.position_at_byte(hit + pattern.len()))
        {
            return Some(start..end);
        }
        cursor = seq.next_boundary_after(hit)?;
    }
}

/// Enumerate every non-overlapping occurrence of `pattern`, left to right.
///
/// ## Parameters
/// - `seq`: the sequence to scan.
/// - `pattern`: the substring to look for; compared by exact code units.
///
/// ## Returns
/// - (`Vec<Range<usize>>`): half-open cluster-position ranges in scan
///   order. Empty when `pattern` is empty or never occurs aligned.
pub fn occurrences(seq: &GraphemeSeq<'_>, pattern: &str) -> Vec<Range<usize>> {
    if pattern.is_empty() {
        return Vec::new();
    }
    let mut found = Vec::new();
    let mut cursor = 0;
    while let Some(span) = find_from(seq, cursor, pattern) {
        cursor = span.end;
        found.push(span);
    }
    found
}

/// Enumerate the cluster positions where `ch` occurs as a whole cluster.
///
/// A `char` that only appears fused into a larger cluster (a base letter
/// carrying a combining mark, say) is not reported at that position.
pub fn char_positions(seq: &GraphemeSeq<'_>, ch: char) -> Vec<usize> {
    let mut buf = [0u8; 4];
    let pattern: &str = ch.encode_utf8(&mut buf);
    occurrences(seq, pattern).into_iter().map(|span| span.start).collect()
}

/// Enumerate begin/end delimiter pairs, left to right.
///
/// Each iteration finds the next `begin` occurrence, then the next `end`
/// occurrence in the window starting at that begin's end. A begin with no
/// matching end terminates the scan without emitting and without retrying
/// a later begin. The cursor then advances past the end occurrence, so
/// pairs never overlap.
///
/// ## Parameters
/// - `seq`: the sequence to scan.
/// - `begin`: the opening delimiter.
/// - `end`: the closing delimiter.
/// - `inclusive`: when `true`, each emitted range covers both delimiters
///   (`begin.start .. end.end`); when `false`, only the text strictly
///   between them (`begin.end .. end.start`, possibly empty).
///
/// ## Returns
/// - (`Vec<Range<usize>>`): half-open cluster-position ranges in scan
///   order. Empty when either delimiter is empty.
pub fn paired(seq: &GraphemeSeq<'_>, begin: &str, end: &str, inclusive: bool) -> Vec<Range<usize>> {
    if begin.is_empty() || end.is_empty() {
        return Vec::new();
    }
    let mut found = Vec::new();
    let mut cursor = 0;
    while let Some(open) = find_from(seq, cursor, begin) {
        let Some(close) = find_from(seq, open.end, end) else {
            break;
        };
        found.push(if inclusive { open.start..close.end } else { open.end..close.start });
        cursor = close.end;
    }
    found
}

// =====================================================================
// Open-ended ranges anchored on the first occurrence
// =====================================================================

/// Locate the first occurrence of `pattern`, with the guards shared by
/// the open-ended range queries.
fn first_occurrence(seq: &GraphemeSeq<'_>, pattern: &str) -> Result<Range<usize>, QueryError> {
    if pattern.is_empty() {
        return Err(QueryError::EmptyPattern);
    }
    // A pattern spanning more clusters than the sequence holds cannot be
    // addressed within it, independent of whether its bytes occur.
    if pattern.graphemes(true).count() > seq.len() {
        return Err(QueryError::OutOfRange);
    }
    find_from(seq, 0, pattern).ok_or(QueryError::PatternNotFound)
}

/// Resolve the open-ended range from the end of the first occurrence of
/// `pattern` through the end of the sequence.
///
/// The pattern itself is excluded: the range starts at the occurrence's
/// end position.
///
/// ## Returns
/// - `Ok(RangeFrom<usize>)`: `occurrence.end ..` (empty when the
///   occurrence ends the sequence).
/// - `Err(QueryError)`: empty pattern, pattern wider than the sequence,
///   or no aligned occurrence.
pub fn from_first(seq: &GraphemeSeq<'_>, pattern: &str) -> Result<RangeFrom<usize>, QueryError> {
    let span = first_occurrence(seq, pattern)?;
    Ok(span.end..)
}

/// Resolve the closed range from the start of the sequence through the
/// first occurrence of `pattern`.
///
/// Asymmetric with [`from_first`] on purpose: the range reaches *into*
/// the occurrence, covering its first cluster inclusively.
///
/// ## Returns
/// - `Ok(RangeToInclusive<usize>)`: `..= occurrence.start`.
/// - `Err(QueryError)`: empty pattern, pattern wider than the sequence,
///   or no aligned occurrence.
pub fn through_first(
    seq: &GraphemeSeq<'_>,
    pattern: &str,
) -> Result<RangeToInclusive<usize>, QueryError> {
    let span = first_occurrence(seq, pattern)?;
    Ok(..=span.start)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn occurrences_walk_left_to_right_without_overlap() {
        let seq = GraphemeSeq::new("ababab");
        assert_eq!(occurrences(&seq, "ab"), vec![0..2, 2..4, 4..6]);
        let seq = GraphemeSeq::new("aaaa");
        assert_eq!(occurrences(&seq, "aa"), vec![0..2, 2..4]);
        let seq = GraphemeSeq::new("aaa");
        assert_eq!(occurrences(&seq, "aa"), vec![0..2]);
    }

    #[test]
    fn occurrences_handle_degenerate_patterns() {
        let seq = GraphemeSeq::new("abc");
        assert_eq!(occurrences(&seq, ""), vec![]);
        assert_eq!(occurrences(&seq, "zz"), vec![]);
        assert_eq!(occurrences(&seq, "abcd"), vec![]);
        let seq = GraphemeSeq::new("");
        assert_eq!(occurrences(&seq, "a"), vec![]);
    }

    #[test]
    fn occurrences_respect_cluster_boundaries() {
        // "e" occurs as raw bytes but only as a fragment of "e\u{301}".
        let seq = GraphemeSeq::new("e\u{301}x");
        assert_eq!(occurrences(&seq, "e"), vec![]);
        assert_eq!(occurrences(&seq, "e\u{301}"), vec![0..1]);
        assert_eq!(occurrences(&seq, "x"), vec![1..2]);

        // Two flags AB AB; the byte-level "BA" hit straddles them.
        let ab = "\u{1F1E6}\u{1F1E7}";
        let ba = "\u{1F1E7}\u{1F1E6}";
        let seq = GraphemeSeq::new("\u{1F1E6}\u{1F1E7}\u{1F1E6}\u{1F1E7}");
        assert_eq!(occurrences(&seq, ba), vec![]);
        assert_eq!(occurrences(&seq, ab), vec![0..1, 1..2]);
    }

    #[test]
    fn occurrence_spans_apply_back_to_the_text() {
        let seq = GraphemeSeq::new("naïve café");
        let spans = occurrences(&seq, "caf");
        assert_eq!(spans, vec![6..9]);
        assert_eq!(seq.span_str(spans[0].clone()), Some("caf"));
    }

    #[test]
    fn char_positions_report_whole_cluster_matches_only() {
        let seq = GraphemeSeq::new("aXbXc");
        assert_eq!(char_positions(&seq, 'X'), vec![1, 3]);
        assert_eq!(char_positions(&seq, 'z'), vec![]);

        // The first "e" carries a combining mark; only the bare one counts.
        let seq = GraphemeSeq::new("e\u{301}e");
        assert_eq!(char_positions(&seq, 'e'), vec![1]);
    }

    #[test]
    fn paired_emits_inclusive_and_gap_variants() {
        let seq = GraphemeSeq::new("<a>mid</a>");
        let inclusive = paired(&seq, "<a>", "</a>", true);
        assert_eq!(inclusive, vec![0..10]);
        assert_eq!(seq.span_str(inclusive[0].clone()), Some("<a>mid</a>"));

        let gap = paired(&seq, "<a>", "</a>", false);
        assert_eq!(gap, vec![3..6]);
        assert_eq!(seq.span_str(gap[0].clone()), Some("mid"));
    }

    #[test]
    fn paired_walks_multiple_pairs_in_order() {
        let seq = GraphemeSeq::new("(a)(b)");
        assert_eq!(paired(&seq, "(", ")", true), vec![0..3, 3..6]);
        assert_eq!(paired(&seq, "(", ")", false), vec![1..2, 4..5]);
    }

    #[test]
    fn paired_gap_may_be_empty() {
        let seq = GraphemeSeq::new("()");
        assert_eq!(paired(&seq, "(", ")", false), vec![1..1]);
        assert_eq!(seq.span_str(1..1), Some(""));
    }

    #[test]
    fn unclosed_begin_stops_the_scan_silently() {
        let seq = GraphemeSeq::new("(a)(b");
        assert_eq!(paired(&seq, "(", ")", true), vec![0..3]);
        let seq = GraphemeSeq::new("(never closed");
        assert_eq!(paired(&seq, "(", ")", true), vec![]);
    }

    #[test]
    fn paired_rejects_empty_delimiters() {
        let seq = GraphemeSeq::new("(a)");
        assert_eq!(paired(&seq, "", ")", true), vec![]);
        assert_eq!(paired(&seq, "(", "", true), vec![]);
    }

    #[test]
    fn from_first_excludes_the_pattern() {
        let seq = GraphemeSeq::new("hello world");
        let range = from_first(&seq, "hello").unwrap();
        assert_eq!(range, 5..);
        assert_eq!(seq.span_str(range.start..seq.len()), Some(" world"));

        // An occurrence ending the sequence leaves an empty remainder.
        assert_eq!(from_first(&seq, "world").unwrap(), 11..);
    }

    #[test]
    fn through_first_includes_the_occurrence_start() {
        let seq = GraphemeSeq::new("hello world");
        let range = through_first(&seq, "world").unwrap();
        assert_eq!(range, ..=6);
        assert_eq!(seq.span_str(0..range.end + 1), Some("hello w"));

        assert_eq!(through_first(&seq, "hello").unwrap(), ..=0);
    }

    #[test]
    fn open_ended_queries_distinguish_their_failures() {
        let seq = GraphemeSeq::new("abc");
        assert_eq!(from_first(&seq, ""), Err(QueryError::EmptyPattern));
        assert_eq!(from_first(&seq, "abcd"), Err(QueryError::OutOfRange));
        assert_eq!(from_first(&seq, "zzz"), Err(QueryError::PatternNotFound));
        assert_eq!(through_first(&seq, ""), Err(QueryError::EmptyPattern));
        assert_eq!(through_first(&seq, "abcd"), Err(QueryError::OutOfRange));
        assert_eq!(through_first(&seq, "zzz"), Err(QueryError::PatternNotFound));
    }

    #[test]
    fn open_ended_queries_match_at_cluster_granularity() {
        // The bare "e" is a fragment of the first cluster, so it has no
        // aligned occurrence even though its bytes are present.
        let seq = GraphemeSeq::new("e\u{301}xy");
        assert_eq!(from_first(&seq, "e"), Err(QueryError::PatternNotFound));
        assert_eq!(from_first(&seq, "e\u{301}").unwrap(), 1..);
        assert_eq!(through_first(&seq, "x").unwrap(), ..=1);
    }
}
