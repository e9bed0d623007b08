#![no_main]

use libfuzzer_sys::fuzz_target;
use pyslice::{GraphemeSeq, PySlice};

fuzz_target!(|data: &[u8]| {
    // First two bytes seed the index; the rest must be UTF-8.
    if data.len() < 2 {
        return;
    }
    let (head, tail) = data.split_at(2);
    let index = i64::from(i16::from_le_bytes([head[0], head[1]]));
    let Ok(s) = std::str::from_utf8(tail) else {
        return;
    };
    // First space splits pattern material from text material.
    let (pattern, text) = match s.find(' ') {
        Some(pos) => (&s[..pos], &s[pos + 1..]),
        None => ("", s),
    };

    let seq = GraphemeSeq::new(text);
    let len = seq.len();

    // Element access is total and mirror-consistent.
    let cluster = text.grapheme_at(index);
    if let Some(cluster) = cluster {
        assert!(!cluster.is_empty());
    }
    if index >= 0 && (index as usize) < len {
        assert_eq!(cluster, text.grapheme_at(index - len as i64));
    }

    // Every range shape is total; the full range reproduces the text.
    let _ = text.slice(index..index.saturating_add(3));
    let _ = text.slice(index..=index.saturating_add(3));
    let _ = text.slice(index..);
    let _ = text.slice(..index);
    let _ = text.slice(..=index);
    assert_eq!(text.slice(..), Some(text));

    // Occurrences stay in bounds, in order, and read back as the pattern.
    let mut previous_end = 0;
    for span in text.occurrences_of(pattern) {
        assert!(span.start >= previous_end && span.end <= len);
        previous_end = span.end;
        assert_eq!(seq.span_str(span), Some(pattern));
    }

    if let Some(ch) = pattern.chars().next() {
        for pos in text.positions_of(ch) {
            assert!(pos < len);
        }
    }

    for (outer, inner) in text
        .paired_ranges(pattern, pattern, true)
        .iter()
        .zip(text.paired_ranges(pattern, pattern, false))
    {
        assert!(outer.start <= inner.start && inner.end <= outer.end && outer.end <= len);
    }

    if let Some(range) = text.range_from(pattern) {
        assert!(range.start <= len);
    }
    if let Some(range) = text.range_through(pattern) {
        assert!(range.end < len);
    }
});
