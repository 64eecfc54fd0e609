//! Grapheme cluster handling utilities
//!
//! Output records carry one extended grapheme cluster each, so a base
//! letter followed by combining marks (e.g. "e\u{301}") stays one record.

use unicode_segmentation::UnicodeSegmentation;

/// Split text into extended grapheme clusters
pub fn graphemes(text: &str) -> impl Iterator<Item = &str> {
    text.graphemes(true)
}

/// Count extended grapheme clusters in text
pub fn grapheme_count(text: &str) -> usize {
    graphemes(text).count()
}
