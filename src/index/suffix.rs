//! In-memory suffix array over one region's text.
//!
//! Built once at load time by sorting every suffix position, then queried
//! with two binary searches that bracket the run of suffixes starting with
//! the pattern. The run covers every occurrence of the pattern, including
//! overlapping ones, with no post-filtering.

use rayon::prelude::*;

/// Byte offset into a region's text.
///
/// Offsets are 32-bit; a region is one slice of a literary anthology, far
/// below the 4 GiB this allows. [`SuffixIndex::build`] asserts the bound.
pub type TextOffset = u32;

/// Texts above this size are sorted on the rayon pool.
const PARALLEL_SORT_THRESHOLD: usize = 100_000;

/// Immutable substring index over one region's text.
#[derive(Debug)]
pub struct SuffixIndex {
    text: Vec<u8>,
    suffixes: Vec<TextOffset>,
}

impl SuffixIndex {
    /// Builds the index, taking ownership of the region text.
    pub fn build(text: Vec<u8>) -> Self {
        assert!(
            text.len() <= TextOffset::MAX as usize,
            "region text exceeds suffix index capacity"
        );
        let suffixes = sort_suffixes(&text);
        Self { text, suffixes }
    }

    /// The indexed text.
    #[inline]
    pub fn text(&self) -> &[u8] {
        &self.text
    }

    /// Number of indexed suffixes (equal to the text length).
    pub fn suffix_count(&self) -> usize {
        self.suffixes.len()
    }

    /// Returns the start offset of every occurrence of `pattern`.
    ///
    /// Offsets come back in suffix-array order, not text order. The empty
    /// pattern matches nothing.
    pub fn lookup(&self, pattern: &[u8]) -> &[TextOffset] {
        if pattern.is_empty() || self.suffixes.is_empty() {
            return &[];
        }
        let lo = self.lower_bound(pattern);
        let hi = self.upper_bound(pattern, lo);
        &self.suffixes[lo..hi]
    }

    /// First suffix-array index whose suffix sorts at or after `pattern`.
    fn lower_bound(&self, pattern: &[u8]) -> usize {
        let mut lo = 0;
        let mut hi = self.suffixes.len();

        while lo < hi {
            let mid = lo + (hi - lo) / 2;
            let suffix = &self.text[self.suffixes[mid] as usize..];

            // Compare only up to the pattern length; a suffix shorter than
            // the pattern compares less and can never match.
            let prefix = &suffix[..pattern.len().min(suffix.len())];

            if prefix < pattern {
                lo = mid + 1;
            } else {
                hi = mid;
            }
        }

        lo
    }

    /// First suffix-array index past the run of suffixes starting with
    /// `pattern`.
    fn upper_bound(&self, pattern: &[u8], start: usize) -> usize {
        let mut lo = start;
        let mut hi = self.suffixes.len();

        while lo < hi {
            let mid = lo + (hi - lo) / 2;
            let suffix = &self.text[self.suffixes[mid] as usize..];
            let starts_with =
                suffix.len() >= pattern.len() && &suffix[..pattern.len()] == pattern;

            if starts_with {
                lo = mid + 1;
            } else {
                hi = mid;
            }
        }

        lo
    }
}

/// Sorts all suffix positions lexicographically.
///
/// Comparisons are unbounded: suffixes are compared to their full length,
/// so lookups stay exact for queries of any length.
fn sort_suffixes(text: &[u8]) -> Vec<TextOffset> {
    let mut suffixes: Vec<TextOffset> = (0..text.len() as TextOffset).collect();

    if text.len() > PARALLEL_SORT_THRESHOLD {
        suffixes.par_sort_unstable_by(|&a, &b| text[a as usize..].cmp(&text[b as usize..]));
    } else {
        suffixes.sort_unstable_by(|&a, &b| text[a as usize..].cmp(&text[b as usize..]));
    }

    suffixes
}
