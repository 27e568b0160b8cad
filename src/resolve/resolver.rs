//! Offset-to-unit resolution.
//!
//! Each match offset widens to its enclosing unit by walking byte-by-byte
//! away from the offset, testing one probe window per step. A scan that
//! reaches a region edge without a probe hit takes the edge itself as the
//! boundary, so the first and last units resolve without any sentinel text
//! around the region.

use std::ops::Range;

use crate::resolve::BoundaryPattern;

/// Resolves `offset` to the byte range of its enclosing unit.
///
/// The returned range always satisfies `start <= end <= text.len()`. A
/// probe hit at the offset itself can clip the unit down to empty; that is
/// the degenerate case of a query overlapping a boundary, not an error.
pub fn resolve(text: &[u8], offset: usize, pattern: &BoundaryPattern) -> Range<usize> {
    debug_assert!(
        offset <= text.len(),
        "match offset {offset} outside region of {} bytes",
        text.len()
    );
    let offset = offset.min(text.len());
    let window = pattern.window();

    // Left scan: the first probed window ends just before the offset.
    let mut cursor = offset;
    let start = loop {
        if cursor == 0 {
            break 0;
        }
        if cursor >= window && pattern.matches(&text[cursor - window..cursor]) {
            break pattern.unit_start(cursor);
        }
        cursor -= 1;
    };

    // Right scan: the first probed window starts at the offset.
    let mut cursor = offset;
    let end = loop {
        if cursor >= text.len() {
            break text.len();
        }
        if cursor + window <= text.len() && pattern.matches(&text[cursor..cursor + window]) {
            break pattern.unit_end(cursor).max(start);
        }
        cursor += 1;
    };

    start..end
}
