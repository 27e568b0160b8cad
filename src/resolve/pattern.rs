//! Boundary probe patterns.
//!
//! Units are delimited differently per region: verse stanzas sit under a
//! numeric heading followed by a blank line, prose speeches open with a
//! blank line followed by an upper-case speaker label. Both shapes are
//! detected by testing a fixed-width byte window against a probe regex,
//! and the two kinds split the text on opposite sides of that window.

use regex::bytes::Regex;

/// Region kinds of a partitioned anthology.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RegionKind {
    /// Numbered stanzas separated by blank lines.
    Verse,
    /// Speeches introduced by an upper-case speaker label.
    Prose,
}

impl RegionKind {
    pub fn as_str(self) -> &'static str {
        match self {
            RegionKind::Verse => "verse",
            RegionKind::Prose => "prose",
        }
    }
}

/// Verse probe width: one stanza-number digit plus a CRLF blank line.
const VERSE_WINDOW: usize = 5;

/// Prose probe width: a CRLF blank line plus the first two label bytes.
const PROSE_WINDOW: usize = 6;

/// Stanza heading probe: digits running into a blank line.
const VERSE_PROBE: &str = r"[0-9]+\r\n\r\n";

/// Speaker label probe: a blank line running into upper-case letters.
const PROSE_PROBE: &str = r"\r\n\r\n[A-Z]+.";

/// Compiled boundary probe for one region kind.
///
/// The resolver slides [`window`](Self::window)-sized slices past
/// [`matches`](Self::matches); on a hit it derives the unit edge with
/// [`unit_start`](Self::unit_start) or [`unit_end`](Self::unit_end).
#[derive(Debug)]
pub struct BoundaryPattern {
    kind: RegionKind,
    probe: Regex,
    window: usize,
}

impl BoundaryPattern {
    pub fn verse() -> Self {
        Self {
            kind: RegionKind::Verse,
            probe: Regex::new(VERSE_PROBE).expect("verse probe pattern is valid"),
            window: VERSE_WINDOW,
        }
    }

    pub fn prose() -> Self {
        Self {
            kind: RegionKind::Prose,
            probe: Regex::new(PROSE_PROBE).expect("prose probe pattern is valid"),
            window: PROSE_WINDOW,
        }
    }

    pub fn for_kind(kind: RegionKind) -> Self {
        match kind {
            RegionKind::Verse => Self::verse(),
            RegionKind::Prose => Self::prose(),
        }
    }

    pub fn kind(&self) -> RegionKind {
        self.kind
    }

    /// Probe window width in bytes.
    #[inline]
    pub fn window(&self) -> usize {
        self.window
    }

    /// Tests one window-sized slice for a unit boundary.
    #[inline]
    pub fn matches(&self, window: &[u8]) -> bool {
        self.probe.is_match(window)
    }

    /// Unit start for a left-scan hit whose window ends at `cursor`.
    ///
    /// A verse unit starts past its stanza heading; a prose unit keeps the
    /// blank line and speaker label. Callers guarantee `cursor >= window`.
    #[inline]
    pub(crate) fn unit_start(&self, cursor: usize) -> usize {
        match self.kind {
            RegionKind::Verse => cursor,
            RegionKind::Prose => cursor - self.window,
        }
    }

    /// Unit end for a right-scan hit whose window starts at `cursor`.
    ///
    /// A verse unit stops one window before the next stanza heading; a
    /// prose unit stops at the blank line ahead of the next label.
    #[inline]
    pub(crate) fn unit_end(&self, cursor: usize) -> usize {
        match self.kind {
            RegionKind::Verse => cursor.saturating_sub(self.window),
            RegionKind::Prose => cursor,
        }
    }
}
