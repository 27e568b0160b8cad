//! Anchor location and region derivation.
//!
//! The partitioner locates each anchor literal with an exact occurrence
//! count and derives the two region byte ranges. Any deviation from the
//! expected layout is a [`PartitionError`]: a corpus that cannot be
//! partitioned is rejected outright, never indexed with guessed boundaries.

use std::ops::Range;

use memchr::memmem;

use crate::corpus::CorpusLayout;
use crate::error::PartitionError;

/// Occurrences of the verse-start anchor: one table-of-contents entry plus
/// the region heading itself.
const VERSE_START_OCCURRENCES: usize = 2;

/// Occurrences of each end anchor.
const END_ANCHOR_OCCURRENCES: usize = 1;

/// Byte ranges of the two searchable regions within a corpus.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Partition {
    /// Verse region, closed by the verse-end anchor (anchor included).
    pub verse: Range<usize>,
    /// Prose region, from the byte after the verse region through the
    /// prose-end anchor (anchor included).
    pub prose: Range<usize>,
}

/// Splits `corpus` into its verse and prose regions.
pub fn partition(corpus: &[u8], layout: &CorpusLayout) -> Result<Partition, PartitionError> {
    let verse_starts = locate(corpus, &layout.verse_start, VERSE_START_OCCURRENCES)?;
    let verse_ends = locate(corpus, &layout.verse_end, END_ANCHOR_OCCURRENCES)?;
    let prose_ends = locate(corpus, &layout.prose_end, END_ANCHOR_OCCURRENCES)?;

    // The earlier verse-start occurrence is the table-of-contents entry;
    // the later one heads the region.
    let verse_start = verse_starts[1];
    let verse_end = verse_ends[0] + layout.verse_end.len();
    let prose_end = prose_ends[0] + layout.prose_end.len();

    if verse_start >= verse_ends[0] || verse_end > prose_ends[0] {
        return Err(PartitionError::MisorderedAnchors {
            verse_start,
            verse_end: verse_ends[0],
            prose_end: prose_ends[0],
        });
    }

    Ok(Partition {
        verse: verse_start..verse_end,
        prose: verse_end..prose_end,
    })
}

/// Finds every occurrence of `anchor` in ascending offset order, requiring
/// an exact count.
fn locate(corpus: &[u8], anchor: &str, expected: usize) -> Result<Vec<usize>, PartitionError> {
    let found: Vec<usize> = memmem::find_iter(corpus, anchor.as_bytes()).collect();
    if found.len() != expected {
        return Err(PartitionError::AnchorCardinality {
            anchor: anchor.to_string(),
            expected,
            found: found.len(),
        });
    }
    Ok(found)
}

#[cfg(test)]
mod tests {
    use super::*;

    const FRONT_MATTER: &str =
        "THE COMPLETE WORKS\r\n\r\nContents\r\n\r\nTHE SONNETS\r\nTHE TRAGEDY OF MACBETH\r\n\r\n";
    const VERSE: &str =
        "THE SONNETS\r\n\r\n18\r\n\r\nShall I compare thee to a summer's day?\r\n\r\nTHE END";
    const PROSE: &str = "\r\n\r\nMACBETH. So foul and fair a day I have not seen.\r\n\r\nFINIS";

    fn corpus() -> Vec<u8> {
        format!("{FRONT_MATTER}{VERSE}{PROSE}\r\n").into_bytes()
    }

    #[test]
    fn test_partition_covers_anchor_to_anchor() {
        let corpus = corpus();
        let split = partition(&corpus, &CorpusLayout::default()).unwrap();
        assert_eq!(&corpus[split.verse.clone()], VERSE.as_bytes());
        assert_eq!(&corpus[split.prose.clone()], PROSE.as_bytes());
    }

    #[test]
    fn test_regions_are_contiguous() {
        let corpus = corpus();
        let split = partition(&corpus, &CorpusLayout::default()).unwrap();
        assert_eq!(split.verse.end, split.prose.start);
    }

    #[test]
    fn test_later_verse_start_occurrence_wins() {
        let corpus = corpus();
        let split = partition(&corpus, &CorpusLayout::default()).unwrap();
        let toc_entry = FRONT_MATTER.find("THE SONNETS").unwrap();
        assert!(split.verse.start > toc_entry);
        assert!(corpus[split.verse.clone()].starts_with(b"THE SONNETS\r\n\r\n18"));
    }

    #[test]
    fn test_end_anchors_kept_inside_regions() {
        let corpus = corpus();
        let split = partition(&corpus, &CorpusLayout::default()).unwrap();
        assert!(corpus[split.verse.clone()].ends_with(b"THE END"));
        assert!(corpus[split.prose.clone()].ends_with(b"FINIS"));
    }

    #[test]
    fn test_missing_prose_end_anchor_fails() {
        let corpus = format!("{FRONT_MATTER}{VERSE}\r\n\r\nno closing anchor here").into_bytes();
        let err = partition(&corpus, &CorpusLayout::default()).unwrap_err();
        match err {
            PartitionError::AnchorCardinality {
                anchor,
                expected,
                found,
            } => {
                assert_eq!(anchor, "FINIS");
                assert_eq!(expected, 1);
                assert_eq!(found, 0);
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_single_verse_start_fails() {
        let corpus = format!("{VERSE}{PROSE}").into_bytes();
        let err = partition(&corpus, &CorpusLayout::default()).unwrap_err();
        match err {
            PartitionError::AnchorCardinality {
                anchor, found: 1, ..
            } => assert_eq!(anchor, "THE SONNETS"),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_repeated_verse_end_anchor_fails() {
        let corpus = format!("{FRONT_MATTER}{VERSE}\r\n\r\nTHE END{PROSE}").into_bytes();
        let err = partition(&corpus, &CorpusLayout::default()).unwrap_err();
        assert!(matches!(
            err,
            PartitionError::AnchorCardinality { found: 2, .. }
        ));
    }

    #[test]
    fn test_misordered_anchors_fail() {
        let corpus = b"THE SONNETS a FINIS b THE SONNETS c THE END".to_vec();
        let err = partition(&corpus, &CorpusLayout::default()).unwrap_err();
        assert!(matches!(err, PartitionError::MisorderedAnchors { .. }));
    }

    #[test]
    fn test_custom_layout_anchors() {
        let corpus = b"toc: POEMS\nPOEMS\nstanza\nSTOP\nspeech\nDONE\n".to_vec();
        let layout = CorpusLayout {
            verse_start: "POEMS".to_string(),
            verse_end: "STOP".to_string(),
            prose_end: "DONE".to_string(),
        };
        let split = partition(&corpus, &layout).unwrap();
        assert_eq!(&corpus[split.verse.clone()], b"POEMS\nstanza\nSTOP");
        assert_eq!(&corpus[split.prose.clone()], b"\nspeech\nDONE");
    }
}
