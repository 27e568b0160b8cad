//! Error types for corpus loading and partitioning.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Failure to turn an on-disk corpus file into a ready [`crate::Searcher`].
#[derive(Debug, Error)]
pub enum LoadError {
    /// The corpus file could not be read.
    #[error("failed to read corpus file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The corpus was read but its anchors do not describe two regions.
    #[error(transparent)]
    Partition(#[from] PartitionError),
}

/// Failure to split a corpus into its verse and prose regions.
///
/// Partitioning refuses to guess: any deviation from the expected anchor
/// layout is an error rather than a silently misindexed corpus.
#[derive(Debug, Error)]
pub enum PartitionError {
    /// An anchor literal occurred the wrong number of times.
    #[error("anchor {anchor:?} occurs {found} time(s) in the corpus, expected exactly {expected}")]
    AnchorCardinality {
        anchor: String,
        expected: usize,
        found: usize,
    },

    /// Anchors were all present but not in region order.
    #[error(
        "anchors out of order: verse starts at byte {verse_start}, \
         verse ends at byte {verse_end}, prose ends at byte {prose_end}"
    )]
    MisorderedAnchors {
        verse_start: usize,
        verse_end: usize,
        prose_end: usize,
    },
}
