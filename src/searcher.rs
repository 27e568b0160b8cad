//! Two-region search facade.
//!
//! Ties the pieces together: partition the corpus, build one suffix index
//! per region, and answer queries as a flat result vector of group headers
//! and resolved units. The result shape is fixed: verse header, verse
//! units, prose header, prose units, with a no-match sentinel standing in
//! for an empty group.

use std::fs;
use std::path::Path;
use std::time::Instant;

use serde::Serialize;
use tracing::{debug, info};

use crate::corpus::{CorpusLayout, partition};
use crate::error::{LoadError, PartitionError};
use crate::index::SuffixIndex;
use crate::resolve::{BoundaryPattern, RegionKind, resolve_all};

/// Group label ahead of verse results.
pub const VERSE_HEADER: &str = "SONNET RESULTS \n\n";

/// Group label ahead of prose results, doubling as the group separator.
pub const PROSE_HEADER: &str = "\n\n PLAY RESULTS \n\n";

/// Searcher configuration: anchor layout plus result group labels.
#[derive(Debug, Clone)]
pub struct SearchConfig {
    pub layout: CorpusLayout,
    pub verse_header: String,
    pub prose_header: String,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            layout: CorpusLayout::default(),
            verse_header: VERSE_HEADER.to_string(),
            prose_header: PROSE_HEADER.to_string(),
        }
    }
}

/// One indexed region with its boundary pattern.
#[derive(Debug)]
struct Region {
    index: SuffixIndex,
    pattern: BoundaryPattern,
}

impl Region {
    fn build(kind: RegionKind, text: Vec<u8>) -> Self {
        Self {
            index: SuffixIndex::build(text),
            pattern: BoundaryPattern::for_kind(kind),
        }
    }

    fn results(&self, query: &str) -> Vec<String> {
        let offsets = self.index.lookup(query.as_bytes());
        debug!(
            region = self.pattern.kind().as_str(),
            matches = offsets.len(),
            "index lookup"
        );
        resolve_all(self.index.text(), offsets, &self.pattern)
    }
}

/// A loaded anthology, ready to answer queries.
#[derive(Debug)]
pub struct Searcher {
    verse: Region,
    prose: Region,
    config: SearchConfig,
}

impl Searcher {
    /// Loads and indexes the corpus at `path` with the default config.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, LoadError> {
        Self::load_with(path, SearchConfig::default())
    }

    /// Loads and indexes the corpus at `path`.
    pub fn load_with(path: impl AsRef<Path>, config: SearchConfig) -> Result<Self, LoadError> {
        let path = path.as_ref();
        let corpus = fs::read(path).map_err(|source| LoadError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        info!(path = %path.display(), bytes = corpus.len(), "read corpus");
        Ok(Self::from_bytes(&corpus, config)?)
    }

    /// Partitions and indexes an in-memory corpus.
    pub fn from_bytes(corpus: &[u8], config: SearchConfig) -> Result<Self, PartitionError> {
        let split = partition(corpus, &config.layout)?;

        let started = Instant::now();
        let verse = Region::build(RegionKind::Verse, corpus[split.verse].to_vec());
        let prose = Region::build(RegionKind::Prose, corpus[split.prose].to_vec());
        info!(
            verse_bytes = verse.index.text().len(),
            prose_bytes = prose.index.text().len(),
            elapsed_ms = started.elapsed().as_millis() as u64,
            "indexed corpus regions"
        );

        Ok(Self {
            verse,
            prose,
            config,
        })
    }

    /// Runs one query over both regions.
    ///
    /// Lookup is exact and case-sensitive. The result vector always holds
    /// both group headers; a region without matches contributes the
    /// no-match sentinel after its header.
    pub fn search(&self, query: &str) -> Vec<String> {
        let mut results = Vec::with_capacity(4);
        results.push(self.config.verse_header.clone());
        results.extend(self.verse.results(query));
        results.push(self.config.prose_header.clone());
        results.extend(self.prose.results(query));
        results
    }

    /// Region sizes, for startup logging and the stats command.
    pub fn stats(&self) -> SearcherStats {
        SearcherStats {
            verse_bytes: self.verse.index.text().len(),
            prose_bytes: self.prose.index.text().len(),
            verse_suffixes: self.verse.index.suffix_count(),
            prose_suffixes: self.prose.index.suffix_count(),
        }
    }
}

/// Sizes of a loaded corpus.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct SearcherStats {
    pub verse_bytes: usize,
    pub prose_bytes: usize,
    pub verse_suffixes: usize,
    pub prose_suffixes: usize,
}
