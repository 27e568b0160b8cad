//! Anchor layout of a supported anthology.

/// Anchor literals that delimit the two searchable regions of an anthology.
///
/// The corpus must contain `verse_start` exactly twice (one table-of-contents
/// entry plus the region heading itself) and each end anchor exactly once;
/// [`crate::corpus::partition`] enforces this.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CorpusLayout {
    /// Literal heading the verse region. The later occurrence opens it.
    pub verse_start: String,
    /// Literal closing the verse region, kept inside the region.
    pub verse_end: String,
    /// Literal closing the prose region, kept inside the region.
    pub prose_end: String,
}

impl Default for CorpusLayout {
    /// Layout of the Project Gutenberg complete works of Shakespeare.
    fn default() -> Self {
        Self {
            verse_start: "THE SONNETS".to_string(),
            verse_end: "THE END".to_string(),
            prose_end: "FINIS".to_string(),
        }
    }
}
