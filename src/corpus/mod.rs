//! Corpus layout and partitioning
//!
//! A supported anthology is a single text file carrying three anchor
//! literals that delimit its two searchable regions:
//!
//! - `verse`: later verse-start occurrence through the verse-end anchor
//! - `prose`: first byte past the verse region through the prose-end anchor
//!
//! Bytes before the verse region and after the prose region (front matter,
//! trailing license text) are never indexed.

pub mod layout;
pub mod partition;

pub use layout::CorpusLayout;
pub use partition::{Partition, partition};
