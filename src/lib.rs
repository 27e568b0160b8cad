//! # Folio - Anthology Search Service
//!
//! Folio answers substring queries over a fixed literary anthology (the
//! Project Gutenberg complete works of Shakespeare) and returns whole
//! literary units: the stanzas and speeches that contain the query, not
//! bare match positions.
//!
//! ## Architecture
//!
//! The crate is organized into these main modules:
//!
//! - [`corpus`] - Anchor layout and corpus partitioning
//! - [`index`] - Per-region in-memory suffix indexes
//! - [`resolve`] - Boundary probes, offset-to-unit resolution, dedup
//! - [`searcher`] - Two-region search facade
//! - [`server`] - HTTP boundary with a per-query response cache
//!
//! ## Quick Start
//!
//! ```ignore
//! use folio::Searcher;
//!
//! let searcher = Searcher::load("completeworks.txt").unwrap();
//!
//! // A flat vector: verse header, verse units, prose header, prose units.
//! for entry in searcher.search("poor bird") {
//!     println!("{entry}");
//! }
//! ```
//!
//! ## Pipeline
//!
//! At load time the corpus splits into a verse and a prose region, each
//! indexed by a suffix array built with a parallel sort. A query walks the
//! suffix array once per region to find every occurrence, widens each
//! occurrence to its enclosing unit on the rayon pool, and dedups units
//! shared by several occurrences before answering.

pub mod corpus;
pub mod error;
pub mod index;
pub mod resolve;
pub mod searcher;
pub mod server;

pub use error::{LoadError, PartitionError};
pub use resolve::NO_MATCH_SENTINEL;
pub use searcher::{SearchConfig, Searcher, SearcherStats};
