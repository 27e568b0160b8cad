//! Match-to-unit resolution
//!
//! Region text is an undifferentiated byte run; index lookups come back as
//! raw offsets. This module widens each offset to its enclosing literary
//! unit (a stanza in verse, a speech in prose), resolving all offsets in
//! parallel and collapsing offsets that land in the same unit.

pub mod dedup;
pub mod pattern;
pub mod resolver;

pub use dedup::{NO_MATCH_SENTINEL, resolve_all};
pub use pattern::{BoundaryPattern, RegionKind};
pub use resolver::resolve;
