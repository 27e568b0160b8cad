//! Concurrent unit resolution and dedup.
//!
//! Every match offset resolves independently on the rayon pool; resolved
//! units land in one shared set keyed by unit text, so offsets inside the
//! same unit (and identical units anywhere in the region) collapse to one
//! result. The pool bounds fan-out, so a query with tens of thousands of
//! matches never spawns more than the pool's thread count.

use std::sync::Mutex;

use rayon::prelude::*;
use rustc_hash::FxHashMap;

use crate::index::TextOffset;
use crate::resolve::{BoundaryPattern, resolve};

/// Placeholder emitted for a region with no matches.
pub const NO_MATCH_SENTINEL: &str = "No Results Found";

/// Shared accumulator for resolved units.
///
/// Keyed by unit text; the value keeps the smallest unit start seen so the
/// final ordering follows the region text.
struct UnitSet {
    units: Mutex<FxHashMap<String, usize>>,
}

impl UnitSet {
    fn new() -> Self {
        Self {
            units: Mutex::new(FxHashMap::default()),
        }
    }

    fn insert(&self, unit: String, start: usize) {
        let mut units = self.units.lock().unwrap();
        units
            .entry(unit)
            .and_modify(|s| *s = (*s).min(start))
            .or_insert(start);
    }

    fn into_ordered(self) -> Vec<String> {
        let units = self.units.into_inner().unwrap();
        let mut entries: Vec<(String, usize)> = units.into_iter().collect();
        entries.sort_unstable_by_key(|&(_, start)| start);
        entries.into_iter().map(|(unit, _)| unit).collect()
    }
}

/// Resolves every match offset to its unit and dedups the results.
///
/// Blocks until all offsets are resolved; the returned units are ordered
/// by their position in the region. An empty offset slice yields the
/// no-match sentinel as the region's only entry.
pub fn resolve_all(
    text: &[u8],
    offsets: &[TextOffset],
    pattern: &BoundaryPattern,
) -> Vec<String> {
    if offsets.is_empty() {
        return vec![NO_MATCH_SENTINEL.to_string()];
    }

    let units = UnitSet::new();
    offsets.par_iter().for_each(|&offset| {
        let range = resolve(text, offset as usize, pattern);
        let start = range.start;
        let unit = String::from_utf8_lossy(&text[range]).into_owned();
        units.insert(unit, start);
    });

    units.into_ordered()
}
