//! Pattern selection with fallback-to-first semantics.

use super::PatternEntry;

/// Resolve a requested pattern id against the catalog.
///
/// The first entry whose id matches exactly (case-sensitive) wins. A stale or
/// unknown id silently degrades to the first catalog entry rather than
/// erroring. Only an empty catalog yields `None`, meaning no selection is
/// possible at all.
pub fn resolve<'a>(catalog: &'a [PatternEntry], requested_id: &str) -> Option<&'a PatternEntry> {
    catalog
        .iter()
        .find(|p| p.id == requested_id)
        .or_else(|| catalog.first())
}
