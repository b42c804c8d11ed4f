use super::entry::Entry;
use super::similarity::similarity;
use super::tags::TagSet;

/// A historical entry scored against a query
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Neighbor<'a> {
    pub similarity: f32,
    pub category: &'a str,
}

/// Scores every entry against `query` and orders them by descending similarity.
///
/// The sort is stable: entries with equal scores keep their insertion order.
/// The full ranking is returned; callers truncate to their own `k`.
pub fn rank<'a>(query: &TagSet, entries: &'a [Entry]) -> Vec<Neighbor<'a>> {
    let mut neighbors: Vec<Neighbor<'a>> = entries
        .iter()
        .map(|entry| Neighbor {
            similarity: similarity(query, entry.tags()),
            category: entry.category(),
        })
        .collect();

    // Scores are never NaN, total_cmp keeps the comparator total anyway
    neighbors.sort_by(|a, b| b.similarity.total_cmp(&a.similarity));
    neighbors
}
