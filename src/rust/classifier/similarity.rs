use super::tags::TagSet;

/// Award for an exact (case-insensitive) tag match
const EXACT_MATCH: f32 = 1.0;
/// Award for a substring overlap in either direction
const PARTIAL_MATCH: f32 = 0.5;

/// Fuzzy Jaccard-like similarity between two tag sets, in `[0, 1]`.
///
/// Every query tag earns 1.0 for an exact match in `candidate`, otherwise 0.5
/// if it is a substring of some candidate tag or some candidate tag is a
/// substring of it. The summed awards are divided by the larger of the two set
/// sizes.
///
/// Only query tags are scanned, so partial matches are not symmetric:
/// `similarity(a, b)` and `similarity(b, a)` can differ when substrings are
/// involved. Two empty sets score `0.0`.
///
/// ```
/// use contextual::{similarity, TagSet};
///
/// let query = TagSet::new(["car"]);
/// let candidate = TagSet::new(["carpet"]);
/// assert_eq!(similarity(&query, &candidate), 0.5);
/// ```
pub fn similarity(query: &TagSet, candidate: &TagSet) -> f32 {
    let denominator = query.len().max(candidate.len());
    if denominator == 0 {
        return 0.0;
    }

    let match_count: f32 = query.iter().map(|tag| tag_award(tag, candidate)).sum();
    match_count / denominator as f32
}

fn tag_award(tag: &str, candidate: &TagSet) -> f32 {
    if candidate.contains(tag) {
        return EXACT_MATCH;
    }
    let partial = candidate
        .iter()
        .any(|other| tag.contains(other) || other.contains(tag));
    if partial {
        PARTIAL_MATCH
    } else {
        0.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tags(raw: &[&str]) -> TagSet {
        TagSet::new(raw)
    }

    #[test]
    fn test_identity_is_one() {
        let a = tags(&["cat", "animal", "pet"]);
        assert_eq!(similarity(&a, &a), 1.0);
    }

    #[test]
    fn test_both_empty_is_zero() {
        let s = similarity(&TagSet::default(), &TagSet::default());
        assert_eq!(s, 0.0);
        assert!(s.is_finite());
    }

    #[test]
    fn test_one_side_empty_is_zero() {
        let a = tags(&["cat"]);
        assert_eq!(similarity(&a, &TagSet::default()), 0.0);
        assert_eq!(similarity(&TagSet::default(), &a), 0.0);
    }

    #[test]
    fn test_case_insensitive_exact_match() {
        assert_eq!(similarity(&tags(&["CAT"]), &tags(&["cat"])), 1.0);
    }

    #[test]
    fn test_duplicates_do_not_inflate_score() {
        let query = tags(&["cat", "Cat", "CAT"]);
        let candidate = tags(&["cat", "dog"]);
        assert_eq!(similarity(&query, &candidate), 0.5);
    }

    #[test]
    fn test_partial_match_awarded_once() {
        // "car" overlaps both "carpet" and "cart" but earns a single half point
        let query = tags(&["car"]);
        let candidate = tags(&["carpet", "cart"]);
        assert_eq!(similarity(&query, &candidate), 0.25);
    }

    #[test]
    fn test_divides_by_larger_set() {
        let query = tags(&["cat"]);
        let candidate = tags(&["cat", "dog", "bird", "fish"]);
        assert_eq!(similarity(&query, &candidate), 0.25);
    }

    #[test]
    fn test_partial_scan_is_asymmetric() {
        // "cat" inside "category" gives 0.5 for the query side only
        let a = tags(&["category", "zebra"]);
        let b = tags(&["cat", "category"]);
        assert_eq!(similarity(&a, &b), 0.5);
        assert_eq!(similarity(&b, &a), 0.75);
    }

    #[test]
    fn test_exact_matches_are_symmetric() {
        let a = tags(&["red", "green", "blue"]);
        let b = tags(&["green", "yellow"]);
        assert_eq!(similarity(&a, &b), similarity(&b, &a));
    }
}
